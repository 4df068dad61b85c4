//! Conversation session domain module.
//!
//! This module contains the session-related domain models: the conversation
//! log, per-turn analytics records, and in-memory snapshots.
//!
//! # Module Structure
//!
//! - `message`: Conversation message types (`MessageRole`, `Message`)
//! - `analytics`: Per-turn analytics records (`TurnAnalytics`)
//! - `snapshot`: Saved in-memory copies of a session (`SessionSnapshot`)
//! - `model`: The session itself (`ConversationSession`)

mod analytics;
mod message;
mod model;
mod snapshot;

// Re-export public API
pub use analytics::TurnAnalytics;
pub use message::{Message, MessageRole};
pub use model::ConversationSession;
pub use snapshot::SessionSnapshot;
