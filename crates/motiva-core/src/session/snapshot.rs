//! Saved session snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::analytics::TurnAnalytics;
use super::message::Message;

/// Timestamp format for snapshot selection labels.
const LABEL_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// An immutable copy of a session's log and score history at save time.
///
/// Snapshots live in memory only and are addressed by their position in the
/// saved list. The timestamp is a selection label, not an identity; two
/// snapshots taken in the same second share a label and that is fine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// When the snapshot was taken.
    pub timestamp: DateTime<Utc>,
    /// The message log at save time.
    pub messages: Vec<Message>,
    /// The per-turn analytics at save time.
    pub turn_analytics: Vec<TurnAnalytics>,
}

impl SessionSnapshot {
    /// Human-readable selection label, e.g. `2026-08-23_09-30-00`.
    pub fn label(&self) -> String {
        self.timestamp.format(LABEL_FORMAT).to_string()
    }
}
