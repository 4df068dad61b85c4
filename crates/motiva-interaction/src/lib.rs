//! Collaborator implementations for the Motiva coach.
//!
//! This crate supplies the concrete collaborators the core engine is wired
//! with at startup: the OpenAI-backed completion client, the keyword
//! sentiment scorer, and the coach prompt set.

pub mod openai;
pub mod prompts;
pub mod sentiment;

// Re-export public API
pub use openai::OpenAiClient;
pub use sentiment::KeywordSentimentScorer;
