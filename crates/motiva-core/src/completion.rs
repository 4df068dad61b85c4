//! Completion collaborator interface.
//!
//! The engine never talks to a model provider directly; it hands a small
//! prompt message list to a `CompletionClient` and takes back plain text.
//! Different implementations (HTTP APIs, local models, scripted fakes in
//! tests) plug in behind this trait.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Role of a message in a completion request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptRole {
    /// Instruction framing for the model.
    System,
    /// End-user utterance or synthesized request text.
    User,
}

/// A role-tagged message in a completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMessage {
    /// The role of the message.
    pub role: PromptRole,
    /// The message text.
    pub content: String,
}

impl PromptMessage {
    /// Creates a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::System,
            content: content.into(),
        }
    }

    /// Creates a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: PromptRole::User,
            content: content.into(),
        }
    }
}

/// Trait for producing a single text completion.
///
/// The engine awaits exactly one round trip per call and applies no retry or
/// timeout policy of its own; both belong to the caller.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Produces one completion for the given prompt messages.
    ///
    /// # Arguments
    ///
    /// * `messages` - The prompt, in order (typically a system message
    ///   followed by one user message)
    ///
    /// # Errors
    ///
    /// Returns `MotivaError::Completion` on transport or provider failure.
    async fn complete(&self, messages: &[PromptMessage]) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_message_serializes_in_wire_shape() {
        let message = PromptMessage::system("You are a coach.");
        let json = serde_json::to_value(&message).unwrap();
        assert_eq!(json["role"], "system");
        assert_eq!(json["content"], "You are a coach.");
    }
}
