//! Sentiment collaborator interface and aggregation policy.

use crate::session::{Message, MessageRole};

/// Trait for scoring the emotional polarity of a block of text.
///
/// Implementations are opaque collaborators (lexicon-based analyzers or
/// similar); the engine relies only on the compound score and passes it
/// through unmodified.
pub trait SentimentScorer: Send + Sync {
    /// Polarity of `text` in `[-1.0, 1.0]`, where 0.0 is neutral.
    fn polarity(&self, text: &str) -> f64;
}

/// Arithmetic mean of per-utterance polarity over every user message.
///
/// Recomputed from the live log on each call, so the value can never drift
/// from the messages after a reset or snapshot load. Returns `None` while
/// the log has no user messages, which is distinct from a genuinely neutral
/// 0.0 average.
pub fn running_sentiment(scorer: &dyn SentimentScorer, messages: &[Message]) -> Option<f64> {
    let scores: Vec<f64> = messages
        .iter()
        .filter(|message| message.role == MessageRole::User)
        .map(|message| scorer.polarity(&message.content))
        .collect();

    if scores.is_empty() {
        return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
}
