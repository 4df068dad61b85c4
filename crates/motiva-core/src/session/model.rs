//! Conversation session domain model.
//!
//! This module contains the core `ConversationSession` entity: the ordered
//! conversation record all analytics are computed over.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::error::{MotivaError, Result};

use super::analytics::TurnAnalytics;
use super::message::{Message, MessageRole};
use super::snapshot::SessionSnapshot;

/// The conversation record for a single coaching interaction.
///
/// A session contains:
/// - The ordered message log (user and assistant messages)
/// - One analytics record per user turn, appended in turn order
/// - Saved in-memory snapshots of earlier states
///
/// A session is a plain value owned by exactly one interaction; there is no
/// shared registry and no locking. Messages are immutable once appended, and
/// `turn_analytics()[i]` always belongs to the i-th user message regardless
/// of how many assistant messages sit between them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    messages: Vec<Message>,
    turn_analytics: Vec<TurnAnalytics>,
    saved_snapshots: Vec<SessionSnapshot>,
}

impl ConversationSession {
    /// Creates an empty session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the log.
    pub fn push_message(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Appends the analytics record for the next user turn.
    pub fn push_analytics(&mut self, analytics: TurnAnalytics) {
        self.turn_analytics.push(analytics);
    }

    /// The message log, in append order.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Analytics records, one per user turn.
    pub fn turn_analytics(&self) -> &[TurnAnalytics] {
        &self.turn_analytics
    }

    /// Per-turn change-talk scores as plain floats. Turns with no matched
    /// clause score the defined 0.0.
    pub fn turn_scores(&self) -> Vec<f64> {
        self.turn_analytics
            .iter()
            .map(TurnAnalytics::score_or_zero)
            .collect()
    }

    /// Number of user messages in the log.
    pub fn user_message_count(&self) -> usize {
        self.messages
            .iter()
            .filter(|message| message.role == MessageRole::User)
            .count()
    }

    /// Whether the log holds no messages.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Clears the message log and score history. Saved snapshots survive a
    /// reset, so earlier states stay recoverable.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.turn_analytics.clear();
    }

    /// Saves an immutable copy of the current log and score history.
    pub fn save_snapshot(&mut self) -> &SessionSnapshot {
        let snapshot = SessionSnapshot {
            timestamp: Utc::now(),
            messages: self.messages.clone(),
            turn_analytics: self.turn_analytics.clone(),
        };
        self.saved_snapshots.push(snapshot);
        // Safe to unwrap because we just pushed an element
        self.saved_snapshots.last().unwrap()
    }

    /// Saved snapshots, oldest first.
    pub fn snapshots(&self) -> &[SessionSnapshot] {
        &self.saved_snapshots
    }

    /// Replaces the live log and score history with copies of a saved
    /// snapshot.
    ///
    /// All-or-nothing: an out-of-range index leaves the session untouched.
    /// The stored snapshot keeps its own copies, so later edits to the live
    /// session never leak back into it.
    ///
    /// # Errors
    ///
    /// Returns `MotivaError::SnapshotOutOfRange` when `index` does not name
    /// a saved snapshot.
    pub fn load_snapshot(&mut self, index: usize) -> Result<()> {
        let snapshot =
            self.saved_snapshots
                .get(index)
                .ok_or(MotivaError::SnapshotOutOfRange {
                    index,
                    len: self.saved_snapshots.len(),
                })?;
        self.messages = snapshot.messages.clone();
        self.turn_analytics = snapshot.turn_analytics.clone();
        Ok(())
    }

    /// Renders the log as a plain-text transcript: one `Role: content` line
    /// per message, in order. Pure projection; the session is unchanged.
    pub fn export_transcript(&self) -> String {
        self.messages
            .iter()
            .map(|message| format!("{}: {}", message.role.label(), message.content))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analytics(score: f64) -> TurnAnalytics {
        TurnAnalytics {
            change_talk_score: Some(score),
            stage_percentages: Default::default(),
        }
    }

    fn no_evidence() -> TurnAnalytics {
        TurnAnalytics {
            change_talk_score: None,
            stage_percentages: Default::default(),
        }
    }

    #[test]
    fn user_message_count_ignores_assistant_messages() {
        let mut session = ConversationSession::new();
        session.push_message(Message::user("one"));
        session.push_message(Message::assistant("reply"));
        session.push_message(Message::user("two"));

        assert_eq!(session.user_message_count(), 2);
        assert_eq!(ConversationSession::new().user_message_count(), 0);
    }

    #[test]
    fn turn_scores_project_none_as_zero() {
        let mut session = ConversationSession::new();
        session.push_analytics(analytics(0.375));
        session.push_analytics(no_evidence());
        session.push_analytics(analytics(1.0));

        assert_eq!(session.turn_scores(), vec![0.375, 0.0, 1.0]);
    }

    #[test]
    fn reset_clears_log_but_keeps_snapshots() {
        let mut session = ConversationSession::new();
        session.push_message(Message::user("hi"));
        session.push_analytics(no_evidence());
        session.save_snapshot();

        session.reset();

        assert!(session.is_empty());
        assert!(session.turn_analytics().is_empty());
        assert_eq!(session.snapshots().len(), 1);
        assert_eq!(session.snapshots()[0].messages.len(), 1);
    }

    #[test]
    fn load_snapshot_restores_log_and_scores() {
        let mut session = ConversationSession::new();
        session.push_message(Message::user("I started walking"));
        session.push_analytics(analytics(0.75));
        session.save_snapshot();

        session.push_message(Message::assistant("Great!"));
        session.push_analytics(analytics(0.5));

        session.load_snapshot(0).unwrap();

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.turn_scores(), vec![0.75]);
    }

    #[test]
    fn load_snapshot_out_of_range_leaves_session_untouched() {
        let mut session = ConversationSession::new();
        session.push_message(Message::user("hello"));
        session.save_snapshot();

        let err = session.load_snapshot(5).unwrap_err();
        assert!(matches!(
            err,
            MotivaError::SnapshotOutOfRange { index: 5, len: 1 }
        ));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn snapshot_is_isolated_from_later_mutation() {
        let mut session = ConversationSession::new();
        session.push_message(Message::user("one"));
        session.save_snapshot();

        session.push_message(Message::user("two"));
        // Load then mutate again; the stored copy must be unaffected.
        session.load_snapshot(0).unwrap();
        session.push_message(Message::user("three"));

        assert_eq!(session.snapshots()[0].messages.len(), 1);
        assert_eq!(session.messages().len(), 2);
    }

    #[test]
    fn export_renders_capitalized_roles_in_order() {
        let mut session = ConversationSession::new();
        session.push_message(Message::user("I want to exercise more"));
        session.push_message(Message::assistant("What draws you to that?"));

        assert_eq!(
            session.export_transcript(),
            "User: I want to exercise more\nAssistant: What draws you to that?"
        );
    }

    #[test]
    fn export_of_empty_session_is_empty() {
        assert_eq!(ConversationSession::new().export_transcript(), "");
    }

    #[test]
    fn multiple_saves_accumulate() {
        let mut session = ConversationSession::new();
        session.push_message(Message::user("a"));
        session.save_snapshot();
        session.push_message(Message::user("b"));
        session.save_snapshot();

        assert_eq!(session.snapshots().len(), 2);
        assert_eq!(session.snapshots()[0].messages.len(), 1);
        assert_eq!(session.snapshots()[1].messages.len(), 2);
    }
}
