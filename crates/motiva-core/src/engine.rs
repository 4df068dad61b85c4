//! The coach engine: orchestrates one conversation session with its
//! analytics collaborators.
//!
//! `CoachEngine` owns a `ConversationSession` and wires it to the three
//! analysis seams: the stage classifier (lexicon matching), the sentiment
//! scorer, and the completion client. All mutation goes through `&mut self`
//! methods, so a single interaction drives the engine without locks.

use std::sync::Arc;

use uuid::Uuid;

use crate::analysis::{ChangeTalkScore, StageClassifier, StageCounts, score};
use crate::completion::{CompletionClient, PromptMessage};
use crate::error::{MotivaError, Result};
use crate::lexicon::Lexicon;
use crate::sentiment::{SentimentScorer, running_sentiment};
use crate::session::{ConversationSession, Message, MessageRole, SessionSnapshot, TurnAnalytics};

/// Prompt configuration for the engine's completion requests.
///
/// Kept free of any particular coaching flavour; the interaction layer
/// supplies the actual prompt text.
#[derive(Debug, Clone)]
pub struct EnginePrompts {
    /// System prompt framing every completion request.
    pub system_prompt: String,
    /// Preamble placed before the flattened transcript in summary requests.
    pub summary_preamble: String,
}

/// Outcome of one submitted user turn.
#[derive(Debug, Clone, PartialEq)]
pub struct TurnOutcome {
    /// The assistant reply appended to the log.
    pub reply: String,
    /// The analytics recorded for this turn.
    pub analytics: TurnAnalytics,
}

/// Drives one coaching conversation end to end.
pub struct CoachEngine {
    id: String,
    classifier: StageClassifier,
    completion: Arc<dyn CompletionClient>,
    sentiment: Arc<dyn SentimentScorer>,
    prompts: EnginePrompts,
    session: ConversationSession,
}

impl CoachEngine {
    /// Creates an engine over a loaded lexicon and its collaborators.
    ///
    /// # Arguments
    ///
    /// * `lexicon` - The change-talk lexicon, loaded once at startup
    /// * `completion` - Completion collaborator for coach replies
    /// * `sentiment` - Sentiment collaborator for polarity scoring
    /// * `prompts` - System prompt and summary preamble
    pub fn new(
        lexicon: Arc<Lexicon>,
        completion: Arc<dyn CompletionClient>,
        sentiment: Arc<dyn SentimentScorer>,
        prompts: EnginePrompts,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            classifier: StageClassifier::new(lexicon),
            completion,
            sentiment,
            prompts,
            session: ConversationSession::new(),
        }
    }

    /// Runs one user turn end to end.
    ///
    /// The order is fixed: classify and score the text, record the analytics,
    /// append the user message, then request the coach reply. A failed or
    /// empty completion leaves the user message and its analytics in place
    /// and appends no assistant message, so `turn_scores()[i]` stays aligned
    /// with the i-th user message whatever happens downstream.
    ///
    /// # Errors
    ///
    /// Returns `MotivaError::Completion` on collaborator failure and
    /// `MotivaError::EmptyCompletion` when the reply has no usable text.
    pub async fn submit(&mut self, user_text: &str) -> Result<TurnOutcome> {
        let counts = self.classifier.classify(user_text);
        let analytics = TurnAnalytics::from_score(score(&counts));
        tracing::debug!(
            engine_id = %self.id,
            score = ?analytics.change_talk_score,
            "user turn classified"
        );

        self.session.push_analytics(analytics.clone());
        self.session.push_message(Message::user(user_text));

        let reply = self.request_completion(user_text).await?;
        self.session.push_message(Message::assistant(reply.clone()));

        Ok(TurnOutcome { reply, analytics })
    }

    /// Requests a summary of the conversation so far and appends it to the
    /// log as an assistant message prefixed with `Summary:`.
    ///
    /// The request flattens the transcript into a single user prompt behind
    /// the configured preamble, using lowercase role labels.
    ///
    /// # Errors
    ///
    /// Returns `MotivaError::Completion` or `MotivaError::EmptyCompletion`
    /// like `submit`; the log is unchanged on failure.
    pub async fn summarize(&mut self) -> Result<String> {
        let chat_log = self
            .session
            .messages()
            .iter()
            .map(|message| format!("{}: {}", message.role.as_str(), message.content))
            .collect::<Vec<_>>()
            .join(" ");
        let prompt = format!("{}\n{}", self.prompts.summary_preamble, chat_log);

        let summary = self.request_completion(&prompt).await?;
        self.session
            .push_message(Message::assistant(format!("Summary: {summary}")));
        tracing::info!(engine_id = %self.id, "conversation summarized");
        Ok(summary)
    }

    /// Builds the prompt message pair and awaits the completion, rejecting
    /// blank replies.
    async fn request_completion(&self, content: &str) -> Result<String> {
        let messages = [
            PromptMessage::system(self.prompts.system_prompt.as_str()),
            PromptMessage::user(content),
        ];
        let reply = self.completion.complete(&messages).await?;
        if reply.trim().is_empty() {
            return Err(MotivaError::EmptyCompletion);
        }
        Ok(reply)
    }

    /// Sentiment average over all user messages in the live log, or `None`
    /// while there are none.
    pub fn running_sentiment(&self) -> Option<f64> {
        running_sentiment(self.sentiment.as_ref(), self.session.messages())
    }

    /// Stage-percentage breakdown over every user message in the live log.
    ///
    /// Recomputed on demand from the messages, so it always reflects resets
    /// and snapshot loads.
    pub fn conversation_breakdown(&self) -> ChangeTalkScore {
        let mut counts = StageCounts::new();
        for message in self.session.messages() {
            if message.role == MessageRole::User {
                counts.merge(&self.classifier.classify(&message.content));
            }
        }
        score(&counts)
    }

    /// Clears the conversation and score history. Saved snapshots survive.
    pub fn reset(&mut self) {
        self.session.reset();
        tracing::info!(engine_id = %self.id, "session reset");
    }

    /// Saves a snapshot of the current session state.
    pub fn save_snapshot(&mut self) -> &SessionSnapshot {
        let snapshot = self.session.save_snapshot();
        tracing::info!(label = %snapshot.label(), "session snapshot saved");
        snapshot
    }

    /// Restores a saved snapshot by list position.
    ///
    /// # Errors
    ///
    /// Returns `MotivaError::SnapshotOutOfRange` for an unknown index; the
    /// live session is untouched in that case.
    pub fn load_snapshot(&mut self, index: usize) -> Result<()> {
        self.session.load_snapshot(index)?;
        tracing::info!(engine_id = %self.id, index, "session snapshot loaded");
        Ok(())
    }

    /// Saved snapshots, oldest first.
    pub fn snapshots(&self) -> &[SessionSnapshot] {
        self.session.snapshots()
    }

    /// The live message log.
    pub fn messages(&self) -> &[Message] {
        self.session.messages()
    }

    /// Per-turn change-talk scores as plain floats.
    pub fn turn_scores(&self) -> Vec<f64> {
        self.session.turn_scores()
    }

    /// Number of user messages in the live log.
    pub fn user_message_count(&self) -> usize {
        self.session.user_message_count()
    }

    /// Per-turn analytics records.
    pub fn turn_analytics(&self) -> &[TurnAnalytics] {
        self.session.turn_analytics()
    }

    /// Plain-text transcript of the live log.
    pub fn export_transcript(&self) -> String {
        self.session.export_transcript()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconEntry;
    use crate::stage::Stage;
    use std::sync::Mutex;

    // Mock CompletionClient that records requests and replays scripted
    // replies.
    struct MockCompletionClient {
        reply: Result<String>,
        requests: Mutex<Vec<Vec<PromptMessage>>>,
    }

    impl MockCompletionClient {
        fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: Err(MotivaError::completion_http(500, "server error")),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn empty() -> Self {
            Self {
                reply: Ok("   ".to_string()),
                requests: Mutex::new(Vec::new()),
            }
        }

        fn last_request(&self) -> Vec<PromptMessage> {
            self.requests.lock().unwrap().last().cloned().unwrap()
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for MockCompletionClient {
        async fn complete(&self, messages: &[PromptMessage]) -> Result<String> {
            self.requests.lock().unwrap().push(messages.to_vec());
            self.reply.clone()
        }
    }

    struct FixedSentiment(f64);

    impl SentimentScorer for FixedSentiment {
        fn polarity(&self, _text: &str) -> f64 {
            self.0
        }
    }

    fn test_lexicon() -> Arc<Lexicon> {
        Arc::new(Lexicon::from_entries([
            LexiconEntry::new("not ready", Stage::Pre),
            LexiconEntry::new("thinking about", Stage::Contemplation),
            LexiconEntry::new("started walking", Stage::Action),
        ]))
    }

    fn test_prompts() -> EnginePrompts {
        EnginePrompts {
            system_prompt: "You are a coach.".to_string(),
            summary_preamble: "Please summarize:".to_string(),
        }
    }

    fn engine_with(client: Arc<MockCompletionClient>) -> CoachEngine {
        CoachEngine::new(
            test_lexicon(),
            client,
            Arc::new(FixedSentiment(0.5)),
            test_prompts(),
        )
    }

    #[tokio::test]
    async fn submit_appends_analytics_user_and_assistant() {
        let client = Arc::new(MockCompletionClient::replying("What matters to you?"));
        let mut engine = engine_with(client.clone());

        let outcome = engine.submit("I'm thinking about exercising.").await.unwrap();

        assert_eq!(outcome.reply, "What matters to you?");
        assert_eq!(outcome.analytics.change_talk_score, Some(0.25));
        assert_eq!(engine.messages().len(), 2);
        assert_eq!(engine.messages()[0].role, MessageRole::User);
        assert_eq!(engine.messages()[1].role, MessageRole::Assistant);
        assert_eq!(engine.turn_scores(), vec![0.25]);
    }

    #[tokio::test]
    async fn submit_sends_system_prompt_and_latest_text_only() {
        let client = Arc::new(MockCompletionClient::replying("ok"));
        let mut engine = engine_with(client.clone());

        engine.submit("first turn").await.unwrap();
        engine.submit("second turn").await.unwrap();

        let request = client.last_request();
        assert_eq!(request.len(), 2);
        assert_eq!(request[0].content, "You are a coach.");
        assert_eq!(request[1].content, "second turn");
    }

    #[tokio::test]
    async fn failed_completion_keeps_user_message_and_analytics() {
        let client = Arc::new(MockCompletionClient::failing());
        let mut engine = engine_with(client);

        let err = engine.submit("I've started walking.").await.unwrap_err();

        assert!(err.is_completion());
        assert_eq!(engine.messages().len(), 1);
        assert_eq!(engine.messages()[0].role, MessageRole::User);
        assert_eq!(engine.turn_scores(), vec![0.75]);
    }

    #[tokio::test]
    async fn blank_completion_is_rejected_without_append() {
        let client = Arc::new(MockCompletionClient::empty());
        let mut engine = engine_with(client);

        let err = engine.submit("hello there.").await.unwrap_err();

        assert!(err.is_empty_completion());
        assert_eq!(engine.messages().len(), 1);
    }

    #[tokio::test]
    async fn summarize_flattens_transcript_behind_preamble() {
        let client = Arc::new(MockCompletionClient::replying("They discussed walking."));
        let mut engine = engine_with(client.clone());

        engine.submit("I'm not ready yet.").await.unwrap();
        let summary = engine.summarize().await.unwrap();

        assert_eq!(summary, "They discussed walking.");

        let request = client.last_request();
        assert_eq!(
            request[1].content,
            "Please summarize:\nuser: I'm not ready yet. assistant: They discussed walking."
        );

        let last = engine.messages().last().unwrap();
        assert_eq!(last.role, MessageRole::Assistant);
        assert_eq!(last.content, "Summary: They discussed walking.");
    }

    #[tokio::test]
    async fn running_sentiment_averages_user_messages() {
        let client = Arc::new(MockCompletionClient::replying("ok"));
        let mut engine = engine_with(client);

        assert_eq!(engine.running_sentiment(), None);
        engine.submit("any text").await.unwrap();
        assert_eq!(engine.running_sentiment(), Some(0.5));
    }

    #[tokio::test]
    async fn breakdown_covers_all_user_messages() {
        let client = Arc::new(MockCompletionClient::replying("ok"));
        let mut engine = engine_with(client);

        engine.submit("I'm not ready.").await.unwrap();
        engine.submit("I've started walking!").await.unwrap();

        let breakdown = engine.conversation_breakdown();
        assert_eq!(breakdown.percentages[&Stage::Pre], 50.0);
        assert_eq!(breakdown.percentages[&Stage::Action], 50.0);
        assert_eq!(breakdown.normalized, 0.375);
    }

    #[tokio::test]
    async fn user_message_count_tracks_submitted_turns() {
        let client = Arc::new(MockCompletionClient::replying("ok"));
        let mut engine = engine_with(client);

        assert_eq!(engine.user_message_count(), 0);
        engine.submit("first turn").await.unwrap();
        engine.submit("second turn").await.unwrap();

        // Assistant replies sit in the log but are not user turns.
        assert_eq!(engine.user_message_count(), 2);
        assert_eq!(engine.messages().len(), 4);
    }

    #[tokio::test]
    async fn snapshot_round_trip_through_engine() {
        let client = Arc::new(MockCompletionClient::replying("ok"));
        let mut engine = engine_with(client);

        engine.submit("I'm thinking about it.").await.unwrap();
        engine.save_snapshot();
        engine.reset();
        assert!(engine.messages().is_empty());

        engine.load_snapshot(0).unwrap();
        assert_eq!(engine.messages().len(), 2);
        assert_eq!(engine.turn_scores(), vec![0.25]);

        let err = engine.load_snapshot(9).unwrap_err();
        assert!(matches!(err, MotivaError::SnapshotOutOfRange { .. }));
    }
}
