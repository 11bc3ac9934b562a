//! Core chat session management.
//!
//! This module provides the `ChatSession` struct which owns one user's
//! conversation history and orchestrates turn-taking against a
//! [`GenerativeBackend`].

use crate::backend::{GeneratedReply, GenerativeBackend};
use crate::chat::config::ChatConfig;
use crate::client::Gemini;
use crate::error::{Error, Result};
use crate::observability;
use crate::types::{Model, Turn, UsageMetadata};

/// A chat session that owns conversation state and orchestrates turns.
///
/// The session appends a user turn for every prompt, asks the backend for a
/// reply, and appends an assistant turn only when the backend fully
/// succeeds. A failed turn leaves the history ending on the unanswered user
/// turn so the caller can surface the error and offer a retry.
///
/// `ask` and `retry` take `&mut self`, so overlapping calls against one
/// session do not compile; separate sessions are independent values and may
/// run concurrently.
pub struct ChatSession<B: GenerativeBackend> {
    backend: B,
    config: ChatConfig,
    turns: Vec<Turn>,
    usage_totals: UsageMetadata,
    last_turn_usage: Option<UsageMetadata>,
    request_count: u64,
}

/// Aggregated stats for a chat session.
#[derive(Debug, Clone)]
pub struct SessionStats {
    /// The model used for the session.
    pub model: Model,
    /// The number of turns in the conversation.
    pub turn_count: usize,
    /// The maximum tokens per response.
    pub max_output_tokens: u32,
    /// The sampling temperature, if set.
    pub temperature: Option<f32>,
    /// The system instruction.
    pub system_prompt: String,
    /// Total prompt tokens across all requests.
    pub total_prompt_tokens: u64,
    /// Total reply tokens across all requests.
    pub total_reply_tokens: u64,
    /// Total number of API requests made.
    pub total_requests: u64,
    /// Prompt tokens for the last turn, if reported.
    pub last_turn_prompt_tokens: Option<u64>,
    /// Reply tokens for the last turn, if reported.
    pub last_turn_reply_tokens: Option<u64>,
}

impl ChatSession<Gemini> {
    /// Creates a new chat session with the given client and configuration.
    pub fn new(client: Gemini, config: ChatConfig) -> Self {
        Self::with_backend(client, config)
    }
}

impl<B: GenerativeBackend> ChatSession<B> {
    /// Creates a new chat session with a custom backend.
    pub fn with_backend(backend: B, config: ChatConfig) -> Self {
        Self {
            backend,
            config,
            turns: Vec::new(),
            usage_totals: UsageMetadata::default(),
            last_turn_usage: None,
            request_count: 0,
        }
    }

    /// Sends a user prompt and waits for the assistant's reply.
    ///
    /// On success the history grows by exactly two turns, the user prompt
    /// and the assistant reply, and the reply turn is returned. On failure
    /// the history grows by the user turn alone; an invalid (empty) prompt
    /// fails before anything is appended.
    ///
    /// # Errors
    ///
    /// Returns an error if the prompt is empty after trimming or if the
    /// backend call fails.
    pub async fn ask(&mut self, prompt: &str) -> Result<Turn> {
        let prompt = prompt.trim();
        if prompt.is_empty() {
            return Err(Error::validation(
                "prompt must not be empty",
                Some("prompt".to_string()),
            ));
        }

        self.turns.push(Turn::user(prompt));
        self.complete_pending_turn(prompt).await
    }

    /// Re-submits the trailing unanswered user turn.
    ///
    /// After a failed `ask`, the history ends on the user turn that never
    /// got a reply; `retry` sends it again without appending a duplicate.
    ///
    /// # Errors
    ///
    /// Returns a validation error when there is nothing to retry, or the
    /// backend error when the call fails again.
    pub async fn retry(&mut self) -> Result<Turn> {
        let prompt = match self.turns.last() {
            Some(turn) if turn.is_user() => turn.text.clone(),
            _ => {
                return Err(Error::validation(
                    "no unanswered prompt to retry",
                    Some("history".to_string()),
                ));
            }
        };

        observability::SESSION_RETRIES.click();
        self.complete_pending_turn(&prompt).await
    }

    /// Asks the backend for a reply to the trailing user turn and appends
    /// the assistant turn on success.
    async fn complete_pending_turn(&mut self, prompt: &str) -> Result<Turn> {
        observability::SESSION_TURNS.click();
        self.request_count = self.request_count.saturating_add(1);

        let generation_config = self.config.generation_config();
        // The trailing user turn is framed as the prompt, not as history.
        let prior = &self.turns[..self.turns.len() - 1];
        let outcome = self
            .backend
            .generate(
                &self.config.model,
                &self.config.system_prompt,
                &generation_config,
                prior,
                prompt,
            )
            .await;

        match outcome {
            Ok(reply) => {
                self.record_usage(&reply);
                let turn = Turn::assistant(reply.text);
                self.turns.push(turn.clone());
                Ok(turn)
            }
            Err(err) => {
                observability::SESSION_TURN_ERRORS.click();
                Err(err)
            }
        }
    }

    /// Read-only snapshot of the conversation, oldest first.
    pub fn history(&self) -> &[Turn] {
        &self.turns
    }

    /// Clears the conversation history. Usage totals survive.
    pub fn reset(&mut self) {
        observability::SESSION_RESETS.click();
        self.turns.clear();
    }

    /// Returns the number of turns in the conversation.
    pub fn turn_count(&self) -> usize {
        self.turns.len()
    }

    /// Returns true if the history ends on an unanswered user turn.
    pub fn awaiting_reply(&self) -> bool {
        self.turns.last().is_some_and(Turn::is_user)
    }

    /// Changes the model used for responses.
    pub fn set_model(&mut self, model: Model) {
        self.config.model = model;
    }

    /// Returns the current model.
    pub fn model(&self) -> &Model {
        &self.config.model
    }

    /// Sets the system instruction.
    pub fn set_system_prompt(&mut self, prompt: impl Into<String>) {
        self.config.system_prompt = prompt.into();
    }

    /// Returns the current system instruction.
    pub fn system_prompt(&self) -> &str {
        &self.config.system_prompt
    }

    /// Sets the maximum tokens per response.
    pub fn set_max_output_tokens(&mut self, max_output_tokens: u32) {
        self.config.max_output_tokens = max_output_tokens;
    }

    /// Sets the sampling temperature.
    pub fn set_temperature(&mut self, temperature: Option<f32>) {
        self.config.temperature = temperature;
    }

    /// Returns the current session statistics snapshot.
    pub fn stats(&self) -> SessionStats {
        SessionStats {
            model: self.config.model.clone(),
            turn_count: self.turn_count(),
            max_output_tokens: self.config.max_output_tokens,
            temperature: self.config.temperature,
            system_prompt: self.config.system_prompt.clone(),
            total_prompt_tokens: self.usage_totals.prompt_token_count,
            total_reply_tokens: self.usage_totals.candidates_token_count,
            total_requests: self.request_count,
            last_turn_prompt_tokens: self
                .last_turn_usage
                .map(|usage| usage.prompt_token_count),
            last_turn_reply_tokens: self
                .last_turn_usage
                .map(|usage| usage.candidates_token_count),
        }
    }

    fn record_usage(&mut self, reply: &GeneratedReply) {
        if let Some(usage) = reply.usage {
            self.last_turn_usage = Some(usage);
            self.usage_totals = self.usage_totals + usage;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::Mutex;

    use super::*;
    use crate::types::{GenerationConfig, TurnRole};

    /// Backend that replays scripted outcomes and records what it was
    /// called with.
    struct ScriptedBackend {
        outcomes: Mutex<VecDeque<Result<GeneratedReply>>>,
        calls: Mutex<Vec<(usize, String)>>,
    }

    impl ScriptedBackend {
        fn new(outcomes: Vec<Result<GeneratedReply>>) -> Self {
            Self {
                outcomes: Mutex::new(outcomes.into()),
                calls: Mutex::new(Vec::new()),
            }
        }

        fn replying(texts: &[&str]) -> Self {
            Self::new(
                texts
                    .iter()
                    .map(|text| Ok(GeneratedReply::new(*text)))
                    .collect(),
            )
        }
    }

    #[async_trait::async_trait]
    impl GenerativeBackend for ScriptedBackend {
        async fn generate(
            &self,
            _model: &Model,
            _system_instruction: &str,
            _generation_config: &GenerationConfig,
            history: &[Turn],
            prompt: &str,
        ) -> Result<GeneratedReply> {
            self.calls
                .lock()
                .unwrap()
                .push((history.len(), prompt.to_string()));
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .expect("backend called more times than scripted")
        }
    }

    fn session(backend: ScriptedBackend) -> ChatSession<ScriptedBackend> {
        ChatSession::with_backend(backend, ChatConfig::default())
    }

    #[tokio::test]
    async fn successful_ask_appends_user_and_assistant() {
        let mut session = session(ScriptedBackend::replying(&["Common symptoms include..."]));

        let turn = session
            .ask("What are the symptoms of hypertension?")
            .await
            .unwrap();
        assert_eq!(turn.role, TurnRole::Assistant);
        assert_eq!(turn.text, "Common symptoms include...");

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, TurnRole::User);
        assert_eq!(history[0].text, "What are the symptoms of hypertension?");
        assert_eq!(history[1].role, TurnRole::Assistant);
        assert_eq!(history[1].text, "Common symptoms include...");
        assert!(!session.awaiting_reply());
    }

    #[tokio::test]
    async fn empty_prompt_leaves_history_unchanged() {
        let mut session = session(ScriptedBackend::new(Vec::new()));

        let err = session.ask("").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.turn_count(), 0);

        let err = session.ask("   \n").await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.turn_count(), 0);
    }

    #[tokio::test]
    async fn failed_ask_keeps_only_user_turn() {
        let mut session = session(ScriptedBackend::new(vec![Err(Error::connection(
            "connection refused",
            None,
        ))]));

        let err = session.ask("foo").await.unwrap_err();
        assert!(err.is_connection());

        let history = session.history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].role, TurnRole::User);
        assert_eq!(history[0].text, "foo");
        assert!(session.awaiting_reply());
    }

    #[tokio::test]
    async fn history_alternates_across_turns() {
        let mut session = session(ScriptedBackend::replying(&["first reply", "second reply"]));

        session.ask("first question").await.unwrap();
        session.ask("second question").await.unwrap();

        let roles: Vec<TurnRole> = session.history().iter().map(|turn| turn.role).collect();
        assert_eq!(
            roles,
            vec![
                TurnRole::User,
                TurnRole::Assistant,
                TurnRole::User,
                TurnRole::Assistant
            ]
        );
        assert_eq!(session.turn_count(), 4);

        // Timestamps never run backwards within a history.
        for pair in session.history().windows(2) {
            assert!(pair[0].timestamp <= pair[1].timestamp);
        }
    }

    #[tokio::test]
    async fn reset_clears_history_and_session_restarts() {
        let mut session = session(ScriptedBackend::replying(&[
            "first reply",
            "second reply",
            "fresh reply",
        ]));

        session.ask("first question").await.unwrap();
        session.ask("second question").await.unwrap();
        assert_eq!(session.turn_count(), 4);

        session.reset();
        assert_eq!(session.turn_count(), 0);

        session.ask("fresh question").await.unwrap();
        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, TurnRole::User);
        assert_eq!(history[0].text, "fresh question");
        assert_eq!(history[1].role, TurnRole::Assistant);
        assert_eq!(history[1].text, "fresh reply");
    }

    #[tokio::test]
    async fn backend_sees_prior_history_without_pending_prompt() {
        let backend = ScriptedBackend::replying(&["first reply", "second reply"]);
        let mut session = session(backend);

        session.ask("first question").await.unwrap();
        session.ask("second question").await.unwrap();

        let calls = session.backend.calls.lock().unwrap().clone();
        // First call: no prior turns. Second call: the first exchange only.
        assert_eq!(calls[0], (0, "first question".to_string()));
        assert_eq!(calls[1], (2, "second question".to_string()));
    }

    #[tokio::test]
    async fn retry_resends_unanswered_prompt_without_duplicating() {
        let mut session = session(ScriptedBackend::new(vec![
            Err(Error::timeout("timed out", Some(20.0))),
            Ok(GeneratedReply::new("better late than never")),
        ]));

        session.ask("foo").await.unwrap_err();
        assert_eq!(session.turn_count(), 1);

        let turn = session.retry().await.unwrap();
        assert_eq!(turn.text, "better late than never");

        let history = session.history();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].role, TurnRole::User);
        assert_eq!(history[0].text, "foo");
        assert_eq!(history[1].role, TurnRole::Assistant);

        let calls = session.backend.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 2);
        // Both calls frame the same prompt against the same (empty) history.
        assert_eq!(calls[0], (0, "foo".to_string()));
        assert_eq!(calls[1], (0, "foo".to_string()));
    }

    #[tokio::test]
    async fn retry_with_nothing_pending_is_a_validation_error() {
        let mut session = session(ScriptedBackend::replying(&["reply"]));

        let err = session.retry().await.unwrap_err();
        assert!(err.is_validation());

        session.ask("question").await.unwrap();
        let err = session.retry().await.unwrap_err();
        assert!(err.is_validation());
        assert_eq!(session.turn_count(), 2);
    }

    #[tokio::test]
    async fn usage_totals_accumulate() {
        let mut session = session(ScriptedBackend::new(vec![
            Ok(GeneratedReply::new("one").with_usage(UsageMetadata::new(10, 5))),
            Ok(GeneratedReply::new("two").with_usage(UsageMetadata::new(20, 7))),
        ]));

        session.ask("first").await.unwrap();
        session.ask("second").await.unwrap();

        let stats = session.stats();
        assert_eq!(stats.total_prompt_tokens, 30);
        assert_eq!(stats.total_reply_tokens, 12);
        assert_eq!(stats.total_requests, 2);
        assert_eq!(stats.last_turn_prompt_tokens, Some(20));
        assert_eq!(stats.last_turn_reply_tokens, Some(7));
        assert_eq!(stats.turn_count, 4);
    }

    #[tokio::test]
    async fn mutators_update_config() {
        let mut session = session(ScriptedBackend::new(Vec::new()));

        session.set_model(Model::Custom("gemini-experimental".to_string()));
        assert_eq!(
            session.model(),
            &Model::Custom("gemini-experimental".to_string())
        );

        session.set_system_prompt("Be terse.");
        assert_eq!(session.system_prompt(), "Be terse.");

        session.set_max_output_tokens(512);
        session.set_temperature(Some(0.2));
        let stats = session.stats();
        assert_eq!(stats.max_output_tokens, 512);
        assert_eq!(stats.temperature, Some(0.2));
    }
}
