//! The seam between a conversation session and a text-generation provider.
//!
//! [`ChatSession`](crate::chat::ChatSession) talks to whatever implements
//! [`GenerativeBackend`], so a provider change touches only the adapter and
//! tests can script replies without a network.

use crate::error::Result;
use crate::types::{GenerationConfig, Model, Turn, UsageMetadata};

/// The normalized result of one generate call.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedReply {
    /// The generated text, trimmed.
    pub text: String,

    /// Token accounting for the call, when the provider reports it.
    pub usage: Option<UsageMetadata>,
}

impl GeneratedReply {
    /// Create a new `GeneratedReply` without usage information.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    /// Attaches usage information.
    pub fn with_usage(mut self, usage: UsageMetadata) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// A text-generation provider.
///
/// Implementations translate a conversation context into one outbound call
/// and normalize the result. The contract:
///
/// - `prompt` must be non-empty after trimming; otherwise the call fails
///   with a validation error before any network I/O.
/// - Exactly one network call per invocation; no automatic retry.
/// - The reply text is the provider's first candidate, trimmed; a response
///   with no usable text is an empty-response error.
/// - No shared state is mutated.
#[async_trait::async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Generate a reply to `prompt` given the prior `history`.
    ///
    /// `history` holds the turns before the prompt, oldest first; the
    /// prompt itself is framed as the final user message.
    async fn generate(
        &self,
        model: &Model,
        system_instruction: &str,
        generation_config: &GenerationConfig,
        history: &[Turn],
        prompt: &str,
    ) -> Result<GeneratedReply>;
}
