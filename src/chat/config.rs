//! Configuration types for the chat application.
//!
//! This module provides CLI argument parsing via `arrrg` and configuration
//! structures for controlling chat behavior.

use std::time::Duration;

use arrrg_derive::CommandLine;

use crate::types::{GenerationConfig, KnownModel, Model};

/// Default maximum tokens per response.
const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 4096;

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// The default instruction scoping the assistant to hypertension topics.
///
/// The wording is configurable via `--system` or `/system`; this default is
/// what ships with the tensio-chat binary.
pub const DEFAULT_SYSTEM_PROMPT: &str = "You are a helpful, professional, and medically aware \
assistant specializing in hypertension and blood pressure management. Provide a concise, \
easy-to-understand answer based on the information you find. When discussing medical topics, \
explicitly advise the user to consult a doctor for diagnosis or treatment.";

/// Command-line arguments for the tensio-chat tool.
#[derive(CommandLine, Debug, Default, PartialEq, Eq)]
pub struct ChatArgs {
    /// Model to use for chat.
    #[arrrg(optional, "Model to use (default: gemini-2.5-flash-preview-09-2025)", "MODEL")]
    pub model: Option<String>,

    /// System instruction overriding the built-in hypertension prompt.
    #[arrrg(optional, "System instruction for the conversation", "PROMPT")]
    pub system: Option<String>,

    /// Maximum tokens per response.
    #[arrrg(optional, "Max tokens per response (default: 4096)", "TOKENS")]
    pub max_output_tokens: Option<u32>,

    /// Request timeout in seconds.
    #[arrrg(optional, "Request timeout in seconds (default: 20)", "SECONDS")]
    pub timeout: Option<u64>,

    /// Disable ANSI colors and styles.
    #[arrrg(flag, "Disable ANSI colors/styles")]
    pub no_color: bool,
}

/// Configuration for a chat session.
///
/// This struct holds the resolved configuration values after processing
/// command-line arguments with appropriate defaults.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// The model to use for generating responses.
    pub model: Model,

    /// The system instruction scoping the conversation.
    pub system_prompt: String,

    /// Maximum tokens per response.
    pub max_output_tokens: u32,

    /// Optional sampling temperature.
    pub temperature: Option<f32>,

    /// Request timeout for the model adapter.
    pub timeout: Duration,

    /// Whether to use ANSI colors and styles in output.
    pub use_color: bool,
}

impl ChatConfig {
    /// Creates a new ChatConfig with default values.
    ///
    /// Defaults:
    /// - Model: gemini-2.5-flash-preview-09-2025
    /// - System prompt: the hypertension domain instruction
    /// - Max output tokens: 4096
    /// - Timeout: 20 seconds
    /// - Color: enabled
    pub fn new() -> Self {
        Self {
            model: Model::Known(KnownModel::Gemini25FlashPreview0925),
            system_prompt: DEFAULT_SYSTEM_PROMPT.to_string(),
            max_output_tokens: DEFAULT_MAX_OUTPUT_TOKENS,
            temperature: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            use_color: true,
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: Model) -> Self {
        self.model = model;
        self
    }

    /// Sets the system instruction.
    pub fn with_system_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.system_prompt = prompt.into();
        self
    }

    /// Sets the maximum tokens per response.
    pub fn with_max_output_tokens(mut self, max_output_tokens: u32) -> Self {
        self.max_output_tokens = max_output_tokens;
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: Option<f32>) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Disables ANSI color output.
    pub fn without_color(mut self) -> Self {
        self.use_color = false;
        self
    }

    /// The generation parameters to send with each request.
    pub fn generation_config(&self) -> GenerationConfig {
        let mut config = GenerationConfig::new().with_max_output_tokens(self.max_output_tokens);
        if let Some(temperature) = self.temperature {
            config = config.with_temperature(temperature);
        }
        config
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ChatArgs> for ChatConfig {
    fn from(args: ChatArgs) -> Self {
        let mut config = ChatConfig::new();
        if let Some(model) = args.model {
            config.model = model
                .parse::<KnownModel>()
                .map(Model::Known)
                .unwrap_or(Model::Custom(model));
        }
        if let Some(system) = args.system {
            config.system_prompt = system;
        }
        if let Some(max_output_tokens) = args.max_output_tokens {
            config.max_output_tokens = max_output_tokens;
        }
        if let Some(timeout) = args.timeout {
            config.timeout = Duration::from_secs(timeout);
        }
        config.use_color = !args.no_color;
        config
    }
}
