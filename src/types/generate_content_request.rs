use serde::{Deserialize, Serialize};

use crate::types::{Content, GenerationConfig, SystemInstruction, Turn};

/// Parameters for a `generateContent` call.
///
/// A request is derived from a conversation history and a new prompt, sent
/// once, and never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    /// The conversation so far, oldest first, ending with the new user
    /// prompt.
    pub contents: Vec<Content>,

    /// The instruction scoping the model's behavior.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<SystemInstruction>,

    /// Sampling and output parameters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

impl GenerateContentRequest {
    /// Create a new request from raw contents.
    pub fn new(contents: Vec<Content>) -> Self {
        Self {
            contents,
            system_instruction: None,
            generation_config: None,
        }
    }

    /// Build a request from prior turns and a new prompt.
    ///
    /// The prior turns are serialized oldest first and the prompt becomes
    /// the final user entry.
    pub fn from_history(history: &[Turn], prompt: impl Into<String>) -> Self {
        let mut contents: Vec<Content> = history.iter().map(Content::from).collect();
        contents.push(Content::user(prompt));
        Self::new(contents)
    }

    /// Sets the system instruction.
    pub fn with_system_instruction(mut self, instruction: impl Into<SystemInstruction>) -> Self {
        self.system_instruction = Some(instruction.into());
        self
    }

    /// Sets the generation config.
    pub fn with_generation_config(mut self, config: GenerationConfig) -> Self {
        self.generation_config = Some(config);
        self
    }
}
