//! Chat application module for interactive hypertension conversations.
//!
//! This module provides the conversation-session manager used by the
//! tensio-chat REPL. It supports:
//!
//! - Turn-taking against any [`GenerativeBackend`](crate::GenerativeBackend)
//! - Slash commands for session control
//! - Configurable model, system instruction, and parameters
//! - Preset suggested questions
//!
//! # Architecture
//!
//! The module is organized into several components:
//!
//! - [`config`]: CLI argument parsing and configuration
//! - [`session`]: Core chat session management and turn orchestration
//! - [`commands`]: Slash command parsing and handling
//! - [`render`]: Output rendering

mod commands;
mod config;
mod render;
mod session;

pub use commands::{ChatCommand, help_text, parse_command};
pub use config::{ChatArgs, ChatConfig, DEFAULT_SYSTEM_PROMPT};
pub use render::{PlainTextRenderer, Renderer};
pub use session::{ChatSession, SessionStats};

/// Preset questions offered to the user by the presentation layer.
pub const SUGGESTED_PROMPTS: &[&str] = &[
    "What is the optimal diet for reducing blood pressure?",
    "What are the long-term effects of untreated hypertension?",
    "Can stress significantly raise my blood pressure reading?",
    "Explain the difference between systolic and diastolic pressure.",
];
