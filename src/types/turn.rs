use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Role type for a conversation turn.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    /// User role.
    User,

    /// Assistant role.
    Assistant,
}

/// One exchange unit in a conversation.
///
/// A turn records who spoke, what they said, and when. Turns are immutable
/// once created; a conversation history only ever grows by appending new
/// turns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    /// The role of the speaker.
    pub role: TurnRole,

    /// The text of the turn.
    pub text: String,

    /// When the turn was created.
    #[serde(with = "crate::utils::time")]
    pub timestamp: OffsetDateTime,
}

impl Turn {
    /// Create a new `Turn` with the given role and text, stamped now.
    pub fn new(role: TurnRole, text: impl Into<String>) -> Self {
        Self {
            role,
            text: text.into(),
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// Create a new user `Turn`.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(TurnRole::User, text)
    }

    /// Create a new assistant `Turn`.
    pub fn assistant(text: impl Into<String>) -> Self {
        Self::new(TurnRole::Assistant, text)
    }

    /// Returns true if this is a user turn.
    pub fn is_user(&self) -> bool {
        self.role == TurnRole::User
    }

    /// Returns true if this is an assistant turn.
    pub fn is_assistant(&self) -> bool {
        self.role == TurnRole::Assistant
    }
}
