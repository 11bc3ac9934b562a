use serde::{Deserialize, Serialize};

use crate::types::{Part, Turn, TurnRole};

/// Role type for a content entry on the wire.
///
/// The Generative Language API calls the assistant side "model."
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentRole {
    /// User role.
    User,

    /// Model (assistant) role.
    Model,
}

/// One entry in the `contents` array of a generate request or response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Content {
    /// The role of the content entry.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<ContentRole>,

    /// The parts making up the entry.
    pub parts: Vec<Part>,
}

impl Content {
    /// Create a new `Content` with the given role and a single text part.
    pub fn new(role: ContentRole, text: impl Into<String>) -> Self {
        Self {
            role: Some(role),
            parts: vec![Part::new(text)],
        }
    }

    /// Create a new user `Content` with a single text part.
    pub fn user(text: impl Into<String>) -> Self {
        Self::new(ContentRole::User, text)
    }

    /// Create a new model `Content` with a single text part.
    pub fn model(text: impl Into<String>) -> Self {
        Self::new(ContentRole::Model, text)
    }

    /// The concatenated text of all parts.
    pub fn text(&self) -> String {
        self.parts
            .iter()
            .map(|part| part.text.as_str())
            .collect::<Vec<_>>()
            .join("")
    }
}

impl From<&Turn> for Content {
    fn from(turn: &Turn) -> Self {
        let role = match turn.role {
            TurnRole::User => ContentRole::User,
            TurnRole::Assistant => ContentRole::Model,
        };
        Content::new(role, turn.text.clone())
    }
}

impl From<&Content> for Turn {
    fn from(content: &Content) -> Self {
        // Role-less entries come back from the API on the model side.
        let role = match content.role {
            Some(ContentRole::User) => TurnRole::User,
            Some(ContentRole::Model) | None => TurnRole::Assistant,
        };
        Turn::new(role, content.text())
    }
}
