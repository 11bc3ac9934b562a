use serde::{Deserialize, Serialize};

/// A single part of a content entry.
///
/// The Generative Language API represents message bodies as arrays of
/// parts; this crate only exchanges text parts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// The text of the part.
    pub text: String,
}

impl Part {
    /// Create a new `Part` with the given text.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

impl From<&str> for Part {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for Part {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn part_serialization() {
        let part = Part::new("Hello");
        assert_eq!(to_value(&part).unwrap(), json!({"text": "Hello"}));
    }

    #[test]
    fn part_from_str() {
        let part: Part = "Hello".into();
        assert_eq!(part.text, "Hello");
    }
}
