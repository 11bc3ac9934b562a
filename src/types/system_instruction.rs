use serde::{Deserialize, Serialize};

use crate::types::Part;

/// A system instruction that scopes the model's behavior for a request.
///
/// Unlike a [`Content`](crate::types::Content) entry, a system instruction
/// carries no role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemInstruction {
    /// The parts making up the instruction.
    pub parts: Vec<Part>,
}

impl SystemInstruction {
    /// Create a new `SystemInstruction` with a single text part.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            parts: vec![Part::new(text)],
        }
    }
}

impl From<&str> for SystemInstruction {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for SystemInstruction {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, to_value};

    #[test]
    fn system_instruction_serialization() {
        let instruction = SystemInstruction::new("You answer hypertension questions.");
        assert_eq!(
            to_value(&instruction).unwrap(),
            json!({
                "parts": [{"text": "You answer hypertension questions."}]
            })
        );
    }
}
