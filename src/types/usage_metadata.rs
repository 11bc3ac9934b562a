use serde::{Deserialize, Serialize};

/// Token accounting for a generate call.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsageMetadata {
    /// Tokens in the prompt (history + new message + system instruction).
    #[serde(default)]
    pub prompt_token_count: u64,

    /// Tokens across the returned candidates.
    #[serde(default)]
    pub candidates_token_count: u64,

    /// Total tokens billed for the call.
    #[serde(default)]
    pub total_token_count: u64,
}

impl UsageMetadata {
    /// Create a new `UsageMetadata`.
    pub fn new(prompt_token_count: u64, candidates_token_count: u64) -> Self {
        Self {
            prompt_token_count,
            candidates_token_count,
            total_token_count: prompt_token_count + candidates_token_count,
        }
    }
}

impl std::ops::Add for UsageMetadata {
    type Output = UsageMetadata;

    fn add(self, other: UsageMetadata) -> UsageMetadata {
        UsageMetadata {
            prompt_token_count: self.prompt_token_count + other.prompt_token_count,
            candidates_token_count: self.candidates_token_count + other.candidates_token_count,
            total_token_count: self.total_token_count + other.total_token_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn usage_deserialization() {
        let json = json!({
            "promptTokenCount": 42,
            "candidatesTokenCount": 128,
            "totalTokenCount": 170
        });
        let usage: UsageMetadata = serde_json::from_value(json).unwrap();
        assert_eq!(usage.prompt_token_count, 42);
        assert_eq!(usage.candidates_token_count, 128);
        assert_eq!(usage.total_token_count, 170);
    }

    #[test]
    fn usage_missing_fields_default_to_zero() {
        let usage: UsageMetadata = serde_json::from_value(json!({})).unwrap();
        assert_eq!(usage, UsageMetadata::default());
    }

    #[test]
    fn usage_addition() {
        let total = UsageMetadata::new(10, 20) + UsageMetadata::new(5, 15);
        assert_eq!(total.prompt_token_count, 15);
        assert_eq!(total.candidates_token_count, 35);
        assert_eq!(total.total_token_count, 50);
    }
}
