use serde::{Deserialize, Serialize};

use crate::types::{Candidate, UsageMetadata};

/// The body of a successful `generateContent` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    /// The candidate completions, best first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub candidates: Vec<Candidate>,

    /// Token accounting for the call.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usage_metadata: Option<UsageMetadata>,

    /// The concrete model version that served the request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_version: Option<String>,
}

impl GenerateContentResponse {
    /// The text of the first candidate, if it produced any.
    pub fn primary_text(&self) -> Option<String> {
        self.candidates.first().and_then(Candidate::text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn response_deserialization() {
        let json = json!({
            "candidates": [{
                "content": {
                    "role": "model",
                    "parts": [{"text": "Limit sodium and stay active."}]
                },
                "finishReason": "STOP",
                "index": 0
            }],
            "usageMetadata": {
                "promptTokenCount": 12,
                "candidatesTokenCount": 9,
                "totalTokenCount": 21
            },
            "modelVersion": "gemini-2.5-flash-preview-09-2025"
        });
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
        assert_eq!(
            response.primary_text().as_deref(),
            Some("Limit sodium and stay active.")
        );
        assert_eq!(
            response.usage_metadata,
            Some(UsageMetadata::new(12, 9))
        );
    }

    #[test]
    fn response_without_candidates() {
        let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
        assert!(response.candidates.is_empty());
        assert_eq!(response.primary_text(), None);
    }

    #[test]
    fn response_with_textless_candidate() {
        let json = json!({
            "candidates": [{"finishReason": "SAFETY", "index": 0}]
        });
        let response: GenerateContentResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.primary_text(), None);
    }
}
