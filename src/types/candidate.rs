use serde::{Deserialize, Serialize};

use crate::types::Content;

/// One candidate completion in a generate response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// The generated content.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Content>,

    /// Why generation stopped, e.g. `STOP`, `MAX_TOKENS`, `SAFETY`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,

    /// The candidate's index in the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<u32>,
}

impl Candidate {
    /// The concatenated text of the candidate's parts, if any.
    pub fn text(&self) -> Option<String> {
        let content = self.content.as_ref()?;
        let text = content.text();
        if text.is_empty() { None } else { Some(text) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn candidate_deserialization() {
        let json = json!({
            "content": {
                "role": "model",
                "parts": [{"text": "Common symptoms include..."}]
            },
            "finishReason": "STOP",
            "index": 0
        });
        let candidate: Candidate = serde_json::from_value(json).unwrap();
        assert_eq!(
            candidate.text().as_deref(),
            Some("Common symptoms include...")
        );
        assert_eq!(candidate.finish_reason.as_deref(), Some("STOP"));
    }

    #[test]
    fn candidate_without_content_has_no_text() {
        let json = json!({"finishReason": "SAFETY"});
        let candidate: Candidate = serde_json::from_value(json).unwrap();
        assert_eq!(candidate.text(), None);
    }
}
