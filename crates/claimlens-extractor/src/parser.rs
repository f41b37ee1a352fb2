//! Lenient parsing of model output into claim candidates

use crate::error::ExtractorError;
use claimlens_llm::extract_json;
use serde::Deserialize;
use serde_json::Value;
use tracing::warn;

/// One claim as produced by the extraction call.
#[derive(Debug, Clone, Deserialize)]
pub struct ClaimCandidate {
    /// The asserted statement
    pub text: String,

    /// Approximate position in the video
    #[serde(default)]
    pub timestamp: String,

    /// Surrounding context from the transcript
    #[serde(default)]
    pub context: String,
}

/// Parse a model response into claim candidates.
///
/// Malformed entries are skipped with a warning; an unparseable response
/// overall is an error. Either way the caller degrades to the per-segment
/// fallback rather than propagating.
pub fn parse_claims(response: &str) -> Result<Vec<ClaimCandidate>, ExtractorError> {
    let json_str = extract_json(response)
        .ok_or_else(|| ExtractorError::InvalidFormat("no JSON payload in response".to_string()))?;

    let json: Value = serde_json::from_str(&json_str)
        .map_err(|e| ExtractorError::InvalidFormat(format!("JSON parse error: {}", e)))?;

    let entries = json
        .as_array()
        .ok_or_else(|| ExtractorError::InvalidFormat("expected a JSON array".to_string()))?;

    let mut candidates = Vec::new();
    for (idx, entry) in entries.iter().enumerate() {
        match serde_json::from_value::<ClaimCandidate>(entry.clone()) {
            Ok(candidate) if !candidate.text.trim().is_empty() => candidates.push(candidate),
            Ok(_) => warn!(idx, "skipping claim with empty text"),
            Err(e) => warn!(idx, error = %e, "skipping malformed claim entry"),
        }
    }

    Ok(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_array() {
        let response = r#"[
            {"text": "The Eiffel Tower is 330 meters tall.", "timestamp": "12s", "context": "discussing Paris landmarks"},
            {"text": "France has a population of 68 million.", "timestamp": "30s", "context": ""}
        ]"#;

        let claims = parse_claims(response).unwrap();
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].text, "The Eiffel Tower is 330 meters tall.");
        assert_eq!(claims[0].timestamp, "12s");
        assert_eq!(claims[1].context, "");
    }

    #[test]
    fn test_parse_with_markdown_fence() {
        let response = "```json\n[{\"text\": \"Water is H2O.\", \"timestamp\": \"5s\", \"context\": \"\"}]\n```";
        let claims = parse_claims(response).unwrap();
        assert_eq!(claims.len(), 1);
        assert_eq!(claims[0].text, "Water is H2O.");
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let response = r#"[{"text": "A bare claim."}]"#;
        let claims = parse_claims(response).unwrap();
        assert_eq!(claims[0].timestamp, "");
        assert_eq!(claims[0].context, "");
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let response = r#"[
            {"text": "Good claim.", "timestamp": "1s"},
            {"timestamp": "2s"},
            {"text": "  "},
            {"text": "Another good claim."}
        ]"#;

        let claims = parse_claims(response).unwrap();
        assert_eq!(claims.len(), 2);
        assert_eq!(claims[0].text, "Good claim.");
        assert_eq!(claims[1].text, "Another good claim.");
    }

    #[test]
    fn test_non_json_response_is_error() {
        assert!(matches!(
            parse_claims("I couldn't find any claims."),
            Err(ExtractorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_json_object_is_error() {
        assert!(matches!(
            parse_claims(r#"{"text": "not an array"}"#),
            Err(ExtractorError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_empty_array_is_ok_and_empty() {
        let claims = parse_claims("[]").unwrap();
        assert!(claims.is_empty());
    }
}
