//! Response hygiene for model output
//!
//! Models asked for "JSON only" still wrap payloads in markdown fences or
//! preamble text. `extract_json` recovers the JSON body so stage parsers
//! can stay strict.

/// Extract the JSON payload from a model response.
///
/// Handles three shapes, in order:
/// 1. markdown code fences (```json ... ``` or ``` ... ```)
/// 2. raw JSON
/// 3. JSON embedded in surrounding prose (first `[`/`{` to the matching
///    last `]`/`}`)
///
/// Returns `None` when no plausible JSON body is present.
pub fn extract_json(response: &str) -> Option<String> {
    let trimmed = response.trim();
    if trimmed.is_empty() {
        return None;
    }

    if trimmed.starts_with("```") {
        let lines: Vec<&str> = trimmed.lines().collect();
        if lines.len() < 2 {
            return None;
        }
        // Drop the opening fence (``` or ```json) and the closing fence
        let end = if lines[lines.len() - 1].trim_start().starts_with("```") {
            lines.len() - 1
        } else {
            lines.len()
        };
        let body = lines[1..end].join("\n");
        return extract_json(&body);
    }

    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        return Some(trimmed.to_string());
    }

    // Prose around the payload: take the outermost span of whichever
    // bracket kind opens first, so an object whose text mentions [1]-style
    // citations is not clipped to the inner array
    [('[', ']'), ('{', '}')]
        .iter()
        .filter_map(|(open, close)| {
            match (trimmed.find(*open), trimmed.rfind(*close)) {
                (Some(start), Some(end)) if start < end => Some((start, end)),
                _ => None,
            }
        })
        .min_by_key(|(start, _)| *start)
        .map(|(start, end)| trimmed[start..=end].to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_json_passes_through() {
        assert_eq!(extract_json(r#"{"a": 1}"#).unwrap(), r#"{"a": 1}"#);
        assert_eq!(extract_json("[1, 2]").unwrap(), "[1, 2]");
    }

    #[test]
    fn test_strips_markdown_fence() {
        let response = "```json\n[{\"text\": \"x\"}]\n```";
        assert_eq!(extract_json(response).unwrap(), "[{\"text\": \"x\"}]");
    }

    #[test]
    fn test_strips_fence_without_language() {
        let response = "```\n{\"a\": 1}\n```";
        assert_eq!(extract_json(response).unwrap(), "{\"a\": 1}");
    }

    #[test]
    fn test_recovers_json_from_prose() {
        let response = "Here are the claims you asked for:\n[{\"text\": \"x\"}]\nLet me know!";
        assert_eq!(extract_json(response).unwrap(), "[{\"text\": \"x\"}]");
    }

    #[test]
    fn test_object_from_prose() {
        let response = "Sure! {\"factual_status\": \"true\"} hope that helps";
        assert_eq!(extract_json(response).unwrap(), "{\"factual_status\": \"true\"}");
    }

    #[test]
    fn test_object_with_bracketed_citations_in_prose() {
        let response =
            "Verdict: {\"factual_status\": \"true\", \"explanation\": \"supported by [1] and [2]\"} done";
        assert_eq!(
            extract_json(response).unwrap(),
            "{\"factual_status\": \"true\", \"explanation\": \"supported by [1] and [2]\"}"
        );
    }

    #[test]
    fn test_no_json_present() {
        assert!(extract_json("I cannot help with that.").is_none());
        assert!(extract_json("").is_none());
        assert!(extract_json("   ").is_none());
    }
}
