//! Extraction prompt
//!
//! One authoritative prompt for claim extraction. The claim cap is stated
//! to the model here; it is a guideline, not something the fallback path
//! enforces.

use claimlens_domain::traits::GenerationRequest;

const SYSTEM_TEMPLATE: &str = "You are a fact-checking assistant. Analyze the video transcript \
provided by the user and extract up to {max_claims} verifiable factual claims. Focus on \
statements that assert something checkable about the world; skip opinions, predictions and \
rhetorical questions.

Return ONLY a JSON array, no markdown code blocks, no explanations:
[
  {
    \"text\": \"the claim, as a standalone sentence\",
    \"timestamp\": \"approximate position, e.g. \\\"42s\\\"\",
    \"context\": \"brief surrounding context from the transcript\"
  }
]";

/// Build the single extraction inference request for a transcript.
pub fn extraction_request(
    transcript_text: &str,
    max_claims: usize,
    temperature: f32,
) -> GenerationRequest {
    let system = SYSTEM_TEMPLATE.replace("{max_claims}", &max_claims.to_string());
    let prompt = format!("Video transcript:\n---\n{}\n---", transcript_text);
    GenerationRequest::new(system, prompt, temperature)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_carries_transcript_and_cap() {
        let req = extraction_request("The moon is made of rock.", 10, 0.3);
        assert!(req.prompt.contains("The moon is made of rock."));
        assert!(req.system.contains("up to 10 verifiable factual claims"));
        assert_eq!(req.temperature, 0.3);
    }

    #[test]
    fn test_system_describes_json_schema() {
        let req = extraction_request("x", 5, 0.3);
        assert!(req.system.contains("\"text\""));
        assert!(req.system.contains("\"timestamp\""));
        assert!(req.system.contains("\"context\""));
        assert!(req.system.contains("ONLY a JSON array"));
    }
}
