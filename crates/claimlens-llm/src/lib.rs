//! Claimlens LLM Provider Layer
//!
//! Implementations of the `LlmProvider` seam from `claimlens-domain`.
//!
//! # Providers
//!
//! - `OllamaProvider`: local Ollama API integration (single attempt per
//!   call; the pipeline relies on static fallbacks, not retries)
//! - `MockProvider`: deterministic mock for testing
//!
//! The `response` module carries the hygiene helper both the extractor and
//! the verifier use to dig JSON out of chatty model output.

#![warn(missing_docs)]

pub mod ollama;
pub mod response;

use claimlens_domain::traits::{GenerationRequest, LlmProvider, ProviderError};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

pub use ollama::OllamaProvider;
pub use response::extract_json;

/// Mock LLM provider for deterministic testing.
///
/// Returns pre-configured responses without any network calls. Responses
/// can be keyed on a substring of the prompt, so a single mock can answer
/// an extraction call and the per-claim verification calls differently.
#[derive(Debug, Clone)]
pub struct MockProvider {
    default_response: Option<String>,
    responses: Arc<Mutex<Vec<(String, String)>>>,
    call_count: Arc<Mutex<usize>>,
}

impl MockProvider {
    /// Create a mock that answers every request with a fixed response
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            default_response: Some(response.into()),
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Create a mock that fails every request (unconfigured-model behavior)
    pub fn failing() -> Self {
        Self {
            default_response: None,
            responses: Arc::new(Mutex::new(Vec::new())),
            call_count: Arc::new(Mutex::new(0)),
        }
    }

    /// Answer requests whose prompt contains `needle` with `response`.
    ///
    /// Rules are checked in insertion order before the default response.
    pub fn respond_when(&mut self, needle: impl Into<String>, response: impl Into<String>) {
        self.responses
            .lock()
            .unwrap()
            .push((needle.into(), response.into()));
    }

    /// Number of generate calls across all clones of this mock
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

#[async_trait]
impl LlmProvider for MockProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        *self.call_count.lock().unwrap() += 1;

        let responses = self.responses.lock().unwrap();
        for (needle, response) in responses.iter() {
            if request.prompt.contains(needle.as_str()) {
                return Ok(response.clone());
            }
        }

        self.default_response
            .clone()
            .ok_or_else(|| ProviderError::Communication("mock configured to fail".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(prompt: &str) -> GenerationRequest {
        GenerationRequest::new("system", prompt, 0.3)
    }

    #[tokio::test]
    async fn test_mock_default_response() {
        let provider = MockProvider::new("fixed");
        assert_eq!(provider.generate(&request("anything")).await.unwrap(), "fixed");
    }

    #[tokio::test]
    async fn test_mock_substring_routing() {
        let mut provider = MockProvider::new("default");
        provider.respond_when("moon landing", "{\"factual_status\": \"false\"}");
        provider.respond_when("transcript", "[]");

        let out = provider.generate(&request("Claim: the moon landing was fake")).await.unwrap();
        assert!(out.contains("false"));
        assert_eq!(provider.generate(&request("full transcript here")).await.unwrap(), "[]");
        assert_eq!(provider.generate(&request("neither")).await.unwrap(), "default");
    }

    #[tokio::test]
    async fn test_mock_failing() {
        let provider = MockProvider::failing();
        let result = provider.generate(&request("x")).await;
        assert!(matches!(result, Err(ProviderError::Communication(_))));
    }

    #[tokio::test]
    async fn test_mock_counts_calls_across_clones() {
        let provider = MockProvider::new("r");
        let clone = provider.clone();

        provider.generate(&request("a")).await.unwrap();
        clone.generate(&request("b")).await.unwrap();

        assert_eq!(provider.call_count(), 2);
        assert_eq!(clone.call_count(), 2);
    }
}
