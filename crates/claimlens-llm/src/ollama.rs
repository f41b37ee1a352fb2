//! Ollama provider - local LLM inference over HTTP
//!
//! Talks to Ollama's `/api/generate` endpoint with a system instruction
//! and an explicit sampling temperature. Exactly one attempt is made per
//! call: every pipeline stage has a deterministic fallback, so a failed
//! call degrades rather than retries.

use async_trait::async_trait;
use claimlens_domain::traits::{GenerationRequest, LlmProvider, ProviderError};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default Ollama API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:11434";

/// Default timeout for a single inference call
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Ollama API provider for local LLM inference.
pub struct OllamaProvider {
    endpoint: String,
    model: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    system: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl OllamaProvider {
    /// Create a provider for the given endpoint and model.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Result<Self, ProviderError> {
        Self::with_timeout(endpoint, model, Duration::from_secs(DEFAULT_TIMEOUT_SECS))
    }

    /// Create a provider with an explicit per-request timeout
    pub fn with_timeout(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ProviderError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ProviderError::Communication(format!("client build failed: {}", e)))?;

        Ok(Self {
            endpoint: endpoint.into(),
            model: model.into(),
            client,
        })
    }

    /// The configured model name
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError> {
        let url = format!("{}/api/generate", self.endpoint);

        let body = OllamaGenerateRequest {
            model: &self.model,
            system: &request.system,
            prompt: &request.prompt,
            stream: false,
            options: OllamaOptions {
                temperature: request.temperature,
            },
        };

        debug!(model = %self.model, temperature = request.temperature, "issuing inference call");

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ProviderError::Timeout
                } else {
                    ProviderError::Communication(format!("request failed: {}", e))
                }
            })?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Err(ProviderError::Unavailable(self.model.clone()));
        }
        if !response.status().is_success() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(ProviderError::Communication(format!("HTTP {}: {}", status, text)));
        }

        let payload: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(format!("decode failed: {}", e)))?;

        Ok(payload.response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_provider_creation() {
        let provider = OllamaProvider::new(DEFAULT_ENDPOINT, "llama3").unwrap();
        assert_eq!(provider.model(), "llama3");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_communication_error() {
        // Reserved TEST-NET address, connection should fail fast
        let provider =
            OllamaProvider::with_timeout("http://192.0.2.1:1", "llama3", Duration::from_millis(200))
                .unwrap();

        let request = GenerationRequest::new("s", "p", 0.2);
        let result = provider.generate(&request).await;
        assert!(matches!(
            result,
            Err(ProviderError::Communication(_)) | Err(ProviderError::Timeout)
        ));
    }
}
