//! Trait seams for the three external collaborators
//!
//! These traits define the boundaries between pipeline logic and
//! infrastructure. Implementations live in the claimlens-llm,
//! claimlens-transcript and claimlens-knowledge crates; tests use the
//! static doubles those crates provide.

use crate::transcript::{TranscriptSegment, VideoMetadata};
use async_trait::async_trait;
use thiserror::Error;

/// A single inference request to the language model.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationRequest {
    /// System instruction framing the task
    pub system: String,

    /// User content (transcript text, claim to verify, ...)
    pub prompt: String,

    /// Sampling temperature; the pipeline uses low values for determinism
    pub temperature: f32,
}

impl GenerationRequest {
    /// Create a generation request
    pub fn new(system: impl Into<String>, prompt: impl Into<String>, temperature: f32) -> Self {
        Self {
            system: system.into(),
            prompt: prompt.into(),
            temperature,
        }
    }
}

/// Errors from a language-model provider.
#[derive(Error, Debug)]
pub enum ProviderError {
    /// Network or API communication error
    #[error("Communication error: {0}")]
    Communication(String),

    /// Response could not be interpreted
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Model or endpoint not available
    #[error("Model not available: {0}")]
    Unavailable(String),

    /// Request exceeded its deadline
    #[error("Request timed out")]
    Timeout,
}

/// Language-model inference seam.
///
/// Callers must tolerate free-form output: the provider returns whatever
/// text the model produced, and each pipeline stage parses it leniently.
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Issue one inference call. No internal retries.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, ProviderError>;
}

/// Errors from the transcript provider.
#[derive(Error, Debug)]
pub enum TranscriptError {
    /// Video identifier was not recognized
    #[error("Invalid video id: {0}")]
    InvalidVideoId(String),

    /// No captions available for the video
    #[error("No captions available")]
    NoCaptions,

    /// Network or HTTP failure
    #[error("Transcript fetch failed: {0}")]
    Http(String),

    /// Caption payload could not be decoded
    #[error("Caption parse error: {0}")]
    Parse(String),
}

/// Transcript provider seam.
#[async_trait]
pub trait TranscriptSource: Send + Sync {
    /// Fetch ordered transcript segments for a video, or fail
    async fn fetch_transcript(&self, video_id: &str)
        -> Result<Vec<TranscriptSegment>, TranscriptError>;

    /// Fetch title and channel for a video.
    ///
    /// Implementations return the default placeholder pair on soft
    /// failures rather than erroring; a hard error here never aborts an
    /// acquisition that already has segments.
    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata, TranscriptError>;
}

/// A knowledge-base article matched against a claim.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleSummary {
    /// Canonical article URL
    pub url: String,

    /// Plain-text summary, if the knowledge base provides one
    pub summary: Option<String>,
}

/// Errors from the knowledge base.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    /// Network or HTTP failure
    #[error("Knowledge base request failed: {0}")]
    Http(String),

    /// Response payload could not be decoded
    #[error("Knowledge base response invalid: {0}")]
    Parse(String),
}

/// Knowledge-base seam.
#[async_trait]
pub trait KnowledgeSource: Send + Sync {
    /// Look up a free-text query; `Ok(None)` means no matching article.
    async fn lookup(&self, query: &str) -> Result<Option<ArticleSummary>, KnowledgeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generation_request_fields() {
        let req = GenerationRequest::new("system", "prompt", 0.3);
        assert_eq!(req.system, "system");
        assert_eq!(req.prompt, "prompt");
        assert_eq!(req.temperature, 0.3);
    }

    #[test]
    fn test_error_display() {
        let e = ProviderError::Communication("connection refused".into());
        assert!(e.to_string().contains("connection refused"));

        let e = TranscriptError::NoCaptions;
        assert_eq!(e.to_string(), "No captions available");
    }
}
