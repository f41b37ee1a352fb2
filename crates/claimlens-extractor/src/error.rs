//! Error types for the extractor

use thiserror::Error;

/// Errors on the model extraction path.
///
/// These never escape `ClaimExtractor::extract`: each one triggers the
/// per-segment fallback instead.
#[derive(Error, Debug)]
pub enum ExtractorError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Extraction call exceeded its deadline
    #[error("Extraction timeout")]
    Timeout,

    /// Model output was not a parseable claim list
    #[error("Invalid claim format: {0}")]
    InvalidFormat(String),

    /// Model output parsed but contained zero usable claims
    #[error("Model returned no usable claims")]
    NoClaims,
}
