//! Error types for verification strategies

use thiserror::Error;

/// Errors on the model verification path.
///
/// These never escape the `Verifier` façade: each one sends the claim to
/// the static fallback instead.
#[derive(Error, Debug)]
pub enum VerifierError {
    /// LLM provider error
    #[error("LLM error: {0}")]
    Llm(String),

    /// Verification call exceeded its deadline
    #[error("Verification timeout")]
    Timeout,

    /// Model output was not a parseable verdict
    #[error("Invalid verdict format: {0}")]
    InvalidFormat(String),
}
