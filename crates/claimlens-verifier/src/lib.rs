//! Claimlens Claim Verifier
//!
//! Assigns each claim its verdict. Verification is a polymorphic strategy
//! selected once at startup: a model-backed strategy when a language model
//! is configured, and a static lookup table of known example claims as the
//! deterministic fallback. Any model-path failure degrades to the static
//! table per-claim; verification itself never fails.
//!
//! Source handling: sources found by the knowledge lookup are attached to
//! the claim on both paths; on the static path with no sources, a single
//! sentinel string notes that the search came up empty.

#![warn(missing_docs)]

mod error;
mod llm;
mod statictable;
mod strategy;
mod verifier;

pub use error::VerifierError;
pub use llm::LlmVerifier;
pub use statictable::StaticVerifier;
pub use strategy::VerificationStrategy;
pub use verifier::{Verifier, NO_SOURCES_SENTINEL};
