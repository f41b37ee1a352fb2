//! Verification strategy seam

use crate::error::VerifierError;
use async_trait::async_trait;
use claimlens_domain::{Claim, Verdict};

/// A way of producing a verdict for a claim.
///
/// Two implementations exist: `LlmVerifier` (model-backed) and
/// `StaticVerifier` (fixed lookup table). The choice is made once at
/// startup from configuration, not per call.
#[async_trait]
pub trait VerificationStrategy: Send + Sync {
    /// Produce a verdict for the claim, given the knowledge-lookup sources.
    ///
    /// Errors leave the claim untouched; the caller falls through to the
    /// static fallback.
    async fn verify(&self, claim: &Claim, sources: &[String]) -> Result<Verdict, VerifierError>;
}
