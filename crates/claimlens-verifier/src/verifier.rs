//! Verifier façade - per-claim degrade policy and source attachment

use crate::statictable::StaticVerifier;
use crate::strategy::VerificationStrategy;
use claimlens_domain::Claim;
use std::sync::Arc;
use tracing::{debug, warn};

/// Sentinel source recorded when the fallback path ran with no lookup hits
pub const NO_SOURCES_SENTINEL: &str = "Wikipedia search yielded no relevant results";

/// Applies verdicts to claims.
///
/// The primary strategy (model-backed, when configured) is tried first;
/// any error falls through to the static table, per claim. Exactly one
/// verdict is applied per claim, and the knowledge-lookup sources are
/// attached according to which path produced the verdict.
pub struct Verifier {
    primary: Option<Arc<dyn VerificationStrategy>>,
    fallback: StaticVerifier,
}

impl Verifier {
    /// Create a verifier; `None` means static-table-only operation
    pub fn new(primary: Option<Arc<dyn VerificationStrategy>>) -> Self {
        Self {
            primary,
            fallback: StaticVerifier::new(),
        }
    }

    /// Verify one claim in place, attaching its sources.
    ///
    /// Never fails; a claim that already has its verdict is left alone.
    pub async fn verify(&self, claim: &mut Claim, sources: Vec<String>) {
        if claim.is_verified() {
            debug!(claim_id = %claim.id, "claim already verified, skipping");
            return;
        }

        let primary_verdict = match &self.primary {
            Some(strategy) => match strategy.verify(claim, &sources).await {
                Ok(verdict) => Some(verdict),
                Err(e) => {
                    warn!(claim_id = %claim.id, error = %e, "model verification failed, using static fallback");
                    None
                }
            },
            None => None,
        };

        let used_fallback = primary_verdict.is_none();
        let verdict = match primary_verdict {
            Some(verdict) => verdict,
            None => self.fallback.lookup(&claim.text),
        };

        claim.apply_verdict(verdict);
        claim.sources = if sources.is_empty() && used_fallback {
            vec![NO_SOURCES_SENTINEL.to_string()]
        } else {
            sources
        };

        debug!(claim_id = %claim.id, status = %claim.status, confidence = claim.confidence, "claim verified");
    }
}
