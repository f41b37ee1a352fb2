//! Core extractor - model path with per-segment fallback

use crate::error::ExtractorError;
use crate::parser::parse_claims;
use crate::prompt::extraction_request;
use claimlens_domain::traits::LlmProvider;
use claimlens_domain::{Claim, Transcript};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{debug, info, warn};

const DEFAULT_MAX_CLAIMS: usize = 10;
const DEFAULT_TEMPERATURE: f32 = 0.3;
const DEFAULT_TIMEOUT_SECS: u64 = 120;

/// Format a segment start offset as a claim timestamp, e.g. `"42s"`.
pub fn format_offset(start: f64) -> String {
    format!("{:.0}s", start)
}

/// Extracts candidate claims from a transcript.
///
/// With a configured model, one inference call produces up to
/// `max_claims` claims. Without one, or when the call or its output is
/// unusable, every transcript segment becomes its own claim. Extraction
/// never fails.
pub struct ClaimExtractor {
    llm: Option<Arc<dyn LlmProvider>>,
    max_claims: usize,
    temperature: f32,
    call_timeout: Duration,
}

impl ClaimExtractor {
    /// Create an extractor; `None` means fallback-only operation
    pub fn new(llm: Option<Arc<dyn LlmProvider>>) -> Self {
        Self {
            llm,
            max_claims: DEFAULT_MAX_CLAIMS,
            temperature: DEFAULT_TEMPERATURE,
            call_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the claim cap passed to the model
    pub fn with_max_claims(mut self, max_claims: usize) -> Self {
        self.max_claims = max_claims;
        self
    }

    /// Set the sampling temperature for the extraction call
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the deadline for the extraction call
    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    /// Extract claims from a transcript. Infallible by policy.
    pub async fn extract(&self, transcript: &Transcript) -> Vec<Claim> {
        if let Some(llm) = &self.llm {
            match self.extract_with_model(llm.as_ref(), transcript).await {
                Ok(claims) => {
                    info!(claims = claims.len(), "extracted claims via model");
                    return claims;
                }
                Err(e) => {
                    warn!(error = %e, "model extraction failed, falling back to per-segment claims");
                }
            }
        } else {
            debug!("no model configured, using per-segment claims");
        }

        Self::segment_claims(transcript)
    }

    async fn extract_with_model(
        &self,
        llm: &dyn LlmProvider,
        transcript: &Transcript,
    ) -> Result<Vec<Claim>, ExtractorError> {
        let request = extraction_request(&transcript.full_text(), self.max_claims, self.temperature);

        let response = timeout(self.call_timeout, llm.generate(&request))
            .await
            .map_err(|_| ExtractorError::Timeout)?
            .map_err(|e| ExtractorError::Llm(e.to_string()))?;

        debug!(response_len = response.len(), "received extraction response");

        let candidates = parse_claims(&response)?;
        if candidates.is_empty() {
            return Err(ExtractorError::NoClaims);
        }

        Ok(candidates
            .into_iter()
            .take(self.max_claims)
            .map(|c| Claim::unverified(c.text, c.timestamp, c.context))
            .collect())
    }

    /// The fallback path: wrap every segment as its own claim, using its
    /// start offset as the timestamp and empty context. The claim cap is
    /// deliberately not applied here.
    pub fn segment_claims(transcript: &Transcript) -> Vec<Claim> {
        transcript
            .segments
            .iter()
            .map(|s| Claim::unverified(s.text.clone(), format_offset(s.start), ""))
            .collect()
    }
}
