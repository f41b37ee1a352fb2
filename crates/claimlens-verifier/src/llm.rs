//! Model-backed verification strategy

use crate::error::VerifierError;
use crate::strategy::VerificationStrategy;
use async_trait::async_trait;
use claimlens_domain::traits::{GenerationRequest, LlmProvider};
use claimlens_domain::{Claim, FactualStatus, Verdict};
use claimlens_llm::extract_json;
use serde::Deserialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

const DEFAULT_TEMPERATURE: f32 = 0.2;
const DEFAULT_TIMEOUT_SECS: u64 = 60;

const VERIFICATION_SYSTEM: &str = "You are a fact-checking assistant. Assess whether the claim \
provided by the user is factually accurate, using any supporting context supplied alongside it. \
Respond ONLY with a JSON object, no markdown code blocks, no extra text:
{
  \"factual_status\": \"true\" | \"false\" | \"partial\" | \"unverified\",
  \"confidence_score\": 0.0-1.0,
  \"explanation\": \"one or two sentences justifying the verdict\"
}";

// Verdict object as requested from the model
#[derive(Deserialize)]
struct VerdictPayload {
    factual_status: String,
    confidence_score: f64,
    #[serde(default)]
    explanation: String,
}

/// Verifies claims with one low-temperature inference call per claim.
pub struct LlmVerifier {
    llm: Arc<dyn LlmProvider>,
    temperature: f32,
    call_timeout: Duration,
}

impl LlmVerifier {
    /// Create a model-backed verifier
    pub fn new(llm: Arc<dyn LlmProvider>) -> Self {
        Self {
            llm,
            temperature: DEFAULT_TEMPERATURE,
            call_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the sampling temperature for verification calls
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Set the deadline for a single verification call
    pub fn with_timeout(mut self, call_timeout: Duration) -> Self {
        self.call_timeout = call_timeout;
        self
    }

    fn build_request(&self, claim: &Claim, sources: &[String]) -> GenerationRequest {
        let mut prompt = format!("Claim: {}", claim.text);
        if !sources.is_empty() {
            prompt.push_str("\n\nSupporting context:\n");
            prompt.push_str(&sources.join("\n"));
        }
        GenerationRequest::new(VERIFICATION_SYSTEM, prompt, self.temperature)
    }

    fn parse_verdict(response: &str) -> Result<Verdict, VerifierError> {
        let json_str = extract_json(response).ok_or_else(|| {
            VerifierError::InvalidFormat("no JSON payload in response".to_string())
        })?;

        let payload: VerdictPayload = serde_json::from_str(&json_str)
            .map_err(|e| VerifierError::InvalidFormat(format!("JSON parse error: {}", e)))?;

        let status = FactualStatus::parse(&payload.factual_status).ok_or_else(|| {
            VerifierError::InvalidFormat(format!("unknown status '{}'", payload.factual_status))
        })?;

        Ok(Verdict::new(status, payload.confidence_score, payload.explanation))
    }
}

#[async_trait]
impl VerificationStrategy for LlmVerifier {
    async fn verify(&self, claim: &Claim, sources: &[String]) -> Result<Verdict, VerifierError> {
        let request = self.build_request(claim, sources);

        let response = timeout(self.call_timeout, self.llm.generate(&request))
            .await
            .map_err(|_| VerifierError::Timeout)?
            .map_err(|e| VerifierError::Llm(e.to_string()))?;

        debug!(claim_id = %claim.id, response_len = response.len(), "received verdict response");
        Self::parse_verdict(&response)
    }
}
