//! Claim module - the unit of work in the fact-checking pipeline

use crate::status::FactualStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a claim, backed by UUIDv7.
///
/// UUIDv7 keeps identifiers chronologically sortable, which preserves
/// extraction order when claims are verified out of order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(Uuid);

impl ClaimId {
    /// Generate a fresh ClaimId
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Parse a ClaimId from its string form
    pub fn parse(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| format!("Invalid claim id: {}", e))
    }
}

impl Default for ClaimId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The outcome of verifying a single claim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    /// Verdict category
    pub status: FactualStatus,

    /// Confidence in the verdict, always in [0.0, 1.0]
    pub confidence: f64,

    /// Human-readable justification
    pub explanation: String,
}

impl Verdict {
    /// Create a verdict, clamping confidence into [0.0, 1.0].
    ///
    /// Model output occasionally reports confidence as a percentage or a
    /// negative number; clamping keeps the report invariant intact without
    /// discarding the verdict.
    pub fn new(status: FactualStatus, confidence: f64, explanation: impl Into<String>) -> Self {
        Self {
            status,
            confidence: confidence.clamp(0.0, 1.0),
            explanation: explanation.into(),
        }
    }
}

/// A candidate factual assertion extracted from transcript text.
///
/// Claims are created unverified by the extractor and receive a verdict
/// exactly once from the verifier. A second verdict application is a no-op.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claim {
    /// Unique identifier
    pub id: ClaimId,

    /// The asserted statement, verbatim or near-verbatim from the transcript
    pub text: String,

    /// Approximate position in the video (e.g. "42s", "1:30")
    pub timestamp: String,

    /// Surrounding context from the transcript, may be empty
    pub context: String,

    /// Current verdict category
    pub status: FactualStatus,

    /// Verdict confidence in [0.0, 1.0]
    pub confidence: f64,

    /// Verdict justification
    pub explanation: String,

    /// Supporting source strings, ordered (article URL first)
    pub sources: Vec<String>,

    // Process-local guard for one-shot verdict application; an unverified
    // *verdict* is distinct from a claim that was never verified at all.
    #[serde(skip, default)]
    verdict_applied: bool,
}

impl Claim {
    /// Explanation text carried by claims awaiting verification
    pub const PENDING_EXPLANATION: &'static str = "Pending";

    /// Create a new claim in the unverified initial state
    pub fn unverified(
        text: impl Into<String>,
        timestamp: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self {
            id: ClaimId::new(),
            text: text.into(),
            timestamp: timestamp.into(),
            context: context.into(),
            status: FactualStatus::Unverified,
            confidence: 0.0,
            explanation: Self::PENDING_EXPLANATION.to_string(),
            sources: Vec::new(),
            verdict_applied: false,
        }
    }

    /// Apply a verdict to this claim.
    ///
    /// Returns `false` and leaves the claim untouched if a verdict was
    /// already applied.
    pub fn apply_verdict(&mut self, verdict: Verdict) -> bool {
        if self.verdict_applied {
            return false;
        }
        self.status = verdict.status;
        self.confidence = verdict.confidence;
        self.explanation = verdict.explanation;
        self.verdict_applied = true;
        true
    }

    /// Whether this claim has received its verdict
    pub fn is_verified(&self) -> bool {
        self.verdict_applied
    }
}
