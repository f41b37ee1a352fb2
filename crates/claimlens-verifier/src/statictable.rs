//! Static-table verification strategy

use crate::error::VerifierError;
use crate::strategy::VerificationStrategy;
use async_trait::async_trait;
use claimlens_domain::{Claim, FactualStatus, Verdict};

/// Default verdict explanation when the claim is not in the table
pub const UNVERIFIED_EXPLANATION: &str =
    "Unable to verify this claim with available sources.";

/// Confidence assigned to claims the table does not know
pub const UNVERIFIED_CONFIDENCE: f64 = 0.1;

// Known example claims and their verdicts. Matched on exact text.
const KNOWN_CLAIMS: &[(&str, FactualStatus, f64, &str)] = &[
    (
        "The moon landing in 1969 was a hoax staged by Hollywood",
        FactualStatus::False,
        0.95,
        "The Apollo 11 moon landing is among the most thoroughly documented events in history, \
         independently confirmed by tracking stations worldwide and by retroreflectors still in \
         use on the lunar surface.",
    ),
    (
        "Global temperatures have risen by approximately 1.1 degrees Celsius since pre-industrial times.",
        FactualStatus::True,
        0.9,
        "IPCC assessment reports place observed warming at roughly 1.1 degrees Celsius above the \
         1850-1900 baseline.",
    ),
    (
        "Scientists agree that human activity is the primary driver of recent climate change.",
        FactualStatus::True,
        0.92,
        "Multiple surveys of the peer-reviewed literature find overwhelming scientific consensus \
         that recent warming is human-caused.",
    ),
    (
        "The Great Wall of China is visible from space with the naked eye",
        FactualStatus::False,
        0.9,
        "Astronauts have repeatedly reported that the Great Wall is not distinguishable from low \
         Earth orbit without aid.",
    ),
];

/// Deterministic fallback verifier backed by a fixed claim table.
///
/// Claims found in the table (exact text match) get their recorded verdict;
/// everything else gets the unverified default. This strategy never errors.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticVerifier;

impl StaticVerifier {
    /// Create the static verifier
    pub fn new() -> Self {
        Self
    }

    /// Produce the verdict for a claim text
    pub fn lookup(&self, claim_text: &str) -> Verdict {
        for (text, status, confidence, explanation) in KNOWN_CLAIMS {
            if *text == claim_text.trim() {
                return Verdict::new(*status, *confidence, *explanation);
            }
        }
        Verdict::new(
            FactualStatus::Unverified,
            UNVERIFIED_CONFIDENCE,
            UNVERIFIED_EXPLANATION,
        )
    }
}

#[async_trait]
impl VerificationStrategy for StaticVerifier {
    async fn verify(&self, claim: &Claim, _sources: &[String]) -> Result<Verdict, VerifierError> {
        Ok(self.lookup(&claim.text))
    }
}
