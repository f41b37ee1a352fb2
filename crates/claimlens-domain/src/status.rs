//! Factual status - the four-way verdict assigned to a claim

use serde::{Deserialize, Serialize};

/// Verdict category for a claim.
///
/// A closed enumeration: every claim ends up in exactly one of these four
/// states, and the report counts are grouped by them. Unverified is both
/// the initial state and a legitimate final verdict (when no source could
/// confirm or refute the claim).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FactualStatus {
    /// The claim is supported by available sources
    True,

    /// The claim is contradicted by available sources
    False,

    /// The claim is partially accurate or missing context
    Partial,

    /// No verdict could be reached
    Unverified,
}

impl FactualStatus {
    /// Get the status name as a string
    pub fn as_str(&self) -> &'static str {
        match self {
            FactualStatus::True => "true",
            FactualStatus::False => "false",
            FactualStatus::Partial => "partial",
            FactualStatus::Unverified => "unverified",
        }
    }

    /// Parse a status from a string (case-insensitive)
    ///
    /// Accepts a few aliases that language models tend to produce
    /// ("mostly true", "partially true", "unknown").
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "true" | "accurate" | "correct" => Some(FactualStatus::True),
            "false" | "inaccurate" | "incorrect" => Some(FactualStatus::False),
            "partial" | "partially true" | "partially_true" | "mostly true" | "mixed" => {
                Some(FactualStatus::Partial)
            }
            "unverified" | "unknown" | "unverifiable" => Some(FactualStatus::Unverified),
            _ => None,
        }
    }
}

impl std::str::FromStr for FactualStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("Invalid factual status: {}", s))
    }
}

impl std::fmt::Display for FactualStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
