//! Fact-check report - the aggregated pipeline output

use crate::claim::Claim;
use crate::status::FactualStatus;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a fact-check report, backed by UUIDv7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReportId(Uuid);

impl ReportId {
    /// Generate a fresh ReportId
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }
}

impl Default for ReportId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ReportId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Per-status claim counts.
///
/// Invariant: `total_claims` equals the number of claims it was tallied
/// over, and the four per-status counts sum to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    /// Total number of claims in the report
    pub total_claims: usize,

    /// Claims with status true
    pub true_claims: usize,

    /// Claims with status false
    pub false_claims: usize,

    /// Claims with status partial
    pub partial_claims: usize,

    /// Claims with status unverified
    pub unverified_claims: usize,
}

impl StatusCounts {
    /// Tally counts by grouping claims on their factual status
    pub fn tally(claims: &[Claim]) -> Self {
        let mut counts = Self {
            total_claims: claims.len(),
            ..Self::default()
        };
        for claim in claims {
            match claim.status {
                FactualStatus::True => counts.true_claims += 1,
                FactualStatus::False => counts.false_claims += 1,
                FactualStatus::Partial => counts.partial_claims += 1,
                FactualStatus::Unverified => counts.unverified_claims += 1,
            }
        }
        counts
    }

    /// Sum of the four per-status counts
    pub fn sum(&self) -> usize {
        self.true_claims + self.false_claims + self.partial_claims + self.unverified_claims
    }
}

/// The final output of one pipeline invocation.
///
/// Created once by the aggregator after every claim has its verdict;
/// immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactCheckReport {
    /// Report identifier
    pub id: ReportId,

    /// Video identifier the report was produced for
    pub video_id: String,

    /// Video title (may be a placeholder on metadata failure)
    pub video_title: String,

    /// Channel name (may be a placeholder on metadata failure)
    pub channel_name: String,

    /// Number of transcript segments the claims were extracted from
    pub transcript_length: usize,

    /// All verified claims, in extraction order
    pub claims: Vec<Claim>,

    /// Wall-clock processing time for the whole pipeline run
    pub processing_time_ms: u64,

    /// Unix timestamp (seconds) when the report was created
    pub created_at: u64,

    /// Per-status claim counts
    #[serde(flatten)]
    pub counts: StatusCounts,
}

impl FactCheckReport {
    /// Assemble a report from verified claims and acquisition metadata.
    ///
    /// Counts are tallied here so they can never drift from the claim list.
    pub fn new(
        video_id: impl Into<String>,
        video_title: impl Into<String>,
        channel_name: impl Into<String>,
        transcript_length: usize,
        claims: Vec<Claim>,
        processing_time_ms: u64,
        created_at: u64,
    ) -> Self {
        let counts = StatusCounts::tally(&claims);
        Self {
            id: ReportId::new(),
            video_id: video_id.into(),
            video_title: video_title.into(),
            channel_name: channel_name.into(),
            transcript_length,
            claims,
            processing_time_ms,
            created_at,
            counts,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::claim::Verdict;

    fn verified(status: FactualStatus) -> Claim {
        let mut claim = Claim::unverified("example", "0s", "");
        claim.apply_verdict(Verdict::new(status, 0.8, "test"));
        claim
    }

    #[test]
    fn test_tally_groups_by_status() {
        let claims = vec![
            verified(FactualStatus::True),
            verified(FactualStatus::True),
            verified(FactualStatus::False),
            verified(FactualStatus::Partial),
            verified(FactualStatus::Unverified),
        ];

        let counts = StatusCounts::tally(&claims);
        assert_eq!(counts.total_claims, 5);
        assert_eq!(counts.true_claims, 2);
        assert_eq!(counts.false_claims, 1);
        assert_eq!(counts.partial_claims, 1);
        assert_eq!(counts.unverified_claims, 1);
        assert_eq!(counts.sum(), counts.total_claims);
    }

    #[test]
    fn test_tally_empty() {
        let counts = StatusCounts::tally(&[]);
        assert_eq!(counts.total_claims, 0);
        assert_eq!(counts.sum(), 0);
    }

    #[test]
    fn test_report_counts_match_claims() {
        let claims = vec![verified(FactualStatus::True), verified(FactualStatus::False)];
        let report = FactCheckReport::new("abc123", "Title", "Channel", 2, claims, 1200, 1_700_000_000);

        assert_eq!(report.counts.total_claims, report.claims.len());
        assert_eq!(report.counts.sum(), report.claims.len());
        assert_eq!(report.counts.true_claims, 1);
        assert_eq!(report.counts.false_claims, 1);
    }

    #[test]
    fn test_report_serializes_with_flattened_counts() {
        let report = FactCheckReport::new("abc123", "Title", "Channel", 0, vec![], 10, 1_700_000_000);
        let json = serde_json::to_value(&report).unwrap();

        // counts are flattened alongside the other report fields
        assert_eq!(json["total_claims"], 0);
        assert_eq!(json["video_id"], "abc123");
        assert!(json.get("counts").is_none());
    }
}
