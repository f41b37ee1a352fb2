//! Claimlens Domain Layer
//!
//! Core types and trait seams for the fact-checking pipeline. This crate
//! defines the data that flows through the pipeline and the boundaries to
//! the three external collaborators (transcript provider, knowledge base,
//! language model). Infrastructure implementations live in other crates.
//!
//! ## Key Concepts
//!
//! - **Claim**: an atomic factual assertion extracted from transcript text,
//!   created unverified and assigned a verdict exactly once
//! - **Factual status**: the closed four-way verdict (true/false/partial/unverified)
//! - **Transcript**: ordered, timestamped segments plus video metadata
//! - **Report**: the aggregated fact-check result with per-status counts

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod claim;
pub mod report;
pub mod status;
pub mod traits;
pub mod transcript;

// Re-exports for convenience
pub use claim::{Claim, ClaimId, Verdict};
pub use report::{FactCheckReport, ReportId, StatusCounts};
pub use status::FactualStatus;
pub use transcript::{Transcript, TranscriptSegment, VideoMetadata};
