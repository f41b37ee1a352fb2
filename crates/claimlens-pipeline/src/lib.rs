//! Claimlens Pipeline
//!
//! Orchestrates one fact-check: acquire the transcript, extract candidate
//! claims, look up and verify each claim concurrently, and aggregate the
//! final report. Collaborators are injected at construction; there are no
//! ambient singletons.
//!
//! ```text
//! video id → Acquirer → Extractor → per claim: Lookup → Verifier → Report
//! ```
//!
//! The pipeline is best-effort throughout: every external failure degrades
//! to a deterministic fallback, and `check` always produces a report.

#![warn(missing_docs)]

mod config;
mod pipeline;

pub use config::{KnowledgeConfig, LlmConfig, PipelineConfig};
pub use pipeline::Pipeline;
