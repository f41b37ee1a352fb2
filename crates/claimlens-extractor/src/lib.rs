//! Claimlens Claim Extractor
//!
//! Turns a full transcript into a bounded list of candidate claims, each
//! created unverified. When a language model is configured, a single
//! inference call extracts up to ten verifiable claims as JSON; when the
//! model is missing, fails, or returns nothing parseable, every transcript
//! segment becomes its own claim.
//!
//! ```text
//! Transcript → prompt → LLM → lenient JSON parse → unverified Claims
//!                 └────────── any failure ──────→ per-segment Claims
//! ```

#![warn(missing_docs)]

mod error;
mod extractor;
mod parser;
mod prompt;

pub use error::ExtractorError;
pub use extractor::{format_offset, ClaimExtractor};
pub use parser::{parse_claims, ClaimCandidate};
pub use prompt::extraction_request;
