//! Claimlens Knowledge Lookup
//!
//! Queries Wikipedia for an article matching a claim's text and assembles
//! the claim's source strings: the article URL first, then a truncated,
//! labelled summary excerpt. Every lookup error is swallowed into an empty
//! source list; a claim never fails verification because the knowledge base
//! was unreachable.

#![warn(missing_docs)]

mod sources;
mod statics;
mod wikipedia;

pub use sources::{collect_sources, SUMMARY_EXCERPT_CHARS, SUMMARY_LABEL};
pub use statics::StaticKnowledgeSource;
pub use wikipedia::WikipediaSource;
