//! Claimlens Transcript Acquirer
//!
//! Turns a video URL or identifier into an ordered transcript plus basic
//! metadata. Acquisition is best-effort by design: any failure (bad id,
//! network error, no captions) degrades to a fixed demo transcript instead
//! of surfacing an error, with no retries.
//!
//! # Components
//!
//! - `extract_video_id`: pattern match against known URL shapes
//! - `YoutubeTranscriptSource`: timedtext captions + oEmbed metadata
//! - `TranscriptAcquirer`: the degrade-to-demo policy wrapper
//! - `StaticTranscriptSource`: deterministic test double

#![warn(missing_docs)]

mod acquirer;
mod statics;
mod url;
mod youtube;

pub use acquirer::{demo_transcript, TranscriptAcquirer};
pub use statics::StaticTranscriptSource;
pub use url::extract_video_id;
pub use youtube::YoutubeTranscriptSource;
