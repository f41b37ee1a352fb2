//! Degrade-to-demo acquisition policy

use claimlens_domain::traits::TranscriptSource;
use claimlens_domain::{Transcript, TranscriptSegment, VideoMetadata};
use std::sync::Arc;
use tracing::{info, warn};

/// The fixed transcript substituted when acquisition fails.
///
/// Two segments, placeholder title and channel. Keeping the demo stable
/// lets the rest of the pipeline (and its tests) rely on a known shape.
pub fn demo_transcript() -> Transcript {
    Transcript::new(
        VideoMetadata {
            title: "Demo Video: Climate Facts".to_string(),
            channel: "Demo Channel".to_string(),
        },
        vec![
            TranscriptSegment::new(
                "Global temperatures have risen by approximately 1.1 degrees Celsius \
                 since pre-industrial times.",
                0.0,
            ),
            TranscriptSegment::new(
                "Scientists agree that human activity is the primary driver of recent \
                 climate change.",
                8.0,
            ),
        ],
    )
}

/// Wraps a `TranscriptSource` with the never-fail acquisition policy.
///
/// A transcript fetch failure of any kind yields the demo transcript; a
/// metadata failure alone yields placeholder title/channel with the real
/// segments. No retries, no errors surfaced to the caller.
pub struct TranscriptAcquirer {
    source: Arc<dyn TranscriptSource>,
}

impl TranscriptAcquirer {
    /// Create an acquirer over the given source
    pub fn new(source: Arc<dyn TranscriptSource>) -> Self {
        Self { source }
    }

    /// Acquire the transcript for a video. Infallible by policy.
    pub async fn acquire(&self, video_id: &str) -> Transcript {
        let segments = match self.source.fetch_transcript(video_id).await {
            Ok(segments) => segments,
            Err(e) => {
                warn!(video_id, error = %e, "transcript acquisition failed, using demo transcript");
                return demo_transcript();
            }
        };

        let metadata = match self.source.fetch_metadata(video_id).await {
            Ok(metadata) => metadata,
            Err(e) => {
                warn!(video_id, error = %e, "metadata lookup failed, using placeholders");
                VideoMetadata::default()
            }
        };

        info!(video_id, segments = segments.len(), title = %metadata.title, "transcript acquired");
        Transcript::new(metadata, segments)
    }
}
