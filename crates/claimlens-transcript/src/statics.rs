//! Deterministic transcript source for tests

use async_trait::async_trait;
use claimlens_domain::traits::{TranscriptError, TranscriptSource};
use claimlens_domain::{TranscriptSegment, VideoMetadata};

/// A canned transcript source: either returns a fixed transcript or fails
/// every call. Useful for exercising the acquisition fallback without a
/// network.
pub struct StaticTranscriptSource {
    transcript: Option<(VideoMetadata, Vec<TranscriptSegment>)>,
    metadata_fails: bool,
}

impl StaticTranscriptSource {
    /// A source that returns the given transcript
    pub fn with_transcript(metadata: VideoMetadata, segments: Vec<TranscriptSegment>) -> Self {
        Self {
            transcript: Some((metadata, segments)),
            metadata_fails: false,
        }
    }

    /// A source where every call fails
    pub fn failing() -> Self {
        Self {
            transcript: None,
            metadata_fails: true,
        }
    }

    /// Keep the transcript but make metadata lookups fail
    pub fn failing_metadata(mut self) -> Self {
        self.metadata_fails = true;
        self
    }
}

#[async_trait]
impl TranscriptSource for StaticTranscriptSource {
    async fn fetch_transcript(
        &self,
        _video_id: &str,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        match &self.transcript {
            Some((_, segments)) => Ok(segments.clone()),
            None => Err(TranscriptError::NoCaptions),
        }
    }

    async fn fetch_metadata(&self, _video_id: &str) -> Result<VideoMetadata, TranscriptError> {
        if self.metadata_fails {
            return Err(TranscriptError::Http("static source: metadata disabled".to_string()));
        }
        match &self.transcript {
            Some((metadata, _)) => Ok(metadata.clone()),
            None => Err(TranscriptError::NoCaptions),
        }
    }
}
