//! Transcript types - timestamped spoken text plus video metadata

use serde::{Deserialize, Serialize};

/// A single timestamped fragment of spoken text.
///
/// Segments are immutable and ordered by start offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TranscriptSegment {
    /// Transcribed text
    pub text: String,

    /// Start offset in seconds from the beginning of the video
    pub start: f64,
}

impl TranscriptSegment {
    /// Create a new segment
    pub fn new(text: impl Into<String>, start: f64) -> Self {
        Self {
            text: text.into(),
            start,
        }
    }
}

/// Basic video metadata from the transcript provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VideoMetadata {
    /// Video title
    pub title: String,

    /// Channel or uploader name
    pub channel: String,
}

impl Default for VideoMetadata {
    fn default() -> Self {
        Self {
            title: "Unknown Title".to_string(),
            channel: "Unknown Channel".to_string(),
        }
    }
}

/// An acquired transcript: metadata plus ordered segments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transcript {
    /// Title and channel for the video
    pub metadata: VideoMetadata,

    /// Segments ordered by start offset
    pub segments: Vec<TranscriptSegment>,
}

impl Transcript {
    /// Create a transcript from metadata and segments
    pub fn new(metadata: VideoMetadata, segments: Vec<TranscriptSegment>) -> Self {
        Self { metadata, segments }
    }

    /// Full transcript text, segments joined with spaces
    pub fn full_text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Number of segments
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether the transcript has no segments
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_text_joins_segments() {
        let transcript = Transcript::new(
            VideoMetadata::default(),
            vec![
                TranscriptSegment::new("Hello and welcome.", 0.0),
                TranscriptSegment::new("Today we talk about glaciers.", 4.2),
            ],
        );
        assert_eq!(
            transcript.full_text(),
            "Hello and welcome. Today we talk about glaciers."
        );
        assert_eq!(transcript.len(), 2);
    }

    #[test]
    fn test_empty_transcript() {
        let transcript = Transcript::new(VideoMetadata::default(), vec![]);
        assert!(transcript.is_empty());
        assert_eq!(transcript.full_text(), "");
    }

    #[test]
    fn test_default_metadata_placeholders() {
        let meta = VideoMetadata::default();
        assert_eq!(meta.title, "Unknown Title");
        assert_eq!(meta.channel, "Unknown Channel");
    }
}
