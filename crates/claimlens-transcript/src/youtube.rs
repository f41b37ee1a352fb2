//! YouTube transcript source - timedtext captions and oEmbed metadata

use async_trait::async_trait;
use claimlens_domain::traits::{TranscriptError, TranscriptSource};
use claimlens_domain::{TranscriptSegment, VideoMetadata};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

const TIMEDTEXT_URL: &str = "https://www.youtube.com/api/timedtext";
const OEMBED_URL: &str = "https://www.youtube.com/oembed";
const REQUEST_TIMEOUT_SECS: u64 = 15;

/// Fetches captions from YouTube's timedtext endpoint (json3 format) and
/// metadata from the oEmbed endpoint.
pub struct YoutubeTranscriptSource {
    client: reqwest::Client,
    language: String,
}

// json3 caption payload: a list of events, each carrying a start offset in
// milliseconds and zero or more text segments.
#[derive(Deserialize)]
struct TimedTextPayload {
    #[serde(default)]
    events: Vec<TimedTextEvent>,
}

#[derive(Deserialize)]
struct TimedTextEvent {
    #[serde(rename = "tStartMs", default)]
    start_ms: u64,
    #[serde(default)]
    segs: Vec<TimedTextSeg>,
}

#[derive(Deserialize)]
struct TimedTextSeg {
    #[serde(default)]
    utf8: String,
}

#[derive(Deserialize)]
struct OembedPayload {
    title: String,
    author_name: String,
}

impl YoutubeTranscriptSource {
    /// Create a source fetching English captions
    pub fn new() -> Result<Self, TranscriptError> {
        Self::with_language("en")
    }

    /// Create a source fetching captions in the given language
    pub fn with_language(language: impl Into<String>) -> Result<Self, TranscriptError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| TranscriptError::Http(format!("client build failed: {}", e)))?;

        Ok(Self {
            client,
            language: language.into(),
        })
    }

    fn validate_id(video_id: &str) -> Result<(), TranscriptError> {
        let valid = video_id.len() == 11
            && video_id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if valid {
            Ok(())
        } else {
            Err(TranscriptError::InvalidVideoId(video_id.to_string()))
        }
    }
}

#[async_trait]
impl TranscriptSource for YoutubeTranscriptSource {
    async fn fetch_transcript(
        &self,
        video_id: &str,
    ) -> Result<Vec<TranscriptSegment>, TranscriptError> {
        Self::validate_id(video_id)?;

        let response = self
            .client
            .get(TIMEDTEXT_URL)
            .query(&[("v", video_id), ("lang", &self.language), ("fmt", "json3")])
            .send()
            .await
            .map_err(|e| TranscriptError::Http(format!("timedtext request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(TranscriptError::Http(format!(
                "timedtext returned HTTP {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TranscriptError::Http(format!("timedtext body read failed: {}", e)))?;

        // An empty body means the video has no captions in this language
        if body.trim().is_empty() {
            return Err(TranscriptError::NoCaptions);
        }

        let payload: TimedTextPayload = serde_json::from_str(&body)
            .map_err(|e| TranscriptError::Parse(format!("json3 decode failed: {}", e)))?;

        let mut segments = Vec::new();
        for event in payload.events {
            let text: String = event.segs.iter().map(|s| s.utf8.as_str()).collect();
            let text = text.trim().to_string();
            if text.is_empty() {
                continue;
            }
            segments.push(TranscriptSegment::new(text, event.start_ms as f64 / 1000.0));
        }

        if segments.is_empty() {
            return Err(TranscriptError::NoCaptions);
        }

        debug!(video_id, segments = segments.len(), "fetched transcript");
        Ok(segments)
    }

    async fn fetch_metadata(&self, video_id: &str) -> Result<VideoMetadata, TranscriptError> {
        Self::validate_id(video_id)?;

        let watch_url = format!("https://www.youtube.com/watch?v={}", video_id);
        let result = self
            .client
            .get(OEMBED_URL)
            .query(&[("url", watch_url.as_str()), ("format", "json")])
            .send()
            .await;

        // Metadata is decorative: soft-fail to the placeholder pair
        let payload: Option<OembedPayload> = match result {
            Ok(response) if response.status().is_success() => response.json().await.ok(),
            Ok(response) => {
                debug!(video_id, status = %response.status(), "oEmbed lookup failed");
                None
            }
            Err(e) => {
                debug!(video_id, error = %e, "oEmbed request failed");
                None
            }
        };

        Ok(payload
            .map(|p| VideoMetadata {
                title: p.title,
                channel: p.author_name,
            })
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_id_rejected_before_any_request() {
        let source = YoutubeTranscriptSource::new().unwrap();
        let result = source.fetch_transcript("nope").await;
        assert!(matches!(result, Err(TranscriptError::InvalidVideoId(_))));

        let result = source.fetch_metadata("").await;
        assert!(matches!(result, Err(TranscriptError::InvalidVideoId(_))));
    }

    #[test]
    fn test_json3_decoding() {
        let body = r#"{"events":[
            {"tStartMs":0,"segs":[{"utf8":"Hello "},{"utf8":"world."}]},
            {"tStartMs":2500,"segs":[{"utf8":"\n"}]},
            {"tStartMs":4000,"segs":[{"utf8":"Second line."}]}
        ]}"#;

        let payload: TimedTextPayload = serde_json::from_str(body).unwrap();
        assert_eq!(payload.events.len(), 3);
        assert_eq!(payload.events[2].start_ms, 4000);

        let text: String = payload.events[0].segs.iter().map(|s| s.utf8.as_str()).collect();
        assert_eq!(text, "Hello world.");
    }
}
