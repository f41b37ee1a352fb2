//! Pipeline orchestration and report aggregation

use claimlens_domain::traits::KnowledgeSource;
use claimlens_domain::{Claim, FactCheckReport};
use claimlens_extractor::ClaimExtractor;
use claimlens_knowledge::collect_sources;
use claimlens_transcript::TranscriptAcquirer;
use claimlens_verifier::Verifier;
use std::sync::Arc;
use std::time::{Instant, SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// One fact-checking pipeline with explicitly injected collaborators.
pub struct Pipeline {
    acquirer: TranscriptAcquirer,
    extractor: ClaimExtractor,
    knowledge: Option<Arc<dyn KnowledgeSource>>,
    verifier: Arc<Verifier>,
}

impl Pipeline {
    /// Assemble a pipeline from its stages
    pub fn new(
        acquirer: TranscriptAcquirer,
        extractor: ClaimExtractor,
        knowledge: Option<Arc<dyn KnowledgeSource>>,
        verifier: Verifier,
    ) -> Self {
        Self {
            acquirer,
            extractor,
            knowledge,
            verifier: Arc::new(verifier),
        }
    }

    /// Run one fact-check. Always produces a report.
    ///
    /// Claims are looked up and verified concurrently; each in-flight claim
    /// is owned exclusively by its task until the join barrier, and the
    /// report lists claims in extraction order.
    pub async fn check(&self, video_id: &str) -> FactCheckReport {
        let started = Instant::now();
        info!(video_id, "starting fact-check");

        let transcript = self.acquirer.acquire(video_id).await;
        let claims = self.extractor.extract(&transcript).await;
        info!(segments = transcript.len(), claims = claims.len(), "claims extracted");

        let verified = self.verify_all(claims).await;

        let report = FactCheckReport::new(
            video_id,
            transcript.metadata.title.clone(),
            transcript.metadata.channel.clone(),
            transcript.len(),
            verified,
            started.elapsed().as_millis() as u64,
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_secs(),
        );

        info!(
            report_id = %report.id,
            total = report.counts.total_claims,
            true_claims = report.counts.true_claims,
            false_claims = report.counts.false_claims,
            partial = report.counts.partial_claims,
            unverified = report.counts.unverified_claims,
            elapsed_ms = report.processing_time_ms,
            "fact-check complete"
        );
        report
    }

    // Fan out one task per claim, then join. No shared mutable state: each
    // task owns its claim and returns it with its extraction index so the
    // original order can be restored.
    async fn verify_all(&self, claims: Vec<Claim>) -> Vec<Claim> {
        let mut handles = Vec::with_capacity(claims.len());

        for (idx, mut claim) in claims.into_iter().enumerate() {
            let knowledge = self.knowledge.clone();
            let verifier = Arc::clone(&self.verifier);

            handles.push(tokio::spawn(async move {
                let sources = match &knowledge {
                    Some(source) => collect_sources(source.as_ref(), &claim.text).await,
                    None => Vec::new(),
                };
                verifier.verify(&mut claim, sources).await;
                (idx, claim)
            }));
        }

        let mut verified = Vec::with_capacity(handles.len());
        for handle in handles {
            match handle.await {
                Ok(pair) => verified.push(pair),
                Err(e) => warn!(error = %e, "verification task failed"),
            }
        }

        verified.sort_by_key(|(idx, _)| *idx);
        verified.into_iter().map(|(_, claim)| claim).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use claimlens_domain::traits::ArticleSummary;
    use claimlens_domain::{FactualStatus, TranscriptSegment, VideoMetadata};
    use claimlens_knowledge::StaticKnowledgeSource;
    use claimlens_llm::MockProvider;
    use claimlens_transcript::StaticTranscriptSource;
    use claimlens_verifier::{LlmVerifier, NO_SOURCES_SENTINEL};

    const VIDEO_ID: &str = "dQw4w9WgXcQ";

    fn offline_pipeline(source: StaticTranscriptSource) -> Pipeline {
        Pipeline::new(
            TranscriptAcquirer::new(Arc::new(source)),
            ClaimExtractor::new(None),
            None,
            Verifier::new(None),
        )
    }

    fn transcript_source(texts: &[&str]) -> StaticTranscriptSource {
        let segments = texts
            .iter()
            .enumerate()
            .map(|(i, t)| TranscriptSegment::new(*t, i as f64 * 4.0))
            .collect();
        StaticTranscriptSource::with_transcript(
            VideoMetadata {
                title: "Test Video".to_string(),
                channel: "Test Channel".to_string(),
            },
            segments,
        )
    }

    #[tokio::test]
    async fn test_acquisition_failure_still_produces_demo_report() {
        let pipeline = offline_pipeline(StaticTranscriptSource::failing());

        let report = pipeline.check(VIDEO_ID).await;
        assert_eq!(report.transcript_length, 2);
        assert!(!report.claims.is_empty());
        assert_eq!(report.counts.total_claims, report.claims.len());
    }

    #[tokio::test]
    async fn test_demo_fallback_claims_get_static_verdicts() {
        // Both demo segments are in the static table, so a fully offline
        // run still yields substantive verdicts
        let pipeline = offline_pipeline(StaticTranscriptSource::failing());

        let report = pipeline.check(VIDEO_ID).await;
        assert_eq!(report.counts.true_claims, 2);
        assert!(report.claims.iter().all(|c| c.is_verified()));
    }

    #[tokio::test]
    async fn test_moon_landing_claim_offline() {
        let source =
            transcript_source(&["The moon landing in 1969 was a hoax staged by Hollywood"]);
        let pipeline = offline_pipeline(source);

        let report = pipeline.check(VIDEO_ID).await;
        assert_eq!(report.claims.len(), 1);

        let claim = &report.claims[0];
        assert_eq!(claim.status, FactualStatus::False);
        assert_eq!(claim.confidence, 0.95);
        assert_eq!(claim.sources, vec![NO_SOURCES_SENTINEL.to_string()]);
        assert_eq!(report.counts.false_claims, 1);
    }

    #[tokio::test]
    async fn test_unknown_claims_offline_are_unverified_with_sentinel() {
        let source = transcript_source(&["Quarks taste like strawberries", "Another odd one"]);
        let pipeline = offline_pipeline(source);

        let report = pipeline.check(VIDEO_ID).await;
        assert_eq!(report.counts.unverified_claims, 2);
        for claim in &report.claims {
            assert_eq!(claim.confidence, 0.1);
            assert_eq!(claim.sources, vec![NO_SOURCES_SENTINEL.to_string()]);
        }
    }

    #[tokio::test]
    async fn test_counts_match_claim_statuses() {
        let source = transcript_source(&[
            "The moon landing in 1969 was a hoax staged by Hollywood",
            "The Great Wall of China is visible from space with the naked eye",
            "Completely unknown statement",
        ]);
        let pipeline = offline_pipeline(source);

        let report = pipeline.check(VIDEO_ID).await;
        assert_eq!(report.counts.total_claims, 3);
        assert_eq!(report.counts.false_claims, 2);
        assert_eq!(report.counts.unverified_claims, 1);
        assert_eq!(report.counts.sum(), report.counts.total_claims);
    }

    #[tokio::test]
    async fn test_claims_keep_extraction_order() {
        let texts: Vec<String> = (0..12).map(|i| format!("Oddball claim number {}", i)).collect();
        let refs: Vec<&str> = texts.iter().map(|s| s.as_str()).collect();
        let pipeline = offline_pipeline(transcript_source(&refs));

        let report = pipeline.check(VIDEO_ID).await;
        let got: Vec<&str> = report.claims.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(got, refs);
    }

    #[tokio::test]
    async fn test_knowledge_sources_attached_to_claims() {
        let article = ArticleSummary {
            url: "https://en.wikipedia.org/wiki/Example".to_string(),
            summary: Some("An example is a thing characteristic of its kind.".to_string()),
        };
        let pipeline = Pipeline::new(
            TranscriptAcquirer::new(Arc::new(transcript_source(&["Some sourced claim"]))),
            ClaimExtractor::new(None),
            Some(Arc::new(StaticKnowledgeSource::with_article(article))),
            Verifier::new(None),
        );

        let report = pipeline.check(VIDEO_ID).await;
        let claim = &report.claims[0];
        assert_eq!(claim.sources.len(), 2);
        assert_eq!(claim.sources[0], "https://en.wikipedia.org/wiki/Example");
    }

    #[tokio::test]
    async fn test_knowledge_errors_do_not_break_claims() {
        let pipeline = Pipeline::new(
            TranscriptAcquirer::new(Arc::new(transcript_source(&["A claim"]))),
            ClaimExtractor::new(None),
            Some(Arc::new(StaticKnowledgeSource::failing())),
            Verifier::new(None),
        );

        let report = pipeline.check(VIDEO_ID).await;
        // Lookup error swallowed; fallback path then records the sentinel
        assert_eq!(report.claims[0].sources, vec![NO_SOURCES_SENTINEL.to_string()]);
    }

    #[tokio::test]
    async fn test_model_backed_run_end_to_end() {
        let mut provider = MockProvider::new("unused default");
        provider.respond_when(
            "Video transcript:",
            r#"[{"text": "The Nile is the longest river in Africa.", "timestamp": "3s", "context": "geography"}]"#,
        );
        provider.respond_when(
            "Claim: The Nile",
            r#"{"factual_status": "true", "confidence_score": 0.93, "explanation": "Standard geography."}"#,
        );
        let llm: Arc<dyn claimlens_domain::traits::LlmProvider> = Arc::new(provider);

        let pipeline = Pipeline::new(
            TranscriptAcquirer::new(Arc::new(transcript_source(&["talking about rivers"]))),
            ClaimExtractor::new(Some(llm.clone())),
            None,
            Verifier::new(Some(Arc::new(LlmVerifier::new(llm)))),
        );

        let report = pipeline.check(VIDEO_ID).await;
        assert_eq!(report.claims.len(), 1);
        assert_eq!(report.claims[0].status, FactualStatus::True);
        assert_eq!(report.claims[0].confidence, 0.93);
        assert_eq!(report.counts.true_claims, 1);
        assert_eq!(report.video_title, "Test Video");
    }

    #[tokio::test]
    async fn test_report_metadata_fields() {
        let pipeline = offline_pipeline(transcript_source(&["claim"]));
        let report = pipeline.check(VIDEO_ID).await;

        assert_eq!(report.video_id, VIDEO_ID);
        assert_eq!(report.video_title, "Test Video");
        assert_eq!(report.channel_name, "Test Channel");
        assert!(report.created_at > 1_600_000_000);
    }
}
