//! Source-string assembly policy

use claimlens_domain::traits::KnowledgeSource;
use tracing::debug;

/// Maximum characters of summary excerpt carried into a claim's sources
pub const SUMMARY_EXCERPT_CHARS: usize = 200;

/// Label prefixed to summary excerpts
pub const SUMMARY_LABEL: &str = "Wikipedia: ";

/// Look up a claim's text and assemble its ordered source strings.
///
/// Output order: article URL first (if an article matched), then the
/// labelled summary excerpt (if a summary was available). Any lookup error
/// is swallowed into an empty list; the claim proceeds without sources.
pub async fn collect_sources(source: &dyn KnowledgeSource, claim_text: &str) -> Vec<String> {
    let article = match source.lookup(claim_text).await {
        Ok(Some(article)) => article,
        Ok(None) => return Vec::new(),
        Err(e) => {
            debug!(claim = claim_text, error = %e, "knowledge lookup failed, continuing without sources");
            return Vec::new();
        }
    };

    let mut sources = vec![article.url];
    if let Some(summary) = article.summary {
        let excerpt: String = summary.chars().take(SUMMARY_EXCERPT_CHARS).collect();
        sources.push(format!("{}{}", SUMMARY_LABEL, excerpt));
    }
    sources
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statics::StaticKnowledgeSource;
    use claimlens_domain::traits::ArticleSummary;

    #[tokio::test]
    async fn test_url_then_excerpt() {
        let source = StaticKnowledgeSource::with_article(ArticleSummary {
            url: "https://en.wikipedia.org/wiki/Moon_landing".to_string(),
            summary: Some("A Moon landing is the arrival of a spacecraft on the Moon.".to_string()),
        });

        let sources = collect_sources(&source, "moon landing").await;
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0], "https://en.wikipedia.org/wiki/Moon_landing");
        assert!(sources[1].starts_with(SUMMARY_LABEL));
    }

    #[tokio::test]
    async fn test_url_only_when_no_summary() {
        let source = StaticKnowledgeSource::with_article(ArticleSummary {
            url: "https://en.wikipedia.org/wiki/Example".to_string(),
            summary: None,
        });

        let sources = collect_sources(&source, "example").await;
        assert_eq!(sources, vec!["https://en.wikipedia.org/wiki/Example".to_string()]);
    }

    #[tokio::test]
    async fn test_excerpt_is_truncated() {
        let long_summary = "x".repeat(500);
        let source = StaticKnowledgeSource::with_article(ArticleSummary {
            url: "https://en.wikipedia.org/wiki/X".to_string(),
            summary: Some(long_summary),
        });

        let sources = collect_sources(&source, "x").await;
        assert_eq!(sources[1].len(), SUMMARY_LABEL.len() + SUMMARY_EXCERPT_CHARS);
    }

    #[tokio::test]
    async fn test_no_match_yields_empty_list() {
        let source = StaticKnowledgeSource::empty();
        assert!(collect_sources(&source, "nothing matches this").await.is_empty());
    }

    #[tokio::test]
    async fn test_error_is_swallowed_to_empty_list() {
        let source = StaticKnowledgeSource::failing();
        assert!(collect_sources(&source, "any claim").await.is_empty());
    }
}
