//! Deterministic knowledge source for tests

use async_trait::async_trait;
use claimlens_domain::traits::{ArticleSummary, KnowledgeError, KnowledgeSource};

/// A canned knowledge source: a fixed article for every query, no article,
/// or a forced error.
pub struct StaticKnowledgeSource {
    outcome: Outcome,
}

enum Outcome {
    Article(ArticleSummary),
    NoMatch,
    Error,
}

impl StaticKnowledgeSource {
    /// Every query matches the given article
    pub fn with_article(article: ArticleSummary) -> Self {
        Self {
            outcome: Outcome::Article(article),
        }
    }

    /// No query ever matches
    pub fn empty() -> Self {
        Self {
            outcome: Outcome::NoMatch,
        }
    }

    /// Every query errors
    pub fn failing() -> Self {
        Self {
            outcome: Outcome::Error,
        }
    }
}

#[async_trait]
impl KnowledgeSource for StaticKnowledgeSource {
    async fn lookup(&self, _query: &str) -> Result<Option<ArticleSummary>, KnowledgeError> {
        match &self.outcome {
            Outcome::Article(article) => Ok(Some(article.clone())),
            Outcome::NoMatch => Ok(None),
            Outcome::Error => Err(KnowledgeError::Http("static source: forced error".to_string())),
        }
    }
}
