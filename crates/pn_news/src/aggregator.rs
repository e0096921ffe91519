use std::collections::HashSet;
use std::sync::Arc;

use futures::future::join_all;
use pn_core::{Article, NewsProvider, Result};
use tracing::{debug, info, warn};

use crate::planner;

/// Executes the fan-out plan for one interest list against a news
/// provider and normalizes the combined result.
#[derive(Clone)]
pub struct Aggregator {
    provider: Arc<dyn NewsProvider>,
}

impl Aggregator {
    pub fn new(provider: Arc<dyn NewsProvider>) -> Self {
        Self { provider }
    }

    /// Fetch articles for an ordered interest list. Branch failures are
    /// logged and degrade to an empty branch; the aggregate never fails
    /// because one query did.
    pub async fn fetch(&self, tags: &[String]) -> Result<Vec<Article>> {
        let entries = planner::plan(tags);
        if entries.is_empty() {
            return Ok(Vec::new());
        }

        if !self.provider.is_configured() {
            info!(
                provider = self.provider.name(),
                "news provider not configured, returning empty result"
            );
            return Ok(Vec::new());
        }

        debug!(?entries, "executing fan-out plan");

        let branches = entries.iter().map(|entry| {
            let provider = Arc::clone(&self.provider);
            async move {
                match provider.search(&entry.query, entry.limit).await {
                    Ok(articles) => articles,
                    Err(err) => {
                        warn!(query = %entry.query, %err, "news branch failed, dropping it");
                        Vec::new()
                    }
                }
            }
        });

        let results = join_all(branches).await;
        Ok(dedup_by_title(results.into_iter().flatten()))
    }
}

/// Collapse articles sharing an exact title; the first occurrence wins.
fn dedup_by_title(articles: impl Iterator<Item = Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .filter(|article| seen.insert(article.title.clone()))
        .collect()
}
