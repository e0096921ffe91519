use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

/// A news search backend. Held as `Arc<dyn NewsProvider>` so tests can
/// substitute fakes without network access.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Returns the name of the news source
    fn name(&self) -> &str;

    /// Whether the provider has a usable credential. An unconfigured
    /// provider is a deliberate empty-result fast path, not an error.
    fn is_configured(&self) -> bool {
        true
    }

    /// Run one search query, returning at most `limit` articles.
    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Article>>;
}
