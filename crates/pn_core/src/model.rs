use async_trait::async_trait;

use crate::types::{ArticleSummary, Prompt};
use crate::Result;

/// A summary generation backend. The pipeline tries a chain of these
/// strictly in order, handing each the identical prompt.
#[async_trait]
pub trait SummaryModel: Send + Sync {
    /// Returns the name of the model, used in failure diagnostics
    fn name(&self) -> &str;

    /// Generate the three-audience summary for one prompt.
    async fn generate(&self, prompt: &Prompt) -> Result<ArticleSummary>;
}
