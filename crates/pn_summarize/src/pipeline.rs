use std::sync::Arc;
use std::time::Duration;

use pn_core::{ArticleSummary, Error, Result, SummaryModel, SummaryRequest};
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::overrides::OverrideTable;
use crate::prompt::build_prompt;

const DEFAULT_ATTEMPT_TIMEOUT: Duration = Duration::from_secs(30);

/// Produces the three-audience summary for one article: curated override
/// first, then each model in the chain strictly in order, each attempt
/// under its own deadline. No retries beyond the chain itself.
pub struct SummaryPipeline {
    overrides: OverrideTable,
    chain: Vec<Arc<dyn SummaryModel>>,
    attempt_timeout: Duration,
}

impl SummaryPipeline {
    pub fn new(overrides: OverrideTable, chain: Vec<Arc<dyn SummaryModel>>) -> Self {
        Self {
            overrides,
            chain,
            attempt_timeout: DEFAULT_ATTEMPT_TIMEOUT,
        }
    }

    pub fn with_attempt_timeout(mut self, attempt_timeout: Duration) -> Self {
        self.attempt_timeout = attempt_timeout;
        self
    }

    pub async fn summarize(&self, req: &SummaryRequest) -> Result<ArticleSummary> {
        if let Some(curated) = self.overrides.get(&req.title) {
            debug!(title = %req.title, "serving curated summary");
            return Ok(curated.clone());
        }

        let prompt = build_prompt(req);
        let mut failures = Vec::with_capacity(self.chain.len());

        for model in &self.chain {
            let attempt = timeout(self.attempt_timeout, model.generate(&prompt)).await;
            let outcome = match attempt {
                Ok(Ok(summary)) => summary.validate().map(|_| summary),
                Ok(Err(err)) => Err(err),
                Err(_) => Err(Error::Provider(format!(
                    "timed out after {:?}",
                    self.attempt_timeout
                ))),
            };

            match outcome {
                Ok(summary) => {
                    debug!(model = model.name(), title = %req.title, "summary generated");
                    return Ok(summary);
                }
                Err(err) => {
                    warn!(model = model.name(), title = %req.title, %err, "summary attempt failed");
                    failures.push(format!("{}: {}", model.name(), err));
                }
            }
        }

        Err(Error::AllProvidersFailed(failures.join("; ")))
    }
}
