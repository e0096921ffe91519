use pn_news::Aggregator;
use pn_summarize::SummaryPipeline;

/// Handles the request handlers work through. Both are built from
/// injected providers, so tests run the whole app against fakes.
pub struct AppState {
    pub aggregator: Aggregator,
    pub pipeline: SummaryPipeline,
}
