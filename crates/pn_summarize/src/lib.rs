pub mod models;
pub mod overrides;
pub mod pipeline;
pub mod prompt;

pub use models::{build_chain, LlmConfig};
pub use overrides::OverrideTable;
pub use pipeline::SummaryPipeline;
pub use prompt::build_prompt;

pub mod prelude {
    pub use crate::{build_chain, build_prompt, LlmConfig, OverrideTable, SummaryPipeline};
    pub use pn_core::{ArticleSummary, Prompt, Result, SummaryModel, SummaryRequest};
}
