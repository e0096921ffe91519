use std::sync::Arc;

use pn_core::{ArticleSummary, Error, Result, SummaryModel};

pub mod extractive;
pub mod gemini;
pub mod ollama;

pub use extractive::ExtractiveModel;
pub use gemini::GeminiModel;
pub use ollama::OllamaModel;

/// Which remote models are available. Both fields are optional; with
/// neither configured the chain degrades to the extractive model.
#[derive(Debug, Clone, Default)]
pub struct LlmConfig {
    pub gemini_api_key: Option<String>,
    pub ollama_base_url: Option<String>,
}

/// Build the fallback chain: Gemini first when its key is present, then
/// the local OpenAI-compatible endpoint when configured. An empty chain
/// would leave the caller with nothing, so the no-network extractive
/// model stands in when no remote model is available.
pub fn build_chain(config: &LlmConfig) -> Vec<Arc<dyn SummaryModel>> {
    let mut chain: Vec<Arc<dyn SummaryModel>> = Vec::new();

    if let Some(key) = config.gemini_api_key.as_deref().filter(|k| !k.is_empty()) {
        chain.push(Arc::new(GeminiModel::new(key.to_string())));
    }
    if let Some(base) = config.ollama_base_url.as_deref().filter(|b| !b.is_empty()) {
        chain.push(Arc::new(OllamaModel::new(base.to_string())));
    }
    if chain.is_empty() {
        tracing::warn!("no LLM provider configured, summaries will be extractive only");
        chain.push(Arc::new(ExtractiveModel));
    }

    chain
}

/// Decode the JSON object a model was asked to emit. Models sometimes
/// wrap the object in a Markdown code fence; strip it before parsing.
/// Any parse failure counts as a schema-validation failure.
pub(crate) fn parse_summary_json(text: &str) -> Result<ArticleSummary> {
    let trimmed = text.trim();
    let body = trimmed
        .strip_prefix("```json")
        .or_else(|| trimmed.strip_prefix("```"))
        .and_then(|rest| rest.strip_suffix("```"))
        .unwrap_or(trimmed)
        .trim();

    serde_json::from_str(body)
        .map_err(|err| Error::InvalidSummary(format!("model output did not match schema: {}", err)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_order_follows_configuration() {
        let chain = build_chain(&LlmConfig {
            gemini_api_key: Some("key".to_string()),
            ollama_base_url: Some("http://localhost:11434".to_string()),
        });
        let names: Vec<&str> = chain.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Gemini", "Ollama"]);
    }

    #[test]
    fn unconfigured_chain_falls_back_to_extractive() {
        let chain = build_chain(&LlmConfig::default());
        let names: Vec<&str> = chain.iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Extractive"]);
    }

    #[test]
    fn fenced_json_still_parses() {
        let text = "```json\n{\"adult_summary\": \"a\", \"kids_en\": \"b\"}\n```";
        let summary = parse_summary_json(text).unwrap();
        assert_eq!(summary.adult_summary, "a");
        assert_eq!(summary.kids_en, "b");
        assert!(summary.kids_zh.is_none());
    }

    #[test]
    fn prose_output_is_a_schema_failure() {
        assert!(parse_summary_json("Here is your summary!").is_err());
    }
}
