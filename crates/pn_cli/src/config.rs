use std::env;
use std::path::PathBuf;

use pn_summarize::LlmConfig;

/// Runtime configuration, read from the environment (with .env support).
/// Only presence matters; placeholder credentials are weeded out further
/// down by the provider clients.
#[derive(Debug, Clone)]
pub struct Config {
    pub gnews_api_key: Option<String>,
    pub gemini_api_key: Option<String>,
    pub ollama_base_url: Option<String>,
    pub interests_path: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            gnews_api_key: env::var("GNEWS_API_KEY").ok(),
            gemini_api_key: env::var("GEMINI_API_KEY").ok(),
            ollama_base_url: env::var("OLLAMA_BASE_URL").ok(),
            interests_path: env::var("PN_INTERESTS_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("interests.json")),
        }
    }

    pub fn llm(&self) -> LlmConfig {
        LlmConfig {
            gemini_api_key: self.gemini_api_key.clone(),
            ollama_base_url: self.ollama_base_url.clone(),
        }
    }
}
