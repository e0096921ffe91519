use std::fmt;

use pn_core::{ArticleSummary, Error, Prompt, Result, SummaryModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::parse_summary_json;

pub const DEFAULT_BASE_URL: &str = "http://localhost:11434";
const MODEL_NAME: &str = "llama3.2";

#[derive(Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
}

#[derive(Serialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: String,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: Message,
}

#[derive(Deserialize)]
struct Message {
    content: String,
}

/// Fallback provider: a local Ollama server through its OpenAI-compatible
/// chat completions endpoint.
pub struct OllamaModel {
    client: Client,
    base_url: String,
}

impl OllamaModel {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
        }
    }
}

impl fmt::Debug for OllamaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OllamaModel")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait::async_trait]
impl SummaryModel for OllamaModel {
    fn name(&self) -> &str {
        "Ollama"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<ArticleSummary> {
        let request = ChatRequest {
            model: MODEL_NAME.to_string(),
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: prompt.system.clone(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: prompt.user.clone(),
                },
            ],
            response_format: ResponseFormat {
                kind: "json_object".to_string(),
            },
        };

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Provider(format!("Ollama returned {}", status)));
        }

        let body: ChatResponse = response.json().await?;
        let text = body
            .choices
            .into_iter()
            .next()
            .map(|c| c.message.content)
            .ok_or_else(|| Error::InvalidSummary("Ollama returned no choices".to_string()))?;

        parse_summary_json(&text)
    }
}
