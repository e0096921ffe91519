use std::fmt;

use pn_core::{ArticleSummary, Error, Prompt, Result, SummaryModel};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use super::parse_summary_json;

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL_NAME: &str = "gemini-1.5-flash";

#[derive(Serialize)]
struct GenerateRequest {
    system_instruction: Instruction,
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Instruction {
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Serialize)]
struct GenerationConfig {
    #[serde(rename = "responseMimeType")]
    response_mime_type: String,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: CandidateContent,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<Part>,
}

/// Primary provider: Google's Gemini generateContent API in JSON mode.
pub struct GeminiModel {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiModel {
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl fmt::Debug for GeminiModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeminiModel")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait::async_trait]
impl SummaryModel for GeminiModel {
    fn name(&self) -> &str {
        "Gemini"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<ArticleSummary> {
        let request = GenerateRequest {
            system_instruction: Instruction {
                parts: vec![Part {
                    text: prompt.system.clone(),
                }],
            },
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.user.clone(),
                }],
            }],
            generation_config: GenerationConfig {
                response_mime_type: "application/json".to_string(),
            },
        };

        let response = self
            .client
            .post(format!(
                "{}/models/{}:generateContent",
                self.base_url, MODEL_NAME
            ))
            .query(&[("key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Provider(format!("Gemini returned {}", status)));
        }

        let body: GenerateResponse = response.json().await?;
        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content.parts.into_iter().next())
            .map(|p| p.text)
            .ok_or_else(|| Error::InvalidSummary("Gemini returned no candidates".to_string()))?;

        parse_summary_json(&text)
    }
}
