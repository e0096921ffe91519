use pn_core::{Article, Error, NewsProvider, Result};
use reqwest::Client;
use serde::Deserialize;

/// Key value shipped in sample configs; treated the same as no key at all.
pub const PLACEHOLDER_API_KEY: &str = "REPLACE_WITH_YOUR_GNEWS_KEY";

const DEFAULT_BASE_URL: &str = "https://gnews.io/api/v4";

#[derive(Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<RawArticle>,
}

#[derive(Deserialize)]
struct RawArticle {
    title: String,
    #[serde(default)]
    description: String,
    url: String,
    image: Option<String>,
    source: RawSource,
    #[serde(rename = "publishedAt")]
    published_at: String,
}

#[derive(Deserialize)]
struct RawSource {
    name: String,
}

impl RawArticle {
    fn into_article(self) -> Article {
        let description = self.description.trim();
        Article {
            title: self.title,
            url: self.url,
            image: self.image,
            source: self.source.name,
            date: self.published_at,
            summary_parents: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            summary_kids_en: None,
            summary_kids_zh: None,
            is_summarizing: None,
        }
    }
}

/// Client for the GNews search API.
pub struct GNewsClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
}

impl GNewsClient {
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for GNewsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GNewsClient")
            .field("api_key", &self.api_key.as_deref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .finish()
    }
}

#[async_trait::async_trait]
impl NewsProvider for GNewsClient {
    fn name(&self) -> &str {
        "GNews"
    }

    fn is_configured(&self) -> bool {
        matches!(self.api_key.as_deref(), Some(key) if !key.is_empty() && key != PLACEHOLDER_API_KEY)
    }

    async fn search(&self, query: &str, limit: u32) -> Result<Vec<Article>> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| Error::Provider("GNews API key is missing".to_string()))?;

        let response = self
            .client
            .get(format!("{}/search", self.base_url))
            .query(&[
                ("q", query),
                ("lang", "en"),
                ("max", &limit.to_string()),
                ("apikey", api_key),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Provider(format!(
                "GNews returned {} for query {:?}",
                status, query
            )));
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.articles.into_iter().map(RawArticle::into_article).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn placeholder_key_counts_as_unconfigured() {
        assert!(!GNewsClient::new(None).is_configured());
        assert!(!GNewsClient::new(Some(String::new())).is_configured());
        assert!(!GNewsClient::new(Some(PLACEHOLDER_API_KEY.to_string())).is_configured());
        assert!(GNewsClient::new(Some("a-real-key".to_string())).is_configured());
    }

    #[test]
    fn raw_article_maps_to_canonical_fields() {
        let raw: RawArticle = serde_json::from_value(serde_json::json!({
            "title": "Dinosaur fossil found",
            "description": "A new fossil was discovered.",
            "content": "Full text...",
            "url": "https://example.com/fossil",
            "image": "https://example.com/fossil.jpg",
            "source": { "name": "Example News", "url": "https://example.com" },
            "publishedAt": "2025-06-01T10:00:00Z"
        }))
        .unwrap();

        let article = raw.into_article();
        assert_eq!(article.title, "Dinosaur fossil found");
        assert_eq!(article.source, "Example News");
        assert_eq!(article.date, "2025-06-01T10:00:00Z");
        assert_eq!(article.image.as_deref(), Some("https://example.com/fossil.jpg"));
        assert_eq!(
            article.summary_parents.as_deref(),
            Some("A new fossil was discovered.")
        );
        assert!(article.summary_kids_en.is_none());
        assert!(article.is_summarizing.is_none());
    }
}
