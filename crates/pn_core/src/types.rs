use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Normalized article shape handed to the UI, independent of the
/// originating provider's field names. Serialized with the camelCase
/// names the card components expect.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub title: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub source: String,
    pub date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_parents: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_kids_en: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary_kids_zh: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_summarizing: Option<bool>,
}

/// Body of a summarization request: one article's title and whatever
/// descriptive text the caller has for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// The three-audience summary produced for one article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleSummary {
    pub adult_summary: String,
    pub kids_en: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids_zh: Option<String>,
}

impl ArticleSummary {
    /// A decoded summary with an empty required field is a provider
    /// failure, not a usable result.
    pub fn validate(&self) -> Result<()> {
        if self.adult_summary.trim().is_empty() {
            return Err(Error::InvalidSummary("empty adult_summary".to_string()));
        }
        if self.kids_en.trim().is_empty() {
            return Err(Error::InvalidSummary("empty kids_en".to_string()));
        }
        Ok(())
    }
}

/// One prompt, built once per summarization and handed unchanged to every
/// model in the fallback chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}
