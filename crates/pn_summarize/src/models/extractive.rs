use std::fmt;

use pn_core::{ArticleSummary, Error, Prompt, Result, SummaryModel};

/// Last-resort model with no network: lifts the leading sentences of the
/// article text into a low-quality summary so the endpoint still answers
/// when no real provider is configured.
pub struct ExtractiveModel;

impl fmt::Debug for ExtractiveModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExtractiveModel").finish()
    }
}

fn field<'a>(user: &'a str, prefix: &str) -> &'a str {
    user.lines()
        .find_map(|line| line.strip_prefix(prefix))
        .unwrap_or("")
        .trim()
}

fn first_sentences(text: &str, count: usize) -> String {
    let sentences: Vec<&str> = text
        .split(|c| c == '.' || c == '!' || c == '?')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .take(count)
        .collect();
    if sentences.is_empty() {
        String::new()
    } else {
        sentences.join(". ") + "."
    }
}

#[async_trait::async_trait]
impl SummaryModel for ExtractiveModel {
    fn name(&self) -> &str {
        "Extractive"
    }

    async fn generate(&self, prompt: &Prompt) -> Result<ArticleSummary> {
        let title = field(&prompt.user, "Title:");
        let description = field(&prompt.user, "Description:");
        let content = field(&prompt.user, "Content:");

        let body = if description.is_empty() { content } else { description };
        let source = if body.is_empty() { title } else { body };
        if source.is_empty() {
            return Err(Error::InvalidSummary(
                "nothing to extract a summary from".to_string(),
            ));
        }

        let adult_summary = first_sentences(source, 2);
        let kids_en = first_sentences(source, 1);

        Ok(ArticleSummary {
            adult_summary,
            kids_en,
            kids_zh: None,
        })
    }
}
