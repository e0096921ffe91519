use pn_core::{Prompt, SummaryRequest};

/// Fixed instruction given to every model in the chain. Describes the
/// three audiences and the safety policy for frightening news.
pub const SYSTEM_PROMPT: &str = "\
You are an expert preschool educator. Summarize the provided news article for three audiences:

1. Adults: 2 sentences of high-level context.
2. Kids (age 4-6) in English: use very simple words, exciting 'wow' facts, and a tone suitable for a one-minute 'Show and Tell'. Max 100 words.
3. Kids (age 4-6) in Simplified Chinese: retell the same story for a Chinese-speaking child.

Safety: if the news is scary (accidents, crime, etc.), focus only on the helpful people involved (e.g. 'The brave doctors helped everyone') or skip the scary details.

Respond with a single JSON object of the form {\"adult_summary\": \"...\", \"kids_en\": \"...\", \"kids_zh\": \"...\"} and nothing else.";

/// Combine one article's text into the prompt shared by the whole chain.
pub fn build_prompt(req: &SummaryRequest) -> Prompt {
    let user = format!(
        "Title: {}\nDescription: {}\nContent: {}",
        req.title,
        req.description,
        req.content.as_deref().unwrap_or("")
    );
    Prompt {
        system: SYSTEM_PROMPT.to_string(),
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_combines_title_description_and_content() {
        let req = SummaryRequest {
            title: "Baby panda born".to_string(),
            description: "A zoo welcomed a cub.".to_string(),
            content: Some("The cub weighs 100 grams.".to_string()),
        };

        let prompt = build_prompt(&req);
        assert_eq!(
            prompt.user,
            "Title: Baby panda born\nDescription: A zoo welcomed a cub.\nContent: The cub weighs 100 grams."
        );
        assert!(prompt.system.contains("three audiences"));
    }

    #[test]
    fn missing_content_becomes_empty_line() {
        let req = SummaryRequest {
            title: "Baby panda born".to_string(),
            description: "A zoo welcomed a cub.".to_string(),
            content: None,
        };
        assert!(build_prompt(&req).user.ends_with("Content: "));
    }
}
