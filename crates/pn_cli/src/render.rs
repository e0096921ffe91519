use chrono::DateTime;
use pn_core::Article;

/// Print article cards to the terminal.
pub fn print_cards(articles: &[Article]) {
    if articles.is_empty() {
        println!("No stories yet. Add an interest to start your list.");
        return;
    }

    for article in articles {
        println!();
        println!(
            "📰 {} · {} ({})",
            article.title,
            article.source,
            format_date(&article.date)
        );
        println!("   {}", article.url);
        if let Some(parents) = &article.summary_parents {
            println!("   For parents: {}", parents);
        }
        if let Some(kids_en) = &article.summary_kids_en {
            println!("   For kids:    {}", kids_en);
        }
        if let Some(kids_zh) = &article.summary_kids_zh {
            println!("   中文:        {}", kids_zh);
        }
        if article.is_summarizing == Some(true) {
            println!("   ✨ summarizing...");
        }
    }
    println!();
}

fn format_date(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rfc3339_dates_shorten_and_garbage_passes_through() {
        assert_eq!(format_date("2025-06-01T10:00:00Z"), "2025-06-01");
        assert_eq!(format_date("yesterday"), "yesterday");
    }
}
