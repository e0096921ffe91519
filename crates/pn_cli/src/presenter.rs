use std::sync::Arc;
use std::time::Duration;

use futures::stream::{FuturesUnordered, StreamExt};
use pn_core::{Article, Result, SummaryRequest};
use pn_news::Aggregator;
use pn_summarize::SummaryPipeline;
use tokio::sync::mpsc;
use tracing::warn;

/// Quiet period after the last tag change before a refresh fires.
pub const DEBOUNCE: Duration = Duration::from_millis(500);

/// Drives one batch per tag-set change: fetch the article list, mark
/// every card summarizing, fan out one summary call per article, and
/// patch each card by index as its result arrives. The list is never
/// reordered while a batch is in flight, so index patching is sound even
/// under out-of-order completion.
#[derive(Clone)]
pub struct Presenter {
    aggregator: Aggregator,
    pipeline: Arc<SummaryPipeline>,
}

impl Presenter {
    pub fn new(aggregator: Aggregator, pipeline: Arc<SummaryPipeline>) -> Self {
        Self {
            aggregator,
            pipeline,
        }
    }

    /// Run one full batch for the given tags and return the patched list.
    pub async fn refresh(&self, tags: &[String]) -> Result<Vec<Article>> {
        let mut articles = self.aggregator.fetch(tags).await?;
        for article in &mut articles {
            article.is_summarizing = Some(true);
        }

        let mut pending: FuturesUnordered<_> = articles
            .iter()
            .enumerate()
            .map(|(index, article)| {
                let pipeline = Arc::clone(&self.pipeline);
                let req = SummaryRequest {
                    title: article.title.clone(),
                    description: article.summary_parents.clone().unwrap_or_default(),
                    content: None,
                };
                async move { (index, pipeline.summarize(&req).await) }
            })
            .collect();

        while let Some((index, result)) = pending.next().await {
            let card = &mut articles[index];
            match result {
                Ok(summary) => {
                    card.summary_parents = Some(summary.adult_summary);
                    card.summary_kids_en = Some(summary.kids_en);
                    card.summary_kids_zh = summary.kids_zh;
                    card.is_summarizing = Some(false);
                }
                Err(err) => {
                    // Keep the seeded description as placeholder text.
                    warn!(title = %card.title, %err, "summary failed");
                    card.is_summarizing = Some(false);
                }
            }
        }

        Ok(articles)
    }

    /// Consume a stream of tag-set changes, refreshing after each quiet
    /// period. A change arriving mid-countdown restarts the countdown;
    /// a change still pending when the stream closes is flushed.
    pub async fn watch<F>(
        self,
        mut changes: mpsc::Receiver<Vec<String>>,
        mut render: F,
    ) -> Result<()>
    where
        F: FnMut(&[Article]),
    {
        let mut pending: Option<Vec<String>> = None;
        loop {
            tokio::select! {
                change = changes.recv() => match change {
                    Some(tags) => pending = Some(tags),
                    None => break,
                },
                _ = tokio::time::sleep(DEBOUNCE), if pending.is_some() => {
                    if let Some(tags) = pending.take() {
                        render(&self.refresh(&tags).await?);
                    }
                }
            }
        }
        if let Some(tags) = pending.take() {
            render(&self.refresh(&tags).await?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pn_core::{ArticleSummary, Error, NewsProvider, Prompt, SummaryModel};
    use pn_summarize::OverrideTable;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn article(title: &str, description: &str) -> Article {
        Article {
            title: title.to_string(),
            url: format!("https://example.com/{}", title.replace(' ', "-")),
            image: None,
            source: "Example News".to_string(),
            date: "2025-06-01T10:00:00Z".to_string(),
            summary_parents: Some(description.to_string()),
            summary_kids_en: None,
            summary_kids_zh: None,
            is_summarizing: None,
        }
    }

    struct FixedProvider {
        articles: Vec<Article>,
    }

    #[async_trait::async_trait]
    impl NewsProvider for FixedProvider {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn search(&self, _query: &str, _limit: u32) -> Result<Vec<Article>> {
            Ok(self.articles.clone())
        }
    }

    /// Echoes the prompt's title back into the summary, optionally after
    /// a per-title delay so tests can force out-of-order completion.
    struct EchoModel {
        delays: Vec<(String, Duration)>,
        fail_on: Option<String>,
    }

    impl EchoModel {
        fn title_of(prompt: &Prompt) -> String {
            prompt
                .user
                .lines()
                .find_map(|line| line.strip_prefix("Title:"))
                .unwrap_or("")
                .trim()
                .to_string()
        }
    }

    #[async_trait::async_trait]
    impl SummaryModel for EchoModel {
        fn name(&self) -> &str {
            "echo"
        }

        async fn generate(&self, prompt: &Prompt) -> Result<ArticleSummary> {
            let title = Self::title_of(prompt);
            if let Some((_, delay)) = self.delays.iter().find(|(t, _)| *t == title) {
                tokio::time::sleep(*delay).await;
            }
            if self.fail_on.as_deref() == Some(title.as_str()) {
                return Err(Error::Provider("boom".to_string()));
            }
            Ok(ArticleSummary {
                adult_summary: format!("adults: {}", title),
                kids_en: format!("kids: {}", title),
                kids_zh: None,
            })
        }
    }

    fn presenter(articles: Vec<Article>, model: EchoModel) -> Presenter {
        let aggregator = Aggregator::new(Arc::new(FixedProvider { articles }));
        let pipeline = SummaryPipeline::new(OverrideTable::new(), vec![Arc::new(model)]);
        Presenter::new(aggregator, Arc::new(pipeline))
    }

    #[tokio::test(start_paused = true)]
    async fn out_of_order_completion_patches_the_right_cards() {
        let p = presenter(
            vec![
                article("Slow story", "First description."),
                article("Fast story", "Second description."),
            ],
            EchoModel {
                delays: vec![("Slow story".to_string(), Duration::from_secs(2))],
                fail_on: None,
            },
        );

        let tags = vec!["anything".to_string()];
        let cards = p.refresh(&tags).await.unwrap();

        assert_eq!(cards[0].summary_kids_en.as_deref(), Some("kids: Slow story"));
        assert_eq!(cards[1].summary_kids_en.as_deref(), Some("kids: Fast story"));
        assert!(cards.iter().all(|c| c.is_summarizing == Some(false)));
    }

    #[tokio::test]
    async fn failed_summary_keeps_the_placeholder_description() {
        let p = presenter(
            vec![
                article("Good story", "Stays or changes."),
                article("Bad story", "The original description."),
            ],
            EchoModel {
                delays: vec![],
                fail_on: Some("Bad story".to_string()),
            },
        );

        let tags = vec!["anything".to_string()];
        let cards = p.refresh(&tags).await.unwrap();

        assert_eq!(cards[0].summary_parents.as_deref(), Some("adults: Good story"));
        assert_eq!(
            cards[1].summary_parents.as_deref(),
            Some("The original description.")
        );
        assert!(cards[1].summary_kids_en.is_none());
        assert_eq!(cards[1].is_summarizing, Some(false));
    }

    #[tokio::test(start_paused = true)]
    async fn changes_inside_the_quiet_period_collapse_into_one_refresh() {
        let p = presenter(
            vec![article("Some story", "Text.")],
            EchoModel {
                delays: vec![],
                fail_on: None,
            },
        );

        let renders = Arc::new(AtomicUsize::new(0));
        let (tx, rx) = mpsc::channel(8);

        let handle = {
            let renders = renders.clone();
            tokio::spawn(p.watch(rx, move |articles: &[Article]| {
                renders.fetch_add(1, Ordering::SeqCst);
                assert_eq!(articles.len(), 1);
            }))
        };

        tx.send(vec!["dinosaurs".to_string()]).await.unwrap();
        tokio::time::sleep(Duration::from_millis(300)).await;
        // Arrives before the quiet period elapses, restarting it.
        tx.send(vec!["dinosaurs".to_string(), "space".to_string()])
            .await
            .unwrap();
        tokio::time::sleep(Duration::from_millis(700)).await;

        assert_eq!(renders.load(Ordering::SeqCst), 1);

        drop(tx);
        handle.await.unwrap().unwrap();
        assert_eq!(renders.load(Ordering::SeqCst), 1);
    }
}
