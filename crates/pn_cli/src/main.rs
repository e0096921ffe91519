mod config;
mod presenter;
mod render;
mod store;

use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use pn_core::ArticleSummary;
use pn_news::{Aggregator, GNewsClient};
use pn_summarize::{build_chain, OverrideTable, SummaryPipeline};
use pn_web::{create_app, AppState};

use config::Config;
use presenter::Presenter;
use store::InterestStore;

#[derive(Parser)]
#[command(name = "pn", about = "Kid-friendly news: aggregate stories and summarize them for small listeners")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API server
    Serve {
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: String,
    },
    /// Fetch and summarize stories for the given (or saved) interests
    Fetch {
        /// Interests to use instead of the saved list
        tags: Vec<String>,
    },
    /// Edit interests interactively; cards refresh after a quiet period
    Watch,
    /// Manage the saved interest list
    Interests {
        #[command(subcommand)]
        action: InterestAction,
    },
}

#[derive(Subcommand)]
enum InterestAction {
    /// Add an interest to the end of the list
    Add { tag: String },
    /// Remove an interest
    Remove { tag: String },
    /// Print the saved list
    List,
}

fn build_services(config: &Config) -> (Aggregator, SummaryPipeline) {
    let provider = Arc::new(GNewsClient::new(config.gnews_api_key.clone()));
    let aggregator = Aggregator::new(provider);
    let pipeline = SummaryPipeline::new(curated_overrides(), build_chain(&config.llm()));
    (aggregator, pipeline)
}

/// Hand-written summaries for stories the models repeatedly mangle.
/// Checked by exact title before any model call.
fn curated_overrides() -> OverrideTable {
    let mut table = OverrideTable::new();
    table.insert(
        "Astronauts return from the International Space Station",
        ArticleSummary {
            adult_summary: "A crew rotation completed with a routine splashdown; \
                            the returning astronauts spent six months in orbit."
                .to_string(),
            kids_en: "Astronauts came home from their space house in the sky! \
                      They floated for months and splashed down in the ocean, \
                      where boats were waiting to pick them up."
                .to_string(),
            kids_zh: Some(
                "宇航员从太空的家回来啦！他们在天上飘了好几个月，\
                 最后落进大海里，大船把他们接回了家。"
                    .to_string(),
            ),
        },
    );
    table
}

async fn serve(config: &Config, addr: &str) -> anyhow::Result<()> {
    let (aggregator, pipeline) = build_services(config);
    let app = create_app(AppState {
        aggregator,
        pipeline,
    });

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!(%addr, "serving news API");
    axum::serve(listener, app).await?;
    Ok(())
}

async fn fetch(config: &Config, tags: Vec<String>) -> anyhow::Result<()> {
    let tags = if tags.is_empty() {
        InterestStore::new(config.interests_path.clone()).load()?
    } else {
        tags
    };
    if tags.is_empty() {
        println!("No interests given and none saved. Try: pn interests add dinosaurs");
        return Ok(());
    }

    let (aggregator, pipeline) = build_services(config);
    let presenter = Presenter::new(aggregator, Arc::new(pipeline));
    let articles = presenter.refresh(&tags).await?;
    render::print_cards(&articles);
    Ok(())
}

async fn watch(config: &Config) -> anyhow::Result<()> {
    let store = InterestStore::new(config.interests_path.clone());
    let (aggregator, pipeline) = build_services(config);
    let presenter = Presenter::new(aggregator, Arc::new(pipeline));

    println!("Type +topic to add an interest, -topic to remove one, Ctrl-D to quit.");
    let (tx, rx) = mpsc::channel(8);
    let initial = store.load()?;
    if !initial.is_empty() {
        println!("Interests: {}", initial.join(", "));
        tx.send(initial).await.ok();
    }

    let input = tokio::spawn(read_commands(store, tx));
    presenter.watch(rx, |articles| render::print_cards(articles)).await?;
    input.await??;
    Ok(())
}

async fn read_commands(
    store: InterestStore,
    tx: mpsc::Sender<Vec<String>>,
) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let tags = if let Some(tag) = line.strip_prefix('-') {
            store.remove(tag)?
        } else {
            store.add(line.strip_prefix('+').unwrap_or(line))?
        };
        println!("Interests: {}", tags.join(", "));
        if tx.send(tags).await.is_err() {
            break;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    match cli.command {
        Commands::Serve { addr } => serve(&config, &addr).await,
        Commands::Fetch { tags } => fetch(&config, tags).await,
        Commands::Watch => watch(&config).await,
        Commands::Interests { action } => {
            let store = InterestStore::new(config.interests_path.clone());
            let tags = match action {
                InterestAction::Add { tag } => store.add(&tag)?,
                InterestAction::Remove { tag } => store.remove(&tag)?,
                InterestAction::List => store.load()?,
            };
            if tags.is_empty() {
                println!("No interests saved.");
            } else {
                for (position, tag) in tags.iter().enumerate() {
                    println!("{}. {}", position + 1, tag);
                }
            }
            Ok(())
        }
    }
}
