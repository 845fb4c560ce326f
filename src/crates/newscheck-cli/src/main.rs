//! # newscheck
//!
//! Command-line front end for the news classification service: submit text
//! for a REAL/FAKE verdict, browse the prediction history, and redisplay
//! the last result without a network call.

mod render;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use newscheck_client::{ApiClient, ClientConfig};
use newscheck_history::{FileSnapshotStore, HistoryStore, HISTORY_CAP};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::Level;

#[derive(Parser)]
#[command(name = "newscheck")]
#[command(about = "News classification client - submit text, browse prediction history", long_about = None)]
#[command(version)]
struct Cli {
    /// Service base URL (overrides NEWSCHECK_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a piece of news content
    Check {
        /// Content to classify (or use --file)
        content: Option<String>,

        /// Optional headline
        #[arg(short, long)]
        title: Option<String>,

        /// Read content from a file instead of the argument
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// List recent predictions from the service
    History {
        /// Maximum number of entries to fetch
        #[arg(short, long, default_value_t = HISTORY_CAP)]
        limit: usize,
    },

    /// Redisplay the last result without a network call
    Last,

    /// Show the full detail of one history entry
    Show {
        /// 1-based position in the history listing
        index: usize,

        /// Maximum number of entries to fetch
        #[arg(short, long, default_value_t = HISTORY_CAP)]
        limit: usize,
    },

    /// Check service and model health
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt().with_max_level(level).init();

    let config = match &cli.api_url {
        Some(url) => ClientConfig::new(url),
        None => ClientConfig::from_env(),
    };
    let client = ApiClient::new(config);

    let snapshots = Arc::new(FileSnapshotStore::new(FileSnapshotStore::default_path()));
    let mut history = HistoryStore::new(snapshots);

    match cli.command {
        Commands::Check {
            content,
            title,
            file,
        } => check(&client, &mut history, content, title, file).await?,
        Commands::History { limit } => list_history(&client, &mut history, limit).await?,
        Commands::Last => last(&history).await,
        Commands::Show { index, limit } => show(&client, &mut history, index, limit).await?,
        Commands::Health => health(&client).await?,
    }

    Ok(())
}

/// Submit content for classification, render the verdict, and record it.
async fn check(
    client: &ApiClient,
    history: &mut HistoryStore,
    content: Option<String>,
    title: Option<String>,
    file: Option<PathBuf>,
) -> anyhow::Result<()> {
    let content = match (content, file) {
        (Some(text), None) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (Some(_), Some(_)) => bail!("Pass content either inline or via --file, not both"),
        (None, None) => bail!("Please enter some news content."),
    };

    let content = content.trim().to_string();
    if content.is_empty() {
        bail!("Please enter some news content.");
    }
    let title = title.unwrap_or_default();

    let record = client
        .predict(Some(title.as_str()).filter(|t| !t.is_empty()), &content)
        .await?;

    history.record_prediction(record, &content, &title).await;

    // The entry just recorded is the head of the history.
    let entry = history.entries().next().expect("entry just recorded");
    println!("{}", render::render_result(entry));

    Ok(())
}

/// Fetch and print the recent history, newest first.
async fn list_history(
    client: &ApiClient,
    history: &mut HistoryStore,
    limit: usize,
) -> anyhow::Result<()> {
    history.load_recent(client, limit).await?;

    if history.is_empty() {
        println!("No history yet.");
        return Ok(());
    }

    for (i, entry) in history.entries().enumerate() {
        println!("{}", render::render_history_row(i + 1, entry));
    }

    Ok(())
}

/// Restore and print the persisted last result, if there is one.
async fn last(history: &HistoryStore) {
    match history.restore_last().await {
        Some(entry) => println!("{}", render::render_result(&entry)),
        None => println!("No previous prediction to restore."),
    }
}

/// Print the full detail of one history entry.
async fn show(
    client: &ApiClient,
    history: &mut HistoryStore,
    index: usize,
    limit: usize,
) -> anyhow::Result<()> {
    if index == 0 {
        bail!("History positions start at 1");
    }

    history.load_recent(client, limit).await?;

    match history.entries().nth(index - 1) {
        Some(entry) => {
            println!("{}", render::render_detail(entry));
            Ok(())
        }
        None => bail!(
            "No history entry at position {} (history holds {})",
            index,
            history.len()
        ),
    }
}

/// Print the service health report.
async fn health(client: &ApiClient) -> anyhow::Result<()> {
    let status = client.health().await?;
    println!("{}", render::render_health(&status));
    Ok(())
}
