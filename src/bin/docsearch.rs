//! CLI binary for docsearch.

use clap::{Parser, Subcommand};
use docsearch::bench;
use docsearch::{AppConfig, DocumentMeta, SearchClient, SearchSession};
use std::path::PathBuf;
use tracing::info;

/// docsearch: query the document search backend from the terminal.
#[derive(Parser)]
#[command(name = "docsearch", version, about)]
struct Cli {
    /// Path to TOML configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Command,
}

/// Available commands.
#[derive(Subcommand)]
enum Command {
    /// Search the backend and print the results.
    Search {
        /// Query text (or pattern, in regex mode).
        query: String,

        /// `keyword` or `regex`; anything else searches by keyword.
        #[arg(short, long, default_value = "keyword")]
        mode: String,

        /// Ranking strategy passed through to the backend.
        #[arg(short, long, default_value = "occurrences")]
        ranking: String,

        /// Print the normalized response as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Print the full text of a document.
    Document {
        /// Backend document id.
        id: u64,
    },

    /// Measure search latency across query lengths, modes and rankings.
    Bench {
        /// Searches per query length (overrides `bench.samples_per_length`).
        #[arg(short, long)]
        samples: Option<usize>,

        /// Write the JSON report to this path.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write the effective configuration to the config file.
    InitConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load(cli.config.as_deref())?;
    docsearch::logging::init(&config.logging)?;
    config.validate()?;

    match cli.command {
        Command::Search {
            query,
            mode,
            ranking,
            json,
        } => run_search(&config, &query, &mode, &ranking, json).await,
        Command::Document { id } => run_document(&config, id).await,
        Command::Bench { samples, output } => run_bench(config, samples, output).await,
        Command::InitConfig => init_config(&config, cli.config),
    }
}

async fn run_search(
    config: &AppConfig,
    query: &str,
    mode: &str,
    ranking: &str,
    json: bool,
) -> anyhow::Result<()> {
    let session = SearchSession::new(SearchClient::new(config.client.clone())?);
    let outcome = session.search(query, mode, ranking).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcome.result)?);
        return Ok(());
    }

    let results = session.store().get_results();
    println!("{} result(s)", results.len());
    for doc in &results {
        println!("  {}", describe(doc));
    }
    if !outcome.result.recommendations.is_empty() {
        println!("recommended:");
        for doc in &outcome.result.recommendations {
            println!("  {}", describe(doc));
        }
    }
    Ok(())
}

async fn run_document(config: &AppConfig, id: u64) -> anyhow::Result<()> {
    let session = SearchSession::new(SearchClient::new(config.client.clone())?);
    let doc = session.open_document(id).await?;
    match doc.text() {
        Some(text) => println!("{text}"),
        None => println!("{}", serde_json::to_string_pretty(doc.as_value())?),
    }
    Ok(())
}

async fn run_bench(
    mut config: AppConfig,
    samples: Option<usize>,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    if let Some(n) = samples {
        config.bench.samples_per_length = n;
    }
    let client = SearchClient::new(config.client.clone())?;
    info!(
        base_url = %config.client.base_url,
        contract = client.policy_name(),
        samples = config.bench.samples_per_length,
        "starting latency benchmark"
    );

    let report = bench::run_benchmark(&client, &config.bench).await?;
    print!("{}", bench::render_table(&report));

    if let Some(path) = output {
        bench::write_report(&report, &path)?;
        println!("saved bench report: {}", path.display());
    }
    Ok(())
}

fn init_config(config: &AppConfig, path: Option<PathBuf>) -> anyhow::Result<()> {
    let path = path.unwrap_or_else(AppConfig::default_config_path);
    config.save_to_file(&path)?;
    println!("wrote config: {}", path.display());
    Ok(())
}

fn describe(doc: &DocumentMeta) -> String {
    let mut line = match doc.id {
        Some(id) => format!("[{id}] {}", doc.title),
        None => doc.title.clone(),
    };
    if let Some(author) = &doc.author {
        line.push_str(&format!(" ({author})"));
    }
    line
}
