//! SearXNG client CLI - query a SearXNG instance from the command line.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use searxng_client::{
    ClientConfig, Language, SafeSearch, SearchParameters, SearchResults, SearxngClient, TimeRange,
};

/// SearXNG client - search a SearXNG instance
#[derive(Parser)]
#[command(name = "searxng-client")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a search against a SearXNG instance
    Search(SearchArgs),
}

#[derive(Parser)]
struct SearchArgs {
    /// Search query
    query: String,

    /// Base URL of the SearXNG instance
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    /// Categories to search (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    categories: Option<Vec<String>>,

    /// Engines to use (comma-separated)
    #[arg(short, long, value_delimiter = ',')]
    engines: Option<Vec<String>>,

    /// Search language ("auto" or a locale tag such as "en" or "pt-BR")
    #[arg(short, long)]
    lang: Option<String>,

    /// Result page number
    #[arg(short, long)]
    page: Option<u32>,

    /// Safe search level
    #[arg(short, long)]
    safesearch: Option<SafeSearchArg>,

    /// Only return results from this time range
    #[arg(short, long)]
    time_range: Option<TimeRangeArg>,

    /// Maximum number of results to display
    #[arg(short = 'n', long, default_value = "10")]
    limit: usize,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum SafeSearchArg {
    Off,
    Moderate,
    Strict,
}

impl From<SafeSearchArg> for SafeSearch {
    fn from(value: SafeSearchArg) -> Self {
        match value {
            SafeSearchArg::Off => SafeSearch::Off,
            SafeSearchArg::Moderate => SafeSearch::Moderate,
            SafeSearchArg::Strict => SafeSearch::Strict,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TimeRangeArg {
    Day,
    Week,
    Month,
    Year,
}

impl From<TimeRangeArg> for TimeRange {
    fn from(value: TimeRangeArg) -> Self {
        match value {
            TimeRangeArg::Day => TimeRange::Day,
            TimeRangeArg::Week => TimeRange::Week,
            TimeRangeArg::Month => TimeRange::Month,
            TimeRangeArg::Year => TimeRange::Year,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Human-readable text output
    Text,
    /// JSON output
    Json,
    /// Compact single-line output
    Compact,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .finish();
        tracing::subscriber::set_global_default(subscriber)?;
    }

    match cli.command {
        Commands::Search(args) => run_search(args).await,
    }
}

fn build_params(args: &SearchArgs) -> SearchParameters {
    let mut params = SearchParameters::new();
    if let Some(categories) = &args.categories {
        params = params.with_categories(categories.iter().map(String::as_str));
    }
    if let Some(engines) = &args.engines {
        params = params.with_engines(engines.iter().map(String::as_str));
    }
    if let Some(lang) = &args.lang {
        params = params.with_lang(Language::from(lang.as_str()));
    }
    if let Some(page) = args.page {
        params = params.with_pageno(page);
    }
    if let Some(level) = args.safesearch {
        params = params.with_safesearch(level.into());
    }
    if let Some(range) = args.time_range {
        params = params.with_time_range(range.into());
    }
    params
}

async fn run_search(args: SearchArgs) -> Result<()> {
    let client = SearxngClient::new(ClientConfig::new(&args.url))?;
    let params = build_params(&args);
    let results = client.search(&args.query, Some(&params)).await?;

    match args.format {
        OutputFormat::Text => print_text(&args, &results),
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&results)?);
        }
        OutputFormat::Compact => {
            for result in results.results.iter().take(args.limit) {
                println!("{}\t{}", result.title, result.url);
            }
        }
    }

    Ok(())
}

fn print_text(args: &SearchArgs, results: &SearchResults) {
    println!(
        "\nSearch results for \"{}\" ({} results):\n",
        args.query, results.number_of_results
    );

    for answer in &results.answers {
        println!("Answer: {}\n", answer);
    }

    for (i, result) in results.results.iter().take(args.limit).enumerate() {
        println!("{}. {}", i + 1, result.title);
        println!("   URL: {}", result.url);
        if let Some(content) = result.content.as_deref().filter(|c| !c.is_empty()) {
            let content = match content.char_indices().nth(150) {
                Some((end, _)) => format!("{}...", &content[..end]),
                None => content.to_string(),
            };
            println!("   {}", content);
        }
        println!(
            "   Engines: {} | Score: {:.2}",
            result.engines.join(", "),
            result.score
        );
        println!();
    }

    if !results.suggestions.is_empty() {
        println!("Suggestions: {}", results.suggestions.join(", "));
    }
    if !results.unresponsive_engines.is_empty() {
        eprintln!(
            "Unresponsive engines: {}",
            results.unresponsive_engines.join(", ")
        );
    }
}
