//! Jargon command-line client.
//!
//! Talks to a slang dictionary service; all user-facing labels go through
//! the locale-aware string table.

mod config;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jargon_api::{ApiClient, ApiConfig, ApiError};
use jargon_core::{NewSlangTerm, SlangTerm};
use jargon_i18n::{keys, Strings};

use config::{resolve_base_url, JargonConfig};

#[derive(Debug, Parser)]
#[command(name = "jargon", about = "Slang dictionary client", version)]
struct Cli {
    /// Configuration file (defaults to ./jargon.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Service base URL (overrides environment and config file)
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Display language (e.g. en, es, es-MX)
    #[arg(long, global = true)]
    locale: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search terms by free text
    Search { query: String },
    /// Show one term by id
    Show { id: i64 },
    /// Submit a new term
    Submit {
        #[arg(long)]
        term: String,
        #[arg(long)]
        meaning: String,
        #[arg(long = "example")]
        examples: Vec<String>,
        #[arg(long = "tag")]
        tags: Vec<String>,
        #[arg(long)]
        origin: Option<String>,
        #[arg(long)]
        part_of_speech: Option<String>,
    },
    /// List terms, newest first
    List {
        #[arg(long, default_value_t = 0)]
        skip: u32,
        #[arg(long, default_value_t = 20)]
        limit: u32,
    },
    /// Terms with recent activity
    Trending {
        #[arg(long, default_value_t = 10)]
        limit: u32,
        #[arg(long, default_value_t = 7)]
        days: u32,
    },
    /// All-time most voted terms
    Popular {
        #[arg(long, default_value_t = 10)]
        limit: u32,
    },
    /// Probe service liveness
    Health,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cfg = JargonConfig::load_or_default(cli.config.as_deref())?;

    let mut strings = Strings::with_builtin()?;
    if let Some(locale) = cli.locale.as_deref().or(cfg.ui.locale.as_deref()) {
        strings.set_locale(locale);
    }

    let api_config = ApiConfig::new(resolve_base_url(cli.api_url.as_deref(), &cfg))
        .with_timeout(Duration::from_millis(cfg.api.timeout_ms));
    let api = ApiClient::new(api_config)?;

    if let Err(err) = run(&api, &strings, cli.command).await {
        report(&strings, &err);
        std::process::exit(1);
    }
    Ok(())
}

async fn run(api: &ApiClient, strings: &Strings, command: Command) -> Result<(), ApiError> {
    match command {
        Command::Search { query } => {
            let terms = api.search(&query).await?;
            if terms.is_empty() {
                println!("{}", strings.resolve(keys::SEARCH_EMPTY));
            }
            for term in &terms {
                print_summary(term);
            }
        }
        Command::Show { id } => {
            let term = api.get_details(id).await?;
            print_details(strings, &term);
        }
        Command::Submit {
            term,
            meaning,
            examples,
            tags,
            origin,
            part_of_speech,
        } => {
            let mut new = NewSlangTerm::new(term, meaning);
            new.examples = examples;
            new.tags = tags;
            new.origin = origin;
            new.part_of_speech = part_of_speech;

            let created = api.submit(&new).await?;
            println!("{} (#{})", strings.resolve(keys::SUBMIT_SUCCESS), created.id);
        }
        Command::List { skip, limit } => {
            println!("{}", strings.resolve(keys::LIST_ALL));
            for term in api.list(skip, limit).await? {
                print_summary(&term);
            }
        }
        Command::Trending { limit, days } => {
            println!("{}", strings.resolve(keys::LIST_TRENDING));
            for term in api.trending(limit, days).await? {
                print_summary(&term);
            }
        }
        Command::Popular { limit } => {
            println!("{}", strings.resolve(keys::LIST_POPULAR));
            for term in api.popular(limit).await? {
                print_summary(&term);
            }
        }
        Command::Health => {
            if api.health_check().await {
                println!("{}", strings.resolve(keys::HEALTH_OK));
            } else {
                println!("{}", strings.resolve(keys::HEALTH_DOWN));
                std::process::exit(1);
            }
        }
    }
    Ok(())
}

/// Translate a failed operation into a localized one-line message.
fn report(strings: &Strings, err: &ApiError) {
    let label = match err {
        ApiError::Status { .. } => strings.resolve(keys::ERROR_SERVER),
        ApiError::Validation(_) => strings.resolve(keys::ERROR_REQUIRED),
        _ => strings.resolve(keys::ERROR_NETWORK),
    };
    eprintln!("{label}: {err}");
}

fn print_summary(term: &SlangTerm) {
    println!("#{:<5} {}: {}", term.id, term.term, term.meaning);
}

fn print_details(strings: &Strings, term: &SlangTerm) {
    println!("{} (#{})", term.term, term.id);
    println!("{}: {}", strings.resolve(keys::TERM_MEANING), term.meaning);
    if let Some(origin) = &term.origin {
        println!("{}: {}", strings.resolve(keys::TERM_ORIGIN), origin);
    }
    if let Some(pos) = &term.part_of_speech {
        println!("{}: {}", strings.resolve(keys::TERM_PART_OF_SPEECH), pos);
    }
    if !term.examples.is_empty() {
        println!("{}:", strings.resolve(keys::TERM_EXAMPLES));
        for example in &term.examples {
            println!("  - {example}");
        }
    }
    if !term.tags.is_empty() {
        println!("{}: {}", strings.resolve(keys::TERM_TAGS), term.tags.join(", "));
    }
    if !term.similar_terms.is_empty() {
        println!("{}:", strings.resolve(keys::TERM_SIMILAR));
        for similar in &term.similar_terms {
            println!("  - {} ({:.2})", similar.term, similar.similarity);
        }
    }
    println!("{}: {}", strings.resolve(keys::TERM_VOTES), term.vote_count);
}
