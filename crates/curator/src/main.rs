//! Curate: merge and rank the historical events of one day.
//!
//! Reads source payloads saved from the public "on this day" services,
//! merges them and prints the curated events as Markdown or JSON.
//!
//! # Usage
//!
//! ```bash
//! curate --month 4 --day 15 wikipedia.txt on_this_day.json
//! curate --month 8 --day 15 --category "Indian History" --format json events.json
//! curate --print-default-config > curator.toml
//! ```

use chrono::Datelike;
use clap::{Parser, ValueEnum};
use curator::{default_config_toml, load_source, Curator, CuratorConfig};
use history_events::{Category, MonthDay};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Output format for the curated report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Markdown,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "curate")]
#[command(about = "Merge, categorize and rank historical events for one day")]
struct Args {
    /// Source files: Wikipedia list lines (.txt), On This Day payloads or
    /// event records (JSON / JSON lines)
    sources: Vec<PathBuf>,

    /// Month (1-12), defaults to today
    #[arg(long)]
    month: Option<u8>,

    /// Day of month, defaults to today
    #[arg(long)]
    day: Option<u8>,

    /// Keep only events of this category (e.g. "Indian History")
    #[arg(long)]
    category: Option<Category>,

    /// Keep only events from the recent window
    #[arg(long)]
    recent_only: bool,

    /// Path to a TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Year used for anniversaries and the recent window, defaults to now
    #[arg(long)]
    current_year: Option<i32>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Markdown)]
    format: OutputFormat,

    /// Print the default configuration and exit
    #[arg(long)]
    print_default_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Logs go to stderr so the report on stdout stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.print_default_config {
        print!("{}", default_config_toml());
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => CuratorConfig::from_file(path)?,
        None => CuratorConfig::default(),
    };
    if args.recent_only {
        config.filter.recent_only = true;
    }

    let today = chrono::Local::now().date_naive();
    let date = MonthDay::new(
        args.month.unwrap_or(today.month() as u8),
        args.day.unwrap_or(today.day() as u8),
    )?;
    let current_year = args.current_year.unwrap_or_else(|| today.year());

    let mut sources = Vec::with_capacity(args.sources.len());
    for path in &args.sources {
        sources.push(load_source(path, config.filter.min_year)?);
    }

    let curator = Curator::new(config)?;
    let report = curator.curate(date, sources, args.category, current_year);

    match args.format {
        OutputFormat::Markdown => print!("{}", curator.render_markdown(&report)),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
