//! duration-extract - find duration expressions in text and print them as JSON

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::Parser;
use duration_engine::{DurationExtractor, ExtractorOptions};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "duration-extract")]
#[command(version)]
#[command(about = "Extract duration expressions from text as JSON spans", long_about = None)]
struct Cli {
    /// Text to scan (reads stdin when omitted)
    text: Option<String>,

    /// JSON file with extractor options
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,

    /// Recognize calendar phrases such as "during the week"
    #[arg(long)]
    calendar_mode: bool,

    /// Keep connected durations as separate spans
    #[arg(long)]
    no_merge: bool,

    /// Do not attach "more than" / "less than" bounds
    #[arg(long)]
    no_inequality: bool,

    /// Reference time (RFC 3339), defaults to now
    #[arg(long, value_name = "RFC3339")]
    reference: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose output (pipeline stage counts on stderr)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let options = resolve_options(&cli)?;
    let reference = match cli.reference.as_deref() {
        Some(raw) => parse_reference(raw)?,
        None => Utc::now(),
    };
    let text = match cli.text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read text from stdin")?;
            buf
        }
    };

    tracing::debug!(?options, %reference, bytes = text.len(), "starting extraction");
    let extractor =
        DurationExtractor::english(options).context("Failed to build English extractor")?;
    let spans = extractor.extract_with_reference(&text, reference);

    let json = if cli.pretty {
        serde_json::to_string_pretty(&spans)
    } else {
        serde_json::to_string(&spans)
    }
    .context("Failed to serialize spans")?;
    println!("{json}");
    Ok(())
}

/// Options from `--options`, then overridden by any explicit flags.
fn resolve_options(cli: &Cli) -> Result<ExtractorOptions> {
    let mut options = match cli.options.as_deref() {
        Some(path) => load_options(path)?,
        None => ExtractorOptions::default(),
    };
    if cli.calendar_mode {
        options.calendar_mode = true;
    }
    if cli.no_merge {
        options.merge_durations = false;
    }
    if cli.no_inequality {
        options.tag_inequality = false;
    }
    Ok(options)
}

fn load_options(path: &Path) -> Result<ExtractorOptions> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read options file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid options JSON in {}", path.display()))
}

fn parse_reference(raw: &str) -> Result<DateTime<Utc>> {
    let parsed = DateTime::parse_from_rfc3339(raw)
        .with_context(|| format!("Invalid reference time '{raw}', expected RFC 3339"))?;
    Ok(parsed.with_timezone(&Utc))
}
