//! Hydrate a project listing with GitHub repository metadata.
//!
//! Reads a JSON array of listing entries and writes two listings next to it:
//! the trimmed raw listing and the hydrated listing.

use anyhow::{Context, Result};
use clap::Parser;
use github_client::GithubClient;
use listing_hydrate::{HydrateOptions, Hydrator, ListingRecord, LogLevel, LogSink};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;

use config::Config;

/// Upper bound for `--cache-hours`: ten years.
const MAX_CACHE_HOURS: u64 = 24 * 365 * 10;

#[derive(Parser, Debug)]
#[command(name = "listing-hydrate")]
#[command(about = "Fill gaps in a project listing from GitHub repository metadata")]
#[command(version)]
struct Cli {
    /// Listing to hydrate (JSON array of entries)
    #[arg(short, long)]
    input: PathBuf,

    /// Where to write the raw listing [default: <input>.raw.json]
    #[arg(long)]
    raw: Option<PathBuf>,

    /// Where to write the hydrated listing [default: <input>.hydrated.json]
    #[arg(long)]
    hydrated: Option<PathBuf>,

    /// Drop local values that repeat GitHub's data from the raw listing
    #[arg(long)]
    corrective: bool,

    /// How long fetched repository metadata may be reused, in hours
    #[arg(
        long,
        default_value_t = 24,
        value_parser = clap::value_parser!(u64).range(0..=MAX_CACHE_HOURS)
    )]
    cache_hours: u64,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = Config::from_env().context("Failed to load configuration")?;
    let mut client = GithubClient::new(config.credentials);
    if let Some(url) = config.github_api_url {
        client = client.with_base_url(url);
    }

    let records = read_listing(&cli.input)?;
    tracing::info!(count = records.len(), input = %cli.input.display(), "Listing loaded");

    let options = HydrateOptions::new()
        .with_corrective(cli.corrective)
        .with_cache(Duration::from_secs(cli.cache_hours * 60 * 60))
        .with_log(progress_sink());

    let listing = Hydrator::new(client)
        .hydrate(records, &options)
        .await
        .context("Failed to hydrate listing")?;

    let raw_path = cli.raw.unwrap_or_else(|| sibling_path(&cli.input, "raw"));
    let hydrated_path = cli
        .hydrated
        .unwrap_or_else(|| sibling_path(&cli.input, "hydrated"));
    write_listing(&raw_path, &listing.raw)?;
    write_listing(&hydrated_path, &listing.hydrated)?;

    tracing::info!(
        raw = %raw_path.display(),
        hydrated = %hydrated_path.display(),
        "Listings written"
    );
    Ok(())
}

/// Hydration events already reach `tracing`, where notes sit at debug level;
/// this surfaces trims on stderr without repeating info and warn events.
fn progress_sink() -> LogSink {
    Arc::new(|level: LogLevel, message: &str| {
        if echoes_to_stderr(level) {
            eprintln!("[{}] {}", level, message);
        }
    })
}

fn echoes_to_stderr(level: LogLevel) -> bool {
    level == LogLevel::Note
}

fn read_listing(path: &Path) -> Result<Vec<ListingRecord>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}

fn write_listing(path: &Path, records: &[ListingRecord]) -> Result<()> {
    let mut json = serde_json::to_string_pretty(records).context("Failed to serialize listing")?;
    json.push('\n');
    std::fs::write(path, json).with_context(|| format!("Failed to write {}", path.display()))
}

/// `listing.json` -> `listing.<suffix>.json`, in the same directory.
fn sibling_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "listing".to_string());
    input.with_file_name(format!("{}.{}.json", stem, suffix))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::parse_from(["listing-hydrate", "--input", "data/list.json"]);
        assert!(!cli.corrective);
        assert_eq!(cli.cache_hours, 24);
        assert_eq!(cli.raw, None);
    }

    #[test]
    fn test_cache_hours_bounded() {
        let cli = Cli::try_parse_from([
            "listing-hydrate",
            "--input",
            "list.json",
            "--cache-hours",
            "87600",
        ])
        .unwrap();
        assert_eq!(cli.cache_hours, MAX_CACHE_HOURS);

        let err = Cli::try_parse_from([
            "listing-hydrate",
            "--input",
            "list.json",
            "--cache-hours",
            "18446744073709551615",
        ])
        .unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_only_notes_echo_to_stderr() {
        assert!(echoes_to_stderr(LogLevel::Note));
        assert!(!echoes_to_stderr(LogLevel::Warn));
        assert!(!echoes_to_stderr(LogLevel::Info));
    }

    #[test]
    fn test_sibling_path() {
        assert_eq!(
            sibling_path(Path::new("data/list.json"), "raw"),
            PathBuf::from("data/list.raw.json")
        );
        assert_eq!(
            sibling_path(Path::new("list"), "hydrated"),
            PathBuf::from("list.hydrated.json")
        );
    }

    #[test]
    fn test_listing_file_round_trip() {
        let dir = std::env::temp_dir().join(format!("listing-hydrate-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("list.json");

        let records = vec![ListingRecord::new("Foo", "user/foo")];
        write_listing(&path, &records).unwrap();
        assert_eq!(read_listing(&path).unwrap(), records);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_read_listing_reports_path() {
        let err = read_listing(Path::new("/nonexistent/listing.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/listing.json"));
    }
}
