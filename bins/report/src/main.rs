//! Fluxo report CLI
//!
//! Loads a JSON snapshot of records, classifies it over an inclusive date
//! range, and prints the period summary as JSON.
//!
//! Usage: report <snapshot.json> <start> <end>
//! Dates are ISO `YYYY-MM-DD`.

use std::process::ExitCode;

use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fluxo_core::date::parse_iso_date;
use fluxo_core::event::EventClassifier;
use fluxo_core::ingest;
use fluxo_core::installment::ExpansionOptions;
use fluxo_core::period::SummaryCache;
use fluxo_shared::AppConfig;

fn main() -> ExitCode {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fluxo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("error: {error:#}");
            ExitCode::from(2)
        }
    }
}

fn run() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let (Some(path), Some(raw_start), Some(raw_end)) = (args.next(), args.next(), args.next())
    else {
        anyhow::bail!("usage: report <snapshot.json> <start> <end>");
    };

    let start = parse_iso_date(&raw_start)
        .ok_or_else(|| anyhow::anyhow!("invalid start date: {raw_start}"))?;
    let end =
        parse_iso_date(&raw_end).ok_or_else(|| anyhow::anyhow!("invalid end date: {raw_end}"))?;

    // Load configuration
    let config = AppConfig::load().map_err(|e| anyhow::anyhow!("failed to load config: {e}"))?;

    let raw = std::fs::read_to_string(&path)?;
    let document: serde_json::Value = serde_json::from_str(&raw)?;

    let report = ingest::parse_snapshot(&document);
    if !report.is_clean() {
        warn!(
            skipped = report.skipped.len(),
            "some records were skipped during ingestion"
        );
    }
    info!(
        sales = report.snapshot.sales.len(),
        debts = report.snapshot.debts.len(),
        checks = report.snapshot.checks.len(),
        boletos = report.snapshot.boletos.len(),
        "snapshot loaded"
    );

    let classifier = EventClassifier::new(ExpansionOptions::from_config(&config.engine));
    let cache = SummaryCache::with_config(config.cache.max_capacity, config.cache.ttl_secs);
    let summary = cache.aggregate_cached(&path, &classifier, &report.snapshot, start, end);

    println!("{}", serde_json::to_string_pretty(summary.as_ref())?);
    Ok(())
}
