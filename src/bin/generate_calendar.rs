#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use chrono::{Datelike, Local};
use clap::Parser;
use writable_calendar::{io, DocxRenderer, MonthGrid, RuleSet};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Writable month-per-page .docx calendar with holidays and observances
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Calendar year (defaults to the current year)
    #[arg(value_parser = clap::value_parser!(i32).range(1583..=9999))]
    year: Option<i32>,

    /// Also write the resolved observances to this JSON file
    #[cfg(feature = "serde")]
    #[arg(long)]
    events_json: Option<String>,

    /// Enable logs (feature `logging`)
    #[arg(long)]
    log: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let year = cli.year.unwrap_or_else(|| Local::now().year());
    let out = io::default_output_name(year);
    io::preflight(&out)?;

    let calendar = RuleSet::builtin()
        .resolve_year(year)
        .with_context(|| format!("resolving observances for {year}"))?;
    #[cfg(feature = "logging")]
    tracing::debug!(year, annotated_days = calendar.len(), "rules resolved");

    #[cfg(feature = "serde")]
    if let Some(path) = &cli.events_json {
        io::export_events_json(path, &calendar)
            .with_context(|| format!("exporting observances to {path}"))?;
    }

    let mut grids = Vec::with_capacity(12);
    for month in 1..=12 {
        grids.push(MonthGrid::build(year, month, &calendar)?);
    }

    DocxRenderer::new().write_to_path(&grids, &out)?;
    println!("Calendar successfully saved as: {out}");
    Ok(())
}
