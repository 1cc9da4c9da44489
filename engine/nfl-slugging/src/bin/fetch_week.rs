//! # fetch-week
//!
//! Prints on base, slugging and OPS for every team in one week.

use anyhow::{Context, Result};
use clap::Parser;
use nfl_slugging::{
    fetch_week, initialize_logging, render_report, PlayFinderScraper, SluggingConfig, VERSION,
};
use std::path::PathBuf;
use tracing::info;

/// Fetch NFL slugging numbers for a week
#[derive(Parser)]
#[command(name = "fetch-week")]
#[command(about = "Fetch NFL slugging numbers for a week.")]
struct Cli {
    /// Which week do you want to calculate?
    week: u32,

    /// Season year (defaults to the configured season)
    #[arg(long)]
    season: Option<u32>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config =
        SluggingConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(season) = cli.season {
        config.stathead.season = season;
    }

    initialize_logging(&config.logging)?;
    info!("Starting fetch-week v{}", VERSION);

    let scraper = PlayFinderScraper::new(&config.stathead)?;
    let queries = config.query_builder()?;

    let week = fetch_week(&scraper, &queries, cli.week)
        .await
        .with_context(|| format!("Failed to fetch week {}", cli.week))?;

    // Render fully before printing so a failure leaves stdout empty.
    let report = render_report(&week)?;
    print!("{report}");

    Ok(())
}
