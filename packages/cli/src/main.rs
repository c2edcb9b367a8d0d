#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for crime incident statistics.
//!
//! Loads a CSV export once, then prints temporal breakdowns, frequency
//! rankings and a most/least dangerous summary, or exports the whole
//! analysis as JSON.
//!
//! Uses `indicatif-log-bridge` (via [`crime_stats_cli_utils::init_logger`])
//! so log output and the load spinner share the terminal cleanly.

mod chart;
mod format;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use clap::{Parser, Subcommand};
use crime_stats_analytics::breakdown::{
    all_breakdowns, full_report, summarize, summary_report, temporal_breakdown,
};
use crime_stats_analytics::ranking::{DEFAULT_LIMIT, top_categories};
use crime_stats_cli_utils::IndicatifProgress;
use crime_stats_crime_models::{CategoricalField, Incident, TimeDimension};
use crime_stats_source::{ColumnMapping, load_incidents};

#[derive(Debug, Parser)]
#[command(
    name = "crime_stats",
    about = "Descriptive statistics for crime incident datasets"
)]
struct Cli {
    /// Path to the incident CSV file
    input: PathBuf,
    /// TOML file mapping dataset columns (defaults to the LAPD layout)
    #[arg(long)]
    columns: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the most/least dangerous month, day and hour
    Summary,
    /// Chart incidents by one time dimension, split by victim sex
    Breakdown {
        /// Dimension to group by: month, day or hour
        dimension: TimeDimension,
    },
    /// Chart the most frequent values of a categorical field
    Top {
        /// Field to rank: crime or premise
        field: CategoricalField,
        /// Number of entries to show
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
    /// Write the full analysis as JSON
    Export {
        /// Output file path
        #[arg(long)]
        output: PathBuf,
        /// Number of entries per ranking
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: usize,
    },
}

/// Serializes the full analysis of `incidents` as pretty-printed JSON.
fn export_json(incidents: &[Incident], limit: usize) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(&full_report(incidents, limit))
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let multi = crime_stats_cli_utils::init_logger();
    let cli = Cli::parse();

    let mapping = match &cli.columns {
        Some(path) => ColumnMapping::from_toml_file(path)?,
        None => ColumnMapping::default(),
    };

    let start = Instant::now();
    let progress = IndicatifProgress::rows_spinner(&multi, "Loading incidents");
    let incidents = load_incidents(&cli.input, &mapping, &progress)?;
    log::info!(
        "Loaded {} incidents in {:.1}s",
        incidents.len(),
        start.elapsed().as_secs_f64()
    );

    match cli.command {
        None => {
            let breakdowns = all_breakdowns(&incidents);
            for breakdown in &breakdowns {
                println!("{}", chart::temporal_chart(breakdown));
            }
            for field in CategoricalField::all() {
                let ranking = top_categories(&incidents, *field, DEFAULT_LIMIT);
                println!("{}", chart::ranking_chart(&ranking));
            }
            print!("{}", report::render_summary(&summarize(&breakdowns)));
        }
        Some(Commands::Summary) => {
            print!("{}", report::render_summary(&summary_report(&incidents)));
        }
        Some(Commands::Breakdown { dimension }) => {
            let breakdown = temporal_breakdown(&incidents, dimension);
            if breakdown.dropped > 0 {
                log::info!(
                    "{} record(s) had no usable {dimension} value and were skipped",
                    breakdown.dropped
                );
            }
            println!("{}", chart::temporal_chart(&breakdown));
        }
        Some(Commands::Top { field, limit }) => {
            let ranking = top_categories(&incidents, field, limit);
            println!("{}", chart::ranking_chart(&ranking));
        }
        Some(Commands::Export { output, limit }) => {
            let json = export_json(&incidents, limit)?;
            std::fs::write(&output, json)?;
            log::info!("Wrote analysis to {}", output.display());
        }
    }

    Ok(())
}
