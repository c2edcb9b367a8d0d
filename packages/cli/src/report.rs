//! Console summary of the most and least dangerous periods.

use crime_stats_analytics_models::{SummaryEntry, SummaryReport};

use crate::format::with_thousands;

const HEADER: &str = "===== CRIME DATA SUMMARY REPORT =====";
const FOOTER: &str = "=====================================";

fn entry_lines(entry: &SummaryEntry) -> Vec<String> {
    match entry {
        SummaryEntry::Ok(summary) => {
            let title = summary.dimension.title();
            vec![
                format!(
                    "Most Dangerous {title}: {} ({} crimes)",
                    summary.most.label,
                    with_thousands(summary.most.count)
                ),
                format!(
                    "Least Dangerous {title}: {} ({} crimes)",
                    summary.least.label,
                    with_thousands(summary.least.count)
                ),
            ]
        }
        SummaryEntry::Failed { dimension, message } => {
            vec![format!("{}: no data ({message})", dimension.title())]
        }
    }
}

/// Renders the summary block printed after the charts.
#[must_use]
pub fn render_summary(report: &SummaryReport) -> String {
    let body = report
        .entries
        .iter()
        .map(|entry| entry_lines(entry).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n");

    format!("\n{HEADER}\n\n{body}\n\n{FOOTER}\n")
}
