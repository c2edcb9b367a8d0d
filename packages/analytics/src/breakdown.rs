//! End-to-end analyses over a loaded dataset.
//!
//! Each function takes the immutable record slice and builds a fresh
//! result; nothing is cached between calls.

use std::fmt::Debug;

use crime_stats_analytics_models::{
    AnalysisReport, BucketCounts, DimensionSummary, Extremum, SummaryEntry, SummaryReport,
    TemporalBreakdown,
};
use crime_stats_crime_models::{
    CategoricalField, Incident, Month, TimeDimension, Weekday, hour_label, hours,
};

use crate::AnalyticsError;
use crate::counter::count_grouped;
use crate::extract::{hour_key, month_key, weekday_key};
use crate::extremum::extrema;
use crate::ranking::top_categories;
use crate::reindex::reindex;

/// Counts incidents per canonical bucket of `dimension`, split by victim
/// sex.
#[must_use]
pub fn temporal_breakdown(records: &[Incident], dimension: TimeDimension) -> TemporalBreakdown {
    match dimension {
        TimeDimension::Month => breakdown_over(
            records,
            dimension,
            Month::all(),
            month_key,
            ToString::to_string,
        ),
        TimeDimension::Day => breakdown_over(
            records,
            dimension,
            Weekday::all(),
            weekday_key,
            ToString::to_string,
        ),
        TimeDimension::Hour => {
            breakdown_over(records, dimension, &hours(), hour_key, |h| hour_label(*h))
        }
    }
}

fn breakdown_over<K, F, L>(
    records: &[Incident],
    dimension: TimeDimension,
    domain: &[K],
    key: F,
    label: L,
) -> TemporalBreakdown
where
    K: Ord + Clone + Debug,
    F: Fn(&Incident) -> Option<K>,
    L: Fn(&K) -> String,
{
    let grouped = count_grouped(records, key, Some(Incident::victim_sex_key));
    let dropped = grouped.dropped();
    if dropped > 0 {
        log::debug!("{dimension}: skipped {dropped} record(s) without a usable value");
    }

    let buckets = reindex(&grouped, domain)
        .into_iter()
        .map(|bucket| BucketCounts {
            label: label(&bucket.key),
            total: bucket.total(),
            by_sex: bucket.counts,
        })
        .collect();

    TemporalBreakdown {
        dimension,
        buckets,
        dropped,
    }
}

/// Finds the most and least frequent buckets of a breakdown.
///
/// Totals include every victim sex code, not only `M` and `F`.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptyAggregation`] if the breakdown has no
/// buckets.
pub fn dimension_summary(
    breakdown: &TemporalBreakdown,
) -> Result<DimensionSummary, AnalyticsError> {
    let totals: Vec<(&str, u64)> = breakdown
        .buckets
        .iter()
        .map(|bucket| (bucket.label.as_str(), bucket.total))
        .collect();

    let found = extrema(&totals)?;

    Ok(DimensionSummary {
        dimension: breakdown.dimension,
        most: Extremum {
            label: found.most.key.to_owned(),
            count: found.most.total,
        },
        least: Extremum {
            label: found.least.key.to_owned(),
            count: found.least.total,
        },
    })
}

/// Summarizes each breakdown. A breakdown that cannot be summarized is
/// recorded as failed without affecting the others.
#[must_use]
pub fn summarize(breakdowns: &[TemporalBreakdown]) -> SummaryReport {
    let entries = breakdowns
        .iter()
        .map(|breakdown| match dimension_summary(breakdown) {
            Ok(summary) => SummaryEntry::Ok(summary),
            Err(e) => {
                log::warn!("Could not summarize {}: {e}", breakdown.dimension);
                SummaryEntry::Failed {
                    dimension: breakdown.dimension,
                    message: e.to_string(),
                }
            }
        })
        .collect();

    SummaryReport { entries }
}

/// Breakdowns for every time dimension, in [`TimeDimension::all`] order.
#[must_use]
pub fn all_breakdowns(records: &[Incident]) -> Vec<TemporalBreakdown> {
    TimeDimension::all()
        .iter()
        .map(|dimension| temporal_breakdown(records, *dimension))
        .collect()
}

/// Most/least frequent month, day and hour.
#[must_use]
pub fn summary_report(records: &[Incident]) -> SummaryReport {
    summarize(&all_breakdowns(records))
}

/// The complete analysis: every breakdown, every ranking (`limit` entries
/// each) and the summary.
#[must_use]
pub fn full_report(records: &[Incident], limit: usize) -> AnalysisReport {
    log::info!("Analyzing {} incidents", records.len());

    let breakdowns = all_breakdowns(records);
    let summary = summarize(&breakdowns);
    let rankings = CategoricalField::all()
        .iter()
        .map(|field| top_categories(records, *field, limit))
        .collect();

    AnalysisReport {
        total_records: records.len() as u64,
        breakdowns,
        rankings,
        summary,
    }
}
