#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Aggregation result types.
//!
//! Everything the aggregation engine hands to a renderer or exporter. All
//! types serialize to camelCase JSON.

use std::collections::BTreeMap;

use crime_stats_crime_models::{CategoricalField, SEX_FEMALE, SEX_MALE, TimeDimension};
use serde::{Deserialize, Serialize};

/// Count of incidents for one categorical value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryCount {
    /// Category value (e.g. `"BATTERY - SIMPLE ASSAULT"`).
    pub category: String,
    /// Number of incidents.
    pub count: u64,
}

/// One bucket of a temporal breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BucketCounts {
    /// Display label of the domain value (`"January"`, `"Monday"`, `"07:00"`).
    pub label: String,
    /// Counts per victim sex code.
    pub by_sex: BTreeMap<String, u64>,
    /// Sum of every per-sex count.
    pub total: u64,
}

impl BucketCounts {
    /// Count for one secondary key, zero when absent.
    #[must_use]
    pub fn count_for(&self, key: &str) -> u64 {
        self.by_sex.get(key).copied().unwrap_or(0)
    }

    /// Male victim count.
    #[must_use]
    pub fn male(&self) -> u64 {
        self.count_for(SEX_MALE)
    }

    /// Female victim count.
    #[must_use]
    pub fn female(&self) -> u64 {
        self.count_for(SEX_FEMALE)
    }
}

/// Incidents broken down by a time dimension and victim sex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemporalBreakdown {
    /// Dimension the incidents were grouped by.
    pub dimension: TimeDimension,
    /// One bucket per canonical domain value, in domain order.
    pub buckets: Vec<BucketCounts>,
    /// Records excluded because the dimension's key could not be derived.
    pub dropped: u64,
}

/// A single extreme bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extremum {
    /// Display label of the bucket.
    pub label: String,
    /// Total incidents in the bucket.
    pub count: u64,
}

/// Most and least frequent buckets of one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionSummary {
    /// Dimension summarized.
    pub dimension: TimeDimension,
    /// Bucket with the highest total.
    pub most: Extremum,
    /// Bucket with the lowest total.
    pub least: Extremum,
}

/// Outcome of summarizing one dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum SummaryEntry {
    /// The dimension had at least one bucket.
    Ok(DimensionSummary),
    /// The dimension could not be summarized.
    Failed {
        /// Dimension that failed.
        dimension: TimeDimension,
        /// Error message.
        message: String,
    },
}

/// Summary across every time dimension.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryReport {
    /// One entry per dimension, in [`TimeDimension::all`] order.
    pub entries: Vec<SummaryEntry>,
}

/// Frequency ranking of a categorical field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryRanking {
    /// Field ranked.
    pub field: CategoricalField,
    /// Requested number of entries.
    pub limit: usize,
    /// Entries sorted by count descending.
    pub entries: Vec<CategoryCount>,
}

/// The complete analysis of one dataset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Number of records analyzed.
    pub total_records: u64,
    /// Month, day and hour breakdowns.
    pub breakdowns: Vec<TemporalBreakdown>,
    /// Crime and premise rankings.
    pub rankings: Vec<CategoryRanking>,
    /// Extremum summary.
    pub summary: SummaryReport,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bucket_count_defaults_to_zero() {
        let bucket = BucketCounts {
            label: "January".to_string(),
            by_sex: BTreeMap::from([("M".to_string(), 3)]),
            total: 3,
        };
        assert_eq!(bucket.male(), 3);
        assert_eq!(bucket.female(), 0);
        assert_eq!(bucket.count_for("X"), 0);
    }

    #[test]
    fn summary_entry_serializes_with_status_tag() {
        let entry = SummaryEntry::Failed {
            dimension: TimeDimension::Hour,
            message: "empty".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["dimension"], "hour");
    }
}
