#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Temporal and categorical aggregation of incident records.
//!
//! The pipeline is extract → count → reindex → summarize:
//!
//! * [`extract`] derives a grouping key (month, weekday, hour) from a raw
//!   cell, or nothing when the cell cannot be interpreted.
//! * [`counter`] counts records by that key and a secondary split key.
//! * [`reindex`] lays the counts out over a fixed, ordered domain.
//! * [`extremum`] picks the highest and lowest totals.
//!
//! [`ranking`] covers the free-text fields, and [`breakdown`] wires the
//! stages together into the analyses the CLI renders. Every function is
//! pure over a borrowed `&[Incident]`.

pub mod breakdown;
pub mod counter;
pub mod extract;
pub mod extremum;
pub mod ranking;
pub mod reindex;

use thiserror::Error;

/// Errors that can occur during aggregation.
#[derive(Debug, Error)]
pub enum AnalyticsError {
    /// Extrema were requested over an aggregation with no entries.
    #[error("aggregation has no entries to summarize")]
    EmptyAggregation,
}
