#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident dataset loading.
//!
//! Reads a delimited file into [`Incident`](crime_stats_crime_models::Incident)
//! records according to a [`ColumnMapping`]. This is the only crate that
//! touches the filesystem on the input side; everything downstream works
//! on an in-memory slice.

pub mod columns;
pub mod csv_file;
pub mod progress;

pub use columns::{ColumnMapping, parse_column_toml};
pub use csv_file::{load_incidents, read_incidents};

/// Errors that can occur while loading a dataset.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// I/O error (file open/read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Column mapping is invalid.
    #[error("Column mapping error: {message}")]
    Config {
        /// Description of what went wrong.
        message: String,
    },

    /// A required column is absent from the header row.
    #[error("Required column '{column}' not found in header row")]
    MissingColumn {
        /// Header name that was expected.
        column: String,
    },
}
