//! Config-driven column mapping.
//!
//! [`ColumnMapping`] names the header of every column the loader reads, so
//! datasets with a different layout only need a small TOML file instead of
//! code changes. The defaults match the LAPD CSV export.

use std::path::Path;

use serde::Deserialize;

use crate::SourceError;

/// The LAPD column mapping, embedded at compile time.
pub const LAPD_TOML: &str = include_str!("../columns/lapd.toml");

/// Header names for each column the loader reads.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ColumnMapping {
    /// Record number column. Optional.
    pub record_id: Option<String>,
    /// Occurrence date/datetime column. Required.
    pub date: String,
    /// Occurrence time-of-day column (`HHMM`). Optional.
    pub time: Option<String>,
    /// Victim sex column. Optional.
    pub victim_sex: Option<String>,
    /// Crime description column. Optional.
    pub crime_description: Option<String>,
    /// Premise description column. Optional.
    pub premise_description: Option<String>,
    /// Field delimiter (single byte, default `,`).
    pub delimiter: String,
    /// Stop after this many data rows.
    pub max_records: Option<u64>,
}

impl Default for ColumnMapping {
    fn default() -> Self {
        Self {
            record_id: Some("DR_NO".to_string()),
            date: "DATE OCC".to_string(),
            time: Some("TIME OCC".to_string()),
            victim_sex: Some("Vict Sex".to_string()),
            crime_description: Some("Crm Cd Desc".to_string()),
            premise_description: Some("Premis Desc".to_string()),
            delimiter: ",".to_string(),
            max_records: None,
        }
    }
}

impl ColumnMapping {
    /// Reads a column mapping from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] if the file cannot be read or is not a valid
    /// mapping.
    pub fn from_toml_file(path: &Path) -> Result<Self, SourceError> {
        let contents = std::fs::read_to_string(path)?;
        parse_column_toml(&contents)
    }

    /// Returns the delimiter as the single byte the CSV reader expects.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Config`] if the delimiter is not exactly one
    /// byte long.
    pub fn delimiter_byte(&self) -> Result<u8, SourceError> {
        match self.delimiter.as_bytes() {
            [byte] => Ok(*byte),
            _ => Err(SourceError::Config {
                message: format!(
                    "delimiter must be a single byte, got {:?}",
                    self.delimiter
                ),
            }),
        }
    }
}

/// Parses a [`ColumnMapping`] from a TOML string. Omitted keys keep their
/// LAPD defaults.
///
/// # Errors
///
/// Returns [`SourceError::Config`] if the TOML is malformed or contains
/// unknown keys.
pub fn parse_column_toml(toml_str: &str) -> Result<ColumnMapping, SourceError> {
    toml::de::from_str(toml_str).map_err(|e| SourceError::Config {
        message: e.to_string(),
    })
}
