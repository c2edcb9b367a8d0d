//! Delimited-file loader.
//!
//! Parses a CSV (or any single-byte-delimited) file with a header row and
//! maps each row to an [`Incident`] using a [`ColumnMapping`]. Cells are
//! trimmed; blank cells become `None`. No other cleaning is done.

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crime_stats_crime_models::Incident;

use crate::SourceError;
use crate::columns::ColumnMapping;
use crate::progress::ProgressCallback;

/// How often (in rows) the progress indicator is advanced.
const PROGRESS_BATCH: u64 = 10_000;

/// Resolved header positions for one file.
#[derive(Debug)]
struct ColumnIndexes {
    record_id: Option<usize>,
    date: usize,
    time: Option<usize>,
    victim_sex: Option<usize>,
    crime_description: Option<usize>,
    premise_description: Option<usize>,
}

impl ColumnIndexes {
    fn resolve(headers: &[String], mapping: &ColumnMapping) -> Result<Self, SourceError> {
        let date = find_column(headers, &mapping.date).ok_or_else(|| {
            SourceError::MissingColumn {
                column: mapping.date.clone(),
            }
        })?;

        Ok(Self {
            record_id: optional_column(headers, mapping.record_id.as_deref()),
            date,
            time: optional_column(headers, mapping.time.as_deref()),
            victim_sex: optional_column(headers, mapping.victim_sex.as_deref()),
            crime_description: optional_column(headers, mapping.crime_description.as_deref()),
            premise_description: optional_column(headers, mapping.premise_description.as_deref()),
        })
    }
}

fn find_column(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

fn optional_column(headers: &[String], name: Option<&str>) -> Option<usize> {
    let name = name?;
    let index = find_column(headers, name);
    if index.is_none() {
        log::warn!("Column '{name}' not found in header row; treating it as empty");
    }
    index
}

fn cell(record: &csv::StringRecord, index: Option<usize>) -> Option<String> {
    let value = record.get(index?)?.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_owned())
    }
}

/// Loads every incident from the file at `path`.
///
/// # Errors
///
/// Returns [`SourceError`] if the file cannot be opened, the CSV is
/// malformed, or the date column is missing from the header row.
pub fn load_incidents(
    path: &Path,
    mapping: &ColumnMapping,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Vec<Incident>, SourceError> {
    log::info!("Loading incidents from {}", path.display());
    let file = File::open(path)?;
    read_incidents(file, mapping, progress)
}

/// Reads incidents from any reader producing delimited text.
///
/// # Errors
///
/// Returns [`SourceError`] if the CSV is malformed or the date column is
/// missing from the header row.
pub fn read_incidents<R: Read>(
    reader: R,
    mapping: &ColumnMapping,
    progress: &Arc<dyn ProgressCallback>,
) -> Result<Vec<Incident>, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(mapping.delimiter_byte()?)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim().to_owned())
        .collect();

    let columns = ColumnIndexes::resolve(&headers, mapping)?;
    log::debug!("Resolved columns: {columns:?}");

    let mut incidents = Vec::new();
    let mut since_tick: u64 = 0;

    for result in reader.records() {
        if let Some(max) = mapping.max_records
            && incidents.len() as u64 >= max
        {
            log::info!("Reached max_records limit ({max}), stopping CSV parse");
            break;
        }

        let record = result?;

        incidents.push(Incident {
            record_id: cell(&record, columns.record_id),
            date_occurred: cell(&record, Some(columns.date)),
            time_occurred: cell(&record, columns.time),
            victim_sex: cell(&record, columns.victim_sex),
            crime_description: cell(&record, columns.crime_description),
            premise_description: cell(&record, columns.premise_description),
        });

        since_tick += 1;
        if since_tick == PROGRESS_BATCH {
            progress.inc(since_tick);
            since_tick = 0;
        }
    }

    progress.inc(since_tick);
    progress.finish(format!("Loaded {} incidents", incidents.len()));
    log::info!("Loaded {} incidents", incidents.len());

    Ok(incidents)
}

#[cfg(test)]
mod tests {
    use std::io::Write as _;

    use crate::progress::null_progress;

    use super::*;

    const LAPD_SAMPLE: &str = "\
DR_NO,Date Rptd,DATE OCC,TIME OCC,AREA NAME,Crm Cd Desc,Vict Age,Vict Sex,Premis Desc
190326475,03/01/2020 12:00:00 AM,03/01/2020 12:00:00 AM,2130,Wilshire,VEHICLE - STOLEN,0,M,STREET
200106753,02/09/2020 12:00:00 AM,02/08/2020 12:00:00 AM,1800,Central,BURGLARY FROM VEHICLE,47,,BUS STOP/LAYOVER (ALSO QUERY 31)
200320258,11/11/2020 12:00:00 AM,11/04/2020 12:00:00 AM,1700,Southwest,BIKE - STOLEN,19,X,
";

    #[test]
    fn reads_lapd_layout() {
        let incidents = read_incidents(
            LAPD_SAMPLE.as_bytes(),
            &ColumnMapping::default(),
            &null_progress(),
        )
        .unwrap();

        assert_eq!(incidents.len(), 3);
        assert_eq!(incidents[0].record_id.as_deref(), Some("190326475"));
        assert_eq!(
            incidents[0].date_occurred.as_deref(),
            Some("03/01/2020 12:00:00 AM")
        );
        assert_eq!(incidents[0].time_occurred.as_deref(), Some("2130"));
        assert_eq!(incidents[0].victim_sex.as_deref(), Some("M"));
        assert_eq!(
            incidents[0].crime_description.as_deref(),
            Some("VEHICLE - STOLEN")
        );
        assert_eq!(incidents[0].premise_description.as_deref(), Some("STREET"));
    }

    #[test]
    fn blank_cells_become_none() {
        let incidents = read_incidents(
            LAPD_SAMPLE.as_bytes(),
            &ColumnMapping::default(),
            &null_progress(),
        )
        .unwrap();

        assert!(incidents[1].victim_sex.is_none());
        assert!(incidents[2].premise_description.is_none());
    }

    #[test]
    fn missing_date_column_is_an_error() {
        let csv = "DR_NO,TIME OCC\n1,1200\n";
        let err = read_incidents(csv.as_bytes(), &ColumnMapping::default(), &null_progress())
            .unwrap_err();
        assert!(matches!(
            err,
            SourceError::MissingColumn { ref column } if column == "DATE OCC"
        ));
    }

    #[test]
    fn missing_optional_columns_are_empty() {
        let csv = "DATE OCC\n01/15/2021\n";
        let incidents =
            read_incidents(csv.as_bytes(), &ColumnMapping::default(), &null_progress()).unwrap();
        assert_eq!(incidents.len(), 1);
        assert_eq!(incidents[0].date_occurred.as_deref(), Some("01/15/2021"));
        assert!(incidents[0].time_occurred.is_none());
        assert!(incidents[0].crime_description.is_none());
    }

    #[test]
    fn header_only_file_loads_no_records() {
        let csv = "DR_NO,DATE OCC,TIME OCC\n";
        let incidents =
            read_incidents(csv.as_bytes(), &ColumnMapping::default(), &null_progress()).unwrap();
        assert!(incidents.is_empty());
    }

    #[test]
    fn honors_max_records_and_delimiter() {
        let mapping = ColumnMapping {
            date: "occurred".to_string(),
            delimiter: ";".to_string(),
            max_records: Some(2),
            ..ColumnMapping::default()
        };
        let csv = "occurred;Vict Sex\n2021-01-01;F\n2021-01-02;M\n2021-01-03;F\n";
        let incidents = read_incidents(csv.as_bytes(), &mapping, &null_progress()).unwrap();
        assert_eq!(incidents.len(), 2);
        assert_eq!(incidents[1].victim_sex.as_deref(), Some("M"));
    }

    #[test]
    fn zero_max_records_loads_nothing() {
        let mapping = ColumnMapping {
            max_records: Some(0),
            ..ColumnMapping::default()
        };
        let csv = "DATE OCC\n01/15/2021\n01/16/2021\n";
        let incidents = read_incidents(csv.as_bytes(), &mapping, &null_progress()).unwrap();
        assert!(incidents.is_empty());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LAPD_SAMPLE.as_bytes()).unwrap();

        let incidents =
            load_incidents(file.path(), &ColumnMapping::default(), &null_progress()).unwrap();
        assert_eq!(incidents.len(), 3);
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_incidents(
            Path::new("/nonexistent/crime_data.csv"),
            &ColumnMapping::default(),
            &null_progress(),
        )
        .unwrap_err();
        assert!(matches!(err, SourceError::Io(_)));
    }
}
