//! Derived-key extraction.
//!
//! Pure functions that turn a raw cell into a grouping key. A value that
//! cannot be interpreted yields `None`, which drops the record from the
//! aggregation asking for that key and from nothing else.

use chrono::{Datelike as _, NaiveDate, NaiveDateTime};
use crime_stats_crime_models::{HOURS_PER_DAY, Incident, Month, Weekday};

/// Datetime layouts seen in public incident exports, tried in order.
const DATETIME_FORMATS: &[&str] = &[
    // LAPD CSV export: "03/01/2020 12:00:00 AM"
    "%m/%d/%Y %I:%M:%S %p",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    // Socrata JSON: "2020-03-01T00:00:00.000"
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];

/// Date-only layouts, interpreted as midnight.
const DATE_FORMATS: &[&str] = &["%m/%d/%Y", "%Y-%m-%d"];

/// Parses an occurrence timestamp.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(dt);
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Month in which a raw timestamp falls.
#[must_use]
pub fn month_of(raw: &str) -> Option<Month> {
    Month::from_number(parse_timestamp(raw)?.month())
}

/// Day of the week on which a raw timestamp falls.
#[must_use]
pub fn weekday_of(raw: &str) -> Option<Weekday> {
    Weekday::from_days_from_monday(parse_timestamp(raw)?.weekday().num_days_from_monday())
}

/// Hour bucket of an `HHMM`-encoded time value (`"2359"` is hour 23).
///
/// The value must be numeric; decimal text such as `"1200.0"` is accepted.
/// Negative, non-finite, or past-midnight values have no hour.
#[must_use]
pub fn hour_of(raw: &str) -> Option<u8> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() || value < 0.0 {
        return None;
    }

    let hour = (value / 100.0).floor();
    if hour >= f64::from(HOURS_PER_DAY) {
        return None;
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(hour as u8)
}

/// Month key of an incident's occurrence date.
#[must_use]
pub fn month_key(incident: &Incident) -> Option<Month> {
    incident.date_occurred.as_deref().and_then(month_of)
}

/// Weekday key of an incident's occurrence date.
#[must_use]
pub fn weekday_key(incident: &Incident) -> Option<Weekday> {
    incident.date_occurred.as_deref().and_then(weekday_of)
}

/// Hour key of an incident's occurrence time.
#[must_use]
pub fn hour_key(incident: &Incident) -> Option<u8> {
    incident.time_occurred.as_deref().and_then(hour_of)
}
