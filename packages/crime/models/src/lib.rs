#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Incident record and canonical time domains.
//!
//! This crate defines the row shape handed from the loader to the
//! aggregation engine, plus the fixed, ordered domains (months, weekdays,
//! hours) that every temporal breakdown is reindexed against.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Literal bucket used for absent categorical or secondary values.
pub const MISSING: &str = "missing";

/// Victim sex code for male victims.
pub const SEX_MALE: &str = "M";

/// Victim sex code for female victims.
pub const SEX_FEMALE: &str = "F";

/// Number of hour buckets in a day.
pub const HOURS_PER_DAY: u8 = 24;

/// One row of an incident dataset.
///
/// Every field is the raw, trimmed cell text; blank cells are `None`.
/// Typed interpretation (timestamps, hours) happens at aggregation time so
/// that an unparseable value only affects the aggregations that need it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Source record number (e.g. LAPD `DR_NO`). Diagnostics only.
    pub record_id: Option<String>,
    /// Date (or datetime) the incident occurred.
    pub date_occurred: Option<String>,
    /// Time of day the incident occurred, `HHMM`-style numeric text.
    pub time_occurred: Option<String>,
    /// Victim sex code (`M`, `F`, `X`, ...).
    pub victim_sex: Option<String>,
    /// Crime code description.
    pub crime_description: Option<String>,
    /// Premise description.
    pub premise_description: Option<String>,
}

impl Incident {
    /// Returns the victim sex code, or [`MISSING`] when absent.
    #[must_use]
    pub fn victim_sex_key(&self) -> &str {
        self.victim_sex.as_deref().unwrap_or(MISSING)
    }

    /// Returns the value of a categorical field, or [`MISSING`] when absent.
    #[must_use]
    pub fn categorical(&self, field: CategoricalField) -> &str {
        let value = match field {
            CategoricalField::CrimeDescription => self.crime_description.as_deref(),
            CategoricalField::PremiseDescription => self.premise_description.as_deref(),
        };
        value.unwrap_or(MISSING)
    }
}

/// Month of the year, in calendar order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    /// Creates a month from its 1-based calendar number.
    #[must_use]
    pub const fn from_number(number: u32) -> Option<Self> {
        match number {
            1 => Some(Self::January),
            2 => Some(Self::February),
            3 => Some(Self::March),
            4 => Some(Self::April),
            5 => Some(Self::May),
            6 => Some(Self::June),
            7 => Some(Self::July),
            8 => Some(Self::August),
            9 => Some(Self::September),
            10 => Some(Self::October),
            11 => Some(Self::November),
            12 => Some(Self::December),
            _ => None,
        }
    }

    /// Returns all months in calendar order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::January,
            Self::February,
            Self::March,
            Self::April,
            Self::May,
            Self::June,
            Self::July,
            Self::August,
            Self::September,
            Self::October,
            Self::November,
            Self::December,
        ]
    }
}

/// Day of the week, Monday first.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// Creates a weekday from the number of days since Monday (0-6).
    #[must_use]
    pub const fn from_days_from_monday(days: u32) -> Option<Self> {
        match days {
            0 => Some(Self::Monday),
            1 => Some(Self::Tuesday),
            2 => Some(Self::Wednesday),
            3 => Some(Self::Thursday),
            4 => Some(Self::Friday),
            5 => Some(Self::Saturday),
            6 => Some(Self::Sunday),
            _ => None,
        }
    }

    /// Returns all weekdays, Monday first.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Monday,
            Self::Tuesday,
            Self::Wednesday,
            Self::Thursday,
            Self::Friday,
            Self::Saturday,
            Self::Sunday,
        ]
    }
}

/// Returns the hour-of-day domain, `0..=23` in ascending order.
#[must_use]
pub fn hours() -> Vec<u8> {
    (0..HOURS_PER_DAY).collect()
}

/// Formats an hour bucket as a zero-padded 24-hour label (`"07:00"`).
#[must_use]
pub fn hour_label(hour: u8) -> String {
    format!("{hour:02}:00")
}

/// A time dimension that incidents can be broken down by.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TimeDimension {
    /// Month of the year.
    Month,
    /// Day of the week.
    Day,
    /// Hour of the day.
    Hour,
}

impl TimeDimension {
    /// Human-readable name used in report lines ("Month", "Day", "Hour").
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Month => "Month",
            Self::Day => "Day",
            Self::Hour => "Hour",
        }
    }

    /// Number of buckets in this dimension's canonical domain.
    #[must_use]
    pub const fn domain_len(self) -> usize {
        match self {
            Self::Month => 12,
            Self::Day => 7,
            Self::Hour => HOURS_PER_DAY as usize,
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Month, Self::Day, Self::Hour]
    }
}

/// A free-text categorical field that can be ranked by frequency.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CategoricalField {
    /// Crime code description.
    #[strum(serialize = "crime")]
    CrimeDescription,
    /// Premise (location type) description.
    #[strum(serialize = "premise")]
    PremiseDescription,
}

impl CategoricalField {
    /// Axis label for this field.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::CrimeDescription => "Crime Description",
            Self::PremiseDescription => "Premise Description",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::CrimeDescription, Self::PremiseDescription]
    }
}
