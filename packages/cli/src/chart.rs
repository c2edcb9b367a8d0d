//! Horizontal bar charts for the terminal.
//!
//! Temporal breakdowns render as grouped bars (male above female, one
//! group per bucket); rankings render as a single series. Bars are scaled
//! so the largest plotted value spans [`BAR_WIDTH`] cells.

use crime_stats_analytics_models::{CategoryRanking, TemporalBreakdown};
use crime_stats_crime_models::{CategoricalField, TimeDimension};

use crate::format::with_thousands;

/// Width, in cells, of the longest bar.
pub const BAR_WIDTH: usize = 40;

const MALE_BAR: char = '█';
const FEMALE_BAR: char = '▒';
const SINGLE_BAR: char = '■';

const fn temporal_title(dimension: TimeDimension) -> &'static str {
    match dimension {
        TimeDimension::Month => "Crimes by Month of the Year and Victim (Male & Female)",
        TimeDimension::Day => "Crimes by Day of the Week and Victim (Male & Female)",
        TimeDimension::Hour => "Crimes by Hour of Day and Victim (Male & Female)",
    }
}

const fn temporal_axis(dimension: TimeDimension) -> &'static str {
    match dimension {
        TimeDimension::Month => "Month of the Year",
        TimeDimension::Day => "Day of the Week",
        TimeDimension::Hour => "Hour of Day (0-23)",
    }
}

fn ranking_title(ranking: &CategoryRanking) -> String {
    let subject = match ranking.field {
        CategoricalField::CrimeDescription => "Crimes",
        CategoricalField::PremiseDescription => "Crime Locations",
    };
    format!("Top {} Most Frequent {subject}", ranking.limit)
}

/// Length of the bar for `count` when `max` spans [`BAR_WIDTH`] cells.
fn bar_len(count: u64, max: u64) -> usize {
    if max == 0 {
        return 0;
    }
    let width = BAR_WIDTH as u64;
    usize::try_from((count * width + max / 2) / max).unwrap_or(BAR_WIDTH)
}

fn bar(fill: char, count: u64, max: u64) -> String {
    std::iter::repeat_n(fill, bar_len(count, max)).collect()
}

fn label_width<'a>(labels: impl Iterator<Item = &'a str>) -> usize {
    labels.map(|l| l.chars().count()).max().unwrap_or(0)
}

/// Renders a grouped male/female bar chart for one breakdown.
#[must_use]
pub fn temporal_chart(breakdown: &TemporalBreakdown) -> String {
    let max = breakdown
        .buckets
        .iter()
        .map(|b| b.male().max(b.female()))
        .max()
        .unwrap_or(0);
    let width = label_width(breakdown.buckets.iter().map(|b| b.label.as_str()));

    let mut lines = vec![
        temporal_title(breakdown.dimension).to_string(),
        format!(
            "{} / Number of Reported Crimes   {MALE_BAR} Male  {FEMALE_BAR} Female",
            temporal_axis(breakdown.dimension)
        ),
        String::new(),
    ];

    for bucket in &breakdown.buckets {
        lines.push(format!(
            "{:<width$}  {} {}",
            bucket.label,
            bar(MALE_BAR, bucket.male(), max),
            with_thousands(bucket.male())
        ));
        lines.push(format!(
            "{:<width$}  {} {}",
            "",
            bar(FEMALE_BAR, bucket.female(), max),
            with_thousands(bucket.female())
        ));
    }

    to_block(&lines)
}

/// Renders a single-series bar chart for a ranking.
#[must_use]
pub fn ranking_chart(ranking: &CategoryRanking) -> String {
    let max = ranking.entries.first().map_or(0, |e| e.count);
    let width = label_width(ranking.entries.iter().map(|e| e.category.as_str()));

    let mut lines = vec![
        ranking_title(ranking),
        format!("{} / Number of Reported Crimes", ranking.field.title()),
        String::new(),
    ];

    if ranking.entries.is_empty() {
        lines.push("(no data)".to_string());
    }

    lines.extend(ranking.entries.iter().map(|entry| {
        format!(
            "{:<width$}  {} {}",
            entry.category,
            bar(SINGLE_BAR, entry.count, max),
            with_thousands(entry.count)
        )
    }));

    to_block(&lines)
}

/// Joins chart rows, each terminated by a newline.
fn to_block(lines: &[String]) -> String {
    lines.iter().map(|line| format!("{line}\n")).collect()
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use crime_stats_analytics_models::{BucketCounts, CategoryCount};

    use super::*;

    fn bucket(label: &str, male: u64, female: u64) -> BucketCounts {
        BucketCounts {
            label: label.to_string(),
            by_sex: BTreeMap::from([("M".to_string(), male), ("F".to_string(), female)]),
            total: male + female,
        }
    }

    #[test]
    fn bars_scale_to_largest_value() {
        assert_eq!(bar_len(10, 10), BAR_WIDTH);
        assert_eq!(bar_len(5, 10), BAR_WIDTH / 2);
        assert_eq!(bar_len(0, 10), 0);
        assert_eq!(bar_len(0, 0), 0);
    }

    #[test]
    fn temporal_chart_has_two_rows_per_bucket() {
        let breakdown = TemporalBreakdown {
            dimension: TimeDimension::Day,
            buckets: vec![bucket("Monday", 2_000, 1_000), bucket("Tuesday", 0, 500)],
            dropped: 0,
        };

        let chart = temporal_chart(&breakdown);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], temporal_title(TimeDimension::Day));
        assert_eq!(lines.len(), 3 + 4);
        assert!(lines[3].starts_with("Monday "));
        assert!(lines[3].ends_with(" 2,000"));
        assert_eq!(lines[3].matches(MALE_BAR).count(), BAR_WIDTH);
        assert_eq!(lines[4].matches(FEMALE_BAR).count(), BAR_WIDTH / 2);
        assert!(lines[5].starts_with("Tuesday "));
        assert!(lines[5].ends_with(" 0"));
    }

    #[test]
    fn ranking_chart_lists_entries_in_order() {
        let ranking = CategoryRanking {
            field: CategoricalField::PremiseDescription,
            limit: 10,
            entries: vec![
                CategoryCount {
                    category: "STREET".to_string(),
                    count: 12_000,
                },
                CategoryCount {
                    category: "PARKING LOT".to_string(),
                    count: 3_000,
                },
            ],
        };

        let chart = ranking_chart(&ranking);
        let lines: Vec<&str> = chart.lines().collect();

        assert_eq!(lines[0], "Top 10 Most Frequent Crime Locations");
        assert!(lines[3].starts_with("STREET       "));
        assert!(lines[3].ends_with(" 12,000"));
        assert_eq!(lines[4].matches(SINGLE_BAR).count(), BAR_WIDTH / 4);
    }

    #[test]
    fn empty_ranking_says_so() {
        let ranking = CategoryRanking {
            field: CategoricalField::CrimeDescription,
            limit: 10,
            entries: vec![],
        };
        assert!(ranking_chart(&ranking).contains("(no data)"));
    }
}
