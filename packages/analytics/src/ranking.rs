//! Frequency ranking of categorical fields.

use std::collections::BTreeMap;

use crime_stats_analytics_models::{CategoryCount, CategoryRanking};
use crime_stats_crime_models::{CategoricalField, Incident};

/// Default number of entries in a ranking.
pub const DEFAULT_LIMIT: usize = 10;

/// Ranks the values of `field` by how often they occur.
///
/// Absent values are counted under the literal `"missing"` bucket rather
/// than skipped. Entries are sorted by count, highest first; equal counts
/// keep the order in which the values first appear in `records`. At most
/// `limit` entries are returned.
#[must_use]
pub fn top_categories(
    records: &[Incident],
    field: CategoricalField,
    limit: usize,
) -> CategoryRanking {
    // value -> (first position, count)
    let mut tally: BTreeMap<&str, (usize, u64)> = BTreeMap::new();

    for (position, record) in records.iter().enumerate() {
        tally
            .entry(record.categorical(field))
            .or_insert((position, 0))
            .1 += 1;
    }

    let mut ranked: Vec<(&str, usize, u64)> = tally
        .into_iter()
        .map(|(value, (first, count))| (value, first, count))
        .collect();
    ranked.sort_by(|a, b| b.2.cmp(&a.2).then(a.1.cmp(&b.1)));

    log::debug!(
        "Ranked {} distinct {field} values, keeping {limit}",
        ranked.len()
    );
    ranked.truncate(limit);

    CategoryRanking {
        field,
        limit,
        entries: ranked
            .into_iter()
            .map(|(category, _, count)| CategoryCount {
                category: category.to_owned(),
                count,
            })
            .collect(),
    }
}
