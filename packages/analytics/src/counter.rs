//! Grouped occurrence counting.

use std::collections::{BTreeMap, BTreeSet};

use crime_stats_crime_models::Incident;

/// Secondary key used when counts are not split.
pub const UNSPLIT: &str = "all";

/// Extracts a record's secondary (split) key.
pub type SecondaryKeyFn = fn(&Incident) -> &str;

/// Occurrence counts keyed by primary then secondary key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedCounts<K> {
    counts: BTreeMap<K, BTreeMap<String, u64>>,
    dropped: u64,
}

impl<K: Ord> GroupedCounts<K> {
    /// Secondary counts for one primary key.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&BTreeMap<String, u64>> {
        self.counts.get(key)
    }

    /// Iterates primary keys with their secondary counts, in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &BTreeMap<String, u64>)> {
        self.counts.iter()
    }

    /// Every secondary key seen under any primary key.
    #[must_use]
    pub fn secondary_keys(&self) -> BTreeSet<&str> {
        self.counts
            .values()
            .flat_map(|inner| inner.keys().map(String::as_str))
            .collect()
    }

    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().flat_map(BTreeMap::values).sum()
    }

    /// Records whose primary key could not be derived.
    #[must_use]
    pub const fn dropped(&self) -> u64 {
        self.dropped
    }
}

/// Counts records by `primary` key, split by `secondary` when given.
///
/// Each record adds exactly one to one cell. Records for which `primary`
/// returns `None` are not counted and are reported by
/// [`GroupedCounts::dropped`]. Without a secondary extractor every count
/// lands under [`UNSPLIT`].
pub fn count_grouped<K, P>(
    records: &[Incident],
    primary: P,
    secondary: Option<SecondaryKeyFn>,
) -> GroupedCounts<K>
where
    K: Ord,
    P: Fn(&Incident) -> Option<K>,
{
    let mut counts: BTreeMap<K, BTreeMap<String, u64>> = BTreeMap::new();
    let mut dropped = 0;

    for record in records {
        let Some(key) = primary(record) else {
            dropped += 1;
            continue;
        };

        let split = secondary.map_or(UNSPLIT, |f| f(record));
        let inner = counts.entry(key).or_default();
        if let Some(count) = inner.get_mut(split) {
            *count += 1;
        } else {
            inner.insert(split.to_owned(), 1);
        }
    }

    GroupedCounts { counts, dropped }
}
