//! Reindexing grouped counts onto a canonical domain.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt::Debug;

use crate::counter::GroupedCounts;

/// Counts for one canonical domain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainBucket<K> {
    /// Domain value.
    pub key: K,
    /// Count per secondary key. Every secondary key seen in the input is
    /// present, zero where this bucket had none.
    pub counts: BTreeMap<String, u64>,
}

impl<K> DomainBucket<K> {
    /// Sum over every secondary key.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }
}

/// Lays `grouped` out over `domain`, one bucket per domain value in domain
/// order.
///
/// Domain values with no counts get an all-zero bucket. Primary keys that
/// are not part of the domain are discarded. A value repeated in `domain`
/// only produces a bucket at its first position.
pub fn reindex<K>(grouped: &GroupedCounts<K>, domain: &[K]) -> Vec<DomainBucket<K>>
where
    K: Ord + Clone + Debug,
{
    let secondary_keys = grouped.secondary_keys();
    let zeroed: BTreeMap<String, u64> = secondary_keys
        .iter()
        .map(|key| ((*key).to_owned(), 0))
        .collect();

    let out_of_domain: Vec<&K> = grouped
        .iter()
        .map(|(key, _)| key)
        .filter(|key| !domain.contains(*key))
        .collect();
    if !out_of_domain.is_empty() {
        log::debug!(
            "Discarding {} key(s) outside the canonical domain: {out_of_domain:?}",
            out_of_domain.len()
        );
    }

    let mut seen = BTreeSet::new();
    domain
        .iter()
        .filter(|key| seen.insert(*key))
        .map(|key| {
            let mut counts = zeroed.clone();
            if let Some(found) = grouped.get(key) {
                for (split, count) in found {
                    counts.insert(split.clone(), *count);
                }
            }
            DomainBucket {
                key: key.clone(),
                counts,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crime_stats_crime_models::{Incident, Month, hours};

    use super::*;
    use crate::counter::count_grouped;
    use crate::extract::{hour_key, month_key};

    fn dated(date: &str, sex: &str) -> Incident {
        Incident {
            date_occurred: Some(date.to_string()),
            victim_sex: Some(sex.to_string()),
            ..Incident::default()
        }
    }

    fn timed(time: &str) -> Incident {
        Incident {
            time_occurred: Some(time.to_string()),
            victim_sex: Some("F".to_string()),
            ..Incident::default()
        }
    }

    #[test]
    fn fills_every_domain_value_in_order() {
        let records = vec![dated("2021-01-10", "M")];
        let grouped = count_grouped(&records, month_key, Some(Incident::victim_sex_key));

        let buckets = reindex(&grouped, Month::all());

        assert_eq!(buckets.len(), 12);
        let keys: Vec<Month> = buckets.iter().map(|b| b.key).collect();
        assert_eq!(keys, Month::all());
        assert_eq!(buckets[0].total(), 1);
        assert!(buckets[1..].iter().all(|b| b.total() == 0));
    }

    #[test]
    fn zero_buckets_carry_every_secondary_key() {
        let records = vec![dated("2021-03-10", "M"), dated("2021-05-10", "X")];
        let grouped = count_grouped(&records, month_key, Some(Incident::victim_sex_key));

        let buckets = reindex(&grouped, Month::all());

        for bucket in &buckets {
            let keys: Vec<&str> = bucket.counts.keys().map(String::as_str).collect();
            assert_eq!(keys, vec!["M", "X"]);
        }
        assert_eq!(buckets[2].counts["M"], 1);
        assert_eq!(buckets[2].counts["X"], 0);
        assert_eq!(buckets[4].counts["X"], 1);
    }

    #[test]
    fn order_follows_domain_not_key_order() {
        let records = vec![dated("2021-12-01", "F"), dated("2021-01-01", "F")];
        let grouped = count_grouped(&records, month_key, Some(Incident::victim_sex_key));
        let domain = [Month::December, Month::January, Month::June];

        let buckets = reindex(&grouped, &domain);

        let keys: Vec<Month> = buckets.iter().map(|b| b.key).collect();
        assert_eq!(keys, domain);
        assert_eq!(buckets[2].total(), 0);
    }

    #[test]
    fn keys_outside_domain_are_dropped() {
        let records = vec![dated("2021-01-01", "F"), dated("2021-08-01", "F")];
        let grouped = count_grouped(&records, month_key, Some(Incident::victim_sex_key));

        let buckets = reindex(&grouped, &[Month::January]);

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[0].total(), 1);
    }

    #[test]
    fn repeated_domain_values_appear_once() {
        let grouped = count_grouped(&[], month_key, Some(Incident::victim_sex_key));
        let buckets = reindex(&grouped, &[Month::May, Month::May, Month::June]);
        assert_eq!(buckets.len(), 2);
    }

    #[test]
    fn hour_domain_is_complete() {
        let records = vec![timed("2359"), timed("0015"), timed("abc")];
        let grouped = count_grouped(&records, hour_key, Some(Incident::victim_sex_key));

        let buckets = reindex(&grouped, &hours());

        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets[0].total(), 1);
        assert_eq!(buckets[23].total(), 1);
        assert_eq!(grouped.dropped(), 1);
    }

    #[test]
    fn empty_input_yields_empty_count_maps() {
        let grouped = count_grouped(&[], month_key, Some(Incident::victim_sex_key));
        let buckets = reindex(&grouped, Month::all());
        assert_eq!(buckets.len(), 12);
        assert!(buckets.iter().all(|b| b.counts.is_empty()));
    }
}
