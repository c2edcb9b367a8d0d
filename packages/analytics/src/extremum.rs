//! Most/least frequent bucket selection.

use crate::AnalyticsError;

/// One extreme value and its total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extreme<K> {
    /// Domain value.
    pub key: K,
    /// Total count for the domain value.
    pub total: u64,
}

/// Highest and lowest totals of an ordered sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extrema<K> {
    /// Highest total.
    pub most: Extreme<K>,
    /// Lowest total.
    pub least: Extreme<K>,
}

/// Finds the highest and lowest totals in `totals`.
///
/// Ties resolve to the entry that comes first in `totals`, for both the
/// maximum and the minimum.
///
/// # Errors
///
/// Returns [`AnalyticsError::EmptyAggregation`] if `totals` is empty.
pub fn extrema<K: Clone>(totals: &[(K, u64)]) -> Result<Extrema<K>, AnalyticsError> {
    let Some((first_key, first_total)) = totals.first() else {
        return Err(AnalyticsError::EmptyAggregation);
    };

    let mut most = (first_key, *first_total);
    let mut least = (first_key, *first_total);

    for (key, total) in &totals[1..] {
        if *total > most.1 {
            most = (key, *total);
        }
        if *total < least.1 {
            least = (key, *total);
        }
    }

    Ok(Extrema {
        most: Extreme {
            key: most.0.clone(),
            total: most.1,
        },
        least: Extreme {
            key: least.0.clone(),
            total: least.1,
        },
    })
}
