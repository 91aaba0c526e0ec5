//! Rescaling per-driver season metrics to percentages
//!
//! Season totals differ wildly (points systems change, seasons have more or
//! fewer laps), so both metrics are expressed as a share of their season
//! total before seasons are compared.

use std::collections::BTreeMap;

/// Rescales `values` by `100 / sum`, so the results sum to 100.
///
/// A zero sum gives zero for every key instead of dividing by zero.
///
/// # Examples
///
/// ```
/// # use pitwall_analysis::normalization::normalize;
/// let shares = normalize([("a", 3.0), ("b", 1.0)]);
/// assert_eq!(shares["a"], 75.0);
/// assert_eq!(shares["b"], 25.0);
/// ```
#[must_use]
pub fn normalize<K, I>(values: I) -> BTreeMap<K, f64>
where
    K: Ord,
    I: IntoIterator<Item = (K, f64)>,
{
    let values = values.into_iter().collect::<Vec<_>>();
    let sum = values.iter().map(|(_, value)| value).sum::<f64>();
    let scale = if sum == 0.0 { 0.0 } else { 100.0 / sum };
    values
        .into_iter()
        .map(|(key, value)| (key, value * scale))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalized_values_sum_to_100() {
        let shares = normalize([(1, 575.0), (2, 285.0), (3, 234.0), (4, 0.0)]);
        let sum = shares.values().sum::<f64>();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!(shares[&4].abs() < f64::EPSILON);
    }

    #[test]
    fn test_zero_sum_gives_zero_shares() {
        let shares = normalize([(1, 0.0), (2, 0.0)]);
        assert_eq!(shares.len(), 2);
        assert!(shares.values().all(|share| *share == 0.0));
    }

    #[test]
    fn test_empty_input() {
        let shares = normalize(Vec::<(u32, f64)>::new());
        assert!(shares.is_empty());
    }
}
