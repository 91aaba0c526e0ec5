/// Summary of a sample of `f64` values (lap times, pit-stop durations).
#[derive(Debug, Clone)]
pub struct DescriptiveStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    /// Bessel-corrected standard deviation (`n - 1` denominator); `None` for
    /// a single value.
    pub sample_std_dev: Option<f64>,
}

impl DescriptiveStats {
    /// Sorts `values` and summarizes them. `None` when `values` is empty.
    ///
    /// ```
    /// # use pitwall_stats::descriptive::DescriptiveStats;
    /// let stats = DescriptiveStats::new([24_500.0, 21_900.0, 23_100.0]).unwrap();
    /// assert_eq!(stats.count, 3);
    /// assert_eq!(stats.min, 21_900.0);
    /// assert_eq!(stats.max, 24_500.0);
    /// assert!((stats.mean - 23_166.667).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn new<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut values = values.into_iter().collect::<Vec<_>>();
        values.sort_by(f64::total_cmp);
        Self::from_sorted(&values)
    }

    /// Computes descriptive statistics from pre-sorted values.
    ///
    /// # Panics
    ///
    /// Panics if `sorted_values` is not sorted in ascending order.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn from_sorted(sorted_values: &[f64]) -> Option<Self> {
        assert!(
            sorted_values.is_sorted_by(|a, b| a <= b),
            "values must be sorted in ascending order"
        );

        let min = *sorted_values.first()?;
        let max = *sorted_values.last()?;
        let count = sorted_values.len();
        let n = count as f64;
        let mean = sorted_values.iter().sum::<f64>() / n;
        let sample_std_dev = (count > 1).then(|| {
            let squared_deviations = sorted_values
                .iter()
                .map(|v| (v - mean).powi(2))
                .sum::<f64>();
            (squared_deviations / (n - 1.0)).sqrt()
        });

        Some(Self {
            count,
            min,
            max,
            mean,
            sample_std_dev,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_values() {
        assert!(DescriptiveStats::new([]).is_none());
    }

    #[test]
    fn test_single_value() {
        let stats = DescriptiveStats::new([42.0]).unwrap();
        assert_eq!(stats.count, 1);
        assert!((stats.mean - 42.0).abs() < 1e-12);
        assert!(stats.sample_std_dev.is_none());
    }

    #[test]
    fn test_sample_std_dev() {
        let stats = DescriptiveStats::new([2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert!((stats.mean - 5.0).abs() < 1e-12);
        let sample = stats.sample_std_dev.unwrap();
        assert!((sample - (32.0_f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_unsorted_input_gives_bounds() {
        let stats = DescriptiveStats::new([90_000.0, 21_000.0, 25_000.0]).unwrap();
        assert_eq!(stats.count, 3);
        assert!((stats.min - 21_000.0).abs() < 1e-12);
        assert!((stats.max - 90_000.0).abs() < 1e-12);
    }

    #[test]
    #[should_panic(expected = "values must be sorted")]
    fn test_from_sorted_rejects_unsorted() {
        let _ = DescriptiveStats::from_sorted(&[3.0, 1.0]);
    }
}
