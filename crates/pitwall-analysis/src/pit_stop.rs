//! Pit-stop efficiency per constructor
//!
//! Compares how long a constructor's pit stops take on average with the
//! points it scored over the season.
//!
//! # Pipeline
//!
//! 1. Pit stops of the season's races
//! 2. [`remove_outliers`]: drop stops outside `mean ± k * sample_std_dev`
//!    (red flags and drive-through penalties show up as very long stops)
//! 3. [`associate_constructors`]: map each stop to the constructor its driver
//!    raced for in that race
//! 4. [`aggregate_by_constructor`]: total duration and stop count
//! 5. Join with the constructor's season points

use std::collections::{BTreeMap, BTreeSet, HashMap};

use pitwall_data::{
    ConstructorId, DriverId, RaceId,
    record::{ConstructorResult, PitStop, RaceResult},
};
use pitwall_stats::{correlation, descriptive::DescriptiveStats};
use serde::Serialize;

use crate::{AnalysisError, Analyzer};

/// Default half-width of the kept band, in sample standard deviations.
pub const DEFAULT_STD_DEVS: f64 = 2.0;

/// Pit-stop summary of one constructor over a season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ConstructorPitStats {
    pub constructor: ConstructorId,
    pub points: f64,
    pub stops: u32,
    pub total_ms: u64,
    /// `None` when no stop of the constructor survived filtering.
    pub mean_pit_ms: Option<f64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PitTotals {
    pub stops: u32,
    pub total_ms: u64,
}

/// Keeps the stops whose duration lies within `std_devs` sample standard
/// deviations of the mean (bounds inclusive).
///
/// With fewer than two stops the spread is undefined and nothing is removed.
#[must_use]
pub fn remove_outliers(stops: &[PitStop], std_devs: f64) -> Vec<PitStop> {
    let Some(stats) = DescriptiveStats::new(stops.iter().map(|stop| f64::from(stop.milliseconds)))
    else {
        return vec![];
    };
    let Some(std_dev) = stats.sample_std_dev else {
        return stops.to_vec();
    };
    let lower = stats.mean - std_devs * std_dev;
    let upper = stats.mean + std_devs * std_dev;
    tracing::debug!(
        stops = stats.count,
        fastest_ms = stats.min,
        slowest_ms = stats.max,
        lower_ms = lower,
        upper_ms = upper,
        "pit-stop band"
    );
    stops
        .iter()
        .filter(|stop| (lower..=upper).contains(&f64::from(stop.milliseconds)))
        .copied()
        .collect()
}

/// Pairs each stop with its driver's constructor in that race.
///
/// Stops without a matching race result are dropped.
#[must_use]
pub fn associate_constructors(
    stops: &[PitStop],
    results: &[RaceResult],
) -> Vec<(ConstructorId, PitStop)> {
    let constructors = results
        .iter()
        .map(|result| ((result.race, result.driver), result.constructor))
        .collect::<HashMap<(RaceId, DriverId), ConstructorId>>();
    stops
        .iter()
        .filter_map(|stop| {
            let constructor = constructors.get(&(stop.race, stop.driver))?;
            Some((*constructor, *stop))
        })
        .collect()
}

#[must_use]
pub fn aggregate_by_constructor(
    stops: &[(ConstructorId, PitStop)],
) -> BTreeMap<ConstructorId, PitTotals> {
    let mut totals = BTreeMap::<ConstructorId, PitTotals>::new();
    for (constructor, stop) in stops {
        let entry = totals.entry(*constructor).or_default();
        entry.stops += 1;
        entry.total_ms += u64::from(stop.milliseconds);
    }
    totals
}

/// Sums constructor points over `races`.
#[must_use]
pub fn constructor_points(
    results: &[ConstructorResult],
    races: &BTreeSet<RaceId>,
) -> BTreeMap<ConstructorId, f64> {
    let mut points = BTreeMap::<ConstructorId, f64>::new();
    for result in results.iter().filter(|r| races.contains(&r.race)) {
        *points.entry(result.constructor).or_default() += result.points;
    }
    points
}

/// Pearson correlation of mean pit-stop time against points, over the
/// constructors that have a mean.
#[must_use]
pub fn pit_time_points_pearson(stats: &[ConstructorPitStats]) -> Option<f64> {
    let (means, points): (Vec<f64>, Vec<f64>) = stats
        .iter()
        .filter_map(|s| Some((s.mean_pit_ms?, s.points)))
        .unzip();
    correlation::pearson(&means, &points)
}

impl Analyzer<'_> {
    /// Mean pit-stop time and season points of every constructor that scored
    /// results in `year`.
    ///
    /// # Arguments
    ///
    /// * `year` - Season, validated against the configured race years
    /// * `std_devs` - Half-width of the kept duration band, in sample standard
    ///   deviations ([`DEFAULT_STD_DEVS`] in the CLI)
    ///
    /// # Returns
    ///
    /// * `Ok(stats)` - one [`ConstructorPitStats`] per constructor, ordered by
    ///   constructor id
    /// * `Err(_)` - [`AnalysisError::InvalidStdDevs`] when `std_devs` is not
    ///   finite and positive, or a year-range error
    ///
    /// # Examples
    ///
    /// ```
    /// use pitwall_analysis::{AnalysisConfig, Analyzer, ErrorKind, pit_stop::DEFAULT_STD_DEVS};
    /// use pitwall_data::Dataset;
    ///
    /// let dataset = Dataset::default();
    /// let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
    ///
    /// assert!(analyzer.pit_stop_efficiency(2023, DEFAULT_STD_DEVS).unwrap().is_empty());
    /// let err = analyzer.pit_stop_efficiency(2023, 0.0).unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    /// ```
    pub fn pit_stop_efficiency(
        &self,
        year: i32,
        std_devs: f64,
    ) -> Result<Vec<ConstructorPitStats>, AnalysisError> {
        if !std_devs.is_finite() || std_devs <= 0.0 {
            return Err(AnalysisError::InvalidStdDevs { std_devs });
        }
        let dataset = self.dataset();
        let races = self.races_for_year(year)?;

        let season_stops = dataset
            .pit_stops
            .iter()
            .filter(|stop| races.contains(&stop.race))
            .copied()
            .collect::<Vec<_>>();
        let kept = remove_outliers(&season_stops, std_devs);
        tracing::debug!(
            year,
            stops = season_stops.len(),
            outliers = season_stops.len() - kept.len(),
            "pit stops filtered"
        );

        let totals = aggregate_by_constructor(&associate_constructors(&kept, &dataset.results));
        let stats = constructor_points(&dataset.constructor_results, &races)
            .into_iter()
            .map(|(constructor, points)| {
                let PitTotals { stops, total_ms } =
                    totals.get(&constructor).copied().unwrap_or_default();
                #[expect(clippy::cast_precision_loss)]
                let mean_pit_ms = (stops > 0).then(|| total_ms as f64 / f64::from(stops));
                ConstructorPitStats {
                    constructor,
                    points,
                    stops,
                    total_ms,
                    mean_pit_ms,
                }
            })
            .collect();
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AnalysisConfig, ErrorKind, fixture};

    fn stop(race: u32, driver: DriverId, milliseconds: u32) -> PitStop {
        PitStop {
            race: RaceId(race),
            driver,
            stop: 1,
            lap: 10,
            milliseconds,
        }
    }

    #[test]
    fn test_remove_outliers_drops_values_outside_band() {
        let stops = [
            stop(20, fixture::ACE, 22_000),
            stop(20, fixture::ACE, 23_000),
            stop(20, fixture::BRAKE, 24_000),
            stop(21, fixture::ACE, 21_000),
            stop(21, fixture::BRAKE, 25_000),
            stop(21, fixture::BRAKE, 90_000),
        ];
        let kept = remove_outliers(&stops, 2.0);
        assert_eq!(kept.len(), 5);
        assert!(kept.iter().all(|s| s.milliseconds < 90_000));

        // a wide band keeps everything
        assert_eq!(remove_outliers(&stops, 10.0).len(), 6);
    }

    #[test]
    fn test_remove_outliers_small_inputs() {
        assert!(remove_outliers(&[], 2.0).is_empty());
        let single = [stop(20, fixture::ACE, 22_000)];
        assert_eq!(remove_outliers(&single, 2.0), single);
    }

    #[test]
    fn test_associate_constructors_drops_unmatched() {
        let dataset = fixture::dataset();
        let stops = [
            stop(20, fixture::ACE, 22_000),
            stop(20, fixture::CRASH, 30_000),
        ];
        let pairs = associate_constructors(&stops, &dataset.results);
        assert_eq!(pairs, [(fixture::ALPHA, stops[0])]);
    }

    #[test]
    fn test_pit_stop_efficiency() {
        let dataset = fixture::dataset();
        let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
        let stats = analyzer.pit_stop_efficiency(2023, DEFAULT_STD_DEVS).unwrap();

        assert_eq!(
            stats.iter().map(|s| s.constructor).collect::<Vec<_>>(),
            [fixture::ALPHA, fixture::BETA, fixture::GAMMA]
        );

        assert_eq!(stats[0].stops, 3);
        assert_eq!(stats[0].total_ms, 66_000);
        assert_eq!(stats[0].mean_pit_ms, Some(22_000.0));
        assert!((stats[0].points - 43.0).abs() < 1e-9);

        // the 90s stop is an outlier
        assert_eq!(stats[1].stops, 2);
        assert_eq!(stats[1].mean_pit_ms, Some(24_500.0));

        assert_eq!(stats[2].stops, 0);
        assert_eq!(stats[2].mean_pit_ms, None);
        assert!((stats[2].points - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_pit_stop_efficiency_rejects_bad_band() {
        let dataset = fixture::dataset();
        let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
        for std_devs in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = analyzer.pit_stop_efficiency(2023, std_devs).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
        let err = analyzer.pit_stop_efficiency(2024, 2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn test_pit_time_points_pearson() {
        let row = |constructor, points, mean_pit_ms| ConstructorPitStats {
            constructor,
            points,
            stops: 1,
            total_ms: 0,
            mean_pit_ms,
        };
        // quicker stops, more points
        let stats = [
            row(fixture::ALPHA, 30.0, Some(21_000.0)),
            row(fixture::BETA, 20.0, Some(22_000.0)),
            row(fixture::GAMMA, 10.0, Some(23_000.0)),
            row(ConstructorId(4), 99.0, None),
        ];
        let r = pit_time_points_pearson(&stats).unwrap();
        assert!((r + 1.0).abs() < 1e-9);

        // equal points leave no variance to correlate
        let dataset = fixture::dataset();
        let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
        let stats = analyzer.pit_stop_efficiency(2023, DEFAULT_STD_DEVS).unwrap();
        assert_eq!(pit_time_points_pearson(&stats), None);
    }
}
