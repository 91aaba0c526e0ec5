//! Cross-season fastest-lap / championship-points table
//!
//! For every season of a year range, both per-driver metrics are normalized to
//! percentages of their season total, joined by driver and appended to one
//! table. The table is what the correlation (or a scatter plot) runs on.
//!
//! # Year range
//!
//! [`Analyzer::seasons_correlation`] walks from `first_year` *down to* and
//! excluding `last_year`: `(2023, 1995)` covers 2023..=1996, and
//! `(2023, 2023)` covers nothing.

use pitwall_data::DriverId;
use serde::Serialize;

use crate::{AnalysisError, Analyzer, normalization::normalize, season::Season};

/// One driver in one season.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SeasonRow {
    pub year: i32,
    pub driver: DriverId,
    /// Share of the season's fastest laps, in percent.
    pub fast_percent: f64,
    /// Share of the season's championship points, in percent.
    pub points_percent: f64,
}

/// Season rows of a year range, in iteration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CorrelationTable {
    pub rows: Vec<SeasonRow>,
}

impl CorrelationTable {
    pub fn fast_percent(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.fast_percent)
    }

    pub fn points_percent(&self) -> impl Iterator<Item = f64> + '_ {
        self.rows.iter().map(|row| row.points_percent)
    }

    /// Distinct years, in table order.
    #[must_use]
    pub fn years(&self) -> Vec<i32> {
        let mut years = self.rows.iter().map(|row| row.year).collect::<Vec<_>>();
        years.dedup();
        years
    }

    /// Pearson correlation between fast-lap share and points share.
    #[must_use]
    pub fn pearson(&self) -> Option<f64> {
        let fast = self.fast_percent().collect::<Vec<_>>();
        let points = self.points_percent().collect::<Vec<_>>();
        pitwall_stats::correlation::pearson(&fast, &points)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Normalizes both metrics of `season` and inner-joins them by driver.
///
/// Rows follow the final standings order. Drivers present in only one of the
/// two metrics are dropped.
#[must_use]
pub fn season_rows(season: &Season) -> Vec<SeasonRow> {
    if season.standings.total() == 0.0 {
        tracing::warn!(year = season.year, "season has no championship points");
    }
    if season.attribution.counts.total() == 0 {
        tracing::warn!(year = season.year, "season has no lap timing data");
    }

    let points = normalize(season.standings.points());
    let fast = normalize(
        season
            .attribution
            .counts
            .iter()
            .map(|(driver, count)| (driver, f64::from(count))),
    );

    season
        .standings
        .drivers()
        .filter_map(|driver| {
            Some(SeasonRow {
                year: season.year,
                driver,
                fast_percent: *fast.get(&driver)?,
                points_percent: *points.get(&driver)?,
            })
        })
        .collect()
}

impl Analyzer<'_> {
    /// Builds the cross-season table from `first_year` down to, excluding, `last_year`.
    ///
    /// Both bounds are validated against the configured lap and race years
    /// before any season is computed.
    ///
    /// # Arguments
    ///
    /// * `first_year` - Most recent season, included
    /// * `last_year` - Older end of the range, excluded
    ///
    /// # Returns
    ///
    /// * `Ok(table)` - rows of every season from `first_year` down to
    ///   `last_year + 1`; empty when `first_year <= last_year`
    /// * `Err(_)` - [`AnalysisError::YearAfterSupported`] or
    ///   [`AnalysisError::YearBeforeSupported`] when a bound is outside the
    ///   supported years
    ///
    /// # Examples
    ///
    /// ```
    /// use pitwall_analysis::{AnalysisConfig, AnalysisError, Analyzer};
    /// use pitwall_data::Dataset;
    ///
    /// let dataset = Dataset::default();
    /// let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
    ///
    /// assert!(analyzer.seasons_correlation(2023, 2023).unwrap().is_empty());
    /// assert_eq!(
    ///     analyzer.seasons_correlation(2030, 2020).unwrap_err(),
    ///     AnalysisError::YearAfterSupported { year: 2030, max: 2023 },
    /// );
    /// ```
    pub fn seasons_correlation(
        &self,
        first_year: i32,
        last_year: i32,
    ) -> Result<CorrelationTable, AnalysisError> {
        let config = self.config();
        config.lap_years.check_not_after(first_year)?;
        config.lap_years.check_not_before(last_year)?;
        if first_year > last_year {
            config.race_years.check_not_after(first_year)?;
            config.race_years.check_not_before(last_year + 1)?;
        }

        let mut table = CorrelationTable::default();
        for year in (last_year.saturating_add(1)..=first_year).rev() {
            let season = self.season(year)?;
            let rows = season_rows(&season);
            tracing::debug!(year, rows = rows.len(), "season appended");
            table.rows.extend(rows);
        }
        Ok(table)
    }
}
