//! Season race index and per-season analysis context
//!
//! A season is every race sharing one `year`. [`Analyzer::races_for_year`]
//! resolves the race set; [`Analyzer::season`] runs the standings resolver and
//! the fastest-lap attributor over it.

use std::collections::BTreeSet;

use pitwall_data::{Dataset, RaceId};

use crate::{
    AnalysisConfig, AnalysisError,
    fastest_lap::{self, Attribution},
    orphan::CatalogReporter,
    standings::DriverPoints,
};

/// Entry point of the season analyses over a loaded dataset.
#[derive(Debug, Clone)]
pub struct Analyzer<'a> {
    dataset: &'a Dataset,
    config: AnalysisConfig,
}

/// Everything computed for one season.
#[derive(Debug, Clone)]
pub struct Season {
    pub year: i32,
    pub races: BTreeSet<RaceId>,
    pub standings: DriverPoints,
    pub attribution: Attribution,
}

impl<'a> Analyzer<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset, config: AnalysisConfig) -> Self {
        Self { dataset, config }
    }

    #[must_use]
    pub fn dataset(&self) -> &'a Dataset {
        self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Returns the ids of all races held in `year`.
    pub fn races_for_year(&self, year: i32) -> Result<BTreeSet<RaceId>, AnalysisError> {
        self.config.race_years.check(year)?;
        Ok(self
            .dataset
            .races
            .iter()
            .filter(|race| race.year == year)
            .map(|race| race.id)
            .collect())
    }

    /// Resolves races, final standings and fastest-lap counts of `year`.
    ///
    /// Orphan credits are reported through a [`CatalogReporter`].
    pub fn season(&self, year: i32) -> Result<Season, AnalysisError> {
        let races = self.races_for_year(year)?;
        let standings = DriverPoints::from_standings(&self.dataset.driver_standings, &races);
        let mut reporter = CatalogReporter::new(self.dataset);
        let attribution = fastest_lap::fastest_lap_counts(
            &self.dataset.lap_times,
            standings.drivers(),
            &races,
            &mut reporter,
        );
        tracing::debug!(
            year,
            races = races.len(),
            drivers = standings.len(),
            credits = attribution.counts.total(),
            orphans = attribution.orphans.len(),
            "season resolved"
        );
        Ok(Season {
            year,
            races,
            standings,
            attribution,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ErrorKind, fixture};

    #[test]
    fn test_races_for_year() {
        let dataset = fixture::dataset();
        let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
        let races = analyzer.races_for_year(2023).unwrap();
        assert_eq!(races, BTreeSet::from([RaceId(20), RaceId(21)]));
        assert_eq!(
            analyzer.races_for_year(2022).unwrap(),
            BTreeSet::from([RaceId(10), RaceId(11)])
        );
    }

    #[test]
    fn test_races_for_year_without_races_is_empty() {
        let dataset = fixture::dataset();
        let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
        assert!(analyzer.races_for_year(1960).unwrap().is_empty());
    }

    #[test]
    fn test_races_for_year_out_of_range() {
        let dataset = fixture::dataset();
        let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
        for year in [2024, 1949] {
            let err = analyzer.races_for_year(year).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn test_season_is_idempotent() {
        let dataset = fixture::dataset();
        let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
        let first = analyzer.season(2023).unwrap();
        let second = analyzer.season(2023).unwrap();
        assert_eq!(first.attribution, second.attribution);
        assert_eq!(first.standings, second.standings);
    }
}
