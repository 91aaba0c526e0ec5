//! Final championship standings of a season
//!
//! The standings table holds one snapshot per race. The season's final
//! standings are the snapshot of its last race, which is the race with the
//! highest id: race ids are assigned in chronological order inside a season.

use std::collections::BTreeSet;

use pitwall_data::{DriverId, RaceId, record::DriverStanding};
use serde::Serialize;

use crate::{AnalysisError, Analyzer};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StandingEntry {
    pub driver: DriverId,
    pub points: f64,
    pub position: u32,
}

/// Championship points per driver after a season's last race.
///
/// Entries are ordered by finishing position. The order is for display only;
/// lookups are by driver.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DriverPoints {
    /// The race the standings were taken from, `None` for a season without races.
    pub last_race: Option<RaceId>,
    pub entries: Vec<StandingEntry>,
}

impl DriverPoints {
    /// Builds the standings as of the last race in `races`.
    #[must_use]
    pub fn from_standings(rows: &[DriverStanding], races: &BTreeSet<RaceId>) -> Self {
        let Some(&last_race) = races.last() else {
            return Self::default();
        };
        let mut entries = rows
            .iter()
            .filter(|row| row.race == last_race)
            .map(|row| StandingEntry {
                driver: row.driver,
                points: row.points,
                position: row.position,
            })
            .collect::<Vec<_>>();
        entries.sort_by_key(|entry| entry.position);
        Self {
            last_race: Some(last_race),
            entries,
        }
    }

    #[must_use]
    pub fn get(&self, driver: DriverId) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.driver == driver)
            .map(|entry| entry.points)
    }

    pub fn drivers(&self) -> impl Iterator<Item = DriverId> + '_ {
        self.entries.iter().map(|entry| entry.driver)
    }

    pub fn points(&self) -> impl Iterator<Item = (DriverId, f64)> + '_ {
        self.entries.iter().map(|entry| (entry.driver, entry.points))
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.entries.iter().map(|entry| entry.points).sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Analyzer<'_> {
    /// Returns the championship points of every driver after the last race of `year`.
    ///
    /// A year without races yields empty standings rather than an error.
    pub fn final_standings(&self, year: i32) -> Result<DriverPoints, AnalysisError> {
        let races = self.races_for_year(year)?;
        Ok(DriverPoints::from_standings(
            &self.dataset().driver_standings,
            &races,
        ))
    }
}
