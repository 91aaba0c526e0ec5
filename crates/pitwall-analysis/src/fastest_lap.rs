//! Fastest-lap attribution
//!
//! Every race-lap awards one credit to the driver with the minimum recorded
//! time on that lap. Credits accumulate per driver over a set of races.
//!
//! # Algorithm
//!
//! 1. [`LapIndex::build`] makes a single pass over the lap table, keeping the
//!    fastest record of each `(race, lap)` pair of the requested races
//! 2. [`FastLapCounts::seeded`] starts every championship driver at zero
//! 3. Each indexed record credits its driver. A driver that was not seeded
//!    (not part of the championship) turns the credit into an
//!    [`OrphanCredit`], which goes to the [`OrphanReporter`] and is otherwise
//!    dropped
//!
//! # Ties
//!
//! When two records share the minimum time of a lap, the one that comes first
//! in the lap table wins.
//!
//! # Example
//!
//! ```
//! use std::collections::BTreeSet;
//!
//! use pitwall_analysis::{AnalysisError, fastest_lap::{fastest_lap_counts, OrphanCredit}};
//! use pitwall_data::{DriverId, RaceId, record::LapTime};
//!
//! let lap = |driver, lap, milliseconds| LapTime {
//!     race: RaceId(1),
//!     driver: DriverId(driver),
//!     lap,
//!     milliseconds,
//! };
//! let laps = [lap(1, 1, 90_000), lap(2, 1, 89_000), lap(1, 2, 88_000), lap(2, 2, 88_500)];
//! let races = BTreeSet::from([RaceId(1)]);
//!
//! let mut ignore = |_: &OrphanCredit| Ok::<_, AnalysisError>(());
//! let attribution = fastest_lap_counts(&laps, [DriverId(1), DriverId(2)], &races, &mut ignore);
//! assert_eq!(attribution.counts.get(DriverId(1)), Some(1));
//! assert_eq!(attribution.counts.get(DriverId(2)), Some(1));
//! assert!(attribution.orphans.is_empty());
//! ```

use std::collections::{BTreeMap, BTreeSet, btree_map::Entry};

use pitwall_data::{DriverId, RaceId, record::LapTime};
use serde::Serialize;

use crate::orphan::OrphanReporter;

/// A fastest-lap credit for a driver outside the championship standings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct OrphanCredit {
    pub race: RaceId,
    pub lap: u32,
    pub driver: DriverId,
}

/// Returned by [`FastLapCounts::credit`] for a driver that has no counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("driver {driver} has no fastest-lap counter")]
pub struct Uncounted {
    pub driver: DriverId,
}

/// Number of fastest laps per driver.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FastLapCounts {
    counts: BTreeMap<DriverId, u32>,
}

impl FastLapCounts {
    /// Creates a zero counter for each driver.
    #[must_use]
    pub fn seeded<I>(drivers: I) -> Self
    where
        I: IntoIterator<Item = DriverId>,
    {
        Self {
            counts: drivers.into_iter().map(|driver| (driver, 0)).collect(),
        }
    }

    /// Adds one fastest lap to `driver`.
    ///
    /// Drivers are never added after seeding; an unseeded driver is
    /// returned as [`Uncounted`] and the counts stay unchanged.
    pub fn credit(&mut self, driver: DriverId) -> Result<(), Uncounted> {
        let count = self.counts.get_mut(&driver).ok_or(Uncounted { driver })?;
        *count += 1;
        Ok(())
    }

    #[must_use]
    pub fn get(&self, driver: DriverId) -> Option<u32> {
        self.counts.get(&driver).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (DriverId, u32)> + '_ {
        self.counts.iter().map(|(&driver, &count)| (driver, count))
    }

    #[must_use]
    pub fn total(&self) -> u32 {
        self.counts.values().sum()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// The fastest record of every `(race, lap)` pair of a race set.
#[derive(Debug, Clone, Default)]
pub struct LapIndex {
    fastest: BTreeMap<(RaceId, u32), LapTime>,
}

impl LapIndex {
    /// Indexes the laps of `races` in one pass over `laps`.
    ///
    /// A record only replaces the current fastest one when it is strictly
    /// faster, so ties go to the first record in input order.
    #[must_use]
    pub fn build(laps: &[LapTime], races: &BTreeSet<RaceId>) -> Self {
        let mut fastest = BTreeMap::new();
        for record in laps.iter().filter(|record| races.contains(&record.race)) {
            match fastest.entry((record.race, record.lap)) {
                Entry::Vacant(entry) => {
                    entry.insert(*record);
                }
                Entry::Occupied(mut entry) => {
                    if record.milliseconds < entry.get().milliseconds {
                        entry.insert(*record);
                    }
                }
            }
        }
        Self { fastest }
    }

    /// Fastest records ordered by race id, then lap number.
    pub fn fastest(&self) -> impl Iterator<Item = &LapTime> + '_ {
        self.fastest.values()
    }

    /// Number of distinct `(race, lap)` pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fastest.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fastest.is_empty()
    }
}

/// Result of one attribution pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Attribution {
    pub counts: FastLapCounts,
    /// Credits dropped because their driver was not seeded, in scan order.
    pub orphans: Vec<OrphanCredit>,
}

/// Counts the fastest laps of `drivers` over `races`.
///
/// Credits for drivers outside `drivers` are handed to `reporter` and left
/// out of the counts. Reporter failures are logged; they never stop the scan.
///
/// # Arguments
///
/// * `laps` - Lap records; only those of `races` are read
/// * `drivers` - Championship drivers, each seeded with a zero count
/// * `races` - Races to scan
/// * `reporter` - Receives every [`OrphanCredit`]
///
/// # Returns
///
/// The [`Attribution`]: counts for exactly the seeded drivers, and the orphan
/// credits in `(race, lap)` order.
///
/// # Examples
///
/// ```
/// use std::collections::BTreeSet;
///
/// use pitwall_analysis::{AnalysisError, fastest_lap::{fastest_lap_counts, OrphanCredit}};
/// use pitwall_data::{DriverId, RaceId, record::LapTime};
///
/// let laps = [
///     LapTime { race: RaceId(7), driver: DriverId(1), lap: 1, milliseconds: 81_000 },
///     LapTime { race: RaceId(7), driver: DriverId(9), lap: 1, milliseconds: 80_000 },
/// ];
/// let mut orphans = vec![];
/// let mut collect = |credit: &OrphanCredit| -> Result<(), AnalysisError> {
///     orphans.push(*credit);
///     Ok(())
/// };
/// let attribution =
///     fastest_lap_counts(&laps, [DriverId(1)], &BTreeSet::from([RaceId(7)]), &mut collect);
///
/// assert_eq!(attribution.counts.get(DriverId(1)), Some(0));
/// assert_eq!(orphans, [OrphanCredit { race: RaceId(7), lap: 1, driver: DriverId(9) }]);
/// ```
pub fn fastest_lap_counts<I, R>(
    laps: &[LapTime],
    drivers: I,
    races: &BTreeSet<RaceId>,
    reporter: &mut R,
) -> Attribution
where
    I: IntoIterator<Item = DriverId>,
    R: OrphanReporter + ?Sized,
{
    let mut counts = FastLapCounts::seeded(drivers);
    let mut orphans = vec![];

    let index = LapIndex::build(laps, races);
    for record in index.fastest() {
        let Err(Uncounted { driver }) = counts.credit(record.driver) else {
            continue;
        };
        let orphan = OrphanCredit {
            race: record.race,
            lap: record.lap,
            driver,
        };
        if let Err(err) = reporter.report(&orphan) {
            tracing::error!(
                race = %orphan.race,
                lap = orphan.lap,
                driver = %orphan.driver,
                "failed to report orphan fastest lap: {err}"
            );
        }
        orphans.push(orphan);
    }

    Attribution { counts, orphans }
}
