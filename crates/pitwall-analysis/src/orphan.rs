//! Diagnostics for fastest laps credited outside the championship
//!
//! A driver can set the fastest time on a lap without appearing in the
//! season's final standings. Such credits are dropped from the counts; the
//! reporter resolves who and where for the log.

use pitwall_data::Dataset;
use serde::Serialize;

use crate::{AnalysisError, fastest_lap::OrphanCredit};

/// Receives fastest-lap credits that could not be counted.
pub trait OrphanReporter {
    fn report(&mut self, credit: &OrphanCredit) -> Result<(), AnalysisError>;
}

impl<F> OrphanReporter for F
where
    F: FnMut(&OrphanCredit) -> Result<(), AnalysisError>,
{
    fn report(&mut self, credit: &OrphanCredit) -> Result<(), AnalysisError> {
        self(credit)
    }
}

/// An orphan credit with its driver and race resolved from the catalogs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrphanReport {
    pub credit: OrphanCredit,
    pub driver_name: String,
    pub year: i32,
    pub round: u32,
    pub race_name: String,
}

/// Looks the driver and race of `credit` up in the catalogs.
pub fn describe(dataset: &Dataset, credit: &OrphanCredit) -> Result<OrphanReport, AnalysisError> {
    let driver = dataset
        .driver(credit.driver)
        .ok_or(AnalysisError::DriverNotFound {
            driver: credit.driver,
        })?;
    let race = dataset
        .race(credit.race)
        .ok_or(AnalysisError::RaceNotFound { race: credit.race })?;
    Ok(OrphanReport {
        credit: *credit,
        driver_name: driver.full_name(),
        year: race.year,
        round: race.round,
        race_name: race.name.clone(),
    })
}

/// Logs orphan credits with names from the dataset catalogs.
#[derive(Debug, Clone)]
pub struct CatalogReporter<'a> {
    dataset: &'a Dataset,
}

impl<'a> CatalogReporter<'a> {
    #[must_use]
    pub fn new(dataset: &'a Dataset) -> Self {
        Self { dataset }
    }
}

impl OrphanReporter for CatalogReporter<'_> {
    fn report(&mut self, credit: &OrphanCredit) -> Result<(), AnalysisError> {
        let report = describe(self.dataset, credit)?;
        tracing::warn!(
            driver = %credit.driver,
            race = %credit.race,
            lap = credit.lap,
            "fastest lap by {} outside the championship standings: {} round {} {}",
            report.driver_name,
            report.year,
            report.round,
            report.race_name,
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pitwall_data::{DriverId, RaceId};

    use super::*;
    use crate::{ErrorKind, fixture};

    #[test]
    fn test_describe_resolves_names() {
        let dataset = fixture::dataset();
        let credit = OrphanCredit {
            race: RaceId(20),
            lap: 1,
            driver: fixture::CRASH,
        };
        let report = describe(&dataset, &credit).unwrap();
        assert_eq!(report.driver_name, "Carl Crash");
        assert_eq!(report.year, 2023);
        assert_eq!(report.round, 1);
        assert_eq!(report.race_name, "Alpha Grand Prix");
    }

    #[test]
    fn test_unknown_driver_is_not_found() {
        let dataset = fixture::dataset();
        let mut reporter = CatalogReporter::new(&dataset);
        let err = reporter
            .report(&OrphanCredit {
                race: RaceId(20),
                lap: 1,
                driver: DriverId(10_002),
            })
            .unwrap_err();
        assert_eq!(
            err,
            AnalysisError::DriverNotFound {
                driver: DriverId(10_002)
            }
        );
        assert_eq!(err.kind(), ErrorKind::NotFound);
    }

    #[test]
    fn test_unknown_race_is_not_found() {
        let dataset = fixture::dataset();
        let mut reporter = CatalogReporter::new(&dataset);
        let err = reporter
            .report(&OrphanCredit {
                race: RaceId(1222),
                lap: 3,
                driver: fixture::CRASH,
            })
            .unwrap_err();
        assert_eq!(err, AnalysisError::RaceNotFound { race: RaceId(1222) });
    }

    #[test]
    fn test_catalog_reporter_accepts_known_ids() {
        let dataset = fixture::dataset();
        let mut reporter = CatalogReporter::new(&dataset);
        assert!(
            reporter
                .report(&OrphanCredit {
                    race: RaceId(21),
                    lap: 2,
                    driver: fixture::ACE,
                })
                .is_ok()
        );
    }
}
