//! Drivers per nationality and birth period
//!
//! Birth years are bucketed into periods of a fixed number of years
//! (`(year / period) * period`, rounding towards the past), drivers are
//! counted per `(nationality, period)`, and the nationality with the most
//! drivers is picked for each period.
//!
//! # Ties
//!
//! When several nationalities share the highest count of a period, the
//! alphabetically first one is the leader.

use std::collections::{BTreeMap, BTreeSet};

use chrono::Datelike as _;
use pitwall_data::{DriverId, record::Driver};
use serde::Serialize;

use crate::{AnalysisError, Analyzer};

/// A driver's nationality and birth period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DriverBirth {
    pub driver: DriverId,
    pub nationality: String,
    pub birth_year: i32,
    /// First year of the period the driver was born in.
    pub period: i32,
}

/// Number of drivers of one nationality born in one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NationalityCount {
    pub nationality: String,
    pub period: i32,
    pub drivers: u32,
}

/// The nationality with the most drivers born in a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PeriodLeader {
    pub period: i32,
    pub nationality: String,
    pub drivers: u32,
}

/// Assigns every driver to the `period`-year bucket of their birth year.
///
/// # Arguments
///
/// * `drivers` - The driver catalog
/// * `period` - Bucket width in years
///
/// # Returns
///
/// One [`DriverBirth`] per driver, in catalog order, or
/// [`AnalysisError::InvalidPeriod`] when `period` is zero or negative.
pub fn birth_periods(drivers: &[Driver], period: i32) -> Result<Vec<DriverBirth>, AnalysisError> {
    if period <= 0 {
        return Err(AnalysisError::InvalidPeriod { period });
    }
    Ok(drivers
        .iter()
        .map(|driver| {
            let birth_year = driver.dob.year();
            DriverBirth {
                driver: driver.id,
                nationality: driver.nationality.clone(),
                birth_year,
                period: birth_year.div_euclid(period) * period,
            }
        })
        .collect())
}

/// Driver counts per nationality and birth period.
///
/// Combinations without drivers count as zero.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NationalityTable {
    periods: BTreeSet<i32>,
    counts: BTreeMap<String, BTreeMap<i32, u32>>,
}

impl NationalityTable {
    #[must_use]
    pub fn from_births(births: &[DriverBirth]) -> Self {
        let mut table = Self::default();
        for birth in births {
            table.periods.insert(birth.period);
            *table
                .counts
                .entry(birth.nationality.clone())
                .or_default()
                .entry(birth.period)
                .or_default() += 1;
        }
        table
    }

    #[must_use]
    pub fn count(&self, nationality: &str, period: i32) -> u32 {
        self.counts
            .get(nationality)
            .and_then(|periods| periods.get(&period))
            .copied()
            .unwrap_or(0)
    }

    /// Periods with at least one driver, ascending.
    pub fn periods(&self) -> impl Iterator<Item = i32> + '_ {
        self.periods.iter().copied()
    }

    /// Nationalities with at least one driver, alphabetically.
    pub fn nationalities(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }

    /// Every `(nationality, period)` cell, zeros included, nationality-major.
    #[must_use]
    pub fn rows(&self) -> Vec<NationalityCount> {
        self.nationalities()
            .flat_map(|nationality| {
                self.periods().map(move |period| NationalityCount {
                    nationality: nationality.to_owned(),
                    period,
                    drivers: self.count(nationality, period),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }
}

/// Picks the nationality with the most drivers of each period.
///
/// Periods are ascending. Ties go to the alphabetically first nationality.
#[must_use]
pub fn top_country_per_period(table: &NationalityTable) -> Vec<PeriodLeader> {
    table
        .periods()
        .filter_map(|period| {
            let mut leader: Option<PeriodLeader> = None;
            for nationality in table.nationalities() {
                let drivers = table.count(nationality, period);
                if leader.as_ref().is_none_or(|l| drivers > l.drivers) {
                    leader = Some(PeriodLeader {
                        period,
                        nationality: nationality.to_owned(),
                        drivers,
                    });
                }
            }
            leader
        })
        .collect()
}

impl Analyzer<'_> {
    /// Counts the drivers of the catalog per nationality and `period`-year birth bucket.
    pub fn nationalities_by_period(&self, period: i32) -> Result<NationalityTable, AnalysisError> {
        let births = birth_periods(&self.dataset().drivers, period)?;
        let table = NationalityTable::from_births(&births);
        tracing::debug!(
            period,
            drivers = births.len(),
            periods = table.periods.len(),
            nationalities = table.counts.len(),
            "drivers grouped by nationality"
        );
        Ok(table)
    }
}
