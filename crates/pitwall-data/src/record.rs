//! Row types of the dataset tables
//!
//! Each struct reads a subset of its table's columns by header name. Columns
//! that are not listed are ignored; a listed column that is missing from the
//! file makes the whole table fail to load.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{ConstructorId, DriverId, RaceId};

/// A race of the catalog (`races.csv`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    #[serde(rename = "raceId")]
    pub id: RaceId,
    pub year: i32,
    pub round: u32,
    pub name: String,
    pub date: NaiveDate,
}

/// A driver of the catalog (`drivers.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Driver {
    #[serde(rename = "driverId")]
    pub id: DriverId,
    pub forename: String,
    pub surname: String,
    /// Date of birth.
    pub dob: NaiveDate,
    pub nationality: String,
}

impl Driver {
    /// Forename and surname separated by a space.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.forename, self.surname)
    }
}

/// Elapsed time of one driver on one lap of one race (`lap_times.csv`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LapTime {
    #[serde(rename = "raceId")]
    pub race: RaceId,
    #[serde(rename = "driverId")]
    pub driver: DriverId,
    pub lap: u32,
    pub milliseconds: u32,
}

/// Championship standing of a driver after a race (`driver_standings.csv`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DriverStanding {
    #[serde(rename = "raceId")]
    pub race: RaceId,
    #[serde(rename = "driverId")]
    pub driver: DriverId,
    pub points: f64,
    pub position: u32,
}

/// A single pit stop (`pit_stops.csv`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PitStop {
    #[serde(rename = "raceId")]
    pub race: RaceId,
    #[serde(rename = "driverId")]
    pub driver: DriverId,
    pub stop: u32,
    pub lap: u32,
    pub milliseconds: u32,
}

/// The constructor a driver raced for in a race (`results.csv`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RaceResult {
    #[serde(rename = "raceId")]
    pub race: RaceId,
    #[serde(rename = "driverId")]
    pub driver: DriverId,
    #[serde(rename = "constructorId")]
    pub constructor: ConstructorId,
}

/// Points a constructor scored in a race (`constructor_results.csv`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConstructorResult {
    #[serde(rename = "raceId")]
    pub race: RaceId,
    #[serde(rename = "constructorId")]
    pub constructor: ConstructorId,
    pub points: f64,
}

/// A constructor of the catalog (`constructors.csv`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Constructor {
    #[serde(rename = "constructorId")]
    pub id: ConstructorId,
    pub name: String,
}
