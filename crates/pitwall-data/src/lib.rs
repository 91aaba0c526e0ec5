//! Typed access to the motorsport season dataset.
//!
//! The dataset is a set of relational CSV tables (races, drivers, lap times,
//! championship standings, pit stops, results and constructors). This crate
//! provides:
//!
//! - **Identifiers** ([`RaceId`], [`DriverId`], [`ConstructorId`]): typed keys
//!   so a race id can never be used where a driver id is expected
//! - **Records** ([`record`]): one struct per table, reading only the columns
//!   the analysis needs
//! - **Dataset** ([`Dataset`]): the in-memory tables plus catalog lookups
//!
//! # Examples
//!
//! ```
//! use pitwall_data::{Dataset, DriverId, RaceId, record::Race};
//!
//! let csv = "raceId,year,round,circuitId,name,date\n\
//!            1098,2023,1,3,Bahrain Grand Prix,2023-03-05\n";
//! let races: Vec<Race> = pitwall_data::read_table(csv.as_bytes()).unwrap();
//!
//! let dataset = Dataset {
//!     races,
//!     ..Dataset::default()
//! };
//! assert_eq!(dataset.race(RaceId::from(1098)).unwrap().year, 2023);
//! assert!(dataset.driver(DriverId::from(1)).is_none());
//! ```

pub use self::{dataset::*, ids::*};

pub mod dataset;
pub mod ids;
pub mod record;
