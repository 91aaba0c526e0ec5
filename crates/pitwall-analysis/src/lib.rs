//! Season performance analyses over the motorsport dataset
//!
//! This crate tests two hypotheses over championship seasons:
//!
//! - **Fastest laps vs points**: does the share of race-laps on which a
//!   driver set the fastest time track the share of championship points?
//! - **Pit-stop efficiency vs points**: do constructors with quicker pit
//!   stops score more?
//!
//! # Overview
//!
//! The fastest-lap pipeline runs once per season:
//!
//! 1. **Season Race Index** ([`Analyzer::races_for_year`]): races held that year
//! 2. **Standings** ([`Analyzer::final_standings`]): points after the last race
//! 3. **Attribution** ([`fastest_lap::fastest_lap_counts`]): one credit per
//!    race-lap to the fastest driver; credits for drivers outside the
//!    standings go to an [`orphan::OrphanReporter`]
//! 4. **Normalization** ([`normalization::normalize`]): both metrics as
//!    percentages of the season total
//! 5. **Aggregation** ([`Analyzer::seasons_correlation`]): seasons joined
//!    into one [`correlation::CorrelationTable`]
//!
//! The pit-stop pipeline lives in [`pit_stop`]. [`nationality`] counts drivers
//! per nationality and birth period.
//!
//! # Example
//!
//! ```no_run
//! use pitwall_analysis::{AnalysisConfig, Analyzer};
//! use pitwall_data::{Dataset, Table};
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//!
//! let dataset = Dataset::load(
//!     "data",
//!     &[Table::Races, Table::Drivers, Table::LapTimes, Table::DriverStandings],
//! )?;
//! let analyzer = Analyzer::new(&dataset, AnalysisConfig::default());
//!
//! let table = analyzer.seasons_correlation(2023, 1995)?;
//! println!("{} driver seasons", table.len());
//! if let Some(r) = table.pearson() {
//!     println!("Pearson r = {r:.3}");
//! }
//! # Ok(())
//! # }
//! ```

pub use self::{config::*, error::*, season::*};

pub mod config;
pub mod correlation;
mod error;
pub mod fastest_lap;
pub mod nationality;
pub mod normalization;
pub mod orphan;
pub mod pit_stop;
mod season;
pub mod standings;

#[cfg(test)]
mod fixture;
