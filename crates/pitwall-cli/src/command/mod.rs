use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use pitwall_analysis::AnalysisConfig;
use pitwall_data::{Dataset, Table};

use self::{
    correlate::CorrelateArg, fastest_laps::FastestLapsArg, nationalities::NationalitiesArg,
    pit_stops::PitStopsArg, races::RacesArg, standings::StandingsArg,
};
use crate::util;

mod correlate;
mod fastest_laps;
mod nationalities;
mod pit_stops;
mod races;
mod standings;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    #[command(flatten)]
    global: GlobalArgs,
    /// Analysis to run
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct GlobalArgs {
    /// Directory holding the dataset CSV files
    #[arg(long, global = true, env = "PITWALL_DATA_DIR", default_value = "data")]
    data_dir: PathBuf,
    /// JSON file overriding the supported year ranges
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log debug output to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

impl GlobalArgs {
    /// Loads `tables` from the data directory along with the analysis config.
    pub(crate) fn load(&self, tables: &[Table]) -> anyhow::Result<(Dataset, AnalysisConfig)> {
        let config = match &self.config {
            Some(path) => util::read_config(path)?,
            None => AnalysisConfig::default(),
        };
        let dataset = Dataset::load(&self.data_dir, tables).with_context(|| {
            format!("Failed to load dataset from {}", self.data_dir.display())
        })?;
        tracing::debug!(
            data_dir = %self.data_dir.display(),
            tables = tables.len(),
            races = dataset.races.len(),
            "dataset loaded"
        );
        Ok((dataset, config))
    }
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// List the races of a season
    Races(#[clap(flatten)] RacesArg),
    /// Show the final championship standings of a season
    Standings(#[clap(flatten)] StandingsArg),
    /// Count fastest laps per championship driver
    FastestLaps(#[clap(flatten)] FastestLapsArg),
    /// Correlate fastest-lap share with points share over a year range
    Correlate(#[clap(flatten)] CorrelateArg),
    /// Compare constructor pit-stop times with constructor points
    PitStops(#[clap(flatten)] PitStopsArg),
    /// Count drivers per nationality and birth period
    Nationalities(#[clap(flatten)] NationalitiesArg),
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    util::init_tracing(args.global.verbose);
    match &args.mode {
        Mode::Races(arg) => races::run(&args.global, arg)?,
        Mode::Standings(arg) => standings::run(&args.global, arg)?,
        Mode::FastestLaps(arg) => fastest_laps::run(&args.global, arg)?,
        Mode::Correlate(arg) => correlate::run(&args.global, arg)?,
        Mode::PitStops(arg) => pit_stops::run(&args.global, arg)?,
        Mode::Nationalities(arg) => nationalities::run(&args.global, arg)?,
    }
    Ok(())
}
