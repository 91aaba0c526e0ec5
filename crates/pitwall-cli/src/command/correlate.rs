use std::path::PathBuf;

use pitwall_analysis::Analyzer;
use pitwall_data::Table;

use super::GlobalArgs;
use crate::util::{Output, OutputFormat};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct CorrelateArg {
    /// Most recent season to include
    first_year: i32,
    /// Older end of the range (exclusive: seasons down to `last_year + 1`)
    last_year: i32,
    /// Output file path for the season table (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Table format: csv or json
    #[arg(long, default_value = "csv")]
    format: OutputFormat,
}

pub(crate) fn run(global: &GlobalArgs, arg: &CorrelateArg) -> anyhow::Result<()> {
    let (dataset, config) = global.load(&[
        Table::Races,
        Table::Drivers,
        Table::DriverStandings,
        Table::LapTimes,
    ])?;
    let analyzer = Analyzer::new(&dataset, config);
    let table = analyzer.seasons_correlation(arg.first_year, arg.last_year)?;

    Output::save_rows(&table.rows, arg.format, arg.output.as_deref())?;

    let years = table.years();
    eprintln!(
        "{} driver seasons over {} seasons ({}..={})",
        table.len(),
        years.len(),
        years.last().copied().unwrap_or(arg.first_year),
        years.first().copied().unwrap_or(arg.first_year),
    );
    match table.pearson() {
        Some(r) => eprintln!("Pearson r (fast_percent vs points_percent) = {r:.4}"),
        None => eprintln!("Pearson r undefined: not enough varying data"),
    }
    Ok(())
}
