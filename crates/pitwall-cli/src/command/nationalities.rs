use std::path::PathBuf;

use pitwall_analysis::{Analyzer, nationality};
use pitwall_data::Table;

use super::GlobalArgs;
use crate::util::{Output, OutputFormat};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct NationalitiesArg {
    /// Width of a birth period, in years
    #[arg(allow_negative_numbers = true)]
    period: i32,
    /// Write the leading nationality of each period instead of the full count table
    #[arg(long)]
    leaders: bool,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Table format: csv or json
    #[arg(long, default_value = "csv")]
    format: OutputFormat,
}

pub(crate) fn run(global: &GlobalArgs, arg: &NationalitiesArg) -> anyhow::Result<()> {
    let (dataset, config) = global.load(&[Table::Drivers])?;
    let analyzer = Analyzer::new(&dataset, config);
    let table = analyzer.nationalities_by_period(arg.period)?;
    let leaders = nationality::top_country_per_period(&table);

    if arg.leaders {
        Output::save_rows(&leaders, arg.format, arg.output.as_deref())?;
    } else {
        Output::save_rows(&table.rows(), arg.format, arg.output.as_deref())?;
    }

    for leader in &leaders {
        eprintln!(
            "{}-{}: {} ({} drivers)",
            leader.period,
            leader.period + arg.period - 1,
            leader.nationality,
            leader.drivers
        );
    }
    Ok(())
}
