use std::path::PathBuf;

use pitwall_analysis::{
    Analyzer,
    pit_stop::{self, ConstructorPitStats, DEFAULT_STD_DEVS},
};
use pitwall_data::{Dataset, Table};

use super::GlobalArgs;
use crate::util::{Output, OutputFormat};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct PitStopsArg {
    /// Season year
    year: i32,
    /// Pit stops further than this many standard deviations from the mean are dropped
    #[arg(long, default_value_t = DEFAULT_STD_DEVS)]
    std_devs: f64,
    /// Output file path (stdout when omitted)
    #[arg(long)]
    output: Option<PathBuf>,
    /// Table format: csv or json
    #[arg(long, default_value = "csv")]
    format: OutputFormat,
}

pub(crate) fn run(global: &GlobalArgs, arg: &PitStopsArg) -> anyhow::Result<()> {
    let (dataset, config) = global.load(&[
        Table::Races,
        Table::PitStops,
        Table::Results,
        Table::ConstructorResults,
        Table::Constructors,
    ])?;
    let analyzer = Analyzer::new(&dataset, config);
    let stats = analyzer.pit_stop_efficiency(arg.year, arg.std_devs)?;

    Output::save_rows(&stats, arg.format, arg.output.as_deref())?;
    if arg.output.is_some() {
        print_table(&dataset, arg.year, &stats);
    }

    match pit_stop::pit_time_points_pearson(&stats) {
        Some(r) => eprintln!("Pearson r (mean_pit_ms vs points) = {r:.4}"),
        None => eprintln!("Pearson r undefined: not enough varying data"),
    }
    Ok(())
}

fn print_table(dataset: &Dataset, year: i32, stats: &[ConstructorPitStats]) {
    println!("Pit stops of {year}");
    println!(
        "  {:<24} {:>8} {:>6} {:>12}",
        "Constructor", "Points", "Stops", "Mean (ms)"
    );
    println!("  {}", "-".repeat(53));
    for row in stats {
        let name = dataset
            .constructor(row.constructor)
            .map_or_else(|| format!("#{}", row.constructor.0), |c| c.name.clone());
        let mean = row
            .mean_pit_ms
            .map_or_else(|| "-".to_owned(), |ms| format!("{ms:.0}"));
        println!(
            "  {name:<24} {:>8.1} {:>6} {mean:>12}",
            row.points, row.stops
        );
    }
}
