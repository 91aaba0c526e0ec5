use pitwall_analysis::{Analyzer, orphan};
use pitwall_data::Table;

use super::{GlobalArgs, standings::driver_name};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct FastestLapsArg {
    /// Season year
    year: i32,
}

pub(crate) fn run(global: &GlobalArgs, arg: &FastestLapsArg) -> anyhow::Result<()> {
    let (dataset, config) = global.load(&[
        Table::Races,
        Table::Drivers,
        Table::DriverStandings,
        Table::LapTimes,
    ])?;
    let analyzer = Analyzer::new(&dataset, config);
    let season = analyzer.season(arg.year)?;
    let counts = &season.attribution.counts;

    println!(
        "Fastest laps of {} ({} races, {} credited)",
        arg.year,
        season.races.len(),
        counts.total()
    );
    println!("  {:>4} {:>6} {:<28} {:>8} {:>6}", "Pos", "Id", "Driver", "Points", "Fast");
    println!("  {}", "-".repeat(56));
    for entry in &season.standings.entries {
        println!(
            "  {:>4} {:>6} {:<28} {:>8.1} {:>6}",
            entry.position,
            entry.driver.0,
            driver_name(&dataset, entry.driver),
            entry.points,
            counts.get(entry.driver).unwrap_or_default()
        );
    }

    if season.attribution.orphans.is_empty() {
        return Ok(());
    }
    println!();
    println!(
        "Fastest laps outside the championship ({}):",
        season.attribution.orphans.len()
    );
    for credit in &season.attribution.orphans {
        match orphan::describe(&dataset, credit) {
            Ok(report) => println!(
                "  {} - {} round {} {}, lap {}",
                report.driver_name, report.year, report.round, report.race_name, credit.lap
            ),
            Err(err) => println!("  race {} lap {}: {err}", credit.race, credit.lap),
        }
    }
    Ok(())
}
