use pitwall_analysis::Analyzer;
use pitwall_data::{Dataset, DriverId, Table, record::Driver};

use super::GlobalArgs;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct StandingsArg {
    /// Season year
    year: i32,
}

pub(crate) fn run(global: &GlobalArgs, arg: &StandingsArg) -> anyhow::Result<()> {
    let (dataset, config) =
        global.load(&[Table::Races, Table::Drivers, Table::DriverStandings])?;
    let analyzer = Analyzer::new(&dataset, config);
    let standings = analyzer.final_standings(arg.year)?;

    let Some(last_race) = standings.last_race else {
        println!("No races found for {}", arg.year);
        return Ok(());
    };
    println!("Final standings of {} (after race {last_race})", arg.year);
    println!("  {:>4} {:>6} {:<28} {:>8}", "Pos", "Id", "Driver", "Points");
    println!("  {}", "-".repeat(49));
    for entry in &standings.entries {
        println!(
            "  {:>4} {:>6} {:<28} {:>8.1}",
            entry.position,
            entry.driver.0,
            driver_name(&dataset, entry.driver),
            entry.points
        );
    }
    Ok(())
}

pub(super) fn driver_name(dataset: &Dataset, driver: DriverId) -> String {
    dataset
        .driver(driver)
        .map_or_else(|| "(unknown)".to_owned(), Driver::full_name)
}
