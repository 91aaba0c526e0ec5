use pitwall_analysis::Analyzer;
use pitwall_data::Table;

use super::GlobalArgs;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RacesArg {
    /// Season year
    year: i32,
}

pub(crate) fn run(global: &GlobalArgs, arg: &RacesArg) -> anyhow::Result<()> {
    let (dataset, config) = global.load(&[Table::Races])?;
    let analyzer = Analyzer::new(&dataset, config);
    let races = analyzer.races_for_year(arg.year)?;

    println!("Races of {} ({} total)", arg.year, races.len());
    println!("  {:>6} {:>5} {:<12} Name", "Id", "Round", "Date");
    for &id in &races {
        let Some(race) = dataset.race(id) else {
            continue;
        };
        let date = race.date.to_string();
        println!(
            "  {:>6} {:>5} {date:<12} {}",
            race.id.0, race.round, race.name
        );
    }
    Ok(())
}
