use std::{
    fmt, io,
    path::{Path, PathBuf},
};

use serde::de::DeserializeOwned;

use crate::{
    ConstructorId, DriverId, RaceId,
    record::{
        Constructor, ConstructorResult, Driver, DriverStanding, LapTime, PitStop, Race, RaceResult,
    },
};

/// A table of the dataset, one CSV file each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Races,
    Drivers,
    LapTimes,
    DriverStandings,
    PitStops,
    Results,
    ConstructorResults,
    Constructors,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.name(), f)
    }
}

impl Table {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Table::Races => "races",
            Table::Drivers => "drivers",
            Table::LapTimes => "lap_times",
            Table::DriverStandings => "driver_standings",
            Table::PitStops => "pit_stops",
            Table::Results => "results",
            Table::ConstructorResults => "constructor_results",
            Table::Constructors => "constructors",
        }
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.csv", self.name())
    }
}

#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum LoadError {
    #[display("failed to open {table} table at {}", path.display())]
    Open {
        table: Table,
        path: PathBuf,
        source: io::Error,
    },
    #[display("failed to parse {table} table")]
    Parse { table: Table, source: csv::Error },
}

/// The in-memory tables of the dataset.
///
/// Tables that were not loaded are empty. All lookups are linear scans; the
/// catalogs (races, drivers, constructors) are small.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub races: Vec<Race>,
    pub drivers: Vec<Driver>,
    pub lap_times: Vec<LapTime>,
    pub driver_standings: Vec<DriverStanding>,
    pub pit_stops: Vec<PitStop>,
    pub results: Vec<RaceResult>,
    pub constructor_results: Vec<ConstructorResult>,
    pub constructors: Vec<Constructor>,
}

impl Dataset {
    /// Loads the given tables from `<dir>/<table>.csv`.
    ///
    /// Tables that are not listed are left empty, so commands only pay for
    /// the tables they read.
    pub fn load<P>(dir: P, tables: &[Table]) -> Result<Self, LoadError>
    where
        P: AsRef<Path>,
    {
        let dir = dir.as_ref();
        let mut dataset = Self::default();
        for &table in tables {
            let path = dir.join(table.file_name());
            tracing::debug!(%table, path = %path.display(), "loading table");
            match table {
                Table::Races => dataset.races = read_table_file(table, &path)?,
                Table::Drivers => dataset.drivers = read_table_file(table, &path)?,
                Table::LapTimes => dataset.lap_times = read_table_file(table, &path)?,
                Table::DriverStandings => {
                    dataset.driver_standings = read_table_file(table, &path)?;
                }
                Table::PitStops => dataset.pit_stops = read_table_file(table, &path)?,
                Table::Results => dataset.results = read_table_file(table, &path)?,
                Table::ConstructorResults => {
                    dataset.constructor_results = read_table_file(table, &path)?;
                }
                Table::Constructors => dataset.constructors = read_table_file(table, &path)?,
            }
        }
        Ok(dataset)
    }

    #[must_use]
    pub fn race(&self, id: RaceId) -> Option<&Race> {
        self.races.iter().find(|race| race.id == id)
    }

    #[must_use]
    pub fn driver(&self, id: DriverId) -> Option<&Driver> {
        self.drivers.iter().find(|driver| driver.id == id)
    }

    #[must_use]
    pub fn constructor(&self, id: ConstructorId) -> Option<&Constructor> {
        self.constructors.iter().find(|c| c.id == id)
    }
}

/// Deserializes every row of a CSV table with a header line.
pub fn read_table<T, R>(reader: R) -> Result<Vec<T>, csv::Error>
where
    T: DeserializeOwned,
    R: io::Read,
{
    csv::Reader::from_reader(reader).deserialize().collect()
}

fn read_table_file<T>(table: Table, path: &Path) -> Result<Vec<T>, LoadError>
where
    T: DeserializeOwned,
{
    let file = std::fs::File::open(path).map_err(|source| LoadError::Open {
        table,
        path: path.to_owned(),
        source,
    })?;
    let rows: Vec<T> =
        read_table(io::BufReader::new(file)).map_err(|source| LoadError::Parse { table, source })?;
    tracing::debug!(%table, rows = rows.len(), "table loaded");
    Ok(rows)
}
