//! A small two-season dataset shared by the unit tests.
//!
//! 2023 (races 20, 21): ACE 3 fastest laps, BRAKE 2, plus one lap by CRASH,
//! who is not in the final standings. Final points ACE 75, BRAKE 25.
//!
//! 2022 (races 10, 11): DRIFT 2 fastest laps, ACE 1. Final points DRIFT 60,
//! ACE 40.
//!
//! 1999 (race 5): one standings row for BRAKE, one lap by DRIFT.
//!
//! Drivers by birth: ACE 1985 British, BRAKE 1977 German, CRASH 1985
//! Spanish, DRIFT 1983 British.

use chrono::NaiveDate;
use pitwall_data::{
    ConstructorId, Dataset, DriverId, RaceId,
    record::{
        Constructor, ConstructorResult, Driver, DriverStanding, LapTime, PitStop, Race, RaceResult,
    },
};

pub(crate) const ACE: DriverId = DriverId(1);
pub(crate) const BRAKE: DriverId = DriverId(2);
pub(crate) const CRASH: DriverId = DriverId(3);
pub(crate) const DRIFT: DriverId = DriverId(4);

pub(crate) const ALPHA: ConstructorId = ConstructorId(1);
pub(crate) const BETA: ConstructorId = ConstructorId(2);
pub(crate) const GAMMA: ConstructorId = ConstructorId(3);

fn race(id: u32, year: i32, round: u32, name: &str) -> Race {
    Race {
        id: RaceId(id),
        year,
        round,
        name: name.to_owned(),
        date: NaiveDate::from_ymd_opt(year, 3 + round, 1).unwrap(),
    }
}

fn driver(id: DriverId, forename: &str, surname: &str, born: i32, nationality: &str) -> Driver {
    Driver {
        id,
        forename: forename.to_owned(),
        surname: surname.to_owned(),
        dob: NaiveDate::from_ymd_opt(born, 6, 15).unwrap(),
        nationality: nationality.to_owned(),
    }
}

fn lap(race: u32, driver: DriverId, lap: u32, milliseconds: u32) -> LapTime {
    LapTime {
        race: RaceId(race),
        driver,
        lap,
        milliseconds,
    }
}

fn standing(race: u32, driver: DriverId, points: f64, position: u32) -> DriverStanding {
    DriverStanding {
        race: RaceId(race),
        driver,
        points,
        position,
    }
}

fn pit_stop(race: u32, driver: DriverId, stop: u32, milliseconds: u32) -> PitStop {
    PitStop {
        race: RaceId(race),
        driver,
        stop,
        lap: 20 * stop,
        milliseconds,
    }
}

fn result(race: u32, driver: DriverId, constructor: ConstructorId) -> RaceResult {
    RaceResult {
        race: RaceId(race),
        driver,
        constructor,
    }
}

fn constructor_result(race: u32, constructor: ConstructorId, points: f64) -> ConstructorResult {
    ConstructorResult {
        race: RaceId(race),
        constructor,
        points,
    }
}

fn constructor(id: ConstructorId, name: &str) -> Constructor {
    Constructor {
        id,
        name: name.to_owned(),
    }
}

pub(crate) fn dataset() -> Dataset {
    Dataset {
        races: vec![
            race(5, 1999, 1, "Old Grand Prix"),
            race(10, 2022, 1, "Delta Grand Prix"),
            race(11, 2022, 2, "Echo Grand Prix"),
            race(20, 2023, 1, "Alpha Grand Prix"),
            race(21, 2023, 2, "Bravo Grand Prix"),
        ],
        drivers: vec![
            driver(ACE, "Alice", "Ace", 1985, "British"),
            driver(BRAKE, "Bob", "Brake", 1977, "German"),
            driver(CRASH, "Carl", "Crash", 1985, "Spanish"),
            driver(DRIFT, "Dana", "Drift", 1983, "British"),
        ],
        lap_times: vec![
            lap(5, DRIFT, 1, 100_000),
            // 2022
            lap(10, DRIFT, 1, 80_000),
            lap(10, ACE, 1, 81_000),
            lap(10, DRIFT, 2, 79_500),
            lap(10, ACE, 2, 79_000),
            lap(11, ACE, 1, 70_100),
            lap(11, DRIFT, 1, 70_000),
            // 2023
            lap(20, ACE, 1, 90_000),
            lap(20, BRAKE, 1, 91_000),
            lap(20, CRASH, 1, 89_000),
            lap(20, ACE, 2, 88_000),
            lap(20, BRAKE, 2, 88_500),
            lap(20, CRASH, 2, 89_000),
            lap(20, BRAKE, 3, 87_000),
            lap(20, ACE, 3, 87_500),
            lap(21, BRAKE, 1, 95_000),
            lap(21, ACE, 1, 95_000),
            lap(21, ACE, 2, 94_000),
            lap(21, BRAKE, 2, 94_500),
            lap(21, ACE, 3, 93_000),
            lap(21, BRAKE, 3, 93_500),
        ],
        driver_standings: vec![
            standing(5, BRAKE, 10.0, 1),
            standing(10, ACE, 25.0, 1),
            standing(10, DRIFT, 18.0, 2),
            standing(11, ACE, 40.0, 2),
            standing(11, DRIFT, 60.0, 1),
            standing(20, BRAKE, 25.0, 1),
            standing(20, ACE, 18.0, 2),
            standing(21, ACE, 75.0, 1),
            standing(21, BRAKE, 25.0, 2),
        ],
        pit_stops: vec![
            pit_stop(10, DRIFT, 1, 100_000),
            pit_stop(20, ACE, 1, 22_000),
            pit_stop(20, ACE, 2, 23_000),
            pit_stop(20, BRAKE, 1, 24_000),
            pit_stop(21, ACE, 1, 21_000),
            pit_stop(21, BRAKE, 1, 25_000),
            pit_stop(21, BRAKE, 2, 90_000),
        ],
        results: vec![
            result(10, DRIFT, ALPHA),
            result(10, ACE, BETA),
            result(20, ACE, ALPHA),
            result(20, BRAKE, BETA),
            result(21, ACE, ALPHA),
            result(21, BRAKE, BETA),
        ],
        constructor_results: vec![
            constructor_result(10, ALPHA, 40.0),
            constructor_result(20, ALPHA, 25.0),
            constructor_result(20, BETA, 18.0),
            constructor_result(20, GAMMA, 0.0),
            constructor_result(21, ALPHA, 18.0),
            constructor_result(21, BETA, 25.0),
            constructor_result(21, GAMMA, 1.0),
        ],
        constructors: vec![
            constructor(ALPHA, "Alpha"),
            constructor(BETA, "Beta"),
            constructor(GAMMA, "Gamma"),
        ],
    }
}
