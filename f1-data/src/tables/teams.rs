//! Team snapshot tables.
//!
//! Per-team data (code, name, constructor id, colour) lives on
//! [`Team`]; this module holds the driver → team assignments.

use crate::domain::Team;

/// Driver abbreviation or uppercased surname → team.
///
/// Keyed by both, so either form of a driver resolves. Zhou is listed
/// under "ZHO" here.
pub const DRIVER_TEAMS: &[(&str, Team)] = &[
    ("LEC", Team::Ferrari),
    ("LECLERC", Team::Ferrari),
    ("SAI", Team::Ferrari),
    ("SAINZ", Team::Ferrari),
    ("VER", Team::RedBull),
    ("VERSTAPPEN", Team::RedBull),
    ("PER", Team::RedBull),
    ("PEREZ", Team::RedBull),
    ("HAM", Team::Mercedes),
    ("HAMILTON", Team::Mercedes),
    ("RUS", Team::Mercedes),
    ("RUSSELL", Team::Mercedes),
    ("RIC", Team::McLaren),
    ("RICCIARDO", Team::McLaren),
    ("NOR", Team::McLaren),
    ("NORRIS", Team::McLaren),
    ("ALO", Team::Alpine),
    ("ALONSO", Team::Alpine),
    ("OCO", Team::Alpine),
    ("OCON", Team::Alpine),
    ("VET", Team::AstonMartin),
    ("VETTEL", Team::AstonMartin),
    ("STR", Team::AstonMartin),
    ("STROLL", Team::AstonMartin),
    ("BOT", Team::AlfaRomeo),
    ("BOTTAS", Team::AlfaRomeo),
    ("ZHO", Team::AlfaRomeo),
    ("ZHOU", Team::AlfaRomeo),
    ("TSU", Team::AlphaTauri),
    ("TSUNODA", Team::AlphaTauri),
    ("GAS", Team::AlphaTauri),
    ("GASLY", Team::AlphaTauri),
    ("MSC", Team::Haas),
    ("MSCHUMACHER", Team::Haas),
    ("MAG", Team::Haas),
    ("MAGNUSSEN", Team::Haas),
    ("ALB", Team::Williams),
    ("ALBON", Team::Williams),
    ("LAT", Team::Williams),
    ("LATIFI", Team::Williams),
];

/// Team of a driver, by abbreviation or surname, ignoring case.
pub fn driver_team(driver: &str) -> Option<Team> {
    let driver = driver.to_uppercase();
    DRIVER_TEAMS
        .iter()
        .find(|(key, _)| *key == driver)
        .map(|(_, team)| *team)
}

/// Display colour for a team name, ignoring case.
pub fn team_color(name: &str) -> Option<&'static str> {
    Team::from_name(name).map(Team::color)
}

/// Resolve a team given as a code ("RBR"), a name ("Red Bull") or an
/// Ergast constructor id ("red_bull").
pub fn resolve_team(query: &str) -> Option<Team> {
    let query = query.trim();
    Team::from_code(query)
        .or_else(|| Team::from_name(query))
        .or_else(|| Team::from_name(&query.replace('_', " ")))
        .or_else(|| Team::from_constructor_id(query))
}
