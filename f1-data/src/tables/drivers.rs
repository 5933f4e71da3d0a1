//! Driver snapshot tables.
//!
//! Surnames are stored uppercased. The tables are reproduced as recorded,
//! including their inconsistencies: Zhou's abbreviation is "ZHP" in the
//! surname table but "ZHO" everywhere else, and Hülkenberg (27) appears in
//! the number table and the roster but has no surname entry.

/// Surname → abbreviation.
pub const DRIVER_ABBRS: &[(&str, &str)] = &[
    ("LECLERC", "LEC"),
    ("SAINZ", "SAI"),
    ("VERSTAPPEN", "VER"),
    ("PEREZ", "PER"),
    ("HAMILTON", "HAM"),
    ("RUSSELL", "RUS"),
    ("RICCIARDO", "RIC"),
    ("NORRIS", "NOR"),
    ("ALONSO", "ALO"),
    ("OCON", "OCO"),
    ("VETTEL", "VET"),
    ("STROLL", "STR"),
    ("BOTTAS", "BOT"),
    ("ZHOU", "ZHP"),
    ("TSUNODA", "TSU"),
    ("GASLY", "GAS"),
    ("MSCHUMACHER", "MSC"),
    ("MAGNUSSEN", "MAG"),
    ("ALBON", "ALB"),
    ("LATIFI", "LAT"),
];

/// Car number → abbreviation.
pub const DRIVER_NUMBERS: &[(u32, &str)] = &[
    (1, "VER"),
    (3, "RIC"),
    (4, "NOR"),
    (5, "VET"),
    (6, "LAT"),
    (10, "GAS"),
    (11, "PER"),
    (14, "ALO"),
    (16, "LEC"),
    (18, "STR"),
    (20, "MAG"),
    (22, "TSU"),
    (23, "ALB"),
    (24, "ZHO"),
    (27, "HUL"),
    (31, "OCO"),
    (44, "HAM"),
    (47, "MSC"),
    (55, "SAI"),
    (63, "RUS"),
    (77, "BOT"),
];

/// Every driver entered in the snapshot season.
pub const SEASON_ROSTER: &[&str] = &[
    "ALB", "ALO", "BOT", "HAM", "HUL", "LAT", "LEC", "MAG", "NOR", "OCO", "RIC", "RUS", "GAS",
    "SAI", "MSC", "STR", "TSU", "VER", "VET", "ZHO", "PER",
];

/// Abbreviation for a surname, ignoring case.
pub fn driver_abbr(surname: &str) -> Option<&'static str> {
    let surname = surname.to_uppercase();
    DRIVER_ABBRS
        .iter()
        .find(|(name, _)| *name == surname)
        .map(|(_, abbr)| *abbr)
}

/// Uppercased surname for an abbreviation, ignoring case.
pub fn driver_surname(abbr: &str) -> Option<&'static str> {
    let abbr = abbr.to_uppercase();
    DRIVER_ABBRS
        .iter()
        .find(|(_, a)| *a == abbr)
        .map(|(name, _)| *name)
}

/// Abbreviation of the driver carrying `number`.
pub fn driver_by_number(number: u32) -> Option<&'static str> {
    DRIVER_NUMBERS
        .iter()
        .find(|(n, _)| *n == number)
        .map(|(_, abbr)| *abbr)
}

/// The snapshot season's roster, in table order.
pub fn season_roster() -> &'static [&'static str] {
    SEASON_ROSTER
}
