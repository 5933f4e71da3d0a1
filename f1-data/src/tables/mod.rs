//! Static reference tables.
//!
//! A snapshot of a single season, used when the Ergast API cannot be
//! reached. The tables do not vary by year: asking for any other season
//! still yields the snapshot season's data.
//!
//! All tables are `const` slices, so they are immutable and keep their
//! declaration order, which is the order fallback results come out in.

mod drivers;
mod sessions;
mod teams;
mod tracks;

pub use drivers::{
    DRIVER_ABBRS, DRIVER_NUMBERS, SEASON_ROSTER, driver_abbr, driver_by_number, driver_surname,
    season_roster,
};
pub use sessions::{SESSIONS, session_abbr};
pub use teams::{DRIVER_TEAMS, driver_team, resolve_team, team_color};
pub use tracks::{RaceNames, TrackDataset, TrackEntry};

/// The season the tables were recorded for.
pub const SNAPSHOT_SEASON: i32 = 2022;
