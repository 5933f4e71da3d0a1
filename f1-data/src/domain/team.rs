//! Constructor (team) type.

use std::fmt;

use serde::Serialize;

/// One of the ten constructors of the snapshot season.
///
/// Each team carries the short code the static tables use ("RBR"), a
/// lowercase display name, its Ergast constructor id and a display colour.
///
/// # Examples
///
/// ```
/// use f1_data::domain::Team;
///
/// let team = Team::from_code("rbr").unwrap();
/// assert_eq!(team, Team::RedBull);
/// assert_eq!(team.name(), "red bull");
/// assert_eq!(team.constructor_id(), "red_bull");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Team {
    Mercedes,
    Ferrari,
    RedBull,
    McLaren,
    Alpine,
    AstonMartin,
    AlfaRomeo,
    AlphaTauri,
    Haas,
    Williams,
}

impl Team {
    /// Every team, in table order.
    pub const ALL: [Team; 10] = [
        Team::Mercedes,
        Team::Ferrari,
        Team::RedBull,
        Team::McLaren,
        Team::Alpine,
        Team::AstonMartin,
        Team::AlfaRomeo,
        Team::AlphaTauri,
        Team::Haas,
        Team::Williams,
    ];

    /// Three-letter code used by the static tables.
    pub const fn code(self) -> &'static str {
        match self {
            Team::Mercedes => "MER",
            Team::Ferrari => "FER",
            Team::RedBull => "RBR",
            Team::McLaren => "MCL",
            Team::Alpine => "APN",
            Team::AstonMartin => "AMR",
            Team::AlfaRomeo => "ARR",
            Team::AlphaTauri => "APT",
            Team::Haas => "HAA",
            Team::Williams => "WIL",
        }
    }

    /// Lowercase display name.
    pub const fn name(self) -> &'static str {
        match self {
            Team::Mercedes => "mercedes",
            Team::Ferrari => "ferrari",
            Team::RedBull => "red bull",
            Team::McLaren => "mclaren",
            Team::Alpine => "alpine",
            Team::AstonMartin => "aston martin",
            Team::AlfaRomeo => "alfa romeo",
            Team::AlphaTauri => "alphatauri",
            Team::Haas => "haas",
            Team::Williams => "williams",
        }
    }

    /// Constructor id in Ergast URLs.
    pub const fn constructor_id(self) -> &'static str {
        match self {
            Team::Mercedes => "mercedes",
            Team::Ferrari => "ferrari",
            Team::RedBull => "red_bull",
            Team::McLaren => "mclaren",
            Team::Alpine => "alpine",
            Team::AstonMartin => "aston_martin",
            Team::AlfaRomeo => "alfa",
            Team::AlphaTauri => "alphatauri",
            Team::Haas => "haas",
            Team::Williams => "williams",
        }
    }

    /// Display colour as a hex string.
    pub const fn color(self) -> &'static str {
        match self {
            Team::Mercedes => "#00d2be",
            Team::Ferrari => "#dc0000",
            Team::RedBull => "#0565ff",
            Team::McLaren => "#ff8700",
            Team::Alpine => "#0090ff",
            Team::AstonMartin => "#006f62",
            Team::AlfaRomeo => "#900000",
            Team::AlphaTauri => "#2b4562",
            Team::Haas => "#ffffff",
            Team::Williams => "#005aff",
        }
    }

    /// Team with this code, ignoring case.
    pub fn from_code(code: &str) -> Option<Team> {
        Self::ALL
            .into_iter()
            .find(|team| team.code().eq_ignore_ascii_case(code))
    }

    /// Team with this display name, ignoring case.
    pub fn from_name(name: &str) -> Option<Team> {
        Self::ALL
            .into_iter()
            .find(|team| team.name().eq_ignore_ascii_case(name))
    }

    /// Team with this Ergast constructor id, ignoring case.
    pub fn from_constructor_id(id: &str) -> Option<Team> {
        Self::ALL
            .into_iter()
            .find(|team| team.constructor_id().eq_ignore_ascii_case(id))
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
