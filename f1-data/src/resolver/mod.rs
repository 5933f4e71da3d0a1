//! Remote-first resolution of season reference data.
//!
//! Every list operation asks the Ergast source first. If that fails for any
//! reason the resolver logs the failure and answers from the static
//! snapshot instead; callers never see the remote error. Failures of the
//! snapshot itself (unreadable dataset, season missing from it) are
//! returned as `ResolverError`.
//!
//! The snapshot covers a single season. Asking for another year while the
//! API is down still returns the snapshot season's drivers.

mod config;
mod error;
mod fallback;


use chrono::Datelike;
use tracing::{debug, warn};

use crate::domain::{Driver, Round, Session, Team};
use crate::ergast::{ErgastClient, ErgastConfig, ErgastError, ErgastSource};
use crate::tables;

pub use config::{ResolverConfig, TRACKS_JSON_ENV};
pub use error::ResolverError;
pub use fallback::{
    drivers_from_tables, rounds_from_dataset, snapshot_drivers, snapshot_sessions,
    snapshot_team_drivers,
};

/// The current calendar year, the usual season to ask about.
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

/// Resolves drivers, rounds and sessions, preferring the remote source.
#[derive(Debug, Clone)]
pub struct Resolver<S = ErgastClient> {
    source: S,
    config: ResolverConfig,
}

impl Resolver<ErgastClient> {
    /// Resolver backed by the public Ergast API, with the track dataset
    /// location taken from the environment.
    pub fn from_env() -> Result<Self, ErgastError> {
        let client = ErgastClient::new(ErgastConfig::new())?;
        Ok(Self::new(client, ResolverConfig::from_env()))
    }
}

impl<S: ErgastSource> Resolver<S> {
    pub fn new(source: S, config: ResolverConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Drivers of a season.
    ///
    /// Falls back to the snapshot drivers, in snapshot table order, when the
    /// remote source fails.
    pub async fn get_drivers(&self, year: i32) -> Vec<Driver> {
        match self.source.drivers_by_year(year).await {
            Ok(drivers) => drivers,
            Err(e) => {
                warn!(year, error = %e, "drivers unavailable from Ergast, using snapshot");
                let drivers = fallback::snapshot_drivers();
                debug!(year, count = drivers.len(), "snapshot drivers");
                drivers
            }
        }
    }

    /// Drivers of one team in a season.
    ///
    /// `team` may be a team code ("RBR"), a team name ("red bull") or an
    /// Ergast constructor id ("red_bull"). A team the snapshot does not know
    /// is passed to the API as given and yields no drivers on fallback.
    pub async fn get_drivers_by_team(&self, team: &str, year: i32) -> Vec<Driver> {
        let known = tables::resolve_team(team);
        let constructor = known
            .map(|t| t.constructor_id().to_string())
            .unwrap_or_else(|| team.trim().to_lowercase());

        match self.source.drivers_by_team_and_year(year, &constructor).await {
            Ok(drivers) => drivers,
            Err(e) => {
                warn!(
                    year,
                    team,
                    error = %e,
                    "team drivers unavailable from Ergast, using snapshot"
                );
                known.map(fallback::snapshot_team_drivers).unwrap_or_default()
            }
        }
    }

    /// The five weekend sessions. Never consults the remote source.
    pub fn get_sessions(&self) -> Vec<Session> {
        fallback::snapshot_sessions()
    }

    /// Rounds of a season.
    ///
    /// Falls back to the track dataset when the remote source fails. Every
    /// track in the dataset must have a position for `year`, otherwise the
    /// call fails with `ResolverError::MissingSeason`.
    pub async fn get_rounds_by_year(&self, year: i32) -> Result<Vec<Round>, ResolverError> {
        match self.source.rounds_by_year(year).await {
            Ok(rounds) => Ok(rounds),
            Err(e) => {
                warn!(year, error = %e, "rounds unavailable from Ergast, using track dataset");
                let dataset = fallback::load_tracks(&self.config.tracks_path).await?;
                let rounds = fallback::rounds_from_dataset(&dataset, year)?;
                debug!(year, count = rounds.len(), "track dataset rounds");
                Ok(rounds)
            }
        }
    }

    /// Family name of the driver with exactly this abbreviation.
    ///
    /// The comparison is case-sensitive, unlike `get_driver`. An empty
    /// abbreviation never matches, even against drivers the API sent
    /// without a code.
    pub async fn get_driver_name_from_abbr(&self, abbr: &str, year: i32) -> Option<String> {
        if abbr.is_empty() {
            return None;
        }
        self.get_drivers(year)
            .await
            .into_iter()
            .find(|driver| driver.abbr == abbr)
            .map(|driver| driver.name)
    }

    /// First driver whose family name or abbreviation matches `query`,
    /// ignoring case.
    pub async fn get_driver(&self, query: &str, year: i32) -> Option<Driver> {
        self.get_drivers(year)
            .await
            .into_iter()
            .find(|driver| driver.matches(query))
    }

    /// Display colour of a driver's team, by abbreviation or surname.
    ///
    /// Snapshot data only.
    pub fn get_team_color(&self, driver: &str) -> Option<&'static str> {
        tables::driver_team(driver).map(Team::color)
    }
}
