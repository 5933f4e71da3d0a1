//! The seam between the resolver and wherever remote data comes from.

use std::future::Future;

use crate::domain::{Driver, Round};

use super::client::ErgastClient;
use super::error::ErgastError;
use super::mock::MockErgastClient;

/// A source of season data shaped like the Ergast API.
///
/// Any `Err` means "remote data unavailable"; an `Ok` list is complete.
pub trait ErgastSource: Send + Sync {
    fn rounds_by_year(
        &self,
        year: i32,
    ) -> impl Future<Output = Result<Vec<Round>, ErgastError>> + Send;

    fn drivers_by_year(
        &self,
        year: i32,
    ) -> impl Future<Output = Result<Vec<Driver>, ErgastError>> + Send;

    fn drivers_by_team_and_year(
        &self,
        year: i32,
        team: &str,
    ) -> impl Future<Output = Result<Vec<Driver>, ErgastError>> + Send;
}

impl ErgastSource for ErgastClient {
    async fn rounds_by_year(&self, year: i32) -> Result<Vec<Round>, ErgastError> {
        self.get_rounds_by_year(year).await
    }

    async fn drivers_by_year(&self, year: i32) -> Result<Vec<Driver>, ErgastError> {
        self.get_drivers_by_year(year).await
    }

    async fn drivers_by_team_and_year(
        &self,
        year: i32,
        team: &str,
    ) -> Result<Vec<Driver>, ErgastError> {
        self.get_drivers_by_team_and_year(year, team).await
    }
}

impl ErgastSource for MockErgastClient {
    async fn rounds_by_year(&self, year: i32) -> Result<Vec<Round>, ErgastError> {
        self.get_rounds_by_year(year)
    }

    async fn drivers_by_year(&self, year: i32) -> Result<Vec<Driver>, ErgastError> {
        self.get_drivers_by_year(year)
    }

    async fn drivers_by_team_and_year(
        &self,
        year: i32,
        team: &str,
    ) -> Result<Vec<Driver>, ErgastError> {
        self.get_drivers_by_team_and_year(year, team)
    }
}
