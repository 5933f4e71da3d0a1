//! Ergast HTTP client.
//!
//! Each method issues exactly one GET request. There is no retry and no
//! caching: a failed request is reported once and the caller decides what
//! to do with it.

use std::time::Duration;

use tracing::{debug, error};

use crate::domain::{Driver, Round};

use super::convert::{parse_drivers, parse_rounds};
use super::error::ErgastError;

/// Default base URL for the Ergast API.
pub(crate) const DEFAULT_BASE_URL: &str = "http://ergast.com/api/f1";

/// Default request timeout.
pub(crate) const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration for the Ergast client.
#[derive(Debug, Clone)]
pub struct ErgastConfig {
    /// Base URL for the API, without a trailing slash
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl ErgastConfig {
    /// Create a config pointing at the public Ergast API.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Set a custom base URL (for testing or a mirror).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for ErgastConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Ergast API client.
#[derive(Debug, Clone)]
pub struct ErgastClient {
    http: reqwest::Client,
    base_url: String,
}

impl ErgastClient {
    /// Create a new Ergast client with the given configuration.
    pub fn new(config: ErgastConfig) -> Result<Self, ErgastError> {
        let base_url = config.base_url.trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ErgastError::NotConfigured("base URL is empty".to_string()));
        }

        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { http, base_url })
    }

    /// URL of the season calendar.
    pub fn rounds_url(&self, year: i32) -> String {
        format!("{}/{}.json", self.base_url, year)
    }

    /// URL of the season driver table.
    pub fn drivers_url(&self, year: i32) -> String {
        format!("{}/{}/drivers.json", self.base_url, year)
    }

    /// URL of the driver table for one constructor in a season.
    pub fn team_drivers_url(&self, year: i32, team: &str) -> String {
        format!(
            "{}/{}/constructors/{}/drivers.json",
            self.base_url, year, team
        )
    }

    /// Get the race calendar for a season.
    pub async fn get_rounds_by_year(&self, year: i32) -> Result<Vec<Round>, ErgastError> {
        let url = self.rounds_url(year);
        let rounds = self.fetch(&url).await.and_then(|body| parse_rounds(&body));
        log_outcome(&url, rounds)
    }

    /// Get every driver entered in a season.
    pub async fn get_drivers_by_year(&self, year: i32) -> Result<Vec<Driver>, ErgastError> {
        let url = self.drivers_url(year);
        let drivers = self.fetch(&url).await.and_then(|body| parse_drivers(&body));
        log_outcome(&url, drivers)
    }

    /// Get the drivers of one constructor in a season.
    ///
    /// `team` is an Ergast constructor id such as `red_bull`.
    pub async fn get_drivers_by_team_and_year(
        &self,
        year: i32,
        team: &str,
    ) -> Result<Vec<Driver>, ErgastError> {
        let url = self.team_drivers_url(year, team);
        let drivers = self.fetch(&url).await.and_then(|body| parse_drivers(&body));
        log_outcome(&url, drivers)
    }

    /// GET a URL and return the body of a successful response.
    async fn fetch(&self, url: &str) -> Result<String, ErgastError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ErgastError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(response.text().await?)
    }
}

fn log_outcome<T>(url: &str, result: Result<Vec<T>, ErgastError>) -> Result<Vec<T>, ErgastError> {
    match &result {
        Ok(items) => debug!(url, count = items.len(), "fetched from Ergast API"),
        Err(e) => error!(url, error = %e, "could not get data from Ergast API"),
    }
    result
}
