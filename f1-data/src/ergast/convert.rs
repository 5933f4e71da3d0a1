//! Conversion from Ergast DTOs to domain types.

use crate::domain::{Driver, Round};

use super::error::ErgastError;
use super::types::{DriverDto, DriversResponse, RaceDto, RacesResponse};

/// How much of an unparseable body to keep in the error.
const BODY_EXCERPT_CHARS: usize = 500;

/// Error during DTO to domain conversion.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConversionError {
    /// Round number is not a positive integer
    #[error("invalid round number: {0:?}")]
    InvalidRoundNumber(String),
}

impl From<ConversionError> for ErgastError {
    fn from(err: ConversionError) -> Self {
        ErgastError::Json {
            message: err.to_string(),
            body: None,
        }
    }
}

/// Parse a numeric-string round number into a positive integer.
pub(crate) fn parse_round_number(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|n| *n > 0)
}

fn convert_race(race: &RaceDto) -> Result<Round, ConversionError> {
    let round_number = parse_round_number(&race.round)
        .ok_or_else(|| ConversionError::InvalidRoundNumber(race.round.clone()))?;
    Ok(Round::new(round_number, race.race_name.clone()))
}

/// Convert a season calendar response into rounds, preserving API order.
pub fn convert_races(response: &RacesResponse) -> Result<Vec<Round>, ConversionError> {
    response
        .mr_data
        .race_table
        .races
        .iter()
        .map(convert_race)
        .collect()
}

fn convert_driver(driver: &DriverDto) -> Driver {
    Driver::new(
        driver.code.clone().unwrap_or_default(),
        driver.family_name.clone(),
        driver.permanent_number.clone().unwrap_or_default(),
    )
}

/// Convert a driver table response into drivers, preserving API order.
pub fn convert_drivers(response: &DriversResponse) -> Vec<Driver> {
    response
        .mr_data
        .driver_table
        .drivers
        .iter()
        .map(convert_driver)
        .collect()
}

fn parse_body<T: serde::de::DeserializeOwned>(body: &str) -> Result<T, ErgastError> {
    serde_json::from_str(body).map_err(|e| ErgastError::Json {
        message: e.to_string(),
        body: Some(body.chars().take(BODY_EXCERPT_CHARS).collect()),
    })
}

/// Parse a raw `/{year}.json` body into rounds.
pub fn parse_rounds(body: &str) -> Result<Vec<Round>, ErgastError> {
    let response: RacesResponse = parse_body(body)?;
    Ok(convert_races(&response)?)
}

/// Parse a raw driver table body into drivers.
pub fn parse_drivers(body: &str) -> Result<Vec<Driver>, ErgastError> {
    let response: DriversResponse = parse_body(body)?;
    Ok(convert_drivers(&response))
}
