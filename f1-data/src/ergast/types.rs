//! Ergast API response DTOs.
//!
//! These mirror the `MRData` envelope of the Ergast JSON API. Besides the
//! fields mapped into domain types, the season, date and id fields the API
//! echoes back are declared so they show up when a response is debugged.
//! serde ignores everything else.

use serde::Deserialize;

/// Response from `/{year}.json`.
#[derive(Debug, Clone, Deserialize)]
pub struct RacesResponse {
    #[serde(rename = "MRData")]
    pub mr_data: RaceData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaceData {
    #[serde(rename = "RaceTable")]
    pub race_table: RaceTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RaceTable {
    /// Season the table belongs to (echoed back by the API).
    pub season: Option<String>,

    #[serde(rename = "Races")]
    pub races: Vec<RaceDto>,
}

/// A single race in the season calendar.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RaceDto {
    pub season: Option<String>,

    /// Calendar position, sent as a numeric string (e.g. "3").
    pub round: String,

    pub race_name: String,

    /// ISO date of the race, e.g. "2022-03-20".
    pub date: Option<String>,
}

/// Response from `/{year}/drivers.json` and the per-constructor variant.
#[derive(Debug, Clone, Deserialize)]
pub struct DriversResponse {
    #[serde(rename = "MRData")]
    pub mr_data: DriverData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverData {
    #[serde(rename = "DriverTable")]
    pub driver_table: DriverTable,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DriverTable {
    pub season: Option<String>,

    /// Present only on the per-constructor endpoint.
    #[serde(rename = "constructorId")]
    pub constructor_id: Option<String>,

    #[serde(rename = "Drivers")]
    pub drivers: Vec<DriverDto>,
}

/// A driver entry.
///
/// Drivers from early seasons have neither a three-letter code nor a
/// permanent number, so both are optional here.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverDto {
    pub driver_id: Option<String>,
    pub code: Option<String>,
    pub permanent_number: Option<String>,
    pub given_name: Option<String>,
    pub family_name: String,
}
