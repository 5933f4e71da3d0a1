//! Mock Ergast client for testing without network access.
//!
//! Serves recorded API responses from JSON files, or fails every request
//! to simulate the API being down.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::domain::{Driver, Round};

use super::convert::{parse_drivers, parse_rounds};
use super::error::ErgastError;

/// Mock Ergast client that serves data from recorded responses.
///
/// Responses are keyed the way the fixture files are named:
/// - `{year}` for the season calendar (`2022.json`)
/// - `{year}_drivers` for the driver table (`2022_drivers.json`)
/// - `{year}_{team}_drivers` for a constructor's drivers
///   (`2022_red_bull_drivers.json`)
#[derive(Debug, Clone, Default)]
pub struct MockErgastClient {
    responses: Arc<HashMap<String, String>>,
}

impl MockErgastClient {
    /// Create a mock client by loading every `.json` file in a directory.
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, ErgastError> {
        let data_dir = data_dir.as_ref();
        let mut responses = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| ErgastError::Mock {
            message: format!("failed to read mock data directory {:?}: {}", data_dir, e),
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| ErgastError::Mock {
                message: format!("failed to read directory entry: {}", e),
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };

            let body = std::fs::read_to_string(&path).map_err(|e| ErgastError::Mock {
                message: format!("failed to read {:?}: {}", path, e),
            })?;

            responses.insert(key.to_string(), body);
        }

        if responses.is_empty() {
            return Err(ErgastError::Mock {
                message: format!("no mock response files found in {:?}", data_dir),
            });
        }

        Ok(Self {
            responses: Arc::new(responses),
        })
    }

    /// A mock with no recorded responses: every request fails.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Add or replace a recorded response body.
    pub fn with_response(mut self, key: impl Into<String>, body: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.responses).insert(key.into(), body.into());
        self
    }

    /// Keys of all recorded responses.
    pub fn available(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.responses.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    fn body(&self, key: &str) -> Result<&str, ErgastError> {
        self.responses
            .get(key)
            .map(String::as_str)
            .ok_or_else(|| ErgastError::Mock {
                message: format!("no recorded response for {key}"),
            })
    }

    /// Mimics `ErgastClient::get_rounds_by_year`.
    pub fn get_rounds_by_year(&self, year: i32) -> Result<Vec<Round>, ErgastError> {
        parse_rounds(self.body(&year.to_string())?)
    }

    /// Mimics `ErgastClient::get_drivers_by_year`.
    pub fn get_drivers_by_year(&self, year: i32) -> Result<Vec<Driver>, ErgastError> {
        parse_drivers(self.body(&format!("{year}_drivers"))?)
    }

    /// Mimics `ErgastClient::get_drivers_by_team_and_year`.
    pub fn get_drivers_by_team_and_year(
        &self,
        year: i32,
        team: &str,
    ) -> Result<Vec<Driver>, ErgastError> {
        parse_drivers(self.body(&format!("{year}_{team}_drivers"))?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_mock_data() {
        let client = MockErgastClient::new("data/mock_ergast").unwrap();
        let available = client.available();

        assert!(available.contains(&"2022"));
        assert!(available.contains(&"2022_drivers"));
        assert!(available.contains(&"2022_red_bull_drivers"));
    }

    #[test]
    fn serves_recorded_rounds() {
        let client = MockErgastClient::new("data/mock_ergast").unwrap();
        let rounds = client.get_rounds_by_year(2022).unwrap();

        assert_eq!(rounds.len(), 22);
        assert_eq!(rounds[0], Round::new(1, "Bahrain Grand Prix"));
        assert_eq!(rounds[21], Round::new(22, "Abu Dhabi Grand Prix"));
    }

    #[test]
    fn serves_recorded_team_drivers() {
        let client = MockErgastClient::new("data/mock_ergast").unwrap();
        let drivers = client.get_drivers_by_team_and_year(2022, "red_bull").unwrap();

        let abbrs: Vec<&str> = drivers.iter().map(|d| d.abbr.as_str()).collect();
        assert_eq!(abbrs, vec!["VER", "PER"]);
    }

    #[test]
    fn unknown_year_returns_error() {
        let client = MockErgastClient::new("data/mock_ergast").unwrap();
        assert!(matches!(
            client.get_rounds_by_year(1949),
            Err(ErgastError::Mock { .. })
        ));
    }

    #[test]
    fn unreachable_fails_everything() {
        let client = MockErgastClient::unreachable();
        assert!(client.get_rounds_by_year(2022).is_err());
        assert!(client.get_drivers_by_year(2022).is_err());
        assert!(client.get_drivers_by_team_and_year(2022, "ferrari").is_err());
    }

    #[test]
    fn malformed_recorded_body_is_json_error() {
        let client = MockErgastClient::unreachable().with_response("2022", "not json");
        assert!(matches!(
            client.get_rounds_by_year(2022),
            Err(ErgastError::Json { .. })
        ));
    }

    #[test]
    fn missing_directory_is_error() {
        assert!(MockErgastClient::new("/nonexistent/mock/dir").is_err());
    }
}
