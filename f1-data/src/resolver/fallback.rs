//! Derivation of domain objects from the static snapshot.
//!
//! These functions never consult `year` except to pick a calendar position
//! out of the track dataset; drivers and sessions are always the snapshot
//! season's.

use std::path::Path;

use crate::domain::{Driver, Round, Session, Team};
use crate::ergast::parse_round_number;
use crate::tables::{self, TrackDataset};

use super::error::ResolverError;

/// Join a surname→abbreviation table with a number→abbreviation table.
///
/// Emits one driver per matching pair, outer loop over `abbrs`, inner loop
/// over `numbers`. An abbreviation present in only one table produces
/// nothing.
pub fn drivers_from_tables(abbrs: &[(&str, &str)], numbers: &[(u32, &str)]) -> Vec<Driver> {
    abbrs
        .iter()
        .flat_map(move |(surname, abbr)| {
            numbers
                .iter()
                .filter(move |(_, numbered)| numbered == abbr)
                .map(move |(number, numbered)| {
                    Driver::new(*numbered, *surname, number.to_string())
                })
        })
        .collect()
}

/// Drivers of the snapshot season.
pub fn snapshot_drivers() -> Vec<Driver> {
    drivers_from_tables(tables::DRIVER_ABBRS, tables::DRIVER_NUMBERS)
}

/// Snapshot drivers racing for `team`.
pub fn snapshot_team_drivers(team: Team) -> Vec<Driver> {
    snapshot_drivers()
        .into_iter()
        .filter(|driver| tables::driver_team(&driver.abbr) == Some(team))
        .collect()
}

/// The five weekend sessions, in table order.
pub fn snapshot_sessions() -> Vec<Session> {
    tables::SESSIONS.to_vec()
}

/// Rounds of `year` according to the track dataset.
///
/// Every track must have a calendar position for `year`; the first one that
/// does not fails the whole derivation.
pub fn rounds_from_dataset(dataset: &TrackDataset, year: i32) -> Result<Vec<Round>, ResolverError> {
    let mut rounds = Vec::with_capacity(dataset.len());

    for (track, entry) in dataset.iter() {
        for race_name in entry.race_name.iter() {
            let position = entry
                .calendar_pos_for(year)
                .ok_or_else(|| ResolverError::MissingSeason {
                    track: track.to_string(),
                    year,
                })?;

            let round_number =
                parse_round_number(position).ok_or_else(|| ResolverError::InvalidRoundNumber {
                    track: track.to_string(),
                    value: position.to_string(),
                })?;

            rounds.push(Round::new(round_number, race_name));
        }
    }

    Ok(rounds)
}

/// Read and parse the track dataset.
pub async fn load_tracks(path: &Path) -> Result<TrackDataset, ResolverError> {
    let json = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| ResolverError::TracksIo {
            path: path.to_path_buf(),
            source,
        })?;

    TrackDataset::from_json(&json).map_err(|e| ResolverError::TracksJson {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_follows_surname_table_order() {
        let abbrs = [("NORRIS", "NOR"), ("ALONSO", "ALO")];
        let numbers = [(4, "NOR"), (14, "ALO")];

        assert_eq!(
            drivers_from_tables(&abbrs, &numbers),
            vec![
                Driver::new("NOR", "NORRIS", "4"),
                Driver::new("ALO", "ALONSO", "14"),
            ]
        );
    }

    #[test]
    fn join_drops_mismatched_abbreviation() {
        let abbrs = [("BOTTAS", "BOT"), ("ZHOU", "ZHP")];
        let numbers = [(24, "ZHO"), (77, "BOT")];

        let drivers = drivers_from_tables(&abbrs, &numbers);
        assert_eq!(drivers, vec![Driver::new("BOT", "BOTTAS", "77")]);
    }

    #[test]
    fn join_emits_every_matching_number() {
        let abbrs = [("VERSTAPPEN", "VER")];
        let numbers = [(1, "VER"), (33, "VER")];

        let numbers: Vec<String> = drivers_from_tables(&abbrs, &numbers)
            .into_iter()
            .map(|d| d.number)
            .collect();
        assert_eq!(numbers, vec!["1", "33"]);
    }

    #[test]
    fn snapshot_omits_zhou_and_hulkenberg() {
        let drivers = snapshot_drivers();

        assert_eq!(drivers.len(), 19);
        assert!(drivers.iter().all(|d| d.abbr != "ZHO" && d.abbr != "ZHP"));
        assert!(drivers.iter().all(|d| d.abbr != "HUL"));
        assert_eq!(drivers[0], Driver::new("LEC", "LECLERC", "16"));
        assert_eq!(drivers[2], Driver::new("VER", "VERSTAPPEN", "1"));
    }

    #[test]
    fn snapshot_team_drivers_filter() {
        let abbrs: Vec<String> = snapshot_team_drivers(Team::Ferrari)
            .into_iter()
            .map(|d| d.abbr)
            .collect();
        assert_eq!(abbrs, vec!["LEC", "SAI"]);

        // Zhou is missing from the snapshot, so Alfa Romeo has one driver
        assert_eq!(snapshot_team_drivers(Team::AlfaRomeo).len(), 1);
    }

    #[test]
    fn sessions_in_weekend_order() {
        let abbrs: Vec<&str> = snapshot_sessions().iter().map(|s| s.abbr).collect();
        assert_eq!(abbrs, vec!["FP1", "FP2", "FP3", "Q", "R"]);
    }

    #[test]
    fn rounds_one_per_race_name() {
        let dataset = TrackDataset::from_json(
            r#"{
                "red_bull_ring": {"raceName": ["Styrian Grand Prix", "Austrian Grand Prix"],
                                  "calendar_pos": {"2020": "2"}},
                "hungaroring": {"raceName": "Hungarian Grand Prix", "calendar_pos": {"2020": "3"}}
            }"#,
        )
        .unwrap();

        assert_eq!(
            rounds_from_dataset(&dataset, 2020).unwrap(),
            vec![
                Round::new(2, "Styrian Grand Prix"),
                Round::new(2, "Austrian Grand Prix"),
                Round::new(3, "Hungarian Grand Prix"),
            ]
        );
    }

    #[test]
    fn rounds_fail_on_missing_year() {
        let dataset = TrackDataset::from_json(
            r#"{
                "bahrain": {"raceName": ["Bahrain Grand Prix"], "calendar_pos": {"2021": "1", "2022": "1"}},
                "miami": {"raceName": ["Miami Grand Prix"], "calendar_pos": {"2022": "5"}}
            }"#,
        )
        .unwrap();

        match rounds_from_dataset(&dataset, 2021).unwrap_err() {
            ResolverError::MissingSeason { track, year } => {
                assert_eq!(track, "miami");
                assert_eq!(year, 2021);
            }
            other => panic!("expected MissingSeason, got {other:?}"),
        }
    }

    #[test]
    fn rounds_fail_on_bad_position() {
        let dataset = TrackDataset::from_json(
            r#"{"spa": {"raceName": ["Belgian Grand Prix"], "calendar_pos": {"2022": "TBC"}}}"#,
        )
        .unwrap();

        assert!(matches!(
            rounds_from_dataset(&dataset, 2022),
            Err(ResolverError::InvalidRoundNumber { .. })
        ));
    }

    #[tokio::test]
    async fn load_missing_file() {
        let err = load_tracks(Path::new("/nonexistent/f1_tracks.json"))
            .await
            .unwrap_err();
        assert!(matches!(err, ResolverError::TracksIo { .. }));
    }

    #[tokio::test]
    async fn load_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracks.json");
        std::fs::write(&path, "[1, 2, 3]").unwrap();

        let err = load_tracks(&path).await.unwrap_err();
        assert!(matches!(err, ResolverError::TracksJson { .. }));
    }
}
