//! Static track dataset.
//!
//! The dataset is a JSON object keyed by track, each entry carrying the
//! race name(s) held there and the track's calendar position per season:
//!
//! ```json
//! {
//!   "bahrain": {
//!     "raceName": ["Bahrain Grand Prix"],
//!     "calendar_pos": { "2021": "1", "2022": "1" }
//!   }
//! }
//! ```
//!
//! Track order is the order of keys in the file.

use std::collections::HashMap;

use serde::Deserialize;

/// Race name(s) for a track: a single string or a list.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum RaceNames {
    One(String),
    Many(Vec<String>),
}

impl RaceNames {
    /// Iterate the names; a single string yields one item.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        let names: &[String] = match self {
            RaceNames::One(name) => std::slice::from_ref(name),
            RaceNames::Many(names) => names,
        };
        names.iter().map(String::as_str)
    }
}

/// One track in the dataset.
#[derive(Debug, Clone, Deserialize)]
pub struct TrackEntry {
    #[serde(rename = "raceName")]
    pub race_name: RaceNames,

    /// Season (as text) → calendar position (as text).
    pub calendar_pos: HashMap<String, String>,
}

impl TrackEntry {
    /// Calendar position text for a season, if the track has one.
    pub fn calendar_pos_for(&self, year: i32) -> Option<&str> {
        self.calendar_pos.get(&year.to_string()).map(String::as_str)
    }
}

/// The parsed dataset, in file order.
#[derive(Debug, Clone, Default)]
pub struct TrackDataset {
    tracks: Vec<(String, TrackEntry)>,
}

impl TrackDataset {
    /// Parse the dataset from JSON text.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        // serde_json is built with `preserve_order`, so the map keeps file order
        let raw: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;

        let tracks = raw
            .into_iter()
            .map(|(key, value)| {
                serde_json::from_value::<TrackEntry>(value).map(|entry| (key, entry))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { tracks })
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &TrackEntry)> {
        self.tracks.iter().map(|(key, entry)| (key.as_str(), entry))
    }

    pub fn get(&self, key: &str) -> Option<&TrackEntry> {
        self.iter().find(|(k, _)| *k == key).map(|(_, entry)| entry)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
