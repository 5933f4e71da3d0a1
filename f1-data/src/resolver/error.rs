//! Resolver error types.
//!
//! Remote failures never appear here: the resolver absorbs them by falling
//! back to the static snapshot. These errors mean the snapshot itself is
//! unusable for the request, which is a data or configuration problem.

use std::path::PathBuf;

/// Errors from the static fallback path.
#[derive(Debug, thiserror::Error)]
pub enum ResolverError {
    /// Track dataset could not be read
    #[error("failed to read track dataset {path:?}: {source}")]
    TracksIo {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Track dataset is not valid JSON of the expected shape
    #[error("invalid track dataset {path:?}: {message}")]
    TracksJson { path: PathBuf, message: String },

    /// A track has no calendar position for the requested season
    #[error("track {track} has no calendar position for {year}")]
    MissingSeason { track: String, year: i32 },

    /// A calendar position is not a positive integer
    #[error("track {track} has invalid calendar position {value:?}")]
    InvalidRoundNumber { track: String, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ResolverError::MissingSeason {
            track: "miami".into(),
            year: 2021,
        };
        assert_eq!(err.to_string(), "track miami has no calendar position for 2021");

        let err = ResolverError::InvalidRoundNumber {
            track: "spa".into(),
            value: "fourteenth".into(),
        };
        assert_eq!(
            err.to_string(),
            "track spa has invalid calendar position \"fourteenth\""
        );

        let err = ResolverError::TracksJson {
            path: PathBuf::from("tracks.json"),
            message: "expected value".into(),
        };
        assert_eq!(
            err.to_string(),
            "invalid track dataset \"tracks.json\": expected value"
        );
    }
}
