//! Resolver configuration.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the track dataset location.
pub const TRACKS_JSON_ENV: &str = "TRACKS_JSON";

/// Track dataset location relative to the package root.
const DEFAULT_TRACKS_PATH: &str = "data/f1_tracks.json";

/// Configuration for the resolver's static fallback.
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    /// Path of the static track dataset.
    pub tracks_path: PathBuf,
}

impl ResolverConfig {
    /// Create a config using the bundled track dataset.
    pub fn new() -> Self {
        Self {
            tracks_path: package_path(DEFAULT_TRACKS_PATH),
        }
    }

    /// Create a config honouring the `TRACKS_JSON` environment variable.
    ///
    /// Relative paths are resolved against the package root.
    pub fn from_env() -> Self {
        Self::from_override(std::env::var_os(TRACKS_JSON_ENV))
    }

    fn from_override(tracks_path: Option<OsString>) -> Self {
        match tracks_path {
            Some(path) if !path.is_empty() => Self::new().with_tracks_path(package_path(path)),
            _ => Self::new(),
        }
    }

    /// Set the track dataset path.
    pub fn with_tracks_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.tracks_path = path.into();
        self
    }
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Resolve `path` against the package root unless it is already absolute.
fn package_path(path: impl AsRef<Path>) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_bundled_dataset() {
        let config = ResolverConfig::default();
        assert!(config.tracks_path.is_absolute());
        assert!(config.tracks_path.ends_with("data/f1_tracks.json"));
        assert!(config.tracks_path.exists());
    }

    #[test]
    fn builder_overrides_path() {
        let config = ResolverConfig::new().with_tracks_path("/tmp/tracks.json");
        assert_eq!(config.tracks_path, PathBuf::from("/tmp/tracks.json"));
    }

    #[test]
    fn absolute_override_kept() {
        let config = ResolverConfig::from_override(Some("/srv/f1/tracks.json".into()));
        assert_eq!(config.tracks_path, PathBuf::from("/srv/f1/tracks.json"));
    }

    #[test]
    fn relative_override_resolved_against_package() {
        let config = ResolverConfig::from_override(Some("fixtures/tracks.json".into()));
        assert_eq!(
            config.tracks_path,
            Path::new(env!("CARGO_MANIFEST_DIR")).join("fixtures/tracks.json")
        );
    }

    #[test]
    fn empty_override_ignored() {
        let config = ResolverConfig::from_override(Some(OsString::new()));
        assert_eq!(config.tracks_path, ResolverConfig::new().tracks_path);
        let config = ResolverConfig::from_override(None);
        assert_eq!(config.tracks_path, ResolverConfig::new().tracks_path);
    }
}
