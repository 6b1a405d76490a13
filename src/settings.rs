//! Game settings
//!
//! Read from a JSON file next to the executable. Every field has a default,
//! so a partial file only overrides what it names.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Settings file looked up in the working directory
pub const DEFAULT_SETTINGS_PATH: &str = "settings.json";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid settings {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Where the high score table is read from and written to
    pub high_scores_path: PathBuf,
    /// Optional JSON asset manifest replacing the built-in one
    pub asset_manifest_path: Option<PathBuf>,
    /// Fixed seed for reproducible rounds; derived from the clock when unset
    pub seed: Option<u64>,
    /// Host loop rate
    pub frames_per_second: u32,
    /// Log file, used only when `RUST_LOG` is set
    pub log_path: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            high_scores_path: PathBuf::from("res/highScores.txt"),
            asset_manifest_path: None,
            seed: None,
            frames_per_second: 60,
            log_path: PathBuf::from("egg-snatchers.log"),
        }
    }
}

impl Settings {
    /// Parse settings from `path`
    pub fn from_file(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path).map_err(|source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&json).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load settings, falling back to defaults when the file is missing or invalid
    pub fn load(path: &Path) -> Self {
        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                log::info!("Using default settings");
                Self::default()
            }
            Err(err) => {
                log::warn!("{}; using default settings", err);
                Self::default()
            }
        }
    }

    /// Frame duration the host loop sleeps toward
    pub fn frame_duration(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f64(1.0 / self.frames_per_second.max(1) as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(&dir.path().join("settings.json"));
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.high_scores_path, PathBuf::from("res/highScores.txt"));
    }

    #[test]
    fn test_partial_file_overrides() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"seed": 42, "frames_per_second": 30}"#).unwrap();

        let settings = Settings::load(&path);
        assert_eq!(settings.seed, Some(42));
        assert_eq!(settings.frames_per_second, 30);
        assert_eq!(settings.asset_manifest_path, None);
    }

    #[test]
    fn test_invalid_file_reports_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ seed: ").unwrap();

        assert!(matches!(
            Settings::from_file(&path),
            Err(SettingsError::Parse { .. })
        ));
        assert_eq!(Settings::load(&path), Settings::default());
    }

    #[test]
    fn test_zero_fps_does_not_divide_by_zero() {
        let settings = Settings {
            frames_per_second: 0,
            ..Default::default()
        };
        assert_eq!(settings.frame_duration(), std::time::Duration::from_secs(1));
    }
}
