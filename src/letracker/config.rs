use crate::error::{Result, TrackerError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_TRACKER_FILE: &str = "tracker.json";
const DEFAULT_ARCHIVE_DIR: &str = "archives";

/// Configuration for letracker, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TrackerConfig {
    /// File name of the tracker data file inside the data directory
    #[serde(default = "default_tracker_file")]
    pub tracker_file: String,

    /// Where `export` writes and `import` reads archives. Relative paths
    /// are resolved against the data directory.
    #[serde(default = "default_archive_dir")]
    pub archive_dir: PathBuf,
}

fn default_tracker_file() -> String {
    DEFAULT_TRACKER_FILE.to_string()
}

fn default_archive_dir() -> PathBuf {
    PathBuf::from(DEFAULT_ARCHIVE_DIR)
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            tracker_file: default_tracker_file(),
            archive_dir: default_archive_dir(),
        }
    }
}

impl TrackerConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TrackerError::Io)?;
        let config: TrackerConfig =
            serde_json::from_str(&content).map_err(TrackerError::Serialization)?;
        Ok(config)
    }
}

/// Resolved locations the core reads from and writes to.
///
/// Built once at startup and handed to the model; nothing in the core
/// looks these up on its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerPaths {
    pub data_dir: PathBuf,
    pub tracker_file: PathBuf,
    pub archive_dir: PathBuf,
}

impl TrackerPaths {
    pub fn resolve(data_dir: &Path, config: &TrackerConfig) -> Self {
        let archive_dir = if config.archive_dir.is_absolute() {
            config.archive_dir.clone()
        } else {
            data_dir.join(&config.archive_dir)
        };
        Self {
            data_dir: data_dir.to_path_buf(),
            tracker_file: data_dir.join(&config.tracker_file),
            archive_dir,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.tracker_file, "tracker.json");
        assert_eq!(config.archive_dir, PathBuf::from("archives"));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = TrackerConfig::load(temp_dir.path()).unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"tracker_file": "modules.json", "archive_dir": "backups"}"#,
        )
        .unwrap();

        let loaded = TrackerConfig::load(temp_dir.path()).unwrap();
        assert_eq!(
            loaded,
            TrackerConfig {
                tracker_file: "modules.json".to_string(),
                archive_dir: PathBuf::from("backups"),
            }
        );
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILENAME), "tracker_file = 1").unwrap();

        let err = TrackerConfig::load(temp_dir.path()).unwrap_err();
        assert!(matches!(err, TrackerError::Serialization(_)));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILENAME),
            r#"{"tracker_file": "mine.json"}"#,
        )
        .unwrap();

        let loaded = TrackerConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded.tracker_file, "mine.json");
        assert_eq!(loaded.archive_dir, PathBuf::from("archives"));
    }

    #[test]
    fn test_paths_resolve_relative_archive_dir() {
        let data_dir = Path::new("/data/letracker");
        let paths = TrackerPaths::resolve(data_dir, &TrackerConfig::default());
        assert_eq!(paths.tracker_file, data_dir.join("tracker.json"));
        assert_eq!(paths.archive_dir, data_dir.join("archives"));

        let config = TrackerConfig {
            archive_dir: PathBuf::from("/elsewhere"),
            ..TrackerConfig::default()
        };
        let paths = TrackerPaths::resolve(data_dir, &config);
        assert_eq!(paths.archive_dir, PathBuf::from("/elsewhere"));
    }
}
