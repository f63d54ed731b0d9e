use crate::api::TrackerApi;
use crate::config::{TrackerConfig, TrackerPaths};
use crate::error::{Result, TrackerError};
use crate::store::fs::JsonFileStore;
use crate::store::TrackerStore;
use crate::tracker::Tracker;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Overrides the data directory when `--data-dir` is not given.
pub const DATA_DIR_ENV: &str = "LETRACKER_HOME";

pub struct TrackerContext {
    pub api: TrackerApi<JsonFileStore>,
    pub paths: TrackerPaths,
}

/// Picks the data directory: the explicit path, then `LETRACKER_HOME`,
/// then the platform data directory.
pub fn resolve_data_dir(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(dir) = explicit {
        return Ok(dir.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }
    ProjectDirs::from("com", "letracker", "letracker")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| TrackerError::command("Could not determine a data directory"))
}

/// Loads config and data from `data_dir` and builds the API.
///
/// A missing data file starts an empty tracker. So does an unreadable one,
/// after a warning; it is overwritten by the next save.
pub fn initialize(data_dir: &Path) -> TrackerContext {
    let config = TrackerConfig::load(data_dir).unwrap_or_else(|e| {
        warn!(error = %e, "could not read config, using defaults");
        TrackerConfig::default()
    });
    let paths = TrackerPaths::resolve(data_dir, &config);
    let store = JsonFileStore::new(paths.tracker_file.clone());

    let tracker = match store.load() {
        Ok(Some(tracker)) => {
            info!(path = %paths.tracker_file.display(), "loaded tracker");
            tracker
        }
        Ok(None) => {
            info!(path = %paths.tracker_file.display(), "no data file, starting empty");
            Tracker::new()
        }
        Err(e) => {
            warn!(
                path = %paths.tracker_file.display(),
                error = %e,
                "data file could not be read, starting with an empty tracker"
            );
            Tracker::new()
        }
    };

    let api = TrackerApi::new(store, tracker, paths.clone());
    TrackerContext { api, paths }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manager::Model;
    use crate::store::fs::write_tracker;
    use crate::tracker::fixtures::typical_tracker;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_dir_wins() {
        let dir = resolve_data_dir(Some(Path::new("/some/where"))).unwrap();
        assert_eq!(dir, PathBuf::from("/some/where"));
    }

    #[test]
    fn missing_data_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        let ctx = initialize(temp.path());
        assert!(ctx.api.model().tracker().is_empty());
        assert_eq!(ctx.paths.tracker_file, temp.path().join("tracker.json"));
    }

    #[test]
    fn loads_existing_data_file() {
        let temp = TempDir::new().unwrap();
        write_tracker(&temp.path().join("tracker.json"), &typical_tracker()).unwrap();

        let ctx = initialize(temp.path());
        assert_eq!(ctx.api.model().tracker(), &typical_tracker());
    }

    #[test]
    fn corrupt_data_file_starts_empty() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("tracker.json"), "{ not json").unwrap();

        let ctx = initialize(temp.path());
        assert!(ctx.api.model().tracker().is_empty());
    }

    #[test]
    fn config_picks_data_file_name() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("config.json"),
            r#"{"tracker_file": "semester.json"}"#,
        )
        .unwrap();
        write_tracker(&temp.path().join("semester.json"), &typical_tracker()).unwrap();

        let ctx = initialize(temp.path());
        assert_eq!(ctx.paths.tracker_file, temp.path().join("semester.json"));
        assert_eq!(ctx.api.model().tracker().modules().len(), 2);
    }
}
