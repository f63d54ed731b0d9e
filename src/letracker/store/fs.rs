use super::TrackerStore;
use crate::error::{Result, TrackerError};
use crate::tracker::Tracker;
use std::fs;
use std::path::{Path, PathBuf};

/// Stores the tracker as a single JSON document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

pub(crate) fn read_tracker(path: &Path) -> Result<Tracker> {
    let content = fs::read_to_string(path).map_err(TrackerError::Io)?;
    let tracker: Tracker = serde_json::from_str(&content).map_err(TrackerError::Serialization)?;
    Ok(tracker)
}

pub(crate) fn write_tracker(path: &Path, tracker: &Tracker) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent).map_err(TrackerError::Io)?;
        }
    }
    let content = serde_json::to_string_pretty(tracker).map_err(TrackerError::Serialization)?;
    fs::write(path, content).map_err(TrackerError::Io)?;
    Ok(())
}

impl TrackerStore for JsonFileStore {
    fn load(&self) -> Result<Option<Tracker>> {
        if !self.path.exists() {
            return Ok(None);
        }
        read_tracker(&self.path).map(Some)
    }

    fn save(&mut self, tracker: &Tracker) -> Result<()> {
        write_tracker(&self.path, tracker)
    }
}
