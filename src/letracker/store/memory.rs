use super::TrackerStore;
use crate::error::{Result, TrackerError};
use crate::tracker::Tracker;

/// Keeps the last saved tracker in memory.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Option<Tracker>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tracker(tracker: Tracker) -> Self {
        Self {
            saved: Some(tracker),
            ..Self::default()
        }
    }

    /// Every subsequent save fails with a permission error.
    pub fn failing() -> Self {
        Self {
            fail_saves: true,
            ..Self::default()
        }
    }

    pub fn saved(&self) -> Option<&Tracker> {
        self.saved.as_ref()
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }
}

impl TrackerStore for InMemoryStore {
    fn load(&self) -> Result<Option<Tracker>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, tracker: &Tracker) -> Result<()> {
        if self.fail_saves {
            return Err(TrackerError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only store",
            )));
        }
        self.saved = Some(tracker.clone());
        self.save_count += 1;
        Ok(())
    }
}
