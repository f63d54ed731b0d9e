//! # Storage Layer
//!
//! The [`TrackerStore`] trait is the persistence collaborator: the API
//! loads the tracker once at startup and saves the whole tracker after every
//! successful command.
//!
//! ## Implementations
//!
//! - [`fs::JsonFileStore`]: production storage, one pretty-printed JSON file
//! - [`memory::InMemoryStore`]: no persistence, used by tests; can be told
//!   to fail saves to exercise error reporting
//!
//! [`archive`] holds the import/export file helpers, which share the JSON
//! format with the data file.
//!
//! ## Storage Format
//!
//! ```text
//! <data dir>/
//! ├── tracker.json        # the Tracker (modules → lectures → videos)
//! ├── config.json         # optional TrackerConfig
//! └── archives/           # export targets / import sources
//! ```

use crate::error::Result;
use crate::tracker::Tracker;

pub mod archive;
pub mod fs;
pub mod memory;

pub trait TrackerStore {
    /// Load the persisted tracker. `Ok(None)` when nothing has been saved yet.
    fn load(&self) -> Result<Option<Tracker>>;

    /// Persist the full tracker, replacing whatever was stored.
    fn save(&mut self, tracker: &Tracker) -> Result<()>;
}
