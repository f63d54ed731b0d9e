//! # API Facade
//!
//! [`TrackerApi`] is the single entry point for clients. It takes one line
//! of user input and runs it through the pipeline:
//!
//! ```text
//! input → NavigationInjector → parse_command → Command::execute → TrackerStore::save
//! ```
//!
//! The facade owns the session state ([`ModelManager`]) and the store. It
//! does no printing and never exits the process; clients get a
//! `Result<CmdResult>` back and decide how to present it.
//!
//! ## Generic Over TrackerStore
//!
//! - Production: `TrackerApi<JsonFileStore>`
//! - Testing: `TrackerApi<InMemoryStore>`
//!
//! ## Persistence
//!
//! The whole tracker is saved after every successful command, including
//! ones that only move around or list, so a broken store is reported on
//! the very next command. A failed save is reported as
//! `Could not save data to file: <cause>`, but the change stays in memory
//! and the next successful save writes it out.

use crate::commands::CmdResult;
use crate::config::TrackerPaths;
use crate::error::{Result, TrackerError};
use crate::injector::NavigationInjector;
use crate::manager::{Model, ModelManager};
use crate::navigation::NavigationContext;
use crate::parser::parse_command;
use crate::store::TrackerStore;
use crate::tracker::Tracker;
use crate::view::{current_view, View};
use tracing::{debug, info, warn};

pub const MESSAGE_SAVE_FAILED: &str = "Could not save data to file: ";

pub struct TrackerApi<S: TrackerStore> {
    store: S,
    model: ModelManager,
}

impl<S: TrackerStore> TrackerApi<S> {
    pub fn new(store: S, tracker: Tracker, paths: TrackerPaths) -> Self {
        Self {
            store,
            model: ModelManager::new(tracker, paths),
        }
    }

    /// Runs one line of user input against the current session.
    pub fn execute(&mut self, input: &str) -> Result<CmdResult> {
        let context = self.model.current_context();
        let injected = NavigationInjector::inject(input, &context);
        info!(input = input.trim(), injected = %injected, context = %context, "executing command");

        let command = parse_command(&injected).inspect_err(|e| {
            info!(error = %e, "could not parse command");
        })?;
        let result = command.execute(&mut self.model).inspect_err(|e| {
            info!(error = %e, "command rejected");
        })?;

        self.store.save(self.model.tracker()).map_err(|e| {
            warn!(error = %e, "saving tracker failed");
            TrackerError::command(format!("{}{}", MESSAGE_SAVE_FAILED, e))
        })?;
        debug!(modules = self.model.tracker().modules().len(), "tracker saved");

        Ok(result)
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    pub fn context(&self) -> NavigationContext {
        self.model.current_context()
    }

    /// The active list, filtered and computed against the current tracker.
    pub fn view(&self) -> View<'_> {
        current_view(&self.model)
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
