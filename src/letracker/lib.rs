//! # Letracker Architecture
//!
//! Letracker keeps track of university modules, their lectures and the
//! videos of each lecture. It is a **library with a terminal client**: the
//! core takes a line of text and returns structured results, and knows
//! nothing about terminals.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - One-shot and interactive modes, rendering, logging setup │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - inject → parse → execute → save                          │
//! │  - Owns the session (ModelManager) and the store            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (injector.rs, parser/, commands/)            │
//! │  - Text → Command → validated mutation of a Model           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Model + Storage (manager.rs, tracker.rs, store/)           │
//! │  - Tracker aggregate with uniqueness rules                  │
//! │  - TrackerStore trait: JsonFileStore, InMemoryStore         │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Navigation
//!
//! The session keeps a [`navigation::NavigationStack`]. While the user is
//! inside a module or lecture, the [`injector`] fills in the `m/` and `l/`
//! arguments they leave out, so `add v/Intro` inside `/r/CS2040S/Week 1`
//! adds a video to that lecture.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One struct per user action, plus `CmdResult`
//! - [`parser`]: Prefix tokenizer and command-word dispatch
//! - [`injector`]: Context-relative input expansion
//! - [`manager`]: The `Model` trait and `ModelManager`
//! - [`tracker`], [`model`]: The module → lecture → video tree
//! - [`navigation`]: Navigation contexts and stack
//! - [`view`]: Filtered lists for display
//! - [`store`]: Persistence and import/export archives
//! - [`config`], [`init`]: Configuration and startup
//! - [`error`], [`messages`]: Error type and shared user messages

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod injector;
pub mod manager;
pub mod messages;
pub mod model;
pub mod navigation;
pub mod parser;
pub mod store;
pub mod tracker;
pub mod view;
