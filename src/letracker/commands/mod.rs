//! # Command Layer
//!
//! One struct per user action, wrapped in the [`Command`] enum. Every command
//! executes against the [`Model`] trait, never a concrete tracker, and
//! returns a structured [`CmdResult`].
//!
//! ## Rules every command follows
//!
//! - **Validate, then mutate.** All existence and uniqueness checks run before
//!   the first change, so a failed command leaves the model as it was.
//! - **No I/O besides archives.** Only `import`/`export` touch files; saving
//!   the tracker is the API layer's job.
//! - **Reconcile explicitly.** Commands that remove or rename entities fix up
//!   the navigation stack and the list view themselves.
//!
//! ## Testing Strategy
//!
//! Command tests run against [`ModelManager`](crate::manager::ModelManager)
//! built from the typical tracker fixture, or against the recording fake in
//! `test_support` when a test needs to prove nothing was mutated.

use crate::error::{Result, TrackerError};
use crate::manager::Model;
use crate::messages;
use crate::model::{LectureName, ModuleCode, VideoName};
use serde::Serialize;
use std::fmt;

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod export;
pub mod find;
pub mod help;
pub mod import;
pub mod list;
pub mod mark;
pub mod nav;
pub mod tag;

#[cfg(test)]
pub(crate) mod test_support;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// The client should show the full command reference.
    pub show_help: bool,
    /// The client should end the session.
    pub exit: bool,
    /// The active list view changed and is worth rendering.
    pub show_view: bool,
}

impl CmdResult {
    pub fn success(content: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::success(content));
        result
    }

    pub fn info(content: impl Into<String>) -> Self {
        let mut result = Self::default();
        result.add_message(CmdMessage::info(content));
        result
    }

    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_view(mut self) -> Self {
        self.show_view = true;
        self
    }

    /// All message contents, one per line.
    pub fn feedback(&self) -> String {
        self.messages
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// An addressed entity at any level of the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Module(ModuleCode),
    Lecture(ModuleCode, LectureName),
    Video(ModuleCode, LectureName, VideoName),
}

impl Target {
    pub fn module_code(&self) -> &ModuleCode {
        match self {
            Target::Module(code) | Target::Lecture(code, _) | Target::Video(code, _, _) => code,
        }
    }

    /// Checks each addressed level top-down, failing on the first one missing.
    pub fn ensure_exists<M: Model + ?Sized>(&self, model: &M) -> Result<()> {
        let code = self.module_code();
        if !model.has_module(code) {
            return Err(TrackerError::command(messages::module_does_not_exist(code)));
        }
        match self {
            Target::Module(_) => Ok(()),
            Target::Lecture(code, lecture) => ensure_lecture(model, code, lecture),
            Target::Video(code, lecture, video) => {
                ensure_lecture(model, code, lecture)?;
                if model.has_video(code, lecture, video) {
                    Ok(())
                } else {
                    Err(TrackerError::command(messages::video_does_not_exist(
                        code, lecture, video,
                    )))
                }
            }
        }
    }
}

fn ensure_lecture<M: Model + ?Sized>(
    model: &M,
    code: &ModuleCode,
    lecture: &LectureName,
) -> Result<()> {
    if model.has_lecture(code, lecture) {
        Ok(())
    } else {
        Err(TrackerError::command(messages::lecture_does_not_exist(
            code, lecture,
        )))
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Target::Module(code) => write!(f, "module {}", code),
            Target::Lecture(code, lecture) => write!(f, "lecture {} of module {}", lecture, code),
            Target::Video(code, lecture, video) => write!(
                f,
                "video {} of lecture {} of module {}",
                video, lecture, code
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    AddModule(add::AddModule),
    AddLecture(add::AddLecture),
    AddVideo(add::AddVideo),
    Delete(delete::Delete),
    EditModule(edit::EditModule),
    EditLecture(edit::EditLecture),
    EditVideo(edit::EditVideo),
    Mark(mark::Mark),
    Tag(tag::Tagging),
    Untag(tag::Tagging),
    Nav(nav::Nav),
    BackNav,
    RootNav,
    Find(find::Find),
    List(list::List),
    Export(export::Export),
    Import(import::Import),
    Clear,
    Exit,
    Help,
}

impl Command {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        match self {
            Command::AddModule(cmd) => cmd.execute(model),
            Command::AddLecture(cmd) => cmd.execute(model),
            Command::AddVideo(cmd) => cmd.execute(model),
            Command::Delete(cmd) => cmd.execute(model),
            Command::EditModule(cmd) => cmd.execute(model),
            Command::EditLecture(cmd) => cmd.execute(model),
            Command::EditVideo(cmd) => cmd.execute(model),
            Command::Mark(cmd) => cmd.execute(model),
            Command::Tag(cmd) => cmd.tag(model),
            Command::Untag(cmd) => cmd.untag(model),
            Command::Nav(cmd) => cmd.execute(model),
            Command::BackNav => nav::back(model),
            Command::RootNav => nav::root(model),
            Command::Find(cmd) => cmd.execute(model),
            Command::List(cmd) => cmd.execute(model),
            Command::Export(cmd) => cmd.execute(model),
            Command::Import(cmd) => cmd.execute(model),
            Command::Clear => clear::run(model),
            Command::Exit => Ok(help::exit()),
            Command::Help => Ok(help::help()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::typical_model;
    use crate::tracker::fixtures::*;

    #[test]
    fn ensure_exists_reports_first_missing_level() {
        let model = typical_model();

        let missing_module = Target::Video(code("MA1521"), lecture_name("Week 9"), video_name("X"));
        assert_eq!(
            missing_module.ensure_exists(&model).unwrap_err().to_string(),
            "Module MA1521 does not exist."
        );

        let missing_lecture =
            Target::Video(code("CS2040S"), lecture_name("Week 9"), video_name("X"));
        assert_eq!(
            missing_lecture.ensure_exists(&model).unwrap_err().to_string(),
            "Lecture Week 9 does not exist in module CS2040S."
        );

        let missing_video =
            Target::Video(code("CS2040S"), lecture_name("Week 1"), video_name("X"));
        assert!(missing_video
            .ensure_exists(&model)
            .unwrap_err()
            .to_string()
            .starts_with("Video X does not exist"));
    }

    #[test]
    fn feedback_joins_messages() {
        let mut result = CmdResult::success("first");
        result.add_message(CmdMessage::info("second"));
        assert_eq!(result.feedback(), "first\nsecond");
    }
}
