//! User-facing messages shared between the tracker and the commands.

use crate::model::{LectureName, ModuleCode, VideoName};

pub const MESSAGE_INVALID_COMMAND_FORMAT: &str = "Invalid command format!";
pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";
pub const MESSAGE_KNOWN_COMMANDS: &str = "Known commands: nav, navback, add, edit, delete, clear, \
find, watched, unwatched, list, exit, help, export, import, tag, untag";

pub fn invalid_format(usage: &str) -> String {
    format!("{}\n{}", MESSAGE_INVALID_COMMAND_FORMAT, usage)
}

pub fn module_does_not_exist(code: &ModuleCode) -> String {
    format!("Module {} does not exist.", code)
}

pub fn lecture_does_not_exist(code: &ModuleCode, lecture: &LectureName) -> String {
    format!("Lecture {} does not exist in module {}.", lecture, code)
}

pub fn video_does_not_exist(code: &ModuleCode, lecture: &LectureName, video: &VideoName) -> String {
    format!(
        "Video {} does not exist in lecture {} of module {}.",
        video, lecture, code
    )
}

pub fn duplicate_module(code: &ModuleCode) -> String {
    format!("Module {} already exists in the tracker.", code)
}

pub fn duplicate_lecture(code: &ModuleCode, lecture: &LectureName) -> String {
    format!("Lecture {} already exists in module {}.", lecture, code)
}

pub fn duplicate_video(code: &ModuleCode, lecture: &LectureName, video: &VideoName) -> String {
    format!(
        "Video {} already exists in lecture {} of module {}.",
        video, lecture, code
    )
}

/// `""` for one, `"s"` otherwise.
pub fn plural(count: usize) -> &'static str {
    if count == 1 {
        ""
    } else {
        "s"
    }
}
