use crate::commands::CmdResult;
use crate::error::{Result, TrackerError};
use crate::manager::Model;
use crate::messages;
use crate::model::{Lecture, LectureName, Module, ModuleCode, Video};

pub const USAGE: &str = "add: Adds a module, lecture or video to the tracker.\n\
Parameters: m/MODULE_CODE [n/MODULE_NAME] [t/TAG]...\n\
            m/MODULE_CODE l/LECTURE_NAME [t/TAG]...\n\
            m/MODULE_CODE l/LECTURE_NAME v/VIDEO_NAME [ts/HH:MM:SS] [t/TAG]...\n\
Example: add m/CS2040S n/Data Structures and Algorithms t/core";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddModule {
    pub module: Module,
}

impl AddModule {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let code = &self.module.code;
        if model.has_module(code) {
            return Err(TrackerError::command(messages::duplicate_module(code)));
        }
        model.add_module(self.module.clone())?;

        let description = match &self.module.name {
            Some(name) => format!("{} {}", code, name),
            None => code.to_string(),
        };
        Ok(CmdResult::success(format!("New module added: {}", description)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddLecture {
    pub module_code: ModuleCode,
    pub lecture: Lecture,
}

impl AddLecture {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let code = &self.module_code;
        let name = &self.lecture.name;
        if !model.has_module(code) {
            return Err(TrackerError::command(messages::module_does_not_exist(code)));
        }
        if model.has_lecture(code, name) {
            return Err(TrackerError::command(messages::duplicate_lecture(code, name)));
        }
        model.add_lecture(code, self.lecture.clone())?;

        Ok(CmdResult::success(format!(
            "New lecture added to module {}: {}",
            code, name
        )))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddVideo {
    pub module_code: ModuleCode,
    pub lecture_name: LectureName,
    pub video: Video,
}

impl AddVideo {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let code = &self.module_code;
        let lecture = &self.lecture_name;
        let name = &self.video.name;
        if !model.has_module(code) {
            return Err(TrackerError::command(messages::module_does_not_exist(code)));
        }
        if !model.has_lecture(code, lecture) {
            return Err(TrackerError::command(messages::lecture_does_not_exist(
                code, lecture,
            )));
        }
        if model.has_video(code, lecture, name) {
            return Err(TrackerError::command(messages::duplicate_video(
                code, lecture, name,
            )));
        }
        model.add_video(code, lecture, self.video.clone())?;

        Ok(CmdResult::success(format!(
            "New video added to lecture {} of module {}: {}",
            lecture, code, name
        )))
    }
}
