use crate::commands::CmdResult;
use crate::error::{Result, TrackerError};
use crate::manager::Model;
use crate::messages;
use crate::model::{LectureName, ModuleCode, ModuleName, VideoName, VideoTimestamp};

pub const USAGE: &str = "edit: Edits a module, lecture or video.\n\
Parameters: m/MODULE_CODE [c/NEW_CODE] [n/NEW_NAME]\n\
            m/MODULE_CODE l/LECTURE_NAME n/NEW_NAME\n\
            m/MODULE_CODE l/LECTURE_NAME v/VIDEO_NAME [n/NEW_NAME] [ts/HH:MM:SS]\n\
Example: edit m/CS2040S c/CS2040 n/Data Structures";

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModuleChanges {
    pub code: Option<ModuleCode>,
    pub name: Option<ModuleName>,
}

impl ModuleChanges {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.name.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditModule {
    pub code: ModuleCode,
    pub changes: ModuleChanges,
}

impl EditModule {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let mut edited = model
            .module(&self.code)
            .cloned()
            .ok_or_else(|| TrackerError::command(messages::module_does_not_exist(&self.code)))?;

        if let Some(new_code) = &self.changes.code {
            if *new_code != self.code && model.has_module(new_code) {
                return Err(TrackerError::command(messages::duplicate_module(new_code)));
            }
            edited.code = new_code.clone();
        }
        if let Some(name) = &self.changes.name {
            edited.name = Some(name.clone());
        }

        let new_code = edited.code.clone();
        model.replace_module(&self.code, edited)?;
        if new_code != self.code {
            model.navigation_mut().rename_module(&self.code, &new_code);
            let mut view = model.list_view().clone();
            view.rename_module(&self.code, &new_code);
            model.set_list_view(view);
        }

        Ok(CmdResult::success(format!("Edited module: {}", new_code)))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditLecture {
    pub module_code: ModuleCode,
    pub name: LectureName,
    pub new_name: LectureName,
}

impl EditLecture {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let code = &self.module_code;
        if !model.has_module(code) {
            return Err(TrackerError::command(messages::module_does_not_exist(code)));
        }
        let mut edited = model.lecture(code, &self.name).cloned().ok_or_else(|| {
            TrackerError::command(messages::lecture_does_not_exist(code, &self.name))
        })?;
        if self.new_name != self.name && model.has_lecture(code, &self.new_name) {
            return Err(TrackerError::command(messages::duplicate_lecture(
                code,
                &self.new_name,
            )));
        }

        edited.name = self.new_name.clone();
        model.replace_lecture(code, &self.name, edited)?;
        if self.new_name != self.name {
            model
                .navigation_mut()
                .rename_lecture(code, &self.name, &self.new_name);
            let mut view = model.list_view().clone();
            view.rename_lecture(code, &self.name, &self.new_name);
            model.set_list_view(view);
        }

        Ok(CmdResult::success(format!(
            "Edited lecture of module {}: {}",
            code, self.new_name
        )))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VideoChanges {
    pub name: Option<VideoName>,
    pub timestamp: Option<VideoTimestamp>,
}

impl VideoChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.timestamp.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditVideo {
    pub module_code: ModuleCode,
    pub lecture_name: LectureName,
    pub name: VideoName,
    pub changes: VideoChanges,
}

impl EditVideo {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let code = &self.module_code;
        let lecture = &self.lecture_name;
        if !model.has_module(code) {
            return Err(TrackerError::command(messages::module_does_not_exist(code)));
        }
        if !model.has_lecture(code, lecture) {
            return Err(TrackerError::command(messages::lecture_does_not_exist(
                code, lecture,
            )));
        }
        let mut edited = model
            .video(code, lecture, &self.name)
            .cloned()
            .ok_or_else(|| {
                TrackerError::command(messages::video_does_not_exist(code, lecture, &self.name))
            })?;

        if let Some(new_name) = &self.changes.name {
            if *new_name != self.name && model.has_video(code, lecture, new_name) {
                return Err(TrackerError::command(messages::duplicate_video(
                    code, lecture, new_name,
                )));
            }
            edited.name = new_name.clone();
        }
        if let Some(timestamp) = self.changes.timestamp {
            edited.timestamp = timestamp;
        }

        let new_name = edited.name.clone();
        model.replace_video(code, lecture, &self.name, edited)?;

        Ok(CmdResult::success(format!(
            "Edited video of lecture {} of module {}: {}",
            lecture, code, new_name
        )))
    }
}
