use crate::commands::{CmdResult, Target};
use crate::error::Result;
use crate::manager::Model;
use crate::messages::plural;
use crate::model::{LectureName, ModuleCode, VideoName};

pub const USAGE_WATCHED: &str = "watched: Marks videos as watched.\n\
Parameters: m/MODULE_CODE l/LECTURE_NAME v/VIDEO_NAME...\n\
Example: watched m/CS2040S l/Week 1 v/Intro v/Recap";

pub const USAGE_UNWATCHED: &str = "unwatched: Marks videos as not watched.\n\
Parameters: m/MODULE_CODE l/LECTURE_NAME v/VIDEO_NAME...\n\
Example: unwatched m/CS2040S l/Week 1 v/Intro";

/// Sets the watched flag on videos of one lecture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mark {
    pub module_code: ModuleCode,
    pub lecture_name: LectureName,
    pub videos: Vec<VideoName>,
    pub watched: bool,
}

impl Mark {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let code = &self.module_code;
        let lecture = &self.lecture_name;
        for video in &self.videos {
            Target::Video(code.clone(), lecture.clone(), video.clone()).ensure_exists(model)?;
        }

        for name in &self.videos {
            let current = model.video(code, lecture, name).cloned();
            if let Some(video) = current.filter(|v| v.watched != self.watched) {
                model.replace_video(code, lecture, name, video.watched(self.watched))?;
            }
        }

        let names = self
            .videos
            .iter()
            .map(|v| v.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let state = if self.watched { "watched" } else { "unwatched" };
        Ok(CmdResult::success(format!(
            "Marked video{} in lecture {} of module {} as {}: {}",
            plural(self.videos.len()),
            lecture,
            code,
            state,
            names
        )))
    }
}
