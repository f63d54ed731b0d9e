use crate::commands::{CmdMessage, CmdResult, Target};
use crate::error::Result;
use crate::manager::Model;
use crate::messages::plural;

pub const USAGE: &str = "delete: Deletes modules, lectures or videos. Repeat the deepest prefix \
to delete several at once.\n\
Parameters: m/MODULE_CODE...\n\
            m/MODULE_CODE l/LECTURE_NAME...\n\
            m/MODULE_CODE l/LECTURE_NAME v/VIDEO_NAME...\n\
Example: delete m/CS2040S l/Week 1 v/Intro v/Recap";

/// Removes one or more entities at the same level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delete {
    pub targets: Vec<Target>,
}

impl Delete {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        for target in &self.targets {
            target.ensure_exists(model)?;
        }

        let mut result = CmdResult::default();
        for target in &self.targets {
            let message = match target {
                Target::Module(code) => model.delete_module(code).map(|module| {
                    let count = module.lectures.len();
                    format!(
                        "Deleted module {} ({} lecture{})",
                        code,
                        count,
                        plural(count)
                    )
                }),
                Target::Lecture(code, lecture) => model
                    .delete_lecture(code, lecture)
                    .map(|_| format!("Deleted lecture {} from module {}", lecture, code)),
                Target::Video(code, lecture, video) => {
                    model.delete_video(code, lecture, video).map(|_| {
                        format!(
                            "Deleted video {} from lecture {} of module {}",
                            video, lecture, code
                        )
                    })
                }
            };
            if let Some(message) = message {
                result.add_message(CmdMessage::success(message));
            }
        }

        model.reconcile_navigation();
        Ok(result)
    }
}
