use crate::commands::{CmdMessage, CmdResult, Target};
use crate::error::{Result, TrackerError};
use crate::manager::Model;
use crate::model::Tag;
use std::collections::BTreeSet;

pub const USAGE_TAG: &str = "tag: Tags a module, lecture or video.\n\
Parameters: m/MODULE_CODE [l/LECTURE_NAME [v/VIDEO_NAME]] t/TAG...\n\
Example: tag m/CS2040S l/Week 1 t/important t/exam";

pub const USAGE_UNTAG: &str = "untag: Removes tags from a module, lecture or video.\n\
Parameters: m/MODULE_CODE [l/LECTURE_NAME [v/VIDEO_NAME]] t/TAG...\n\
Example: untag m/CS2040S t/core";

/// Tags to add to or remove from one entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tagging {
    pub target: Target,
    pub tags: BTreeSet<Tag>,
}

impl Tagging {
    pub fn tag<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        self.target.ensure_exists(model)?;
        let mut tags = current_tags(model, &self.target);
        let added: Vec<&Tag> = self.tags.iter().filter(|t| !tags.contains(*t)).collect();

        let mut result = if added.is_empty() {
            CmdResult::info(format!("No new tags for {}", self.target))
        } else {
            CmdResult::success(format!("Tagged {}: {}", self.target, join(added.iter().copied())))
        };
        let existing: Vec<&Tag> = self.tags.iter().filter(|t| tags.contains(*t)).collect();
        if !existing.is_empty() {
            result.add_message(CmdMessage::warning(format!(
                "Already tagged: {}",
                join(existing.into_iter())
            )));
        }

        if !added.is_empty() {
            tags.extend(self.tags.iter().cloned());
            set_tags(model, &self.target, tags)?;
        }
        Ok(result)
    }

    pub fn untag<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        self.target.ensure_exists(model)?;
        let mut tags = current_tags(model, &self.target);
        let missing: Vec<&Tag> = self.tags.iter().filter(|t| !tags.contains(*t)).collect();
        if !missing.is_empty() {
            return Err(TrackerError::command(format!(
                "Tag(s) not found: {}",
                join(missing.into_iter())
            )));
        }

        tags.retain(|t| !self.tags.contains(t));
        set_tags(model, &self.target, tags)?;
        Ok(CmdResult::success(format!(
            "Removed tags from {}: {}",
            self.target,
            join(self.tags.iter())
        )))
    }
}

fn join<'a>(tags: impl Iterator<Item = &'a Tag>) -> String {
    tags.map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
}

fn current_tags<M: Model + ?Sized>(model: &M, target: &Target) -> BTreeSet<Tag> {
    let tags = match target {
        Target::Module(code) => model.module(code).map(|m| &m.tags),
        Target::Lecture(code, lecture) => model.lecture(code, lecture).map(|l| &l.tags),
        Target::Video(code, lecture, video) => model.video(code, lecture, video).map(|v| &v.tags),
    };
    tags.cloned().unwrap_or_default()
}

fn set_tags<M: Model + ?Sized>(model: &mut M, target: &Target, tags: BTreeSet<Tag>) -> Result<()> {
    match target {
        Target::Module(code) => {
            if let Some(mut module) = model.module(code).cloned() {
                module.tags = tags;
                model.replace_module(code, module)?;
            }
        }
        Target::Lecture(code, name) => {
            if let Some(mut lecture) = model.lecture(code, name).cloned() {
                lecture.tags = tags;
                model.replace_lecture(code, name, lecture)?;
            }
        }
        Target::Video(code, lecture, name) => {
            if let Some(mut video) = model.video(code, lecture, name).cloned() {
                video.tags = tags;
                model.replace_video(code, lecture, name, video)?;
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::commands::test_support::{typical_model, RecordingModel};
    use crate::tracker::fixtures::*;

    fn tags(names: &[&str]) -> BTreeSet<Tag> {
        names.iter().map(|n| n.parse().unwrap()).collect()
    }

    #[test]
    fn tags_a_video() {
        let mut model = typical_model();
        let target = Target::Video(code("CS2040S"), lecture_name("Week 1"), video_name("Content"));
        let result = Tagging {
            target: target.clone(),
            tags: tags(&["exam", "hard"]),
        }
        .tag(&mut model)
        .unwrap();

        assert_eq!(
            result.feedback(),
            "Tagged video Content of lecture Week 1 of module CS2040S: exam, hard"
        );
        let video = model
            .video(&code("CS2040S"), &lecture_name("Week 1"), &video_name("Content"))
            .unwrap();
        assert_eq!(video.tags, tags(&["exam", "hard"]));
    }

    #[test]
    fn existing_tag_is_a_noop() {
        let mut model = RecordingModel::typical();
        let result = Tagging {
            target: Target::Module(code("CS2040S")),
            tags: tags(&["core"]),
        }
        .tag(&mut model)
        .unwrap();

        assert!(result.feedback().contains("Already tagged: core"));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content == "Already tagged: core"));
        assert!(model.mutations.is_empty());
    }

    #[test]
    fn untags_a_lecture() {
        let mut model = typical_model();
        Tagging {
            target: Target::Lecture(code("CS2040S"), lecture_name("Week 1")),
            tags: tags(&["intro"]),
        }
        .untag(&mut model)
        .unwrap();

        let lecture = model
            .lecture(&code("CS2040S"), &lecture_name("Week 1"))
            .unwrap();
        assert!(lecture.tags.is_empty());
    }

    #[test]
    fn untagging_missing_tag_fails_without_change() {
        let mut model = RecordingModel::typical();
        let err = Tagging {
            target: Target::Module(code("CS2040S")),
            tags: tags(&["core", "optional"]),
        }
        .untag(&mut model)
        .unwrap_err();

        assert_eq!(err.to_string(), "Tag(s) not found: optional");
        assert!(model.mutations.is_empty());
    }

    #[test]
    fn tagging_missing_entity_fails() {
        let mut model = typical_model();
        let err = Tagging {
            target: Target::Lecture(code("ST2334"), lecture_name("Week 1")),
            tags: tags(&["exam"]),
        }
        .tag(&mut model)
        .unwrap_err();
        assert_eq!(err.to_string(), "Lecture Week 1 does not exist in module ST2334.");
    }
}
