//! The `Tracker` aggregate.
//!
//! All structural changes go through this type so the uniqueness rules hold
//! at every level: module codes across the tracker, lecture names within a
//! module and video names within a lecture. Loading a tracker from JSON runs
//! the same checks.

use crate::error::{Result, TrackerError};
use crate::messages;
use crate::model::{Lecture, LectureName, Module, ModuleCode, Video, VideoName};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TrackerData")]
pub struct Tracker {
    modules: Vec<Module>,
}

#[derive(Deserialize)]
struct TrackerData {
    #[serde(default)]
    modules: Vec<Module>,
}

impl TryFrom<TrackerData> for Tracker {
    type Error = TrackerError;

    fn try_from(data: TrackerData) -> Result<Self> {
        Tracker::from_modules(data.modules)
    }
}

impl Tracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a tracker, rejecting duplicate keys at any level.
    pub fn from_modules(modules: Vec<Module>) -> Result<Self> {
        let mut codes = HashSet::new();
        for module in &modules {
            if !codes.insert(&module.code) {
                return Err(TrackerError::command(messages::duplicate_module(
                    &module.code,
                )));
            }
            let mut lecture_names = HashSet::new();
            for lecture in &module.lectures {
                if !lecture_names.insert(&lecture.name) {
                    return Err(TrackerError::command(messages::duplicate_lecture(
                        &module.code,
                        &lecture.name,
                    )));
                }
                let mut video_names = HashSet::new();
                for video in &lecture.videos {
                    if !video_names.insert(&video.name) {
                        return Err(TrackerError::command(messages::duplicate_video(
                            &module.code,
                            &lecture.name,
                            &video.name,
                        )));
                    }
                }
            }
        }
        Ok(Self { modules })
    }

    pub fn modules(&self) -> &[Module] {
        &self.modules
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    pub fn clear(&mut self) {
        self.modules.clear();
    }

    // --- Modules ---

    pub fn module(&self, code: &ModuleCode) -> Option<&Module> {
        self.modules.iter().find(|m| &m.code == code)
    }

    pub fn has_module(&self, code: &ModuleCode) -> bool {
        self.module(code).is_some()
    }

    fn module_mut(&mut self, code: &ModuleCode) -> Result<&mut Module> {
        self.modules
            .iter_mut()
            .find(|m| &m.code == code)
            .ok_or_else(|| TrackerError::command(messages::module_does_not_exist(code)))
    }

    pub fn add_module(&mut self, module: Module) -> Result<()> {
        if self.has_module(&module.code) {
            return Err(TrackerError::command(messages::duplicate_module(
                &module.code,
            )));
        }
        self.modules.push(module);
        Ok(())
    }

    /// Replaces `target` in place, keeping its position.
    pub fn replace_module(&mut self, target: &ModuleCode, edited: Module) -> Result<()> {
        if &edited.code != target && self.has_module(&edited.code) {
            return Err(TrackerError::command(messages::duplicate_module(
                &edited.code,
            )));
        }
        let slot = self.module_mut(target)?;
        *slot = edited;
        Ok(())
    }

    pub fn remove_module(&mut self, code: &ModuleCode) -> Option<Module> {
        let position = self.modules.iter().position(|m| &m.code == code)?;
        Some(self.modules.remove(position))
    }

    // --- Lectures ---

    pub fn lecture(&self, code: &ModuleCode, name: &LectureName) -> Option<&Lecture> {
        self.module(code).and_then(|m| m.lecture(name))
    }

    pub fn has_lecture(&self, code: &ModuleCode, name: &LectureName) -> bool {
        self.lecture(code, name).is_some()
    }

    fn lecture_mut(&mut self, code: &ModuleCode, name: &LectureName) -> Result<&mut Lecture> {
        self.module_mut(code)?
            .lectures
            .iter_mut()
            .find(|l| &l.name == name)
            .ok_or_else(|| TrackerError::command(messages::lecture_does_not_exist(code, name)))
    }

    pub fn add_lecture(&mut self, code: &ModuleCode, lecture: Lecture) -> Result<()> {
        let module = self.module_mut(code)?;
        if module.has_lecture(&lecture.name) {
            return Err(TrackerError::command(messages::duplicate_lecture(
                code,
                &lecture.name,
            )));
        }
        module.lectures.push(lecture);
        Ok(())
    }

    pub fn replace_lecture(
        &mut self,
        code: &ModuleCode,
        target: &LectureName,
        edited: Lecture,
    ) -> Result<()> {
        if &edited.name != target && self.has_lecture(code, &edited.name) {
            return Err(TrackerError::command(messages::duplicate_lecture(
                code,
                &edited.name,
            )));
        }
        let slot = self.lecture_mut(code, target)?;
        *slot = edited;
        Ok(())
    }

    pub fn remove_lecture(&mut self, code: &ModuleCode, name: &LectureName) -> Option<Lecture> {
        let module = self.modules.iter_mut().find(|m| &m.code == code)?;
        let position = module.lectures.iter().position(|l| &l.name == name)?;
        Some(module.lectures.remove(position))
    }

    // --- Videos ---

    pub fn video(
        &self,
        code: &ModuleCode,
        lecture: &LectureName,
        name: &VideoName,
    ) -> Option<&Video> {
        self.lecture(code, lecture).and_then(|l| l.video(name))
    }

    pub fn has_video(&self, code: &ModuleCode, lecture: &LectureName, name: &VideoName) -> bool {
        self.video(code, lecture, name).is_some()
    }

    pub fn add_video(
        &mut self,
        code: &ModuleCode,
        lecture_name: &LectureName,
        video: Video,
    ) -> Result<()> {
        let lecture = self.lecture_mut(code, lecture_name)?;
        if lecture.has_video(&video.name) {
            return Err(TrackerError::command(messages::duplicate_video(
                code,
                lecture_name,
                &video.name,
            )));
        }
        lecture.videos.push(video);
        Ok(())
    }

    pub fn replace_video(
        &mut self,
        code: &ModuleCode,
        lecture_name: &LectureName,
        target: &VideoName,
        edited: Video,
    ) -> Result<()> {
        let lecture = self.lecture_mut(code, lecture_name)?;
        if &edited.name != target && lecture.has_video(&edited.name) {
            return Err(TrackerError::command(messages::duplicate_video(
                code,
                lecture_name,
                &edited.name,
            )));
        }
        let slot = lecture
            .videos
            .iter_mut()
            .find(|v| &v.name == target)
            .ok_or_else(|| {
                TrackerError::command(messages::video_does_not_exist(code, lecture_name, target))
            })?;
        *slot = edited;
        Ok(())
    }

    pub fn remove_video(
        &mut self,
        code: &ModuleCode,
        lecture_name: &LectureName,
        name: &VideoName,
    ) -> Option<Video> {
        let lecture = self.lecture_mut(code, lecture_name).ok()?;
        let position = lecture.videos.iter().position(|v| &v.name == name)?;
        Some(lecture.videos.remove(position))
    }
}

#[cfg(test)]
pub mod fixtures {
    use super::*;
    use crate::model::VideoTimestamp;

    pub fn code(s: &str) -> ModuleCode {
        s.parse().unwrap()
    }

    pub fn lecture_name(s: &str) -> LectureName {
        s.parse().unwrap()
    }

    pub fn video_name(s: &str) -> VideoName {
        s.parse().unwrap()
    }

    /// Two modules: CS2040S (Week 1 with two videos, Week 2 empty) and ST2334.
    pub fn typical_tracker() -> Tracker {
        let week1 = Lecture::new(lecture_name("Week 1"))
            .with_tags(vec!["intro".parse().unwrap()])
            .with_videos(vec![
                Video::new(video_name("Analysis"))
                    .watched(true)
                    .with_timestamp(VideoTimestamp::from_hms(0, 12, 30).unwrap()),
                Video::new(video_name("Content")),
            ]);
        let week2 = Lecture::new(lecture_name("Week 2"));
        let cs2040s = Module::new(code("CS2040S"))
            .with_name("Data Structures and Algorithms".parse().unwrap())
            .with_tags(vec!["core".parse().unwrap()])
            .with_lectures(vec![week1, week2]);
        let st2334 = Module::new(code("ST2334"))
            .with_name("Probability and Statistics".parse().unwrap())
            .with_lectures(vec![Lecture::new(lecture_name("Topic 1"))]);
        Tracker::from_modules(vec![cs2040s, st2334]).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;
    use super::*;

    #[test]
    fn add_module_rejects_duplicate_code() {
        let mut tracker = Tracker::new();
        tracker.add_module(Module::new(code("CS2040S"))).unwrap();
        assert!(tracker.has_module(&code("CS2040S")));

        let err = tracker.add_module(Module::new(code("CS2040S"))).unwrap_err();
        assert!(err.to_string().contains("already exists"));
        assert_eq!(tracker.modules().len(), 1);
    }

    #[test]
    fn add_lecture_requires_existing_module() {
        let mut tracker = Tracker::new();
        let err = tracker
            .add_lecture(&code("CS2040S"), Lecture::new(lecture_name("Week 1")))
            .unwrap_err();
        assert_eq!(err.to_string(), "Module CS2040S does not exist.");
    }

    #[test]
    fn same_lecture_name_allowed_in_different_modules() {
        let mut tracker = typical_tracker();
        tracker
            .add_lecture(&code("ST2334"), Lecture::new(lecture_name("Week 1")))
            .unwrap();
        assert!(tracker.has_lecture(&code("ST2334"), &lecture_name("Week 1")));
    }

    #[test]
    fn replace_module_keeps_position_and_checks_new_code() {
        let mut tracker = typical_tracker();
        let renamed = Module::new(code("CS2040"));
        tracker.replace_module(&code("CS2040S"), renamed).unwrap();
        assert_eq!(tracker.modules()[0].code, code("CS2040"));

        let clash = Module::new(code("ST2334"));
        assert!(tracker.replace_module(&code("CS2040"), clash).is_err());
    }

    #[test]
    fn remove_module_cascades() {
        let mut tracker = typical_tracker();
        let removed = tracker.remove_module(&code("CS2040S")).unwrap();
        assert_eq!(removed.lectures.len(), 2);
        assert!(!tracker.has_lecture(&code("CS2040S"), &lecture_name("Week 1")));
        assert!(!tracker.has_video(
            &code("CS2040S"),
            &lecture_name("Week 1"),
            &video_name("Analysis")
        ));
    }

    #[test]
    fn remove_missing_video_is_none() {
        let mut tracker = typical_tracker();
        assert!(tracker
            .remove_video(&code("CS2040S"), &lecture_name("Week 9"), &video_name("Intro"))
            .is_none());
    }

    #[test]
    fn loading_rejects_duplicate_videos() {
        let json = r#"{"modules": [{"code": "CS2040S", "lectures": [
            {"name": "Week 1", "videos": [{"name": "Intro"}, {"name": "Intro"}]}
        ]}]}"#;
        let err = serde_json::from_str::<Tracker>(json).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }

    #[test]
    fn json_roundtrip_preserves_order_and_flags() {
        let tracker = typical_tracker();
        let json = serde_json::to_string(&tracker).unwrap();
        let loaded: Tracker = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, tracker);
    }
}
