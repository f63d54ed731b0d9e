use crate::config::{TrackerConfig, TrackerPaths};
use crate::error::Result;
use crate::manager::{Model, ModelManager};
use crate::model::{Lecture, LectureName, Module, ModuleCode, Video, VideoName};
use crate::navigation::NavigationStack;
use crate::tracker::fixtures::typical_tracker;
use crate::tracker::Tracker;
use crate::view::ListView;
use std::path::Path;

pub fn typical_model() -> ModelManager {
    model_with(typical_tracker())
}

pub fn model_with(tracker: Tracker) -> ModelManager {
    let paths = TrackerPaths::resolve(Path::new("/tmp/letracker"), &TrackerConfig::default());
    ModelManager::new(tracker, paths)
}

pub fn model_in(dir: &Path, tracker: Tracker) -> ModelManager {
    ModelManager::new(tracker, TrackerPaths::resolve(dir, &TrackerConfig::default()))
}

/// Wraps a real model and records the name of every mutating call.
pub struct RecordingModel {
    inner: ModelManager,
    pub mutations: Vec<&'static str>,
}

impl RecordingModel {
    pub fn new(inner: ModelManager) -> Self {
        Self {
            inner,
            mutations: Vec::new(),
        }
    }

    pub fn typical() -> Self {
        Self::new(typical_model())
    }
}

impl Model for RecordingModel {
    fn tracker(&self) -> &Tracker {
        self.inner.tracker()
    }

    fn set_tracker(&mut self, tracker: Tracker) {
        self.mutations.push("set_tracker");
        self.inner.set_tracker(tracker)
    }

    fn add_module(&mut self, module: Module) -> Result<()> {
        self.mutations.push("add_module");
        self.inner.add_module(module)
    }

    fn replace_module(&mut self, target: &ModuleCode, edited: Module) -> Result<()> {
        self.mutations.push("replace_module");
        self.inner.replace_module(target, edited)
    }

    fn delete_module(&mut self, code: &ModuleCode) -> Option<Module> {
        self.mutations.push("delete_module");
        self.inner.delete_module(code)
    }

    fn add_lecture(&mut self, code: &ModuleCode, lecture: Lecture) -> Result<()> {
        self.mutations.push("add_lecture");
        self.inner.add_lecture(code, lecture)
    }

    fn replace_lecture(
        &mut self,
        code: &ModuleCode,
        target: &LectureName,
        edited: Lecture,
    ) -> Result<()> {
        self.mutations.push("replace_lecture");
        self.inner.replace_lecture(code, target, edited)
    }

    fn delete_lecture(&mut self, code: &ModuleCode, name: &LectureName) -> Option<Lecture> {
        self.mutations.push("delete_lecture");
        self.inner.delete_lecture(code, name)
    }

    fn add_video(&mut self, code: &ModuleCode, lecture: &LectureName, video: Video) -> Result<()> {
        self.mutations.push("add_video");
        self.inner.add_video(code, lecture, video)
    }

    fn replace_video(
        &mut self,
        code: &ModuleCode,
        lecture: &LectureName,
        target: &VideoName,
        edited: Video,
    ) -> Result<()> {
        self.mutations.push("replace_video");
        self.inner.replace_video(code, lecture, target, edited)
    }

    fn delete_video(
        &mut self,
        code: &ModuleCode,
        lecture: &LectureName,
        name: &VideoName,
    ) -> Option<Video> {
        self.mutations.push("delete_video");
        self.inner.delete_video(code, lecture, name)
    }

    fn navigation(&self) -> &NavigationStack {
        self.inner.navigation()
    }

    fn navigation_mut(&mut self) -> &mut NavigationStack {
        self.mutations.push("navigation_mut");
        self.inner.navigation_mut()
    }

    fn reconcile_navigation(&mut self) {
        self.inner.reconcile_navigation()
    }

    fn list_view(&self) -> &ListView {
        self.inner.list_view()
    }

    fn set_list_view(&mut self, view: ListView) {
        self.mutations.push("set_list_view");
        self.inner.set_list_view(view)
    }

    fn paths(&self) -> &TrackerPaths {
        self.inner.paths()
    }
}
