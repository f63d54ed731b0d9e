//! # Model Layer
//!
//! Commands never touch a concrete tracker. They depend on the [`Model`]
//! trait: has/get/add/replace/delete per entity, the navigation stack, the
//! active list view and the resolved paths. [`ModelManager`] is the
//! production implementation; tests can substitute fakes that record or
//! refuse calls.
//!
//! Mutators on the trait enforce the tracker's uniqueness rules and return
//! a command error rather than corrupting state, but commands are still
//! expected to validate first so they can report precise messages and
//! never mutate before their last check.

use crate::config::TrackerPaths;
use crate::error::Result;
use crate::model::{Lecture, LectureName, Module, ModuleCode, Video, VideoName};
use crate::navigation::{NavigationContext, NavigationStack};
use crate::tracker::Tracker;
use crate::view::ListView;

pub trait Model {
    fn tracker(&self) -> &Tracker;

    /// Replaces the whole tracker (clear, import).
    fn set_tracker(&mut self, tracker: Tracker);

    fn add_module(&mut self, module: Module) -> Result<()>;
    fn replace_module(&mut self, target: &ModuleCode, edited: Module) -> Result<()>;
    fn delete_module(&mut self, code: &ModuleCode) -> Option<Module>;

    fn add_lecture(&mut self, code: &ModuleCode, lecture: Lecture) -> Result<()>;
    fn replace_lecture(
        &mut self,
        code: &ModuleCode,
        target: &LectureName,
        edited: Lecture,
    ) -> Result<()>;
    fn delete_lecture(&mut self, code: &ModuleCode, name: &LectureName) -> Option<Lecture>;

    fn add_video(&mut self, code: &ModuleCode, lecture: &LectureName, video: Video) -> Result<()>;
    fn replace_video(
        &mut self,
        code: &ModuleCode,
        lecture: &LectureName,
        target: &VideoName,
        edited: Video,
    ) -> Result<()>;
    fn delete_video(
        &mut self,
        code: &ModuleCode,
        lecture: &LectureName,
        name: &VideoName,
    ) -> Option<Video>;

    fn navigation(&self) -> &NavigationStack;
    fn navigation_mut(&mut self) -> &mut NavigationStack;

    /// Pops navigation frames that point at entities no longer in the
    /// tracker, and resets the list view if it went stale.
    fn reconcile_navigation(&mut self);

    fn list_view(&self) -> &ListView;
    fn set_list_view(&mut self, view: ListView);

    fn paths(&self) -> &TrackerPaths;

    // --- Provided queries ---

    fn has_module(&self, code: &ModuleCode) -> bool {
        self.tracker().has_module(code)
    }

    fn module(&self, code: &ModuleCode) -> Option<&Module> {
        self.tracker().module(code)
    }

    fn has_lecture(&self, code: &ModuleCode, name: &LectureName) -> bool {
        self.tracker().has_lecture(code, name)
    }

    fn lecture(&self, code: &ModuleCode, name: &LectureName) -> Option<&Lecture> {
        self.tracker().lecture(code, name)
    }

    fn has_video(&self, code: &ModuleCode, lecture: &LectureName, name: &VideoName) -> bool {
        self.tracker().has_video(code, lecture, name)
    }

    fn video(&self, code: &ModuleCode, lecture: &LectureName, name: &VideoName) -> Option<&Video> {
        self.tracker().video(code, lecture, name)
    }

    fn current_context(&self) -> NavigationContext {
        self.navigation().current()
    }
}

/// In-memory state of a running tracker session.
#[derive(Debug, Clone)]
pub struct ModelManager {
    tracker: Tracker,
    navigation: NavigationStack,
    view: ListView,
    paths: TrackerPaths,
}

impl ModelManager {
    pub fn new(tracker: Tracker, paths: TrackerPaths) -> Self {
        Self {
            tracker,
            navigation: NavigationStack::new(),
            view: ListView::default(),
            paths,
        }
    }
}

fn context_exists(tracker: &Tracker, context: &NavigationContext) -> bool {
    match context {
        NavigationContext::Root => true,
        NavigationContext::InModule(code) => tracker.has_module(code),
        NavigationContext::InLecture(code, name) => tracker.has_lecture(code, name),
    }
}

impl Model for ModelManager {
    fn tracker(&self) -> &Tracker {
        &self.tracker
    }

    fn set_tracker(&mut self, tracker: Tracker) {
        self.tracker = tracker;
    }

    fn add_module(&mut self, module: Module) -> Result<()> {
        self.tracker.add_module(module)
    }

    fn replace_module(&mut self, target: &ModuleCode, edited: Module) -> Result<()> {
        self.tracker.replace_module(target, edited)
    }

    fn delete_module(&mut self, code: &ModuleCode) -> Option<Module> {
        self.tracker.remove_module(code)
    }

    fn add_lecture(&mut self, code: &ModuleCode, lecture: Lecture) -> Result<()> {
        self.tracker.add_lecture(code, lecture)
    }

    fn replace_lecture(
        &mut self,
        code: &ModuleCode,
        target: &LectureName,
        edited: Lecture,
    ) -> Result<()> {
        self.tracker.replace_lecture(code, target, edited)
    }

    fn delete_lecture(&mut self, code: &ModuleCode, name: &LectureName) -> Option<Lecture> {
        self.tracker.remove_lecture(code, name)
    }

    fn add_video(&mut self, code: &ModuleCode, lecture: &LectureName, video: Video) -> Result<()> {
        self.tracker.add_video(code, lecture, video)
    }

    fn replace_video(
        &mut self,
        code: &ModuleCode,
        lecture: &LectureName,
        target: &VideoName,
        edited: Video,
    ) -> Result<()> {
        self.tracker.replace_video(code, lecture, target, edited)
    }

    fn delete_video(
        &mut self,
        code: &ModuleCode,
        lecture: &LectureName,
        name: &VideoName,
    ) -> Option<Video> {
        self.tracker.remove_video(code, lecture, name)
    }

    fn navigation(&self) -> &NavigationStack {
        &self.navigation
    }

    fn navigation_mut(&mut self) -> &mut NavigationStack {
        &mut self.navigation
    }

    fn reconcile_navigation(&mut self) {
        let tracker = &self.tracker;
        self.navigation
            .retain_valid(|context| context_exists(tracker, context));
        if !context_exists(&self.tracker, &self.view.context) {
            self.view = ListView::unfiltered(self.navigation.current());
        }
    }

    fn list_view(&self) -> &ListView {
        &self.view
    }

    fn set_list_view(&mut self, view: ListView) {
        self.view = view;
    }

    fn paths(&self) -> &TrackerPaths {
        &self.paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrackerConfig;
    use crate::tracker::fixtures::*;
    use std::path::Path;

    fn manager() -> ModelManager {
        let paths = TrackerPaths::resolve(Path::new("/tmp/letracker"), &TrackerConfig::default());
        ModelManager::new(typical_tracker(), paths)
    }

    #[test]
    fn provided_queries_delegate_to_tracker() {
        let model = manager();
        assert!(model.has_module(&code("CS2040S")));
        assert!(model.has_lecture(&code("CS2040S"), &lecture_name("Week 2")));
        assert!(model.has_video(
            &code("CS2040S"),
            &lecture_name("Week 1"),
            &video_name("Content")
        ));
        assert!(!model.has_video(
            &code("ST2334"),
            &lecture_name("Week 1"),
            &video_name("Content")
        ));
    }

    #[test]
    fn reconcile_pops_frames_of_deleted_lecture() {
        let mut model = manager();
        model
            .navigation_mut()
            .navigate_to_lecture(code("CS2040S"), lecture_name("Week 1"));
        model.set_list_view(ListView::unfiltered(model.current_context()));

        model.delete_lecture(&code("CS2040S"), &lecture_name("Week 1"));
        model.reconcile_navigation();

        let expected = NavigationContext::InModule(code("CS2040S"));
        assert_eq!(model.current_context(), expected);
        assert_eq!(model.list_view().context, expected);
    }

    #[test]
    fn reconcile_keeps_valid_frames() {
        let mut model = manager();
        model.navigation_mut().navigate_to(code("ST2334"));
        model.delete_module(&code("CS2040S"));
        model.reconcile_navigation();
        assert_eq!(
            model.current_context(),
            NavigationContext::InModule(code("ST2334"))
        );
    }
}
