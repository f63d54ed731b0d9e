//! Read-only views for the presentation layer.
//!
//! The model keeps one active [`ListView`]: which level of the hierarchy is
//! shown and an optional [`FindFilter`]. The filter is a predicate, not a
//! snapshot, so the view stays correct as commands add or remove items.

use crate::manager::Model;
use crate::model::{Lecture, LectureName, Module, ModuleCode, Tag, Video};
use crate::navigation::NavigationContext;
use std::collections::BTreeSet;

/// Matches items by keyword (case-insensitive substring of a name) and/or tag.
///
/// An item must match at least one keyword when keywords are given, and
/// carry at least one of the tags when tags are given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FindFilter {
    pub keywords: Vec<String>,
    pub tags: Vec<Tag>,
}

impl FindFilter {
    pub fn new(keywords: Vec<String>, tags: Vec<Tag>) -> Self {
        Self { keywords, tags }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.tags.is_empty()
    }

    pub fn matches(&self, names: &[&str], tags: &BTreeSet<Tag>) -> bool {
        let keyword_match = self.keywords.is_empty()
            || self.keywords.iter().any(|keyword| {
                let keyword = keyword.to_lowercase();
                names
                    .iter()
                    .any(|name| name.to_lowercase().contains(&keyword))
            });
        let tag_match = self.tags.is_empty() || self.tags.iter().any(|t| tags.contains(t));
        keyword_match && tag_match
    }

    fn matches_module(&self, module: &Module) -> bool {
        let name = module.name.as_ref().map(|n| n.as_str()).unwrap_or_default();
        self.matches(&[module.code.as_str(), name], &module.tags)
    }

    fn matches_lecture(&self, lecture: &Lecture) -> bool {
        self.matches(&[lecture.name.as_str()], &lecture.tags)
    }

    fn matches_video(&self, video: &Video) -> bool {
        self.matches(&[video.name.as_str()], &video.tags)
    }
}

/// The list currently on display: a level in the hierarchy plus a filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListView {
    pub context: NavigationContext,
    pub filter: Option<FindFilter>,
}

impl ListView {
    pub fn unfiltered(context: NavigationContext) -> Self {
        Self {
            context,
            filter: None,
        }
    }

    pub fn filtered(context: NavigationContext, filter: FindFilter) -> Self {
        Self {
            context,
            filter: Some(filter),
        }
    }

    pub fn rename_module(&mut self, old: &ModuleCode, new: &ModuleCode) {
        self.context = match &self.context {
            NavigationContext::InModule(code) if code == old => {
                NavigationContext::InModule(new.clone())
            }
            NavigationContext::InLecture(code, lecture) if code == old => {
                NavigationContext::InLecture(new.clone(), lecture.clone())
            }
            other => other.clone(),
        };
    }

    pub fn rename_lecture(&mut self, code: &ModuleCode, old: &LectureName, new: &LectureName) {
        if let NavigationContext::InLecture(c, lecture) = &self.context {
            if c == code && lecture == old {
                self.context = NavigationContext::InLecture(code.clone(), new.clone());
            }
        }
    }
}

#[derive(Debug)]
pub enum View<'a> {
    Modules(Vec<&'a Module>),
    Lectures {
        module: &'a Module,
        lectures: Vec<&'a Lecture>,
    },
    Videos {
        module: &'a Module,
        lecture: &'a Lecture,
        videos: Vec<&'a Video>,
    },
}

impl View<'_> {
    pub fn len(&self) -> usize {
        match self {
            View::Modules(modules) => modules.len(),
            View::Lectures { lectures, .. } => lectures.len(),
            View::Videos { videos, .. } => videos.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Singular noun for the items listed.
    pub fn item_kind(&self) -> &'static str {
        match self {
            View::Modules(_) => "module",
            View::Lectures { .. } => "lecture",
            View::Videos { .. } => "video",
        }
    }
}

/// Computes the active view against the current tracker contents.
///
/// A view whose module or lecture no longer exists falls back to the
/// unfiltered module list.
pub fn current_view<M: Model + ?Sized>(model: &M) -> View<'_> {
    let list_view = model.list_view();
    let filter = list_view.filter.as_ref();
    let tracker = model.tracker();

    match &list_view.context {
        NavigationContext::InModule(code) => {
            if let Some(module) = tracker.module(code) {
                let lectures = module
                    .lectures
                    .iter()
                    .filter(|l| filter.map_or(true, |f| f.matches_lecture(l)))
                    .collect();
                return View::Lectures { module, lectures };
            }
        }
        NavigationContext::InLecture(code, name) => {
            if let (Some(module), Some(lecture)) =
                (tracker.module(code), tracker.lecture(code, name))
            {
                let videos = lecture
                    .videos
                    .iter()
                    .filter(|v| filter.map_or(true, |f| f.matches_video(v)))
                    .collect();
                return View::Videos {
                    module,
                    lecture,
                    videos,
                };
            }
        }
        NavigationContext::Root => {
            let modules = tracker
                .modules()
                .iter()
                .filter(|m| filter.map_or(true, |f| f.matches_module(m)))
                .collect();
            return View::Modules(modules);
        }
    }

    View::Modules(tracker.modules().iter().collect())
}
