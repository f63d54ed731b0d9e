//! Where the user currently is in the module → lecture → video hierarchy.
//!
//! A [`NavigationContext`] is an immutable value. The [`NavigationStack`]
//! keeps the frames the user has walked through so `navback` can return one
//! level at a time. An empty stack means the user is at the root.

use crate::model::{LectureName, ModuleCode};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum NavigationContext {
    #[default]
    Root,
    InModule(ModuleCode),
    InLecture(ModuleCode, LectureName),
}

impl NavigationContext {
    pub fn module_code(&self) -> Option<&ModuleCode> {
        match self {
            NavigationContext::Root => None,
            NavigationContext::InModule(code) | NavigationContext::InLecture(code, _) => {
                Some(code)
            }
        }
    }

    pub fn lecture_name(&self) -> Option<&LectureName> {
        match self {
            NavigationContext::InLecture(_, name) => Some(name),
            _ => None,
        }
    }

    pub fn is_root(&self) -> bool {
        matches!(self, NavigationContext::Root)
    }
}

/// Renders as a path: `/r`, `/r/CS2040S`, `/r/CS2040S/Week 1`.
impl fmt::Display for NavigationContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationContext::Root => write!(f, "/r"),
            NavigationContext::InModule(code) => write!(f, "/r/{}", code),
            NavigationContext::InLecture(code, lecture) => write!(f, "/r/{}/{}", code, lecture),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationStack {
    frames: Vec<NavigationContext>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// The top frame, or `Root` when the stack is empty.
    pub fn current(&self) -> NavigationContext {
        self.frames.last().cloned().unwrap_or_default()
    }

    /// Moves into a module. Frames from any previous position are dropped.
    pub fn navigate_to(&mut self, code: ModuleCode) {
        self.frames = vec![NavigationContext::InModule(code)];
    }

    /// Moves into a lecture, leaving its module one `back()` away.
    pub fn navigate_to_lecture(&mut self, code: ModuleCode, lecture: LectureName) {
        self.frames = vec![
            NavigationContext::InModule(code.clone()),
            NavigationContext::InLecture(code, lecture),
        ];
    }

    /// Pops one frame. Returns `false` (and does nothing) at the root.
    pub fn back(&mut self) -> bool {
        self.frames.pop().is_some()
    }

    pub fn to_root(&mut self) {
        self.frames.clear();
    }

    /// Drops frames from the top down until the top frame satisfies `is_valid`.
    ///
    /// Frames only ever get deeper going up the stack, so removing an entity
    /// invalidates a suffix of the stack.
    pub fn retain_valid<F>(&mut self, is_valid: F) -> bool
    where
        F: Fn(&NavigationContext) -> bool,
    {
        let before = self.frames.len();
        while let Some(top) = self.frames.last() {
            if is_valid(top) {
                break;
            }
            self.frames.pop();
        }
        self.frames.len() != before
    }

    pub fn rename_module(&mut self, old: &ModuleCode, new: &ModuleCode) {
        for frame in &mut self.frames {
            match frame {
                NavigationContext::InModule(code) | NavigationContext::InLecture(code, _)
                    if *code == *old =>
                {
                    *code = new.clone();
                }
                _ => {}
            }
        }
    }

    pub fn rename_lecture(&mut self, code: &ModuleCode, old: &LectureName, new: &LectureName) {
        for frame in &mut self.frames {
            if let NavigationContext::InLecture(c, name) = frame {
                if *c == *code && *name == *old {
                    *name = new.clone();
                }
            }
        }
    }
}
