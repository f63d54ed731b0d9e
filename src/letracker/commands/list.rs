use crate::commands::{CmdMessage, CmdResult, Target};
use crate::error::Result;
use crate::manager::Model;
use crate::navigation::NavigationContext;
use crate::view::{current_view, ListView};

pub const USAGE: &str = "list: Lists the modules, the lectures of a module or the videos of a \
lecture.\n\
Parameters: [m/MODULE_CODE [l/LECTURE_NAME]]\n\
Example: list m/CS2040S";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct List {
    pub context: NavigationContext,
}

impl List {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        ensure_context(model, &self.context)?;
        model.set_list_view(ListView::unfiltered(self.context.clone()));

        let message = match &self.context {
            NavigationContext::Root => "Listed all modules".to_string(),
            NavigationContext::InModule(code) => format!("Listed all lectures of module {}", code),
            NavigationContext::InLecture(code, lecture) => format!(
                "Listed all videos of lecture {} of module {}",
                lecture, code
            ),
        };
        let mut result = CmdResult::success(message).with_view();
        if current_view(model).is_empty() {
            result.add_message(CmdMessage::info("Nothing to show yet"));
        }
        Ok(result)
    }
}

/// Fails unless the module or lecture a context points at exists.
pub(crate) fn ensure_context<M: Model + ?Sized>(
    model: &M,
    context: &NavigationContext,
) -> Result<()> {
    match context {
        NavigationContext::Root => Ok(()),
        NavigationContext::InModule(code) => Target::Module(code.clone()).ensure_exists(model),
        NavigationContext::InLecture(code, lecture) => {
            Target::Lecture(code.clone(), lecture.clone()).ensure_exists(model)
        }
    }
}
