use crate::commands::{CmdResult, Target};
use crate::error::{Result, TrackerError};
use crate::manager::Model;
use crate::model::{LectureName, ModuleCode, VideoName};
use crate::navigation::NavigationContext;
use crate::view::ListView;

pub const USAGE: &str = "nav: Navigates to a module or lecture. Without arguments, returns to \
the root.\n\
Parameters: [m/MODULE_CODE [l/LECTURE_NAME]]\n\
Example: nav m/CS2040S l/Week 1";

pub const USAGE_BACK: &str = "navback: Navigates one level up.\nExample: navback";

pub const MESSAGE_TOO_DEEP: &str = "Cannot navigate deeper than a lecture";
pub const MESSAGE_AT_ROOT: &str = "Already at the root";

pub fn nav_message(context: &NavigationContext) -> String {
    format!("Navigated to {}", context)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nav {
    pub module_code: ModuleCode,
    pub lecture_name: Option<LectureName>,
    /// Only kept so the attempt can be rejected with a clear message.
    pub video_name: Option<VideoName>,
}

impl Nav {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        if self.video_name.is_some() {
            return Err(TrackerError::command(MESSAGE_TOO_DEEP));
        }

        let code = self.module_code.clone();
        match &self.lecture_name {
            Some(lecture) => {
                Target::Lecture(code.clone(), lecture.clone()).ensure_exists(model)?;
                model.navigation_mut().navigate_to_lecture(code, lecture.clone());
            }
            None => {
                Target::Module(code.clone()).ensure_exists(model)?;
                model.navigation_mut().navigate_to(code);
            }
        }
        Ok(show_current(model))
    }
}

pub fn back<M: Model + ?Sized>(model: &mut M) -> Result<CmdResult> {
    if model.current_context().is_root() {
        return Err(TrackerError::command(MESSAGE_AT_ROOT));
    }
    model.navigation_mut().back();
    Ok(show_current(model))
}

pub fn root<M: Model + ?Sized>(model: &mut M) -> Result<CmdResult> {
    model.navigation_mut().to_root();
    Ok(show_current(model))
}

fn show_current<M: Model + ?Sized>(model: &mut M) -> CmdResult {
    let context = model.current_context();
    model.set_list_view(ListView::unfiltered(context.clone()));
    CmdResult::success(nav_message(&context)).with_view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{typical_model, RecordingModel};
    use crate::tracker::fixtures::*;
    use crate::view::FindFilter;

    #[test]
    fn navigates_into_lecture_then_back() {
        let mut model = typical_model();
        let result = Nav {
            module_code: code("CS2040S"),
            lecture_name: Some(lecture_name("Week 1")),
            video_name: None,
        }
        .execute(&mut model)
        .unwrap();
        assert_eq!(result.feedback(), "Navigated to /r/CS2040S/Week 1");
        assert_eq!(model.list_view().context, model.current_context());

        let result = back(&mut model).unwrap();
        assert_eq!(result.feedback(), "Navigated to /r/CS2040S");

        let result = back(&mut model).unwrap();
        assert_eq!(result.feedback(), "Navigated to /r");
    }

    #[test]
    fn back_at_root_fails() {
        let mut model = RecordingModel::typical();
        let err = back(&mut model).unwrap_err();
        assert_eq!(err.to_string(), "Already at the root");
        assert!(model.mutations.is_empty());
    }

    #[test]
    fn cannot_navigate_into_video() {
        let mut model = RecordingModel::typical();
        let err = Nav {
            module_code: code("CS2040S"),
            lecture_name: Some(lecture_name("Week 1")),
            video_name: Some(video_name("Analysis")),
        }
        .execute(&mut model)
        .unwrap_err();
        assert_eq!(err.to_string(), "Cannot navigate deeper than a lecture");
        assert!(model.mutations.is_empty());
    }

    #[test]
    fn missing_module_fails_without_moving() {
        let mut model = typical_model();
        let err = Nav {
            module_code: code("MA1521"),
            lecture_name: None,
            video_name: None,
        }
        .execute(&mut model)
        .unwrap_err();
        assert_eq!(err.to_string(), "Module MA1521 does not exist.");
        assert!(model.current_context().is_root());
    }

    #[test]
    fn root_clears_frames_and_filter() {
        let mut model = typical_model();
        model.navigation_mut().navigate_to(code("ST2334"));
        model.set_list_view(ListView::filtered(
            model.current_context(),
            FindFilter::new(vec!["topic".into()], vec![]),
        ));

        let result = root(&mut model).unwrap();
        assert_eq!(result.feedback(), "Navigated to /r");
        assert_eq!(model.list_view(), &ListView::default());
    }
}
