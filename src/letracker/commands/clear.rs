use crate::commands::CmdResult;
use crate::error::Result;
use crate::manager::Model;
use crate::tracker::Tracker;
use crate::view::ListView;

pub fn run<M: Model + ?Sized>(model: &mut M) -> Result<CmdResult> {
    model.set_tracker(Tracker::new());
    model.navigation_mut().to_root();
    model.set_list_view(ListView::default());
    Ok(CmdResult::success("Tracker has been cleared!"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::typical_model;
    use crate::tracker::fixtures::*;

    #[test]
    fn empties_tracker_and_returns_to_root() {
        let mut model = typical_model();
        model
            .navigation_mut()
            .navigate_to_lecture(code("CS2040S"), lecture_name("Week 1"));

        let result = run(&mut model).unwrap();
        assert_eq!(result.feedback(), "Tracker has been cleared!");
        assert!(model.tracker().is_empty());
        assert!(model.current_context().is_root());
        assert!(!model.navigation_mut().back());
    }
}
