use crate::commands::list::ensure_context;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::manager::Model;
use crate::messages::plural;
use crate::navigation::NavigationContext;
use crate::view::{current_view, FindFilter, ListView};

pub const USAGE: &str = "find: Finds modules, lectures or videos whose code or name contains \
any of the keywords (case-insensitive) and/or that carry any of the tags.\n\
Parameters: [KEYWORD]... [t/TAG]... [m/MODULE_CODE [l/LECTURE_NAME]]\n\
Example: find week t/exam m/CS2040S";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Find {
    pub context: NavigationContext,
    pub filter: FindFilter,
}

impl Find {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        ensure_context(model, &self.context)?;
        model.set_list_view(ListView::filtered(self.context.clone(), self.filter.clone()));

        let view = current_view(model);
        let count = view.len();
        Ok(CmdResult::success(format!(
            "{} {}{} listed!",
            count,
            view.item_kind(),
            plural(count)
        ))
        .with_view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::typical_model;
    use crate::tracker::fixtures::*;

    #[test]
    fn finds_modules_by_name_keyword() {
        let mut model = typical_model();
        let result = Find {
            context: NavigationContext::Root,
            filter: FindFilter::new(vec!["ALGORITHMS".into()], vec![]),
        }
        .execute(&mut model)
        .unwrap();

        assert_eq!(result.feedback(), "1 module listed!");
        assert!(model.list_view().filter.is_some());
        assert_eq!(model.tracker().modules().len(), 2);
    }

    #[test]
    fn finds_lectures_by_tag() {
        let mut model = typical_model();
        let result = Find {
            context: NavigationContext::InModule(code("CS2040S")),
            filter: FindFilter::new(vec![], vec!["intro".parse().unwrap()]),
        }
        .execute(&mut model)
        .unwrap();
        assert_eq!(result.feedback(), "1 lecture listed!");
    }

    #[test]
    fn no_matches_reports_zero() {
        let mut model = typical_model();
        let result = Find {
            context: NavigationContext::InLecture(code("CS2040S"), lecture_name("Week 1")),
            filter: FindFilter::new(vec!["nothing".into()], vec![]),
        }
        .execute(&mut model)
        .unwrap();
        assert_eq!(result.feedback(), "0 videos listed!");
    }

    #[test]
    fn filter_tracks_later_additions() {
        let mut model = typical_model();
        Find {
            context: NavigationContext::Root,
            filter: FindFilter::new(vec!["ma".into()], vec![]),
        }
        .execute(&mut model)
        .unwrap();
        assert_eq!(current_view(&model).len(), 0);

        model
            .add_module(crate::model::Module::new(code("MA1521")))
            .unwrap();
        assert_eq!(current_view(&model).len(), 1);
    }
}
