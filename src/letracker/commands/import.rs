use crate::commands::CmdResult;
use crate::error::{Result, TrackerError};
use crate::manager::Model;
use crate::messages::plural;
use crate::model::{Module, ModuleCode};
use crate::store::archive::{archive_path, read_archive};
use tracing::debug;

pub const USAGE: &str = "import: Imports modules from an archive file in the archive directory.\n\
Parameters: FILE_NAME [m/MODULE_CODE]... [o/]\n\
Example: import semester1 m/CS2040S o/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    pub file_name: String,
    /// Modules to take from the archive; empty means all of them.
    pub modules: Vec<ModuleCode>,
    pub overwrite: bool,
}

impl Import {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let path = archive_path(&model.paths().archive_dir, &self.file_name);
        if !path.exists() {
            return Err(TrackerError::command(format!(
                "File {} does not exist",
                path.display()
            )));
        }
        debug!(path = %path.display(), "reading archive");
        let archive = read_archive(&path).map_err(|e| {
            TrackerError::command(format!("Could not import {}: {}", path.display(), e))
        })?;

        let selected: Vec<Module> = if self.modules.is_empty() {
            archive.modules().to_vec()
        } else {
            let missing = codes(self.modules.iter().filter(|c| !archive.has_module(c)));
            if !missing.is_empty() {
                return Err(TrackerError::command(format!(
                    "Modules not found in archive: {}",
                    missing
                )));
            }
            self.modules
                .iter()
                .filter_map(|c| archive.module(c).cloned())
                .collect()
        };

        let existing = codes(
            selected
                .iter()
                .map(|m| &m.code)
                .filter(|c| model.has_module(c)),
        );
        if !existing.is_empty() && !self.overwrite {
            return Err(TrackerError::command(format!(
                "Modules already exist in tracker: {}. Use o/ to overwrite them.",
                existing
            )));
        }

        let mut tracker = model.tracker().clone();
        for module in &selected {
            if tracker.has_module(&module.code) {
                tracker.replace_module(&module.code, module.clone())?;
            } else {
                tracker.add_module(module.clone())?;
            }
        }
        model.set_tracker(tracker);
        model.reconcile_navigation();

        let count = selected.len();
        Ok(CmdResult::success(format!(
            "Imported {} module{} from {}",
            count,
            plural(count),
            path.display()
        )))
    }
}

fn codes<'a>(codes: impl Iterator<Item = &'a ModuleCode>) -> String {
    codes.map(|c| c.as_str()).collect::<Vec<_>>().join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{model_in, RecordingModel};
    use crate::model::Lecture;
    use crate::store::archive::write_archive;
    use crate::tracker::fixtures::*;
    use crate::tracker::Tracker;
    use std::path::Path;

    fn write_backup(dir: &Path, tracker: &Tracker) {
        write_archive(&dir.join("archives").join("backup.json"), tracker).unwrap();
    }

    fn import(modules: &[&str], overwrite: bool) -> Import {
        Import {
            file_name: "backup".into(),
            modules: modules.iter().map(|m| code(m)).collect(),
            overwrite,
        }
    }

    #[test]
    fn imports_all_modules_into_empty_tracker() {
        let dir = tempfile::tempdir().unwrap();
        write_backup(dir.path(), &typical_tracker());
        let mut model = model_in(dir.path(), Tracker::new());

        let result = import(&[], false).execute(&mut model).unwrap();
        assert!(result.feedback().starts_with("Imported 2 modules from"));
        assert_eq!(model.tracker(), &typical_tracker());
    }

    #[test]
    fn existing_modules_need_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        write_backup(dir.path(), &typical_tracker());
        let mut model = RecordingModel::new(model_in(dir.path(), typical_tracker()));

        let err = import(&["ST2334"], false).execute(&mut model).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Modules already exist in tracker: ST2334. Use o/ to overwrite them."
        );
        assert!(model.mutations.is_empty());
    }

    #[test]
    fn overwrite_replaces_in_place_and_appends_new() {
        let dir = tempfile::tempdir().unwrap();
        let archived = Tracker::from_modules(vec![
            Module::new(code("MA1521")),
            Module::new(code("CS2040S")).with_lectures(vec![Lecture::new(lecture_name("Only"))]),
        ])
        .unwrap();
        write_backup(dir.path(), &archived);
        let mut model = model_in(dir.path(), typical_tracker());

        import(&[], true).execute(&mut model).unwrap();

        let codes: Vec<&str> = model
            .tracker()
            .modules()
            .iter()
            .map(|m| m.code.as_str())
            .collect();
        assert_eq!(codes, vec!["CS2040S", "ST2334", "MA1521"]);
        let cs = model.module(&code("CS2040S")).unwrap();
        assert_eq!(cs.lectures.len(), 1);
        assert!(cs.name.is_none());
    }

    #[test]
    fn selected_module_must_be_in_archive() {
        let dir = tempfile::tempdir().unwrap();
        write_backup(dir.path(), &typical_tracker());
        let mut model = model_in(dir.path(), Tracker::new());

        let err = import(&["MA1521"], false).execute(&mut model).unwrap_err();
        assert_eq!(err.to_string(), "Modules not found in archive: MA1521");
        assert!(model.tracker().is_empty());
    }

    #[test]
    fn overwriting_module_resets_stale_navigation() {
        let dir = tempfile::tempdir().unwrap();
        let archived = Tracker::from_modules(vec![Module::new(code("CS2040S"))]).unwrap();
        write_backup(dir.path(), &archived);
        let mut model = model_in(dir.path(), typical_tracker());
        model
            .navigation_mut()
            .navigate_to_lecture(code("CS2040S"), lecture_name("Week 1"));

        import(&[], true).execute(&mut model).unwrap();
        assert_eq!(
            model.current_context(),
            crate::navigation::NavigationContext::InModule(code("CS2040S"))
        );
    }

    #[test]
    fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut model = model_in(dir.path(), Tracker::new());
        let err = import(&[], false).execute(&mut model).unwrap_err();
        assert!(err.to_string().ends_with("does not exist"));
    }

    #[test]
    fn corrupt_archive_is_a_command_error() {
        let dir = tempfile::tempdir().unwrap();
        let archives = dir.path().join("archives");
        std::fs::create_dir_all(&archives).unwrap();
        std::fs::write(archives.join("backup.json"), "not json").unwrap();
        let mut model = model_in(dir.path(), Tracker::new());

        let err = import(&[], false).execute(&mut model).unwrap_err();
        assert!(matches!(err, TrackerError::Command(_)));
        assert!(err.to_string().starts_with("Could not import"));
    }
}
