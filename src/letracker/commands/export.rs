use crate::commands::CmdResult;
use crate::error::{Result, TrackerError};
use crate::manager::Model;
use crate::messages::plural;
use crate::store::archive::{archive_path, is_same_file, write_archive};
use tracing::debug;

pub const USAGE: &str = "export: Exports all modules to an archive file in the archive \
directory.\n\
Parameters: FILE_NAME [o/]\n\
Example: export semester1 o/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub overwrite: bool,
}

impl Export {
    pub fn execute<M: Model + ?Sized>(&self, model: &mut M) -> Result<CmdResult> {
        let paths = model.paths();
        let path = archive_path(&paths.archive_dir, &self.file_name);
        if is_same_file(&path, &paths.tracker_file) {
            return Err(TrackerError::command(
                "Cannot export to the current data file",
            ));
        }
        if path.exists() && !self.overwrite {
            return Err(TrackerError::command(format!(
                "File {} already exists. Use o/ to overwrite it.",
                path.display()
            )));
        }

        debug!(path = %path.display(), "writing archive");
        write_archive(&path, model.tracker()).map_err(|e| {
            TrackerError::command(format!("Could not export to {}: {}", path.display(), e))
        })?;

        let count = model.tracker().modules().len();
        Ok(CmdResult::success(format!(
            "Exported {} module{} to {}",
            count,
            plural(count),
            path.display()
        )))
    }
}
