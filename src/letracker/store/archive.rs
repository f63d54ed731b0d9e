//! Import/export archives.
//!
//! An archive is a tracker written in the same JSON format as the data file,
//! so an exported file can also be dropped in as a data file.

use super::fs::{read_tracker, write_tracker};
use crate::error::Result;
use crate::tracker::Tracker;
use std::fs;
use std::path::{Component, Path, PathBuf};

const ARCHIVE_EXT: &str = "json";

/// Resolves a user-supplied archive name.
///
/// Relative names live in `archive_dir`; a name without an extension gets
/// `.json` appended. `.` and `..` components are resolved.
pub fn archive_path(archive_dir: &Path, name: &str) -> PathBuf {
    let mut path = PathBuf::from(name.trim());
    if path.extension().is_none() {
        path.set_extension(ARCHIVE_EXT);
    }
    if path.is_absolute() {
        normalize(&path)
    } else {
        normalize(&archive_dir.join(path))
    }
}

/// Whether two paths name the same file. Existing files are compared after
/// following symlinks, anything else lexically.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => normalize(a) == normalize(b),
    }
}

fn normalize(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match normalized.components().next_back() {
                Some(Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => normalized.push(component),
            },
            other => normalized.push(other),
        }
    }
    normalized
}

pub fn write_archive(path: &Path, tracker: &Tracker) -> Result<()> {
    write_tracker(path, tracker)
}

pub fn read_archive(path: &Path) -> Result<Tracker> {
    read_tracker(path)
}
