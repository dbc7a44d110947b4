use std::fs::{self, Metadata};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use super::walk::calc_directory_size;

/// Snapshot of a single file or directory.
///
/// Timestamps are whole seconds since the Unix epoch; 0 means "unknown".
/// `size` is only meaningful for directories when the producer aggregated it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_directory: bool,
    pub size: u64,
    pub modify_time: i64,
    pub access_time: i64,
    pub creation_time: i64,
}

impl EntryInfo {
    /// Build an entry from already fetched metadata
    pub(super) fn from_metadata(path: &Path, metadata: Option<&Metadata>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());

        let Some(metadata) = metadata else {
            return Self {
                name,
                path: path.to_path_buf(),
                is_directory: path.is_dir(),
                ..Default::default()
            };
        };

        let is_directory = metadata.is_dir();
        let size = if metadata.is_file() { metadata.len() } else { 0 };

        // Access and creation times fall back to mtime where the platform lacks them
        let modify_time = epoch_seconds(metadata.modified()).unwrap_or(0);
        let access_time = epoch_seconds(metadata.accessed()).unwrap_or(modify_time);
        let creation_time = epoch_seconds(metadata.created()).unwrap_or(modify_time);

        Self {
            name,
            path: path.to_path_buf(),
            is_directory,
            size,
            modify_time,
            access_time,
            creation_time,
        }
    }
}

fn epoch_seconds(time: io::Result<SystemTime>) -> Option<i64> {
    let time = time.ok()?;
    let secs = match time.duration_since(UNIX_EPOCH) {
        Ok(after) => after.as_secs() as i64,
        Err(before) => -(before.duration().as_secs() as i64),
    };
    Some(secs)
}

/// Describe a single path. With `calc_dir_size` a directory's size is the
/// recursive sum of the regular files below it.
pub fn file_info(path: &Path, calc_dir_size: bool) -> EntryInfo {
    let metadata = fs::metadata(path).ok();
    let mut info = EntryInfo::from_metadata(path, metadata.as_ref());
    if calc_dir_size && info.is_directory {
        info.size = calc_directory_size(path);
    }
    info
}

/// List the immediate children of `dir` in the order the OS returns them.
///
/// A missing path or a non-directory yields an empty list.
pub fn list_directory(dir: &Path) -> Vec<EntryInfo> {
    let read_dir = match fs::read_dir(dir) {
        Ok(read_dir) => read_dir,
        Err(err) => {
            log::debug!("Cannot list {}: {}", dir.display(), err);
            return Vec::new();
        }
    };

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("Skipping unreadable entry in {}: {}", dir.display(), err);
                continue;
            }
        };
        let path = entry.path();
        let metadata = fs::metadata(&path).ok();
        entries.push(EntryInfo::from_metadata(&path, metadata.as_ref()));
    }
    entries
}
