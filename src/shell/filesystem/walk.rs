use std::path::Path;

use walkdir::{DirEntry, WalkDir};

use super::entry::EntryInfo;

/// Walk everything below `start` (the root itself excluded), skipping
/// entries that cannot be read. Yields nothing when `start` is not a directory.
fn walk_below(start: &Path) -> impl Iterator<Item = DirEntry> {
    let walker = if start.is_dir() {
        Some(
            WalkDir::new(start)
                .min_depth(1)
                .follow_links(false)
                .sort_by_file_name(),
        )
    } else {
        None
    };

    walker.into_iter().flatten().filter_map(|entry| match entry {
        Ok(entry) => Some(entry),
        Err(err) => {
            log::warn!("Skipping entry during walk: {}", err);
            None
        }
    })
}

/// Collect every entry below `start` whose name contains `keyword`, ignoring ASCII case
pub fn search_recursive(start: &Path, keyword: &str) -> Vec<EntryInfo> {
    let needle = keyword.to_ascii_lowercase();

    walk_below(start)
        .filter(|entry| {
            entry
                .file_name()
                .to_string_lossy()
                .to_ascii_lowercase()
                .contains(&needle)
        })
        .map(|entry| {
            let metadata = std::fs::metadata(entry.path()).ok();
            EntryInfo::from_metadata(entry.path(), metadata.as_ref())
        })
        .collect()
}

/// Sum of the sizes of all regular files below `dir`; 0 for anything that is not a directory
pub fn calc_directory_size(dir: &Path) -> u64 {
    walk_below(dir)
        .filter(|entry| entry.file_type().is_file())
        .filter_map(|entry| match entry.metadata() {
            Ok(metadata) => Some(metadata.len()),
            Err(err) => {
                log::warn!("Cannot stat {}: {}", entry.path().display(), err);
                None
            }
        })
        .sum()
}
