/*!
Access to the real filesystem for the explorer shell.

# Parts
- `path`: turns user input into absolute, weakly canonical paths (`~` expansion included).
- `entry`: `EntryInfo` snapshots and the single-level directory reader.
- `walk`: recursive search and directory size aggregation.
- `ops`: create, delete, copy and move with explicit preconditions.

Every fallible operation reports an `FsError`; nothing here prints.
Missing or unreadable directories read as empty rather than failing, so
listing and walking never abort on a single bad entry.
*/
mod entry;
mod error;
mod ops;
mod path;
mod walk;

pub use entry::{file_info, list_directory, EntryInfo};
pub use error::{FsError, FsResult};
pub use ops::{
    check_move, copy_file, create_directory, create_file, effective_target, move_path,
    remove_empty_dir, remove_file,
};
pub use path::{exists_dir, exists_file, normalize, weakly_canonical};
pub use walk::{calc_directory_size, search_recursive};
