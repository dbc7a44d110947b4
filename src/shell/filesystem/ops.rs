use std::fs::{self, File, OpenOptions};
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use super::error::{FsError, FsResult};

/// Create an empty regular file. Fails if the file exists or its parent is missing.
pub fn create_file(path: &Path) -> FsResult<()> {
    OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map(|_| ())
        .map_err(|err| match err.kind() {
            ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
            _ => FsError::io(path, err),
        })
}

/// Create a single directory level
pub fn create_directory(path: &Path) -> FsResult<()> {
    fs::create_dir(path).map_err(|err| match err.kind() {
        ErrorKind::AlreadyExists => FsError::AlreadyExists(path.to_path_buf()),
        _ => FsError::io(path, err),
    })
}

/// Delete `path` if it is a regular file, otherwise do nothing
pub fn remove_file(path: &Path) -> FsResult<()> {
    if !path.is_file() {
        return Ok(());
    }
    fs::remove_file(path).map_err(|err| FsError::io(path, err))
}

/// Delete `dir` only if it is an empty directory. Returns whether it was removed.
pub fn remove_empty_dir(dir: &Path) -> FsResult<bool> {
    if !dir.is_dir() {
        return Ok(false);
    }
    let mut children = fs::read_dir(dir).map_err(|err| FsError::io(dir, err))?;
    if children.next().is_some() {
        return Ok(false);
    }
    fs::remove_dir(dir).map_err(|err| FsError::io(dir, err))?;
    Ok(true)
}

/// Where a copy or move of `src` onto `dst` actually lands: inside `dst` when it is a directory
pub fn effective_target(src: &Path, dst: &Path) -> PathBuf {
    match (dst.is_dir(), src.file_name()) {
        (true, Some(name)) => dst.join(name),
        _ => dst.to_path_buf(),
    }
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

fn invalid_input(path: &Path, msg: &str) -> FsError {
    FsError::io(path, io::Error::new(ErrorKind::InvalidInput, msg.to_string()))
}

/// Copy the regular file `src` onto `dst`, returning the effective target.
pub fn copy_file(src: &Path, dst: &Path, overwrite: bool) -> FsResult<PathBuf> {
    if !src.exists() {
        return Err(FsError::NotFound(src.to_path_buf()));
    }
    if !src.is_file() {
        return Err(FsError::NotAFile(src.to_path_buf()));
    }

    let target = effective_target(src, dst);
    if target.exists() {
        if !overwrite {
            return Err(FsError::AlreadyExists(target));
        }
        // fs::copy onto itself truncates the source
        if same_file(src, &target) {
            return Err(invalid_input(&target, "source and target are the same file"));
        }
    }

    fs::copy(src, &target).map_err(|err| FsError::io(&target, err))?;
    log::debug!("Copied {} to {}", src.display(), target.display());
    Ok(target)
}

/// Reject moves of `src` onto `target` that would lose or loop data:
/// the same entry, a directory into itself, or a target that contains the source.
pub fn check_move(src: &Path, target: &Path) -> FsResult<()> {
    if same_file(src, target) {
        return Err(invalid_input(target, "source and target are the same"));
    }
    if src.is_dir() && weak_starts_with(target, src) {
        return Err(invalid_input(target, "cannot move a directory into itself"));
    }
    let src_entry = canonical_entry(src);
    let target_entry = canonical_entry(target);
    if src_entry != target_entry && src_entry.starts_with(&target_entry) {
        return Err(invalid_input(target, "target contains the source"));
    }
    Ok(())
}

/// Move a file or directory tree onto `dst`, returning the effective target.
///
/// An existing target is removed first when `overwrite` is set. Renames that
/// cross filesystems fall back to copy-then-delete.
pub fn move_path(src: &Path, dst: &Path, overwrite: bool) -> FsResult<PathBuf> {
    fs::symlink_metadata(src).map_err(|_| FsError::NotFound(src.to_path_buf()))?;

    let target = effective_target(src, dst);
    check_move(src, &target)?;

    if fs::symlink_metadata(&target).is_ok() {
        if !overwrite {
            return Err(FsError::AlreadyExists(target));
        }
        remove_any(&target)?;
    }

    match fs::rename(src, &target) {
        Ok(()) => {}
        Err(err) if err.kind() == ErrorKind::CrossesDevices => {
            log::debug!("Rename across devices, copying {} instead", src.display());
            copy_then_remove(src, &target)?;
        }
        Err(err) => return Err(FsError::io(src, err)),
    }

    log::debug!("Moved {} to {}", src.display(), target.display());
    Ok(target)
}

fn weak_starts_with(path: &Path, prefix: &Path) -> bool {
    let prefix = prefix.canonicalize().unwrap_or_else(|_| prefix.to_path_buf());
    let parent_dir = path.parent().and_then(|p| p.canonicalize().ok());
    match parent_dir {
        Some(parent) => parent.starts_with(&prefix),
        None => path.starts_with(&prefix),
    }
}

/// Canonical parent joined with the final name, so a trailing symlink is not followed
fn canonical_entry(path: &Path) -> PathBuf {
    match (path.parent().and_then(|p| p.canonicalize().ok()), path.file_name()) {
        (Some(parent), Some(name)) => parent.join(name),
        _ => path.canonicalize().unwrap_or_else(|_| path.to_path_buf()),
    }
}

/// Move by copying the whole tree to `target`, then deleting `src`
fn copy_then_remove(src: &Path, target: &Path) -> FsResult<()> {
    copy_tree(src, target)?;
    remove_any(src)
}

fn remove_any(path: &Path) -> FsResult<()> {
    let meta = fs::symlink_metadata(path).map_err(|err| FsError::io(path, err))?;
    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };
    result.map_err(|err| FsError::io(path, err))
}

fn copy_tree(src: &Path, dst: &Path) -> FsResult<()> {
    let meta = fs::symlink_metadata(src).map_err(|err| FsError::io(src, err))?;

    if meta.is_dir() {
        fs::create_dir(dst).map_err(|err| FsError::io(dst, err))?;
        for entry in fs::read_dir(src).map_err(|err| FsError::io(src, err))? {
            let entry = entry.map_err(|err| FsError::io(src, err))?;
            copy_tree(&entry.path(), &dst.join(entry.file_name()))?;
        }
        return Ok(());
    }

    fs::copy(src, dst).map_err(|err| FsError::io(dst, err))?;
    if let Err(err) = preserve_mtime(&meta, dst) {
        log::debug!("Could not carry modification time to {}: {}", dst.display(), err);
    }
    Ok(())
}

fn preserve_mtime(meta: &fs::Metadata, dst: &Path) -> io::Result<()> {
    let modified = meta.modified()?;
    File::options().write(true).open(dst)?.set_modified(modified)
}
