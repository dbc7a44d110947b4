use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Failures raised by the filesystem layer
#[derive(Debug, Error)]
pub enum FsError {
    #[error("no such file or directory: {}", .0.display())]
    NotFound(PathBuf),

    #[error("not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    #[error("not a regular file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error("already exists: {}", .0.display())]
    AlreadyExists(PathBuf),

    #[error("directory not empty: {}", .0.display())]
    NotEmpty(PathBuf),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl FsError {
    /// Wrap an io::Error, keeping the path it happened on
    pub fn io(path: &Path, source: io::Error) -> Self {
        FsError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

pub type FsResult<T> = Result<T, FsError>;
