//! FileSystem port - abstraction over file I/O operations
//!
//! This trait allows the use cases to stat, copy and delete files without
//! depending on concrete implementations (local disk, test doubles).

use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::value_objects::FileStamp;

/// Result type for file system operations
pub type FsResult<T> = Result<T, FsError>;

/// File system operation errors
#[derive(Debug, Error)]
pub enum FsError {
    /// File not found
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    /// Permission denied
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    /// I/O error
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Other error
    #[error("{0}")]
    Other(String),
}

impl FsError {
    /// Classify an I/O error for a given path
    pub fn from_io(path: &Path, err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::NotFound => FsError::NotFound(path.to_path_buf()),
            std::io::ErrorKind::PermissionDenied => FsError::PermissionDenied(path.to_path_buf()),
            _ => FsError::Io {
                path: path.to_path_buf(),
                source: err,
            },
        }
    }
}

/// Immediate child of a directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Abstract file system interface
///
/// Implementations:
/// - `LocalFs` - standard file I/O
/// - test doubles in the use case tests
pub trait FileSystem {
    /// Check if a file or directory exists
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory
    fn is_dir(&self, path: &Path) -> bool;

    /// Size and modification time of a file, `None` if it does not exist
    fn stamp(&self, path: &Path) -> FsResult<Option<FileStamp>>;

    /// Read file content as string
    fn read(&self, path: &Path) -> FsResult<String>;

    /// Copy `from` to `to`, replacing `to` atomically and carrying over the
    /// source modification time
    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()>;

    /// Immediate children of a directory (non-recursive)
    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>>;

    /// Remove a single file
    fn remove_file(&self, path: &Path) -> FsResult<()>;

    /// Remove a directory and everything below it
    fn remove_dir_all(&self, path: &Path) -> FsResult<()>;
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        (**self).is_dir(path)
    }

    fn stamp(&self, path: &Path) -> FsResult<Option<FileStamp>> {
        (**self).stamp(path)
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        (**self).read(path)
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        (**self).copy_file(from, to)
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        (**self).list_dir(path)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        (**self).remove_file(path)
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        (**self).remove_dir_all(path)
    }
}
