//! Local File System Implementation
//!
//! Implements the FileSystem port for local disk operations.

use std::fs::{self, File};
use std::io;
use std::path::Path;

use crate::domain::ports::file_system::{DirEntry, FileSystem, FsError, FsResult};
use crate::domain::value_objects::FileStamp;

/// Local file system implementation
///
/// Copies go through a temp file in the destination directory and are
/// renamed into place, so a destination is either the old or the new file.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFs;

impl LocalFs {
    /// Create a new LocalFs instance
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for LocalFs {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn stamp(&self, path: &Path) -> FsResult<Option<FileStamp>> {
        match fs::metadata(path) {
            Ok(meta) => Ok(Some(FileStamp::from(&meta))),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(FsError::from_io(path, e)),
        }
    }

    fn read(&self, path: &Path) -> FsResult<String> {
        fs::read_to_string(path).map_err(|e| FsError::from_io(path, e))
    }

    fn copy_file(&self, from: &Path, to: &Path) -> FsResult<()> {
        let dir = to
            .parent()
            .ok_or_else(|| FsError::Other(format!("no parent directory for {}", to.display())))?;

        let source_meta = fs::metadata(from).map_err(|e| FsError::from_io(from, e))?;
        let mut input = File::open(from).map_err(|e| FsError::from_io(from, e))?;

        let mut tmp = tempfile::Builder::new()
            .prefix(".modbuild-")
            .suffix(".tmp")
            .tempfile_in(dir)
            .map_err(|e| FsError::from_io(dir, e))?;

        io::copy(&mut input, tmp.as_file_mut()).map_err(|e| FsError::from_io(to, e))?;

        // Freshness is judged on length + mtime, so the mtime must follow the source
        if let Ok(modified) = source_meta.modified() {
            tmp.as_file()
                .set_modified(modified)
                .map_err(|e| FsError::from_io(to, e))?;
        }
        fs::set_permissions(tmp.path(), source_meta.permissions())
            .map_err(|e| FsError::from_io(to, e))?;

        tmp.persist(to)
            .map_err(|e| FsError::from_io(to, e.error))?;
        Ok(())
    }

    fn list_dir(&self, path: &Path) -> FsResult<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry in fs::read_dir(path).map_err(|e| FsError::from_io(path, e))? {
            let entry = entry.map_err(|e| FsError::from_io(path, e))?;
            let is_dir = entry
                .file_type()
                .map(|t| t.is_dir())
                .map_err(|e| FsError::from_io(&entry.path(), e))?;
            entries.push(DirEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
                is_dir,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn remove_file(&self, path: &Path) -> FsResult<()> {
        fs::remove_file(path).map_err(|e| FsError::from_io(path, e))
    }

    fn remove_dir_all(&self, path: &Path) -> FsResult<()> {
        fs::remove_dir_all(path).map_err(|e| FsError::from_io(path, e))
    }
}
