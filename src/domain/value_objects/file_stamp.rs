//! File Stamp Value Object
//!
//! Size and modification time of a file, used for coarse change detection.

use std::time::SystemTime;

/// Length and last-modified time of a file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStamp {
    /// Size in bytes
    pub len: u64,
    /// Last modification time, if the platform reports one
    pub modified: Option<SystemTime>,
}

impl FileStamp {
    pub fn new(len: u64, modified: Option<SystemTime>) -> Self {
        Self { len, modified }
    }

    /// Whether `other` describes the same content for deployment purposes
    pub fn matches(&self, other: &FileStamp) -> bool {
        self.len == other.len && self.modified == other.modified
    }
}

impl From<&std::fs::Metadata> for FileStamp {
    fn from(meta: &std::fs::Metadata) -> Self {
        Self {
            len: meta.len(),
            modified: meta.modified().ok(),
        }
    }
}
