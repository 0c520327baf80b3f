//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod build_args;
mod file_stamp;
mod junk_rules;
mod module_dir;
mod outcome;

pub use build_args::{BuildArgs, MODULE_PATH_KEY};
pub use file_stamp::FileStamp;
pub use junk_rules::{
    JunkKind, JunkRules, DEFAULT_JUNK_DIRECTORIES, DEFAULT_JUNK_FILE_PREFIXES,
    DEFAULT_JUNK_FILE_SUFFIXES,
};
pub use module_dir::{ModuleDir, MODULE_MANIFEST};
pub use outcome::{SkipReason, UnresolvedReason};
