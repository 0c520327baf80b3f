//! File System Implementations
//!
//! Concrete implementations of the FileSystem port, plus home directory lookup.

mod home;
mod local;

pub use home::{modbuild_home_dir, MODBUILD_TEST_HOME_VAR};
pub use local::LocalFs;
