use crate::file_lifecycle::domain::TextFile;
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// FileLifecyclePort - the three file operations a scenario is built from
///
/// Each call acquires at most one file handle and releases it before returning,
/// on success and on failure alike.
pub trait FileLifecyclePort {
    /// Opens the file for writing (truncating or creating it), writes every
    /// fragment in order with no separator, and closes it.
    ///
    /// # Errors
    /// Returns an error if the file cannot be created or a write fails
    /// (permission denied, disk full, symlink target).
    fn create_and_write(&self, file: &TextFile) -> Result<()>;

    /// Reads the whole file as text, presents it, and returns what was presented.
    ///
    /// # Errors
    /// Returns an error if the file does not exist or cannot be read.
    fn read_and_print(&self, path: &Path) -> Result<String>;

    /// Removes every path in order, stopping at the first failure.
    ///
    /// # Errors
    /// Returns an error if a path does not exist at delete time or cannot be removed.
    fn cleanup(&self, paths: &[PathBuf]) -> Result<()>;
}
