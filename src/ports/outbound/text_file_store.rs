use crate::shared::Result;
use std::path::Path;

/// TextFileStore port - where text files live
///
/// All methods take paths as the scenario names them; resolving them
/// (e.g. against a working directory) is the adapter's job.
pub trait TextFileStore {
    /// Truncates or creates `path` and writes `fragments` in order, one write
    /// call per fragment, closing the handle before returning.
    fn create_and_write(&self, path: &Path, fragments: &[String]) -> Result<()>;

    /// Reads the entire content of `path` as a string.
    fn read_to_string(&self, path: &Path) -> Result<String>;

    /// Deletes `path`. Fails with a not-found error if it does not exist.
    fn remove(&self, path: &Path) -> Result<()>;

    /// Whether `path` currently exists.
    fn exists(&self, path: &Path) -> bool;
}
