use crate::ports::outbound::TextFileStore;
use crate::shared::error::FileLifecycleError;
use crate::shared::security::reject_symlink;
use crate::shared::Result;
use std::fs::{self, File};
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// FileSystemStore adapter backed by `std::fs`
///
/// Relative paths are resolved against `root`; absolute paths are used as-is.
/// Every `File` handle lives only inside the method that opened it and is
/// closed when it goes out of scope, including on early `?` returns.
pub struct FileSystemStore {
    root: PathBuf,
}

impl FileSystemStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.root.join(path)
    }
}

impl Default for FileSystemStore {
    fn default() -> Self {
        Self::new(PathBuf::from("."))
    }
}

impl TextFileStore for FileSystemStore {
    fn create_and_write(&self, path: &Path, fragments: &[String]) -> Result<()> {
        let full_path = self.resolve(path);
        reject_symlink(&full_path, "write")?;

        let mut file = File::create(&full_path).map_err(|e| FileLifecycleError::CreateFailed {
            path: full_path.clone(),
            source: e,
        })?;

        // One unbuffered write per fragment; the handle closes when `file` drops
        for fragment in fragments {
            file.write_all(fragment.as_bytes())
                .map_err(|e| FileLifecycleError::WriteFailed {
                    path: full_path.clone(),
                    source: e,
                })?;
        }

        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        let full_path = self.resolve(path);
        reject_symlink(&full_path, "read")?;

        let read_failed = |e: io::Error| FileLifecycleError::ReadFailed {
            path: full_path.clone(),
            source: e,
        };

        let mut file = File::open(&full_path).map_err(read_failed)?;
        let mut content = String::new();
        file.read_to_string(&mut content).map_err(read_failed)?;
        Ok(content)
    }

    fn remove(&self, path: &Path) -> Result<()> {
        let full_path = self.resolve(path);
        fs::remove_file(&full_path).map_err(|e| FileLifecycleError::RemoveFailed {
            path: full_path,
            source: e,
        })?;
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        // symlink_metadata so a dangling link still counts as present
        fs::symlink_metadata(self.resolve(path)).is_ok()
    }
}
