use file_roundtrip::prelude::*;
use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// In-memory TextFileStore; records every write call it receives.
#[derive(Default, Clone)]
pub struct MockTextFileStore {
    pub files: Arc<Mutex<HashMap<PathBuf, String>>>,
    pub write_calls: Arc<Mutex<Vec<(PathBuf, String)>>>,
}

impl MockTextFileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, path: &str, content: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(PathBuf::from(path), content.to_string());
        self
    }

    pub fn file_names(&self) -> Vec<PathBuf> {
        let mut names: Vec<PathBuf> = self.files.lock().unwrap().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn get_write_calls(&self) -> Vec<(PathBuf, String)> {
        self.write_calls.lock().unwrap().clone()
    }
}

impl TextFileStore for MockTextFileStore {
    fn create_and_write(&self, path: &Path, fragments: &[String]) -> Result<()> {
        let mut calls = self.write_calls.lock().unwrap();
        for fragment in fragments {
            calls.push((path.to_path_buf(), fragment.clone()));
        }
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), fragments.concat());
        Ok(())
    }

    fn read_to_string(&self, path: &Path) -> Result<String> {
        self.files.lock().unwrap().get(path).cloned().ok_or_else(|| {
            FileLifecycleError::ReadFailed {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }
            .into()
        })
    }

    fn remove(&self, path: &Path) -> Result<()> {
        match self.files.lock().unwrap().remove(path) {
            Some(_) => Ok(()),
            None => Err(FileLifecycleError::RemoveFailed {
                path: path.to_path_buf(),
                source: io::Error::from(io::ErrorKind::NotFound),
            }
            .into()),
        }
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.lock().unwrap().contains_key(path)
    }
}
