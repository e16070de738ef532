use crate::shared::error::FileLifecycleError;
use crate::shared::Result;
use std::path::{Component, Path, PathBuf};

/// A text file as the scenario intends to write it: a path plus the ordered
/// fragments that make up its content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFile {
    path: PathBuf,
    fragments: Vec<String>,
}

impl TextFile {
    pub fn new(path: impl Into<PathBuf>, fragments: Vec<String>) -> Result<Self> {
        let path = path.into();
        validate_path(&path)?;
        Ok(Self { path, fragments })
    }

    /// Builds a file from literal parts known to be valid at compile time.
    pub(crate) fn literal(path: &str, fragments: &[&str]) -> Self {
        Self {
            path: PathBuf::from(path),
            fragments: fragments.iter().map(|f| f.to_string()).collect(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// Content a read-back must observe: the fragments joined with no separator.
    pub fn content(&self) -> String {
        self.fragments.concat()
    }
}

/// Rejects empty or whitespace-only paths.
pub(crate) fn validate_path(path: &Path) -> Result<()> {
    if path.as_os_str().to_string_lossy().trim().is_empty() {
        return Err(FileLifecycleError::Validation {
            message: "File path cannot be empty".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Drops `.` components so `a.txt` and `./a.txt` compare equal.
pub(crate) fn normalized_path(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments(parts: &[&str]) -> Vec<String> {
        parts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_content_concatenates_without_separator() {
        let file = TextFile::new(
            "testfile.txt",
            fragments(&["Hello World. ", "This is a test file."]),
        )
        .unwrap();
        assert_eq!(file.content(), "Hello World. This is a test file.");
        assert_eq!(file.path(), Path::new("testfile.txt"));
        assert_eq!(file.fragments().len(), 2);
    }

    #[test]
    fn test_content_keeps_fragment_order() {
        let file = TextFile::new("order.txt", fragments(&["b", "a", "c"])).unwrap();
        assert_eq!(file.content(), "bac");
    }

    #[test]
    fn test_no_fragments_means_empty_content() {
        let file = TextFile::new("empty.txt", vec![]).unwrap();
        assert_eq!(file.content(), "");
    }

    #[test]
    fn test_empty_path_rejected() {
        let result = TextFile::new("", fragments(&["x"]));
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("File path cannot be empty"));
    }

    #[test]
    fn test_whitespace_path_rejected() {
        assert!(TextFile::new("   ", fragments(&["x"])).is_err());
    }

    #[test]
    fn test_normalized_path_drops_current_dir() {
        assert_eq!(normalized_path(Path::new("./a.txt")), PathBuf::from("a.txt"));
        assert_eq!(normalized_path(Path::new("dir/./a.txt")), PathBuf::from("dir/a.txt"));
        assert_eq!(normalized_path(Path::new("a.txt")), PathBuf::from("a.txt"));
    }
}
