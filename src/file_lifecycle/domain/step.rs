use super::text_file::TextFile;
use std::fmt;
use std::path::PathBuf;

/// One operation of a scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Open for writing (truncate or create), write every fragment, close
    CreateAndWrite(TextFile),
    /// Open for reading, read everything, print it, close
    ReadAndPrint(PathBuf),
    /// Delete every listed path
    Cleanup(Vec<PathBuf>),
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::CreateAndWrite(file) => write!(f, "write {}", file.path().display()),
            Step::ReadAndPrint(path) => write!(f, "read {}", path.display()),
            Step::Cleanup(paths) => {
                let names: Vec<String> = paths.iter().map(|p| p.display().to_string()).collect();
                write!(f, "remove {}", names.join(", "))
            }
        }
    }
}
