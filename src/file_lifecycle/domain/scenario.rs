use super::step::Step;
use super::text_file::{normalized_path, validate_path, TextFile};
use crate::shared::error::FileLifecycleError;
use crate::shared::Result;
use std::collections::HashSet;
use std::path::PathBuf;

/// Validated, ordered list of steps executed one after another.
///
/// Validation guarantees:
/// - at least one step
/// - no blank paths
/// - every cleanup step names at least one path and no path twice
/// - a file is never opened for writing again while an earlier write of it
///   has not been cleaned up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    steps: Vec<Step>,
}

impl Scenario {
    pub fn new(steps: Vec<Step>) -> Result<Self> {
        validate_steps(&steps)?;
        Ok(Self { steps })
    }

    /// The three-file demonstration: write two files, read the first, write a
    /// third, read the third then the second, and remove all three.
    pub fn demo() -> Self {
        let first = TextFile::literal("testfile.txt", &["Hello World. ", "This is a test file."]);
        let second = TextFile::literal(
            "testfile2.txt",
            &["Hello World again. ", "This is another test file."],
        );
        let third = TextFile::literal(
            "testfile3.txt",
            &["Hello World for the third time. ", "I AM THE LAST TEST FILE."],
        );

        let paths: Vec<PathBuf> = [&first, &second, &third]
            .iter()
            .map(|f| f.path().to_path_buf())
            .collect();

        Self {
            steps: vec![
                Step::CreateAndWrite(first),
                Step::CreateAndWrite(second),
                Step::ReadAndPrint(paths[0].clone()),
                Step::CreateAndWrite(third),
                Step::ReadAndPrint(paths[2].clone()),
                Step::ReadAndPrint(paths[1].clone()),
                Step::Cleanup(paths),
            ],
        }
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

fn validate_steps(steps: &[Step]) -> Result<()> {
    if steps.is_empty() {
        return invalid("Scenario must contain at least one step".to_string());
    }

    // Keyed by normalized path so `a.txt` and `./a.txt` are the same file
    let mut live: HashSet<PathBuf> = HashSet::new();

    for (i, step) in steps.iter().enumerate() {
        match step {
            Step::CreateAndWrite(file) => {
                validate_path(file.path())?;
                if !live.insert(normalized_path(file.path())) {
                    return invalid(format!(
                        "steps[{}]: {} is written again before being cleaned up",
                        i,
                        file.path().display()
                    ));
                }
            }
            Step::ReadAndPrint(path) => validate_path(path)?,
            Step::Cleanup(paths) => {
                if paths.is_empty() {
                    return invalid(format!("steps[{}]: cleanup must name at least one path", i));
                }
                let mut seen = HashSet::new();
                for path in paths {
                    validate_path(path)?;
                    let key = normalized_path(path);
                    if !seen.insert(key.clone()) {
                        return invalid(format!(
                            "steps[{}]: {} is listed more than once in cleanup",
                            i,
                            path.display()
                        ));
                    }
                    live.remove(&key);
                }
            }
        }
    }

    Ok(())
}

fn invalid(message: String) -> Result<()> {
    Err(FileLifecycleError::Validation { message }.into())
}
