use std::fmt;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Every step of the scenario completed
    Success = 0,
    /// A file operation, validation or configuration step failed
    ApplicationError = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ApplicationError => write!(f, "Application Error (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
        }
    }
}

/// Errors raised while creating, writing, reading or removing text files.
///
/// The I/O variants keep the original `io::Error` as their source so the
/// cause chain printed by `main` shows what the operating system reported.
#[derive(Debug, Error)]
pub enum FileLifecycleError {
    #[error("Failed to create file: {path}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    CreateFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write to file: {path}\n\n💡 Hint: Please verify that the disk is not full")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read file: {path}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to remove file: {path}\n\n💡 Hint: Please verify that the file still exists and the directory is writable")]
    RemoveFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid working directory: {path}\nReason: {reason}\n\n💡 Hint: Please specify an existing directory with --dir")]
    InvalidWorkingDirectory { path: PathBuf, reason: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    /// Scenario or configuration validation failure
    #[error("Validation error: {message}")]
    Validation { message: String },
}

impl FileLifecycleError {
    /// Kind of the underlying I/O error, if this error wraps one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            FileLifecycleError::CreateFailed { source, .. }
            | FileLifecycleError::WriteFailed { source, .. }
            | FileLifecycleError::ReadFailed { source, .. }
            | FileLifecycleError::RemoveFailed { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}
