//! file-roundtrip - create, write, read back and delete text files
//!
//! Runs a scenario of file lifecycle steps: each file is opened for writing,
//! filled fragment by fragment and closed; later it is reopened, read in full
//! and printed; finally it is removed. The built-in scenario writes three files,
//! prints them in the order `testfile.txt`, `testfile3.txt`, `testfile2.txt`
//! and deletes all three.
//!
//! # Architecture
//!
//! - **Domain Layer** (`file_lifecycle`): text files, steps and validated scenarios
//! - **Application Layer** (`application`): the round-trip use case and its DTOs
//! - **Ports** (`ports`): interfaces for file storage, output and progress
//! - **Adapters** (`adapters`): `std::fs`, stdout and stderr implementations
//! - **Shared** (`shared`): error types and filesystem safety checks
//!
//! # Example
//!
//! ```no_run
//! use file_roundtrip::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! let use_case = RoundTripUseCase::new(
//!     FileSystemStore::new(PathBuf::from(".")),
//!     StdoutPresenter::new(),
//!     StderrProgressReporter::new(),
//! );
//!
//! let response = use_case.execute(RoundTripRequest::default())?;
//! assert_eq!(response.printed.len(), 3);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod config;
pub mod file_lifecycle;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{FileSystemStore, StdoutPresenter};
    pub use crate::application::dto::{PrintedFile, RoundTripRequest, RoundTripResponse};
    pub use crate::application::use_cases::RoundTripUseCase;
    pub use crate::file_lifecycle::domain::{Scenario, Step, TextFile};
    pub use crate::ports::inbound::FileLifecyclePort;
    pub use crate::ports::outbound::{OutputPresenter, ProgressReporter, TextFileStore};
    pub use crate::shared::error::{ExitCode, FileLifecycleError};
    pub use crate::shared::Result;
}
