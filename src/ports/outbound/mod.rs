/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to reach the file system and the console.
pub mod output_presenter;
pub mod progress_reporter;
pub mod text_file_store;

pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use text_file_store::TextFileStore;
