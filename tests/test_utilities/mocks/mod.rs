/// Mock implementations for testing
mod mock_output_presenter;
mod mock_progress_reporter;
mod mock_text_file_store;

pub use mock_output_presenter::MockOutputPresenter;
pub use mock_progress_reporter::MockProgressReporter;
pub use mock_text_file_store::MockTextFileStore;
