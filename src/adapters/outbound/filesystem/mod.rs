/// Filesystem and standard-stream adapters
mod file_store;
mod stdout_presenter;

pub use file_store::FileSystemStore;
pub use stdout_presenter::StdoutPresenter;
