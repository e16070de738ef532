pub mod scenario;
pub mod step;
pub mod text_file;

pub use scenario::Scenario;
pub use step::Step;
pub use text_file::TextFile;

pub(crate) use text_file::normalized_path;
