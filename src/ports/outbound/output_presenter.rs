use crate::shared::Result;

/// OutputPresenter port for the recovered file contents
///
/// The file lifecycle prints each read-back file through this port, so the
/// destination (stdout in production, a buffer in tests) stays swappable.
pub trait OutputPresenter {
    /// Presents the content of one file as a single line
    ///
    /// # Errors
    /// Returns an error if writing to the output destination fails
    fn present(&self, content: &str) -> Result<()>;
}
