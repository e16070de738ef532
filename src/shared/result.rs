/// Result alias used by every fallible file lifecycle operation.
///
/// Domain failures are raised as [`FileLifecycleError`](super::error::FileLifecycleError)
/// and carried as `anyhow::Error` so configuration errors can attach context.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
