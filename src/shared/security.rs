use crate::shared::error::FileLifecycleError;
use crate::shared::Result;
use std::fs;
use std::io;
use std::path::Path;

/// Rejects `path` if it is a symbolic link.
///
/// A path whose metadata cannot be read passes: it cannot be inspected as a
/// link, and the caller's own open reports the underlying I/O error (missing
/// file, parent that is not a directory, denied search permission).
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Arguments
/// * `path` - The path about to be opened
/// * `operation` - Operation name for the error message (e.g. "write", "read")
pub fn reject_symlink(path: &Path, operation: &str) -> Result<()> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(FileLifecycleError::SecurityError {
            path: path.to_path_buf(),
            reason: format!(
                "Path is a symbolic link. For security reasons, {} operations on symbolic links are not allowed.",
                operation
            ),
            hint: "Use a regular file instead".to_string(),
        }
        .into());
    }

    Ok(())
}

/// Validates that the working directory exists, is a real directory and is not a symlink.
pub fn validate_working_directory(path: &Path) -> Result<()> {
    let invalid = |reason: String| FileLifecycleError::InvalidWorkingDirectory {
        path: path.to_path_buf(),
        reason,
    };

    let metadata = fs::symlink_metadata(path).map_err(|e| {
        if e.kind() == io::ErrorKind::NotFound {
            invalid("Directory does not exist".to_string())
        } else {
            invalid(format!("Failed to read path metadata: {}", e))
        }
    })?;

    if metadata.is_symlink() {
        return Err(invalid(
            "Security: Working directory is a symbolic link. For security reasons, symbolic links are not allowed.".to_string(),
        )
        .into());
    }

    if !metadata.is_dir() {
        return Err(invalid("Not a directory".to_string()).into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_reject_symlink_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "test").unwrap();

        assert!(reject_symlink(&file_path, "read").is_ok());
    }

    #[test]
    fn test_reject_symlink_missing_path_passes() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("not-yet-created.txt");

        assert!(reject_symlink(&file_path, "write").is_ok());
    }

    #[test]
    fn test_reject_symlink_unreadable_metadata_passes() {
        let temp_dir = TempDir::new().unwrap();
        let plain = temp_dir.path().join("plain");
        fs::write(&plain, "regular file").unwrap();

        assert!(reject_symlink(&plain.join("child.txt"), "read").is_ok());
    }

    #[cfg(unix)]
    #[test]
    fn test_reject_symlink_link_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.txt");
        let link = temp_dir.path().join("link.txt");
        fs::write(&target, "target").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = reject_symlink(&link, "write");
        assert!(result.is_err());
        let err_string = result.unwrap_err().to_string();
        assert!(err_string.contains("Security violation"));
        assert!(err_string.contains("write operations on symbolic links"));
    }

    #[test]
    fn test_validate_working_directory_valid() {
        let temp_dir = TempDir::new().unwrap();
        assert!(validate_working_directory(temp_dir.path()).is_ok());
    }

    #[test]
    fn test_validate_working_directory_nonexistent() {
        let path = PathBuf::from("/nonexistent/path/that/does/not/exist");
        let result = validate_working_directory(&path);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Directory does not exist"));
    }

    #[test]
    fn test_validate_working_directory_file_not_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test_file.txt");
        fs::write(&file_path, "test content").unwrap();

        let result = validate_working_directory(&file_path);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Not a directory"));
    }
}
