//! File system errors

use std::path::Path;

use super::XilError;
use crate::path_utils::to_forward_slashes;

/// Creates a file write failed error
pub fn write_failed(path: &Path, reason: impl Into<String>) -> XilError {
    XilError::FileWriteFailed {
        path: to_forward_slashes(path),
        reason: reason.into(),
    }
}

/// Creates a directory creation failed error
pub fn create_dir_failed(path: &Path, reason: impl Into<String>) -> XilError {
    XilError::CreateDirFailed {
        path: to_forward_slashes(path),
        reason: reason.into(),
    }
}

/// Creates an IO error
pub fn io_error(message: impl Into<String>) -> XilError {
    XilError::IoError {
        message: message.into(),
    }
}
