//! Library admission errors

use std::path::Path;

use super::XilError;
use crate::path_utils::to_forward_slashes;
use crate::project::FileKind;

/// Creates an error for a non-HDL file offered to a library
pub fn unexpected_kind(library: &str, path: &Path, kind: FileKind) -> XilError {
    XilError::UnexpectedFileKind {
        library: library.to_string(),
        path: to_forward_slashes(path),
        kind: kind.to_string(),
    }
}

/// Creates an error for a library file that does not exist
pub fn file_missing(library: &str, path: &Path) -> XilError {
    XilError::LibraryFileMissing {
        library: library.to_string(),
        path: to_forward_slashes(path),
    }
}
