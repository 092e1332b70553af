//! Cross-platform path utilities for xilbuild
//!
//! Everything written into a generated script goes through
//! [`to_forward_slashes`], so scripts read the same on every host.

use std::path::{Path, PathBuf};

use normpath::PathExt;

/// Convert a path to forward slashes.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use xilbuild::path_utils::to_forward_slashes;
///
/// assert_eq!(to_forward_slashes(Path::new("C:\\work\\top.vhd")), "C:/work/top.vhd");
/// ```
pub fn to_forward_slashes(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_against(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Make a path absolute and lexically clean.
///
/// Existing paths are normalized through the filesystem; paths that do not
/// exist yet are joined onto the current directory and `simplified` so the
/// result never carries a Windows verbatim prefix.
pub fn absolutize(path: &Path) -> PathBuf {
    if let Ok(norm) = path.normalize() {
        return dunce::simplified(norm.as_path()).to_path_buf();
    }

    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(path))
            .unwrap_or_else(|_| path.to_path_buf())
    };

    dunce::simplified(&joined).to_path_buf()
}

/// Split a configured pattern into its literal directory and its file-name glob.
///
/// `"hdl/core/*.vhd"` becomes `("hdl/core", "*.vhd")`; a bare `"*.xdc"` has
/// an empty directory.
pub fn split_pattern(pattern: &str) -> (PathBuf, String) {
    let normalized = pattern.replace('\\', "/");
    match normalized.rsplit_once('/') {
        Some(("", name)) => (PathBuf::from("/"), name.to_string()),
        Some((dir, name)) => (PathBuf::from(dir), name.to_string()),
        None => (PathBuf::new(), normalized),
    }
}
