//! Command helper utilities

use std::path::{Path, PathBuf};

use crate::error::{Result, XilError};
use crate::project::ProjectModel;
use crate::vcs::{GitVcsProvider, VcsInfo, vcs_info_or_unversioned};

/// Resolve output directory from optional argument
///
/// If an output directory is provided, use it. Otherwise, fall back to the
/// current directory and say so.
pub fn resolve_output_dir(output: Option<PathBuf>) -> Result<PathBuf> {
    match output {
        Some(path) => Ok(path),
        None => {
            let cwd = std::env::current_dir().map_err(|e| XilError::IoError {
                message: format!("Failed to get current directory: {}", e),
            })?;
            log::warn!(
                "No output directory given, using current directory {}",
                cwd.display()
            );
            Ok(cwd)
        }
    }
}

/// Load and validate the project described by `config`
pub fn load_project(config: &Path, output: Option<PathBuf>) -> Result<ProjectModel> {
    let output_dir = resolve_output_dir(output)?;
    log::debug!(
        "loading {} (output {})",
        config.display(),
        output_dir.display()
    );
    ProjectModel::load(config, &output_dir)
}

/// Version-control metadata of the repository holding the project
pub fn project_vcs_info(model: &ProjectModel) -> VcsInfo {
    vcs_info_or_unversioned(&GitVcsProvider::new(model.root.as_path()), &model.root)
}
