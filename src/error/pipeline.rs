//! Embedded-Linux pipeline errors

use super::XilError;

/// Creates a pipeline step failure error
pub fn step_failed(step: impl Into<String>, code: i32) -> XilError {
    XilError::PipelineStepFailed {
        step: step.into(),
        code,
    }
}

/// Creates a linux-dir missing error
pub fn linux_dir_missing(name: impl Into<String>) -> XilError {
    XilError::LinuxDirMissing { name: name.into() }
}
