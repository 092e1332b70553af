//! External tool invocation errors

use super::XilError;

/// Creates a spawn failure error
pub fn spawn_failed(tool: impl Into<String>, reason: impl Into<String>) -> XilError {
    XilError::ToolSpawnFailed {
        tool: tool.into(),
        reason: reason.into(),
    }
}

/// Creates an error for a process that exited without a status code
pub fn terminated(tool: impl Into<String>) -> XilError {
    XilError::ToolTerminated { tool: tool.into() }
}
