//! Configuration errors

use super::XilError;

/// Creates a config not found error
pub fn not_found(path: impl Into<String>) -> XilError {
    XilError::ConfigNotFound { path: path.into() }
}

/// Creates a config read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> XilError {
    XilError::ConfigReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a config parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> XilError {
    XilError::ConfigParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing mandatory `project.<field>` error
pub fn missing_field(field: impl Into<String>) -> XilError {
    XilError::MissingProjectField {
        field: field.into(),
    }
}

/// Creates an invalid config error
pub fn invalid(message: impl Into<String>) -> XilError {
    XilError::ConfigInvalid {
        message: message.into(),
    }
}

/// Creates an invalid glob pattern error
pub fn invalid_pattern(pattern: impl Into<String>, reason: impl Into<String>) -> XilError {
    XilError::InvalidPattern {
        pattern: pattern.into(),
        reason: reason.into(),
    }
}
