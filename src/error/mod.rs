//! Error types and handling for xilbuild
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`config`]: Project configuration errors
//! - [`library`]: Library admission errors
//! - [`tool`]: External EDA tool invocation errors
//! - [`pipeline`]: Embedded-Linux pipeline errors
//! - [`fs`]: File system errors

pub mod config;
pub mod fs;
pub mod library;
pub mod pipeline;
pub mod tool;


use miette::Diagnostic;
use thiserror::Error;

/// Coarse classification of an [`XilError`], for callers that report
/// diagnostics by category rather than by variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Config,
    Admission,
    ToolInvocation,
    PipelineStep,
    Vcs,
    Io,
}

/// Main error type for xilbuild operations
#[derive(Error, Diagnostic, Debug)]
pub enum XilError {
    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(
        code(xilbuild::config::not_found),
        help("Pass the project description with --config <file>")
    )]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}: {reason}")]
    #[diagnostic(code(xilbuild::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(xilbuild::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },

    #[error("No project {field} specified")]
    #[diagnostic(
        code(xilbuild::config::missing_field),
        help("Add `{field}` under the `project` section of the configuration")
    )]
    MissingProjectField { field: String },

    #[error("Invalid configuration: {message}")]
    #[diagnostic(code(xilbuild::config::invalid))]
    ConfigInvalid { message: String },

    #[error("Unknown synthesis option '{key}'")]
    #[diagnostic(
        code(xilbuild::config::unknown_synth_option),
        help("Supported synthesis options: {supported}")
    )]
    UnknownSynthOption { key: String, supported: String },

    #[error("Invalid file pattern '{pattern}': {reason}")]
    #[diagnostic(code(xilbuild::config::invalid_pattern))]
    InvalidPattern { pattern: String, reason: String },

    #[error("No linux configuration specified")]
    #[diagnostic(
        code(xilbuild::config::linux_not_configured),
        help("Add a `linux` section with at least `name` and `linux_dir`")
    )]
    LinuxNotConfigured,

    #[error("No petalinux name specified")]
    #[diagnostic(
        code(xilbuild::config::linux_name_missing),
        help("Add `name` under the `linux` section of the configuration")
    )]
    LinuxNameMissing,

    #[error("No petalinux project directory specified for '{name}'")]
    #[diagnostic(
        code(xilbuild::config::linux_dir_missing),
        help("Add `linux_dir` under the `linux` section of the configuration")
    )]
    LinuxDirMissing { name: String },

    #[error("Unknown shell: {shell}")]
    #[diagnostic(
        code(xilbuild::cli::unknown_shell),
        help("Supported shells: bash, elvish, fish, powershell, zsh")
    )]
    UnknownShell { shell: String },

    // Library admission errors
    #[error("Unexpected {kind} file in library '{library}': {path}")]
    #[diagnostic(
        code(xilbuild::library::unexpected_kind),
        help("Libraries accept only VHDL (.vhd, .vhdl), Verilog (.v) and SystemVerilog (.sv) sources")
    )]
    UnexpectedFileKind {
        library: String,
        path: String,
        kind: String,
    },

    #[error("Library '{library}': {path} is not a file")]
    #[diagnostic(code(xilbuild::library::not_a_file))]
    LibraryFileMissing { library: String, path: String },

    // External tool errors
    #[error("Failed to launch '{tool}': {reason}")]
    #[diagnostic(
        code(xilbuild::tool::spawn_failed),
        help("Check that the tool is installed and on PATH, or point to it explicitly")
    )]
    ToolSpawnFailed { tool: String, reason: String },

    #[error("'{tool}' was terminated without an exit code")]
    #[diagnostic(code(xilbuild::tool::terminated))]
    ToolTerminated { tool: String },

    // Pipeline errors
    #[error("Linux pipeline step '{step}' failed with exit code {code}")]
    #[diagnostic(code(xilbuild::pipeline::step_failed))]
    PipelineStepFailed { step: String, code: i32 },

    // Version control errors
    #[error("Git operation failed: {message}")]
    #[diagnostic(code(xilbuild::git::operation_failed))]
    GitOperationFailed { message: String },

    #[error("Not inside a git repository: {path}")]
    #[diagnostic(code(xilbuild::git::not_a_repository))]
    NotInGitRepository { path: String },

    // File system errors
    #[error("Failed to write file: {path}")]
    #[diagnostic(code(xilbuild::fs::write_failed))]
    FileWriteFailed { path: String, reason: String },

    #[error("Failed to create directory: {path}")]
    #[diagnostic(code(xilbuild::fs::create_dir_failed))]
    CreateDirFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(xilbuild::fs::io_error))]
    IoError { message: String },
}

impl XilError {
    /// Category this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ConfigNotFound { .. }
            | Self::ConfigReadFailed { .. }
            | Self::ConfigParseFailed { .. }
            | Self::MissingProjectField { .. }
            | Self::ConfigInvalid { .. }
            | Self::UnknownSynthOption { .. }
            | Self::InvalidPattern { .. }
            | Self::LinuxNotConfigured
            | Self::LinuxNameMissing
            | Self::LinuxDirMissing { .. }
            | Self::UnknownShell { .. } => ErrorKind::Config,
            Self::UnexpectedFileKind { .. } | Self::LibraryFileMissing { .. } => {
                ErrorKind::Admission
            }
            Self::ToolSpawnFailed { .. } | Self::ToolTerminated { .. } => {
                ErrorKind::ToolInvocation
            }
            Self::PipelineStepFailed { .. } => ErrorKind::PipelineStep,
            Self::GitOperationFailed { .. } | Self::NotInGitRepository { .. } => ErrorKind::Vcs,
            Self::FileWriteFailed { .. } | Self::CreateDirFailed { .. } | Self::IoError { .. } => {
                ErrorKind::Io
            }
        }
    }
}

impl From<std::io::Error> for XilError {
    fn from(err: std::io::Error) -> Self {
        XilError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<serde_yaml::Error> for XilError {
    fn from(err: serde_yaml::Error) -> Self {
        XilError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for XilError {
    fn from(err: serde_json::Error) -> Self {
        XilError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<git2::Error> for XilError {
    fn from(err: git2::Error) -> Self {
        XilError::GitOperationFailed {
            message: err.message().to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, XilError>;
