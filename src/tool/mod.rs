//! External tool execution
//!
//! Everything xilbuild runs goes through a [`ProcessRunner`]: a program, its
//! argument vector and an optional working directory in, an exit code out.
//! Output is not captured; child processes inherit the terminal.

pub mod petalinux;
pub mod vivado;

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{Result, tool};

pub use petalinux::{LinuxPipeline, PipelineStep};
pub use vivado::ToolInvoker;

/// A fully specified process launch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl Invocation {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Program followed by its arguments
    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program.clone())
            .chain(self.args.iter().cloned())
            .collect()
    }
}

/// Runs an [`Invocation`] to completion
pub trait ProcessRunner {
    /// Block until the process exits and return its exit code
    fn run(&self, invocation: &Invocation) -> Result<i32>;
}

/// Spawns real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<i32> {
        log::debug!("running {}", invocation.argv().join(" "));

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args);
        if let Some(dir) = &invocation.cwd {
            command.current_dir(dir);
        }

        let status = command
            .status()
            .map_err(|e| tool::spawn_failed(invocation.program.as_str(), e.to_string()))?;

        status
            .code()
            .ok_or_else(|| tool::terminated(invocation.program.as_str()))
    }
}

/// Executables used for each external tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub vivado: String,
    pub petalinux_config: String,
    pub petalinux_build: String,
    pub petalinux_package: String,
}

impl Default for ToolPaths {
    fn default() -> Self {
        Self {
            vivado: "vivado".to_string(),
            petalinux_config: "petalinux-config".to_string(),
            petalinux_build: "petalinux-build".to_string(),
            petalinux_package: "petalinux-package".to_string(),
        }
    }
}

/// Render a path argument for an external tool
pub(crate) fn path_arg(path: &Path) -> String {
    crate::path_utils::to_forward_slashes(path)
}
