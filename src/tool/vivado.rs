//! Vivado batch invocation

use std::path::Path;

use super::{Invocation, ProcessRunner, path_arg};
use crate::error::Result;

/// Runs Vivado in batch mode against a generated script
pub struct ToolInvoker<'r> {
    program: String,
    runner: &'r dyn ProcessRunner,
}

impl<'r> ToolInvoker<'r> {
    pub fn new(program: impl Into<String>, runner: &'r dyn ProcessRunner) -> Self {
        Self {
            program: program.into(),
            runner,
        }
    }

    /// Argument vector for one run
    pub fn invocation(&self, script: &Path, synth: bool, implement: bool) -> Invocation {
        Invocation::new(self.program.as_str())
            .args(["-nolog", "-nojournal", "-mode", "batch", "-source"])
            .arg(path_arg(script))
            .arg("-tclargs")
            .arg(flag(synth))
            .arg(flag(implement))
    }

    /// Run Vivado and return its exit code unmodified
    pub fn invoke(&self, script: &Path, synth: bool, implement: bool) -> Result<i32> {
        self.runner.run(&self.invocation(script, synth, implement))
    }
}

fn flag(enabled: bool) -> &'static str {
    if enabled { "1" } else { "0" }
}
