//! HDL libraries

use serde::Serialize;

use super::source::SourceFile;
use crate::error::{Result, library};

/// Named, ordered group of HDL sources compiled into one HDL library
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Library {
    name: String,
    files: Vec<SourceFile>,
}

impl Library {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Files in admission order
    pub fn files(&self) -> &[SourceFile] {
        &self.files
    }

    /// Admit a source file.
    ///
    /// The file must be VHDL, Verilog or SystemVerilog and must exist on disk
    /// at the time of the call.
    pub fn add(&mut self, file: SourceFile) -> Result<()> {
        if !file.kind().is_hdl() {
            return Err(library::unexpected_kind(
                &self.name,
                file.path(),
                file.kind(),
            ));
        }
        if !file.path().is_file() {
            return Err(library::file_missing(&self.name, file.path()));
        }

        self.files.push(file);
        Ok(())
    }
}
