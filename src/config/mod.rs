//! Project description handling for xilbuild
//!
//! This module contains the raw shape of the project YAML document:
//! - `project` - identity, generics, tool options, external IP repositories
//! - `constraints`, `ip_files`, `bd_files` - source patterns
//! - `libraries` - named HDL pattern groups
//! - `linux` - optional PetaLinux settings
//!
//! Nothing here touches the filesystem beyond reading the document;
//! validation and discovery happen in [`crate::project`].

pub mod options;
pub mod serialization;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Result, config};
use crate::path_utils::to_forward_slashes;

// Re-export commonly used types
pub use options::{ImplSetting, ImplStep, ImplStepOptions, OptionValue, SynthOption};
pub use serialization::OrderedMap;

/// The `project` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectSection {
    pub name: Option<String>,
    pub part: Option<String>,
    pub top: Option<String>,
    pub generics: OrderedMap<OptionValue>,
    pub syn_args: OrderedMap<OptionValue>,
    pub impl_args: OrderedMap<OrderedMap<OptionValue>>,
    pub external_libs: Option<Vec<String>>,
}

/// The `linux` section
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LinuxSection {
    pub name: Option<String>,
    pub kernel: Option<String>,
    pub uboot: Option<String>,
    pub rootfs: Option<String>,
    pub dts: Option<String>,
    pub linux_dir: Option<String>,
}

/// Parsed project document, before validation
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectDocument {
    pub project: ProjectSection,
    pub bd_files: Option<Vec<String>>,
    pub ip_files: Option<Vec<String>>,
    pub constraints: Option<Vec<String>>,
    pub libraries: OrderedMap<Option<Vec<String>>>,
    pub linux: Option<LinuxSection>,
}

impl ProjectDocument {
    /// Parse a project document from YAML
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let document: Self = serde_yaml::from_str(yaml)?;
        Ok(document)
    }

    /// Read and parse a project document from disk
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(config::not_found(to_forward_slashes(path)));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| config::read_failed(to_forward_slashes(path), e.to_string()))?;

        serde_yaml::from_str(&content)
            .map_err(|e| config::parse_failed(to_forward_slashes(path), e.to_string()))
    }
}
