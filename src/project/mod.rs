//! Project model
//!
//! A [`ProjectModel`] is built once from a project document and an output
//! directory. Construction validates the mandatory identity fields before
//! touching the filesystem, then discovers sources and admits library files.
//! The model is read-only afterwards.

pub mod library;
pub mod source;

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::config::options::{parse_impl_options, parse_synth_options};
use crate::config::{
    ImplStepOptions, LinuxSection, OptionValue, OrderedMap, ProjectDocument, SynthOption,
};
use crate::error::{Result, config, fs};
use crate::path_utils::{absolutize, resolve_against};

pub use library::Library;
pub use source::{FileKind, HdlKind, SourceFile, classify, discover};

/// Validated hardware project
#[derive(Debug, Clone, Serialize)]
pub struct ProjectModel {
    pub name: String,
    pub part: String,
    pub top: String,
    /// Directory of the project document; patterns resolve against it
    pub root: PathBuf,
    pub output_dir: PathBuf,
    pub generics: OrderedMap<OptionValue>,
    pub synth_options: Vec<SynthOption>,
    pub impl_options: Vec<ImplStepOptions>,
    pub external_lib_paths: Vec<PathBuf>,
    pub constraint_files: Vec<SourceFile>,
    pub ip_files: Vec<SourceFile>,
    pub block_design_files: Vec<SourceFile>,
    pub libraries: Vec<Library>,
    pub linux: Option<LinuxSection>,
}

impl ProjectModel {
    /// Load the project document at `config_path` and build the model
    pub fn load(config_path: &Path, output_dir: &Path) -> Result<Self> {
        let document = ProjectDocument::load(config_path)?;
        let root = config_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        Self::from_document(document, &absolutize(&root), output_dir)
    }

    /// Build the model from an already parsed document.
    ///
    /// Fails on the first missing of `name`, `part`, `top`, before any file
    /// discovery. Creates `output_dir` (with parents) if needed.
    pub fn from_document(document: ProjectDocument, root: &Path, output_dir: &Path) -> Result<Self> {
        let ProjectDocument {
            project,
            bd_files,
            ip_files,
            constraints,
            libraries,
            linux,
        } = document;

        let name = project.name.ok_or_else(|| config::missing_field("name"))?;
        let part = project.part.ok_or_else(|| config::missing_field("part"))?;
        let top = project.top.ok_or_else(|| config::missing_field("top"))?;

        if project.generics.is_empty() {
            log::debug!("no project generics");
        }
        if let Some(generic) = project.generics.duplicate_key() {
            return Err(config::invalid(format!(
                "generic '{generic}' is set more than once"
            )));
        }
        if project.syn_args.is_empty() {
            log::debug!("no synthesis args");
        }
        let synth_options = parse_synth_options(project.syn_args)?;
        if project.impl_args.is_empty() {
            log::debug!("no implementation args");
        }
        let impl_options = parse_impl_options(project.impl_args)?;

        let external_lib_paths = project
            .external_libs
            .unwrap_or_default()
            .iter()
            .map(|p| resolve_against(root, Path::new(p)))
            .collect();

        std::fs::create_dir_all(output_dir)
            .map_err(|e| fs::create_dir_failed(output_dir, e.to_string()))?;
        let output_dir = absolutize(output_dir);

        let block_design_files = discover(
            &bd_files.unwrap_or_default(),
            root,
            Some(FileKind::BlockDesign),
        )?;
        let ip_files = discover(&ip_files.unwrap_or_default(), root, Some(FileKind::IpCore))?;
        let constraint_files = discover(
            &constraints.unwrap_or_default(),
            root,
            Some(FileKind::Constraint),
        )?;

        let mut libs = Vec::with_capacity(libraries.len());
        for (lib_name, patterns) in libraries {
            let mut library = Library::new(lib_name);
            for file in discover(&patterns.unwrap_or_default(), root, None)? {
                library.add(file)?;
            }
            libs.push(library);
        }

        Ok(Self {
            name,
            part,
            top,
            root: root.to_path_buf(),
            output_dir,
            generics: project.generics,
            synth_options,
            impl_options,
            external_lib_paths,
            constraint_files,
            ip_files,
            block_design_files,
            libraries: libs,
            linux,
        })
    }

    /// Where the build script for this project is written
    pub fn script_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.tcl", self.name))
    }

    /// Where the generated script exports the hardware platform
    pub fn hw_platform_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.xsa", self.name))
    }
}
