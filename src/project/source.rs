//! Source files: classification and discovery
//!
//! A configured pattern is split into a literal directory, resolved against
//! the project root, and a file-name glob matched against that directory's
//! entries with wax.

use serde::Serialize;
use std::fmt;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;
use wax::{CandidatePath, Glob, Pattern};

use crate::error::{Result, config};
use crate::path_utils::{resolve_against, split_pattern};

/// HDL dialect of a source file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HdlKind {
    Vhdl,
    Verilog,
    SystemVerilog,
}

/// Semantic kind of a project file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FileKind {
    Unknown,
    Constraint,
    Hdl(HdlKind),
    IpCore,
    BlockDesign,
}

impl FileKind {
    pub fn is_hdl(self) -> bool {
        matches!(self, FileKind::Hdl(_))
    }
}

impl fmt::Display for FileKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FileKind::Unknown => "unknown",
            FileKind::Constraint => "constraint",
            FileKind::Hdl(HdlKind::Vhdl) => "VHDL",
            FileKind::Hdl(HdlKind::Verilog) => "Verilog",
            FileKind::Hdl(HdlKind::SystemVerilog) => "SystemVerilog",
            FileKind::IpCore => "IP core",
            FileKind::BlockDesign => "block design",
        };
        f.write_str(name)
    }
}

/// Extension table, matched exactly and case-sensitively
pub(crate) const EXTENSION_KINDS: &[(&str, FileKind)] = &[
    ("vhd", FileKind::Hdl(HdlKind::Vhdl)),
    ("vhdl", FileKind::Hdl(HdlKind::Vhdl)),
    ("v", FileKind::Hdl(HdlKind::Verilog)),
    ("sv", FileKind::Hdl(HdlKind::SystemVerilog)),
    ("xdc", FileKind::Constraint),
    ("xci", FileKind::IpCore),
    ("tcl", FileKind::BlockDesign),
];

/// Classify a file by its extension
pub fn classify(path: &Path) -> FileKind {
    let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
        return FileKind::Unknown;
    };

    EXTENSION_KINDS
        .iter()
        .find(|(known, _)| *known == ext)
        .map_or(FileKind::Unknown, |(_, kind)| *kind)
}

/// A discovered project file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFile {
    path: PathBuf,
    kind: FileKind,
}

impl SourceFile {
    pub fn new(path: impl Into<PathBuf>, kind: FileKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Create a source file whose kind comes from its extension
    pub fn classified(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let kind = classify(&path);
        Self { path, kind }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn kind(&self) -> FileKind {
        self.kind
    }
}

/// Expand `patterns` against `base_dir`.
///
/// Results keep pattern order, then directory listing order. Files matched by
/// more than one pattern are listed once per match.
pub fn discover(
    patterns: &[String],
    base_dir: &Path,
    forced_kind: Option<FileKind>,
) -> Result<Vec<SourceFile>> {
    let mut files = Vec::new();

    for pattern in patterns {
        let (dir, name) = split_pattern(pattern);
        let dir = resolve_against(base_dir, &dir);
        let glob =
            Glob::new(&name).map_err(|e| config::invalid_pattern(pattern.as_str(), e.to_string()))?;

        let before = files.len();
        for path in list_matches(&dir, &glob) {
            let kind = forced_kind.unwrap_or_else(|| classify(&path));
            files.push(SourceFile::new(path, kind));
        }
        log::debug!(
            "pattern '{}' matched {} file(s) in {}",
            pattern,
            files.len() - before,
            dir.display()
        );
    }

    Ok(files)
}

/// Regular files directly inside `dir` whose name matches `glob`.
///
/// A missing directory lists nothing. Entries that cannot be read are logged
/// and skipped.
fn list_matches(dir: &Path, glob: &Glob<'_>) -> Vec<PathBuf> {
    if !dir.is_dir() {
        return Vec::new();
    }

    WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                let path = e.path().unwrap_or(dir).to_path_buf();
                log::warn!("Skipping unreadable entry {}: {}", path.display(), e);
                None
            }
        })
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy();
            glob.matched(&CandidatePath::from(name.as_ref())).is_some()
        })
        .map(walkdir::DirEntry::into_path)
        .collect()
}
