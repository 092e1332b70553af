//! xilbuild - FPGA project compiler
//!
//! Reads a YAML project description, resolves it into a [`project::ProjectModel`],
//! generates the Vivado batch script for it and drives Vivado and the
//! PetaLinux tools.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod path_utils;
pub mod project;
pub mod script;
pub mod tool;
pub mod vcs;

pub use error::{Result, XilError};
