//! Command implementations for xilbuild CLI

pub mod build;
pub mod completions;
pub mod generate;
pub mod helpers;
pub mod linux;
pub mod show;
pub mod version;
