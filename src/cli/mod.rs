//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - build: Build command arguments
//! - generate: Generate command arguments
//! - linux: Linux command arguments
//! - show: Show command arguments
//! - completions: Completions command arguments
//! - tools: External tool locations shared by several commands

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod build;
pub mod completions;
pub mod generate;
pub mod linux;
pub mod show;
pub mod tools;

pub use build::BuildArgs;
pub use completions::CompletionsArgs;
pub use generate::GenerateArgs;
pub use linux::LinuxArgs;
pub use show::ShowArgs;
pub use tools::ToolArgs;

/// Project document read when `--config` is not given
pub const DEFAULT_CONFIG: &str = "xilbuild.yaml";

/// xilbuild - FPGA project compiler
///
/// Turn a YAML project description into a Vivado build and optionally a PetaLinux image.
#[derive(Parser, Debug)]
#[command(
    name = "xilbuild",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "FPGA project compiler for Vivado and PetaLinux",
    long_about = "xilbuild reads a YAML project description (part, top module, sources, \
                  libraries, tool options), generates a Vivado batch script for it, runs \
                  Vivado, and optionally drives the PetaLinux configure/build/package steps.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  xilbuild generate -c fpga/project.yaml -o build   \x1b[90m# Write build/<name>.tcl\x1b[0m\n   \
                  xilbuild build -o build                           \x1b[90m# Synthesize, implement, export\x1b[0m\n   \
                  xilbuild build --no-impl --skip-linux             \x1b[90m# Synthesis only\x1b[0m\n   \
                  xilbuild linux --reconfigure --package            \x1b[90m# Full PetaLinux flow\x1b[0m\n   \
                  xilbuild show --json                              \x1b[90m# Dump the resolved project\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project description file
    #[arg(
        long,
        short = 'c',
        global = true,
        env = "XILBUILD_CONFIG",
        default_value = DEFAULT_CONFIG
    )]
    pub config: PathBuf,

    /// Output directory for the Vivado project (defaults to current directory)
    #[arg(long, short = 'o', global = true, env = "XILBUILD_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate the script, run Vivado, then the PetaLinux pipeline
    Build(BuildArgs),

    /// Write the Vivado script without running anything
    Generate(GenerateArgs),

    /// Run the PetaLinux pipeline only
    Linux(LinuxArgs),

    /// Show the resolved project
    Show(ShowArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
