use clap::Parser;

use super::ToolArgs;
use crate::script::TargetLanguage;

/// Arguments for the build command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Full build (synthesis, implementation, PetaLinux):\n    xilbuild build -o build\n\n\
                  Synthesis only:\n    xilbuild build --no-impl --skip-linux\n\n\
                  Rebuild Linux against the new hardware and package BOOT.BIN:\n    xilbuild build --reconfigure --package")]
pub struct BuildArgs {
    /// Do not run synthesis
    #[arg(long)]
    pub no_synth: bool,

    /// Do not run implementation
    #[arg(long)]
    pub no_impl: bool,

    /// Do not run the PetaLinux pipeline after Vivado
    #[arg(long)]
    pub skip_linux: bool,

    /// Re-import the hardware description before building Linux
    #[arg(long)]
    pub reconfigure: bool,

    /// Package BOOT.BIN after building Linux
    #[arg(long)]
    pub package: bool,

    /// HDL language for generated wrappers
    #[arg(long, value_enum, default_value_t = TargetLanguage::Vhdl)]
    pub target_language: TargetLanguage,

    #[command(flatten)]
    pub tools: ToolArgs,
}
