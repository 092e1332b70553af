use clap::Parser;

use super::ToolArgs;

/// Arguments for the linux command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Build only:\n    xilbuild linux\n\n\
                  Import new hardware, build and package:\n    xilbuild linux --reconfigure --package")]
pub struct LinuxArgs {
    /// Re-import the hardware description before building
    #[arg(long)]
    pub reconfigure: bool,

    /// Package BOOT.BIN after building
    #[arg(long)]
    pub package: bool,

    #[command(flatten)]
    pub tools: ToolArgs,
}
