use clap::Args;

use crate::tool::ToolPaths;

/// Locations of the external tools
#[derive(Args, Debug, Clone)]
pub struct ToolArgs {
    /// Vivado executable
    #[arg(long, env = "XILBUILD_VIVADO", default_value = "vivado")]
    pub vivado: String,

    /// petalinux-config executable
    #[arg(long, env = "XILBUILD_PETALINUX_CONFIG", default_value = "petalinux-config")]
    pub petalinux_config: String,

    /// petalinux-build executable
    #[arg(long, env = "XILBUILD_PETALINUX_BUILD", default_value = "petalinux-build")]
    pub petalinux_build: String,

    /// petalinux-package executable
    #[arg(long, env = "XILBUILD_PETALINUX_PACKAGE", default_value = "petalinux-package")]
    pub petalinux_package: String,
}

impl From<ToolArgs> for ToolPaths {
    fn from(args: ToolArgs) -> Self {
        Self {
            vivado: args.vivado,
            petalinux_config: args.petalinux_config,
            petalinux_build: args.petalinux_build,
            petalinux_package: args.petalinux_package,
        }
    }
}
