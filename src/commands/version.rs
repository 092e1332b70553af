//! Version command implementation

use std::fmt::Write as _;

use crate::cli::DEFAULT_CONFIG;
use crate::error::Result;
use crate::project::source::EXTENSION_KINDS;
use crate::tool::ToolPaths;

/// Run version command
pub fn run() -> Result<()> {
    print!("{}", version_info());
    Ok(())
}

/// Version, build profile and the defaults xilbuild falls back to
fn version_info() -> String {
    let tools = ToolPaths::default();
    let mut out = String::new();

    let _ = writeln!(out, "xilbuild {}", env!("CARGO_PKG_VERSION"));
    let _ = writeln!(out);
    let _ = writeln!(out, "Build info:");
    let _ = writeln!(out, "  Rust version: {}", env!("CARGO_PKG_RUST_VERSION"));
    let _ = writeln!(out, "  Profile: {}", build_profile());
    let _ = writeln!(out);
    let _ = writeln!(out, "Defaults:");
    let _ = writeln!(out, "  Config: {DEFAULT_CONFIG}");
    let _ = writeln!(out, "  Vivado: {}", tools.vivado);
    let _ = writeln!(
        out,
        "  PetaLinux: {}, {}, {}",
        tools.petalinux_config, tools.petalinux_build, tools.petalinux_package
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Source extensions:");
    for (ext, kind) in EXTENSION_KINDS {
        let _ = writeln!(out, "  .{ext:<6}{kind}");
    }

    out
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_info_header() {
        let info = version_info();
        assert!(info.starts_with(&format!("xilbuild {}\n", env!("CARGO_PKG_VERSION"))));
        assert!(info.contains("Build info:"));
        assert!(info.contains(&format!("  Profile: {}\n", build_profile())));
    }

    #[test]
    fn test_version_info_lists_defaults() {
        let info = version_info();
        assert!(info.contains("  Config: xilbuild.yaml\n"));
        assert!(info.contains("  Vivado: vivado\n"));
        assert!(info.contains("petalinux-config, petalinux-build, petalinux-package"));
    }

    #[test]
    fn test_version_info_lists_every_extension() {
        let info = version_info();
        assert!(info.contains("  .vhd   VHDL\n"));
        assert!(info.contains("  .sv    SystemVerilog\n"));
        assert!(info.contains("  .xdc   constraint\n"));
        assert_eq!(
            info.lines().filter(|line| line.starts_with("  .")).count(),
            EXTENSION_KINDS.len()
        );
    }
}
