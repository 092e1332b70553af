//! Build command implementation
//!
//! Generates the script, runs Vivado and, when the project has a `linux`
//! section, the PetaLinux pipeline. A failing Vivado run ends the command
//! with Vivado's own exit code.

use console::Style;
use std::path::{Path, PathBuf};

use super::generate::write_project_script;
use super::helpers;
use crate::cli::BuildArgs;
use crate::error::Result;
use crate::project::ProjectModel;
use crate::tool::{LinuxPipeline, ProcessRunner, SystemRunner, ToolInvoker, ToolPaths};
use crate::vcs::VcsInfo;

/// Run the build; returns the process exit code
pub fn run(config: &Path, output: Option<PathBuf>, args: BuildArgs) -> Result<i32> {
    let model = helpers::load_project(config, output)?;
    let vcs = helpers::project_vcs_info(&model);
    execute(&model, &vcs, args, &SystemRunner)
}

pub(crate) fn execute(
    model: &ProjectModel,
    vcs: &VcsInfo,
    args: BuildArgs,
    runner: &dyn ProcessRunner,
) -> Result<i32> {
    let script = write_project_script(model, vcs, args.target_language)?;
    let synth = !args.no_synth;
    let implement = !args.no_impl;
    let tools = ToolPaths::from(args.tools);

    println!(
        "{} {} (synthesis: {}, implementation: {})",
        Style::new().cyan().bold().apply_to("Running Vivado on"),
        script.display(),
        on_off(synth),
        on_off(implement)
    );
    let code = ToolInvoker::new(tools.vivado.as_str(), runner).invoke(&script, synth, implement)?;
    if code != 0 {
        eprintln!(
            "{} Vivado exited with code {}",
            Style::new().red().bold().apply_to("Failed:"),
            code
        );
        return Ok(code);
    }

    if args.skip_linux {
        log::info!("skipping PetaLinux pipeline as requested");
        return Ok(0);
    }
    if model.linux.is_none() {
        log::info!("no linux section in project, skipping PetaLinux pipeline");
        return Ok(0);
    }

    let pipeline = LinuxPipeline::from_project(model, tools)?;
    println!(
        "{} {}",
        Style::new().cyan().bold().apply_to("Building Linux in"),
        pipeline.linux_dir.display()
    );
    pipeline.run(runner, args.reconfigure, args.package)?;

    println!("{}", Style::new().green().bold().apply_to("Build complete"));
    Ok(0)
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "on" } else { "off" }
}
