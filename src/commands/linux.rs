//! Linux command implementation

use console::Style;
use std::path::{Path, PathBuf};

use super::helpers;
use crate::cli::LinuxArgs;
use crate::error::Result;
use crate::project::ProjectModel;
use crate::tool::{LinuxPipeline, ProcessRunner, SystemRunner, ToolPaths};

pub fn run(config: &Path, output: Option<PathBuf>, args: LinuxArgs) -> Result<()> {
    let model = helpers::load_project(config, output)?;
    execute(&model, args, &SystemRunner)
}

pub(crate) fn execute(model: &ProjectModel, args: LinuxArgs, runner: &dyn ProcessRunner) -> Result<()> {
    let pipeline = LinuxPipeline::from_project(model, ToolPaths::from(args.tools))?;

    println!(
        "{} {}",
        Style::new().cyan().bold().apply_to("Building Linux in"),
        pipeline.linux_dir.display()
    );
    pipeline.run(runner, args.reconfigure, args.package)?;
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Linux image ready for"),
        pipeline.name
    );
    Ok(())
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::cli::{Cli, Commands};
    use crate::error::XilError;
    use crate::tool::testing::RecordingRunner;
    use clap::Parser;
    use tempfile::TempDir;

    fn linux_args(extra: &[&str]) -> LinuxArgs {
        let argv = ["xilbuild", "linux"].into_iter().chain(extra.iter().copied());
        match Cli::try_parse_from(argv).expect("parse").command {
            Commands::Linux(args) => args,
            _ => panic!("Expected Linux command"),
        }
    }

    fn model(temp: &TempDir, yaml: &str) -> ProjectModel {
        let config = temp.path().join("xilbuild.yaml");
        std::fs::write(&config, yaml).expect("write config");
        ProjectModel::load(&config, &temp.path().join("out")).expect("load project")
    }

    #[test]
    fn test_linux_runs_pipeline_only() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let model = model(
            &temp,
            "project: {name: demo, part: xc7z020, top: top}\nlinux: {name: board, linux_dir: plnx}\n",
        );
        let runner = RecordingRunner::default();

        execute(&model, linux_args(&["--package"]), &runner).expect("linux");

        assert_eq!(
            runner.programs(),
            vec!["petalinux-build", "petalinux-package"]
        );
    }

    #[test]
    fn test_linux_requires_linux_section() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let model = model(&temp, "project: {name: demo, part: xc7z020, top: top}\n");
        let runner = RecordingRunner::default();

        let err = execute(&model, linux_args(&[]), &runner).expect_err("no linux section");

        assert!(matches!(err, XilError::LinuxNotConfigured));
        assert!(runner.calls.borrow().is_empty());
    }
}
