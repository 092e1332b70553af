//! PetaLinux build pipeline
//!
//! The pipeline is three external steps run inside the PetaLinux project
//! directory: reconfigure from the exported hardware description, build, and
//! package the boot image. Any non-zero exit stops the sequence.

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{Invocation, ProcessRunner, ToolPaths, path_arg};
use crate::error::{Result, XilError, pipeline};
use crate::path_utils::{absolutize, resolve_against};
use crate::project::ProjectModel;

/// Bitstream location inside the PetaLinux project
const BITSTREAM_REL: &str = "images/linux/system.bit";
/// First-stage bootloader location inside the PetaLinux project
const FSBL_REL: &str = "images/linux/zynq_fsbl.elf";

/// One external step of the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Configure,
    Build,
    Package,
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineStep::Configure => f.write_str("configure"),
            PipelineStep::Build => f.write_str("build"),
            PipelineStep::Package => f.write_str("package"),
        }
    }
}

/// Parameters derived from the project's `linux` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinuxPipeline {
    pub name: String,
    pub bitstream: PathBuf,
    pub fsbl: PathBuf,
    pub hw_description_dir: PathBuf,
    pub linux_dir: PathBuf,
    #[serde(skip)]
    tools: ToolPaths,
}

impl LinuxPipeline {
    /// Derive the pipeline from a project.
    ///
    /// Fails when the project has no `linux` section, when the section has
    /// no `name`, or when it has no `linux_dir`.
    pub fn from_project(model: &ProjectModel, tools: ToolPaths) -> Result<Self> {
        let linux = model.linux.as_ref().ok_or(XilError::LinuxNotConfigured)?;
        let name = linux.name.clone().ok_or(XilError::LinuxNameMissing)?;
        let linux_dir = linux
            .linux_dir
            .as_deref()
            .ok_or_else(|| pipeline::linux_dir_missing(name.as_str()))?;
        let linux_dir = absolutize(&resolve_against(&model.root, PathBuf::from(linux_dir).as_path()));

        Ok(Self {
            name,
            bitstream: linux_dir.join(BITSTREAM_REL),
            fsbl: linux_dir.join(FSBL_REL),
            hw_description_dir: model.output_dir.clone(),
            linux_dir,
            tools,
        })
    }

    /// Hardware description handed to `petalinux-config`
    pub fn hw_description_file(&self) -> PathBuf {
        self.hw_description_dir
            .join(format!("latest-{}.xsa", self.name))
    }

    /// Command line for one step
    pub fn invocation(&self, step: PipelineStep) -> Invocation {
        let invocation = match step {
            PipelineStep::Configure => Invocation::new(self.tools.petalinux_config.as_str())
                .arg("--silentconfig")
                .arg(format!(
                    "--get-hw-description={}",
                    path_arg(&self.hw_description_file())
                )),
            PipelineStep::Build => Invocation::new(self.tools.petalinux_build.as_str()),
            PipelineStep::Package => Invocation::new(self.tools.petalinux_package.as_str())
                .args(["--boot", "--format", "BIN", "--fsbl"])
                .arg(path_arg(&self.fsbl))
                .arg("--fpga")
                .arg(path_arg(&self.bitstream))
                .arg("--force"),
        };
        invocation.current_dir(self.linux_dir.as_path())
    }

    /// Import the hardware description non-interactively
    pub fn configure(&self, runner: &dyn ProcessRunner) -> Result<()> {
        self.step(runner, PipelineStep::Configure)
    }

    /// Build kernel, bootloader and root filesystem
    pub fn build(&self, runner: &dyn ProcessRunner) -> Result<()> {
        self.step(runner, PipelineStep::Build)
    }

    /// Package `BOOT.BIN` from the FSBL and bitstream, overwriting old output
    pub fn package(&self, runner: &dyn ProcessRunner) -> Result<()> {
        self.step(runner, PipelineStep::Package)
    }

    /// Run configure (if `reconfigure`), build, then package (if `package`)
    pub fn run(&self, runner: &dyn ProcessRunner, reconfigure: bool, package: bool) -> Result<()> {
        if reconfigure {
            self.configure(runner)?;
        }
        self.build(runner)?;
        if package {
            self.package(runner)?;
        }
        Ok(())
    }

    fn step(&self, runner: &dyn ProcessRunner, step: PipelineStep) -> Result<()> {
        log::info!("petalinux {step} in {}", self.linux_dir.display());
        match runner.run(&self.invocation(step))? {
            0 => Ok(()),
            code => Err(pipeline::step_failed(step.to_string(), code)),
        }
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::*;
    use crate::config::ProjectDocument;
    use crate::tool::testing::RecordingRunner;
    use tempfile::TempDir;

    fn project(temp: &TempDir, yaml: &str) -> ProjectModel {
        let doc = ProjectDocument::from_yaml(yaml).expect("valid document");
        ProjectModel::from_document(doc, temp.path(), &temp.path().join("out"))
            .expect("valid model")
    }

    fn pipeline(temp: &TempDir) -> LinuxPipeline {
        let model = project(
            temp,
            "project: {name: demo, part: p, top: t}\nlinux: {name: board, linux_dir: plnx}\n",
        );
        LinuxPipeline::from_project(&model, ToolPaths::default()).expect("pipeline")
    }

    #[test]
    fn test_derived_paths() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let pipeline = pipeline(&temp);

        assert_eq!(pipeline.name, "board");
        assert!(pipeline.linux_dir.is_absolute());
        assert!(pipeline.linux_dir.ends_with("plnx"));
        assert_eq!(pipeline.bitstream, pipeline.linux_dir.join("images/linux/system.bit"));
        assert_eq!(pipeline.fsbl, pipeline.linux_dir.join("images/linux/zynq_fsbl.elf"));
        assert!(pipeline.hw_description_dir.ends_with("out"));
        assert!(pipeline.hw_description_file().ends_with("out/latest-board.xsa"));
    }

    #[test]
    fn test_missing_linux_section() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let model = project(&temp, "project: {name: demo, part: p, top: t}\n");
        let err = LinuxPipeline::from_project(&model, ToolPaths::default()).expect_err("no linux");
        assert!(matches!(err, XilError::LinuxNotConfigured));
    }

    #[test]
    fn test_missing_linux_name() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let model = project(
            &temp,
            "project: {name: demo, part: p, top: t}\nlinux: {linux_dir: plnx}\n",
        );
        let err = LinuxPipeline::from_project(&model, ToolPaths::default()).expect_err("no name");
        assert!(matches!(err, XilError::LinuxNameMissing));
    }

    #[test]
    fn test_missing_linux_dir() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let model = project(
            &temp,
            "project: {name: demo, part: p, top: t}\nlinux: {name: board}\n",
        );
        let err = LinuxPipeline::from_project(&model, ToolPaths::default()).expect_err("no dir");
        assert!(matches!(err, XilError::LinuxDirMissing { .. }));
    }

    #[test]
    fn test_step_command_lines() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let pipeline = pipeline(&temp);
        let hw = path_arg(&pipeline.hw_description_file());

        assert_eq!(
            pipeline.invocation(PipelineStep::Configure).argv(),
            vec![
                "petalinux-config".to_string(),
                "--silentconfig".to_string(),
                format!("--get-hw-description={hw}"),
            ]
        );
        assert_eq!(
            pipeline.invocation(PipelineStep::Build).argv(),
            vec!["petalinux-build"]
        );
        assert_eq!(
            pipeline.invocation(PipelineStep::Package).argv(),
            vec![
                "petalinux-package".to_string(),
                "--boot".to_string(),
                "--format".to_string(),
                "BIN".to_string(),
                "--fsbl".to_string(),
                path_arg(&pipeline.fsbl),
                "--fpga".to_string(),
                path_arg(&pipeline.bitstream),
                "--force".to_string(),
            ]
        );
        for step in [PipelineStep::Configure, PipelineStep::Build, PipelineStep::Package] {
            assert_eq!(
                pipeline.invocation(step).cwd.as_deref(),
                Some(pipeline.linux_dir.as_path())
            );
        }
    }

    #[test]
    fn test_run_sequences() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let pipeline = pipeline(&temp);

        let cases: [(bool, bool, &[&str]); 4] = [
            (false, false, &["petalinux-build"]),
            (true, false, &["petalinux-config", "petalinux-build"]),
            (false, true, &["petalinux-build", "petalinux-package"]),
            (
                true,
                true,
                &["petalinux-config", "petalinux-build", "petalinux-package"],
            ),
        ];

        for (reconfigure, package, expected) in cases {
            let runner = RecordingRunner::default();
            pipeline
                .run(&runner, reconfigure, package)
                .expect("pipeline succeeds");
            assert_eq!(runner.programs(), expected);
        }
    }

    #[test]
    fn test_configure_failure_stops_pipeline() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let pipeline = pipeline(&temp);
        let runner = RecordingRunner::with_codes(&[1]);

        let err = pipeline.run(&runner, true, true).expect_err("configure fails");
        assert!(matches!(
            err,
            XilError::PipelineStepFailed { ref step, code: 1 } if step == "configure"
        ));
        assert_eq!(runner.programs(), vec!["petalinux-config"]);
    }

    #[test]
    fn test_build_failure_skips_package() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let pipeline = pipeline(&temp);
        let runner = RecordingRunner::with_codes(&[0, 0, 2]);

        // configure ok, build ok, package fails
        let err = pipeline.run(&runner, true, true).expect_err("package fails");
        assert!(matches!(err, XilError::PipelineStepFailed { code: 2, .. }));
        assert_eq!(runner.calls.borrow().len(), 3);

        let runner = RecordingRunner::with_codes(&[5]);
        let err = pipeline.run(&runner, false, true).expect_err("build fails");
        assert!(matches!(
            err,
            XilError::PipelineStepFailed { ref step, code: 5 } if step == "build"
        ));
        assert_eq!(runner.programs(), vec!["petalinux-build"]);
    }

    #[test]
    fn test_custom_tool_paths() {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let model = project(
            &temp,
            "project: {name: demo, part: p, top: t}\nlinux: {name: board, linux_dir: plnx}\n",
        );
        let tools = ToolPaths {
            petalinux_build: "/opt/petalinux/tools/petalinux-build".to_string(),
            ..ToolPaths::default()
        };
        let pipeline = LinuxPipeline::from_project(&model, tools).expect("pipeline");
        let runner = RecordingRunner::default();
        pipeline.build(&runner).expect("build");
        assert_eq!(
            runner.programs(),
            vec!["/opt/petalinux/tools/petalinux-build"]
        );
    }
}
