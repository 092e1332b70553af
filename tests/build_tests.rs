//! Build and Linux pipeline tests against fake Vivado and PetaLinux tools

#![cfg(unix)]

mod common;

use common::{DEMO_PROJECT, TestWorkspace};
use predicates::prelude::*;

const LINUX_PROJECT: &str = "project:\n  name: demo\n  part: xc7z020\n  top: top\n\
                             linux:\n  name: board\n  linux_dir: plnx\n";

struct FakeTools {
    vivado: String,
    config: String,
    build: String,
    package: String,
}

fn fake_tools(workspace: &TestWorkspace, codes: [i32; 4]) -> FakeTools {
    let path = |p: std::path::PathBuf| p.to_string_lossy().into_owned();
    FakeTools {
        vivado: path(workspace.fake_tool("vivado", codes[0])),
        config: path(workspace.fake_tool("petalinux-config", codes[1])),
        build: path(workspace.fake_tool("petalinux-build", codes[2])),
        package: path(workspace.fake_tool("petalinux-package", codes[3])),
    }
}

fn build_cmd(workspace: &TestWorkspace, tools: &FakeTools) -> assert_cmd::Command {
    let mut cmd = workspace.cmd();
    cmd.arg("build")
        .env("XILBUILD_VIVADO", &tools.vivado)
        .env("XILBUILD_PETALINUX_CONFIG", &tools.config)
        .env("XILBUILD_PETALINUX_BUILD", &tools.build)
        .env("XILBUILD_PETALINUX_PACKAGE", &tools.package);
    cmd
}

fn tool_names(workspace: &TestWorkspace) -> Vec<String> {
    workspace
        .tool_log()
        .iter()
        .filter_map(|line| line.split_whitespace().next().map(str::to_string))
        .collect()
}

#[test]
fn test_vivado_argv_with_stages_disabled() {
    let workspace = TestWorkspace::with_project(DEMO_PROJECT);
    let tools = fake_tools(&workspace, [0; 4]);

    build_cmd(&workspace, &tools)
        .args(["--no-synth", "--no-impl"])
        .assert()
        .success();

    let log = workspace.tool_log();
    assert_eq!(log.len(), 1);
    assert_eq!(
        log[0],
        format!(
            "vivado {} -nolog -nojournal -mode batch -source {} -tclargs 0 0",
            workspace.path.display(),
            workspace.script_path_of("out/demo.tcl")
        )
    );
}

#[test]
fn test_vivado_runs_both_stages_by_default() {
    let workspace = TestWorkspace::with_project(DEMO_PROJECT);
    let tools = fake_tools(&workspace, [0; 4]);

    build_cmd(&workspace, &tools).assert().success();

    let log = workspace.tool_log();
    assert_eq!(log.len(), 1);
    assert!(log[0].ends_with("-tclargs 1 1"));
}

#[test]
fn test_vivado_exit_code_is_propagated() {
    let workspace = TestWorkspace::with_project(LINUX_PROJECT);
    let tools = fake_tools(&workspace, [3, 0, 0, 0]);

    build_cmd(&workspace, &tools)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Vivado exited with code 3"));

    assert_eq!(tool_names(&workspace), vec!["vivado"]);
}

#[test]
fn test_build_runs_full_linux_pipeline() {
    let workspace = TestWorkspace::with_project(LINUX_PROJECT);
    std::fs::create_dir_all(workspace.path.join("plnx")).expect("create plnx");
    let tools = fake_tools(&workspace, [0; 4]);

    build_cmd(&workspace, &tools)
        .args(["--reconfigure", "--package"])
        .assert()
        .success();

    let log = workspace.tool_log();
    assert_eq!(
        tool_names(&workspace),
        vec![
            "vivado",
            "petalinux-config",
            "petalinux-build",
            "petalinux-package"
        ]
    );

    let plnx = workspace.path.join("plnx");
    let plnx = plnx.display();
    assert_eq!(
        log[1],
        format!(
            "petalinux-config {plnx} --silentconfig --get-hw-description={}",
            workspace.script_path_of("out/latest-board.xsa")
        )
    );
    assert_eq!(log[2], format!("petalinux-build {plnx}"));
    assert_eq!(
        log[3],
        format!(
            "petalinux-package {plnx} --boot --format BIN --fsbl {plnx}/images/linux/zynq_fsbl.elf \
             --fpga {plnx}/images/linux/system.bit --force"
        )
    );
}

#[test]
fn test_build_without_linux_section_stops_after_vivado() {
    let workspace = TestWorkspace::with_project(DEMO_PROJECT);
    let tools = fake_tools(&workspace, [0; 4]);

    build_cmd(&workspace, &tools)
        .args(["--reconfigure", "--package"])
        .assert()
        .success();

    assert_eq!(tool_names(&workspace), vec!["vivado"]);
}

#[test]
fn test_skip_linux() {
    let workspace = TestWorkspace::with_project(LINUX_PROJECT);
    let tools = fake_tools(&workspace, [0; 4]);

    build_cmd(&workspace, &tools)
        .arg("--skip-linux")
        .assert()
        .success();

    assert_eq!(tool_names(&workspace), vec!["vivado"]);
}

#[test]
fn test_pipeline_failure_stops_later_steps() {
    let workspace = TestWorkspace::with_project(LINUX_PROJECT);
    std::fs::create_dir_all(workspace.path.join("plnx")).expect("create plnx");
    let tools = fake_tools(&workspace, [0, 0, 2, 0]);

    build_cmd(&workspace, &tools)
        .arg("--package")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Linux pipeline step 'build' failed with exit code 2",
        ));

    assert_eq!(tool_names(&workspace), vec!["vivado", "petalinux-build"]);
}

#[test]
fn test_linux_command_runs_pipeline_only() {
    let workspace = TestWorkspace::with_project(LINUX_PROJECT);
    std::fs::create_dir_all(workspace.path.join("plnx")).expect("create plnx");
    let tools = fake_tools(&workspace, [0; 4]);

    workspace
        .cmd()
        .args(["linux", "--reconfigure"])
        .args(["--petalinux-config", tools.config.as_str()])
        .args(["--petalinux-build", tools.build.as_str()])
        .args(["--petalinux-package", tools.package.as_str()])
        .assert()
        .success();

    assert_eq!(
        tool_names(&workspace),
        vec!["petalinux-config", "petalinux-build"]
    );
    assert!(!workspace.file_exists("out/demo.tcl"));
}

#[test]
fn test_linux_command_without_linux_section() {
    let workspace = TestWorkspace::with_project(DEMO_PROJECT);

    workspace
        .cmd()
        .arg("linux")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("No linux configuration specified"));
}

#[test]
fn test_linux_command_without_name() {
    let workspace =
        TestWorkspace::with_project("project: {name: demo, part: p, top: t}\nlinux: {linux_dir: plnx}\n");

    workspace
        .cmd()
        .arg("linux")
        .assert()
        .failure()
        .stderr(predicate::str::contains("No petalinux name specified"));
}

#[test]
fn test_missing_vivado_binary() {
    let workspace = TestWorkspace::with_project(DEMO_PROJECT);

    workspace
        .cmd()
        .args(["build", "--vivado", "xilbuild-missing-vivado"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to launch 'xilbuild-missing-vivado'",
        ));
}
