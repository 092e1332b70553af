//! Common test utilities for xilbuild integration tests

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables that would leak host configuration into a test run
const XILBUILD_ENV: &[&str] = &[
    "XILBUILD_CONFIG",
    "XILBUILD_OUTPUT",
    "XILBUILD_VIVADO",
    "XILBUILD_PETALINUX_CONFIG",
    "XILBUILD_PETALINUX_BUILD",
    "XILBUILD_PETALINUX_PACKAGE",
    "RUST_LOG",
];

/// Minimal project used across tests
#[allow(dead_code)]
pub const DEMO_PROJECT: &str = "project:\n  name: demo\n  part: xc7z020\n  top: top\n";

/// The xilbuild binary with a clean environment, running inside `dir`
// Temporary fix for deprecated cargo_bin - will be updated when build-dir issues are resolved
#[allow(deprecated)]
pub fn xilbuild_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("xilbuild").expect("xilbuild binary");
    for var in XILBUILD_ENV {
        cmd.env_remove(var);
    }
    cmd.current_dir(dir);
    cmd
}

/// A test project directory for integration tests
#[allow(dead_code)]
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to project root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = dunce::canonicalize(temp.path()).expect("Failed to canonicalize temp directory");
        Self { temp, path }
    }

    /// Create a workspace holding `xilbuild.yaml` with `config`
    pub fn with_project(config: &str) -> Self {
        let workspace = Self::new();
        workspace.write_file("xilbuild.yaml", config);
        workspace
    }

    /// Write a file in workspace
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Read a file from workspace
    pub fn read_file(&self, path: &str) -> String {
        let file_path = self.path.join(path);
        std::fs::read_to_string(&file_path).expect("Failed to read file")
    }

    /// Check if a file exists in workspace
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// Path to the project document
    pub fn config_path(&self) -> PathBuf {
        self.path.join("xilbuild.yaml")
    }

    /// Forward-slash rendering of a workspace path, as it appears in scripts
    pub fn script_path_of(&self, path: &str) -> String {
        self.path
            .join(path)
            .to_string_lossy()
            .replace('\\', "/")
    }

    /// Command running in the workspace with `-c xilbuild.yaml -o out`
    pub fn cmd(&self) -> Command {
        let mut cmd = xilbuild_cmd(&self.path);
        cmd.args(["-c", "xilbuild.yaml", "-o", "out"]);
        cmd
    }

    /// Create a fake tool that appends its name, working directory and
    /// arguments to `tools.log` and exits with `code`.
    #[cfg(unix)]
    pub fn fake_tool(&self, name: &str, code: i32) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let log = self.path.join("tools.log");
        let script = format!(
            "#!/bin/sh\necho \"{name} $(pwd)${{*:+ $*}}\" >> \"{}\"\nexit {code}\n",
            log.display()
        );
        let tool = self.path.join("bin").join(name);
        std::fs::create_dir_all(tool.parent().expect("bin dir"))
            .expect("Failed to create bin directory");
        std::fs::write(&tool, script).expect("Failed to write fake tool");
        std::fs::set_permissions(&tool, std::fs::Permissions::from_mode(0o755))
            .expect("Failed to make fake tool executable");
        tool
    }

    /// Lines logged by fake tools, in call order
    pub fn tool_log(&self) -> Vec<String> {
        if !self.file_exists("tools.log") {
            return Vec::new();
        }
        self.read_file("tools.log")
            .lines()
            .map(str::to_string)
            .collect()
    }
}
