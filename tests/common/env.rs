//! Test environment for running the `skills` binary in isolation.

use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

use super::fixtures::write_factory;

/// Result of running a skills CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Combine stdout and stderr
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }

    /// stdout parsed as NDJSON
    pub fn json_events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|l| !l.trim().is_empty())
            .map(|l| {
                serde_json::from_str(l)
                    .unwrap_or_else(|e| panic!("not a JSON line ({e}): {l}\nstdout:\n{}", self.stdout))
            })
            .collect()
    }
}

/// Isolated project, home and factory directories.
pub struct TestEnv {
    pub project_root: TempDir,
    pub home_dir: TempDir,
    pub factory_dir: TempDir,
    bin: PathBuf,
}

impl TestEnv {
    /// Empty project, factory seeded with the standard fixture
    pub fn new() -> Self {
        let env = Self::empty();
        write_factory(env.factory_dir.path());
        env
    }

    /// Empty project and empty factory
    pub fn empty() -> Self {
        Self {
            project_root: TempDir::new().expect("project dir"),
            home_dir: TempDir::new().expect("home dir"),
            factory_dir: TempDir::new().expect("factory dir"),
            bin: PathBuf::from(env!("CARGO_BIN_EXE_skills")),
        }
    }

    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    pub fn factory_path(&self, relative: &str) -> PathBuf {
        self.factory_dir.path().join(relative)
    }

    /// Run `skills` from the project root with stdin closed
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(&self.bin);
        cmd.current_dir(self.project_root.path())
            .args(args)
            .stdin(Stdio::null())
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("SKILL_FACTORY_SOURCE", self.factory_dir.path())
            .env_remove("SKILL_FACTORY_GLOBAL_PATH")
            .env_remove("SKILL_FACTORY_TARGET_DIR")
            .env_remove("RUST_LOG")
            .env("LC_ALL", "C")
            .env("NO_COLOR", "1");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("failed to execute skills");
        to_result(output)
    }

    pub fn read_project_file(&self, relative: &str) -> String {
        read(&self.project_path(relative))
    }

    pub fn read_factory_file(&self, relative: &str) -> String {
        read(&self.factory_path(relative))
    }

    pub fn write_project_file(&self, relative: &str, content: &str) {
        write(&self.project_path(relative), content);
    }

    pub fn write_factory_file(&self, relative: &str, content: &str) {
        write(&self.factory_path(relative), content);
    }

    pub fn write_home_file(&self, relative: &str, content: &str) {
        write(&self.home_dir.path().join(relative), content);
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

fn read(path: &Path) -> String {
    std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e))
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).expect("failed to create directories");
    }
    std::fs::write(path, content).expect("failed to write file");
}
