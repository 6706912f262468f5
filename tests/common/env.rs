//! Isolated environment for running the `treelens` binary.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

/// Result of running a CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    fn from_output(output: Output) -> Self {
        Self {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }

    /// Stdout lines parsed as NDJSON events
    pub fn events(&self) -> Vec<serde_json::Value> {
        self.stdout
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).expect("stdout line is JSON"))
            .collect()
    }
}

/// Temp working directory with config lookups pointed inside it
pub struct TestEnv {
    pub root: TempDir,
}

impl TestEnv {
    pub fn new() -> Self {
        Self {
            root: tempfile::tempdir().expect("create temp dir"),
        }
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.path(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create parent dir");
        }
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    pub fn read(&self, relative: &str) -> String {
        std::fs::read_to_string(self.path(relative)).expect("read output")
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_treelens"));
        cmd.args(args)
            .current_dir(self.root.path())
            .env("HOME", self.root.path())
            .env("XDG_CONFIG_HOME", self.path(".config"))
            .env("XDG_STATE_HOME", self.path(".state"))
            .env("NO_COLOR", "1")
            .env("LANG", "C")
            .env("LC_ALL", "C")
            .env_remove("TREELENS_MAX_DEPTH")
            .env_remove("TREELENS_ROW_HEIGHT")
            .env_remove("TREELENS_VERBOSITY")
            .env_remove("TREELENS_COLOR");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        let output = self
            .command(args)
            .stdin(Stdio::null())
            .output()
            .expect("run treelens");
        TestResult::from_output(output)
    }

    /// Run with extra environment variables
    pub fn run_with_env(&self, args: &[&str], vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = self.command(args);
        cmd.stdin(Stdio::null());
        for (key, value) in vars {
            cmd.env(key, value);
        }
        TestResult::from_output(cmd.output().expect("run treelens"))
    }

    /// Run with `input` piped to stdin
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> TestResult {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("spawn treelens");
        child
            .stdin
            .take()
            .expect("stdin")
            .write_all(input.as_bytes())
            .expect("write stdin");
        TestResult::from_output(child.wait_with_output().expect("wait treelens"))
    }

    pub fn exists(&self, relative: &str) -> bool {
        Path::new(&self.path(relative)).exists()
    }
}
