//! Test environment builder for isolated catpick testing.
//!
//! Provides `TestEnv` - an isolated test environment with temp directories
//! for both project and home, plus helpers to run catpick CLI commands.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::fixtures::SAMPLE_TREE;

/// Result of running a catpick CLI command
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    /// Stdout lines, for commands that print one item per line
    pub fn lines(&self) -> Vec<&str> {
        self.stdout.lines().collect()
    }

    /// Parse the single NDJSON event printed in `--json` mode
    pub fn json(&self) -> serde_json::Value {
        let line = self
            .stdout
            .lines()
            .find(|l| !l.trim().is_empty())
            .unwrap_or_else(|| panic!("no JSON output; stderr:\n{}", self.stderr));
        serde_json::from_str(line)
            .unwrap_or_else(|e| panic!("invalid JSON line {:?}: {}", line, e))
    }
}

/// Isolated test environment with temp directories.
///
/// Catpick reads `./catpick.toml` and `$XDG_CONFIG_HOME/catpick/config.toml`,
/// so both the working directory and the config home are private to the test.
pub struct TestEnv {
    /// Temporary working directory
    pub project_root: TempDir,
    /// Temporary directory for HOME and XDG_CONFIG_HOME
    pub home_dir: TempDir,
    catpick_bin: PathBuf,
}

impl TestEnv {
    /// Create a new TestEnvBuilder
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    /// Get path relative to project root
    pub fn project_path(&self, relative: &str) -> PathBuf {
        self.project_root.path().join(relative)
    }

    /// Get path relative to home directory
    pub fn home_path(&self, relative: &str) -> PathBuf {
        self.home_dir.path().join(relative)
    }

    /// Run catpick in this environment from project root
    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    /// Run catpick from project root with extra env vars.
    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        self.run_from_with_env(self.project_root.path(), args, env_vars)
    }

    /// Run catpick from a specific directory with extra env vars.
    pub fn run_from_with_env(
        &self,
        cwd: &Path,
        args: &[&str],
        env_vars: &[(&str, &str)],
    ) -> TestResult {
        let mut cmd = Command::new(&self.catpick_bin);
        cmd.current_dir(cwd)
            .args(args)
            .env("HOME", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path())
            .env_remove("RUST_LOG");

        for key in [
            "CATPICK_TREE",
            "CATPICK_PLACEHOLDER",
            "CATPICK_SEPARATOR",
            "CATPICK_UNICODE",
        ] {
            cmd.env_remove(key);
        }

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute catpick");
        output_to_result(output)
    }

    /// Write a file to the project directory
    pub fn write_project_file(&self, relative_path: &str, content: &str) -> PathBuf {
        write_file(&self.project_path(relative_path), content)
    }

    /// Write a file to the home directory
    pub fn write_home_file(&self, relative_path: &str, content: &str) -> PathBuf {
        write_file(&self.home_path(relative_path), content)
    }
}

fn write_file(full_path: &Path, content: &str) -> PathBuf {
    if let Some(parent) = full_path.parent() {
        std::fs::create_dir_all(parent).expect("Failed to create directories");
    }
    std::fs::write(full_path, content).expect("Failed to write file");
    full_path.to_path_buf()
}

fn output_to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    tree: Option<(String, String)>,
    project_config: Option<String>,
    home_config: Option<String>,
}

impl TestEnvBuilder {
    /// Create a new builder: the sample tree written to `tree.json`
    pub fn new() -> Self {
        Self {
            tree: Some(("tree.json".to_string(), SAMPLE_TREE.to_string())),
            project_config: None,
            home_config: None,
        }
    }

    /// Replace the payload written to the project
    pub fn with_tree(mut self, name: &str, json: &str) -> Self {
        self.tree = Some((name.to_string(), json.to_string()));
        self
    }

    /// Do not write any payload
    pub fn without_tree(mut self) -> Self {
        self.tree = None;
        self
    }

    /// Set ./catpick.toml content
    pub fn with_project_config(mut self, toml: &str) -> Self {
        self.project_config = Some(toml.to_string());
        self
    }

    /// Set $XDG_CONFIG_HOME/catpick/config.toml content
    pub fn with_home_config(mut self, toml: &str) -> Self {
        self.home_config = Some(toml.to_string());
        self
    }

    /// Build the TestEnv
    pub fn build(self) -> TestEnv {
        let env = TestEnv {
            project_root: TempDir::new().expect("Failed to create project dir"),
            home_dir: TempDir::new().expect("Failed to create home dir"),
            catpick_bin: PathBuf::from(env!("CARGO_BIN_EXE_catpick")),
        };

        if let Some((name, json)) = &self.tree {
            env.write_project_file(name, json);
        }
        if let Some(toml) = &self.project_config {
            env.write_project_file("catpick.toml", toml);
        }
        if let Some(toml) = &self.home_config {
            env.write_home_file("catpick/config.toml", toml);
        }

        env
    }
}
