#![allow(dead_code)]

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

use serde_json::{Value, json};
use tempfile::TempDir;

pub fn repofolio_binary() -> &'static str {
    env!("CARGO_BIN_EXE_repofolio")
}

/// Helper struct to run repofolio commands in an isolated temp directory
pub struct RepofolioTest {
    pub temp_dir: TempDir,
}

impl RepofolioTest {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        RepofolioTest { temp_dir }
    }

    fn command(&self, args: &[&str]) -> Command {
        let mut cmd = Command::new(repofolio_binary());
        cmd.args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("REPOFOLIO_LOG");
        cmd
    }

    pub fn run(&self, args: &[&str]) -> Output {
        self.command(args)
            .output()
            .expect("Failed to execute repofolio command")
    }

    /// Run with `input` piped to stdin.
    pub fn run_with_stdin(&self, args: &[&str], input: &str) -> Output {
        let mut child = self
            .command(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn repofolio command");
        child
            .stdin
            .take()
            .expect("stdin should be piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");
        child
            .wait_with_output()
            .expect("Failed to wait for repofolio command")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).to_string()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Expected command {:?} to fail, but it succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).to_string()
    }

    pub fn write_file(&self, relative_path: &str, content: &str) {
        let path = self.temp_dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn read_file(&self, relative_path: &str) -> Option<String> {
        let path = self.temp_dir.path().join(relative_path);
        fs::read_to_string(path).ok()
    }

    /// Write the default catalog (`github_projects.json`).
    pub fn write_catalog(&self, repositories: Value) {
        self.write_file(
            "github_projects.json",
            &json!({ "repository": repositories }).to_string(),
        );
    }
}

/// Issue objects titled `"{prefix} {i}"` for `i` in `0..count`.
pub fn issues(prefix: &str, count: usize) -> Value {
    Value::Array(
        (0..count)
            .map(|i| json!({ "title": format!("{prefix} {i}"), "description": "details" }))
            .collect(),
    )
}

/// A small catalog covering the interesting cases.
pub fn sample_catalog() -> Value {
    json!([
        {
            "name": "Beta",
            "url": "https://github.com/someone/beta",
            "description": "Second letter tooling",
            "created_at": "2023-01-01T00:00:00Z",
            "issues": issues("beta issue", 6)
        },
        {
            "name": "Alpha Project",
            "url": "https://github.com/someone/alpha",
            "description": null,
            "created_at": "2024-01-01T00:00:00Z",
            "issues": []
        },
        {
            "name": "Zeta",
            "url": "https://github.com/someone/zeta",
            "description": "Last one",
            "created_at": "2022-06-15T00:00:00Z",
            "issues_with_links": [
                { "title": "Linked", "links": [{ "url": "https://example.com/doc", "text": "doc" }] }
            ],
            "issues_without_links": [
                { "title": "Plain", "description": "no links here", "links": [] }
            ]
        }
    ])
}
