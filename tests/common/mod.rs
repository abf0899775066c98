#![allow(dead_code)]

pub mod mock_tts;

use std::path::PathBuf;
use std::io::Write;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Runs the trainer binary with config and data isolated in a temp dir
pub struct TestContext {
    pub temp_dir: TempDir,
}

impl TestContext {
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    pub fn config_path(&self) -> PathBuf {
        self.temp_dir.path().join("config.json")
    }

    /// Run the binary with `args`, logging through the silent fallback engine
    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_zahlentrainer"))
            .args(args)
            .env("XDG_CONFIG_HOME", self.temp_dir.path())
            .env("ZAHLENTRAINER_CONFIG", self.config_path())
            .output()
            .expect("Failed to run zahlentrainer")
    }

    /// Run the binary feeding `input` on stdin
    pub fn run_with_input(&self, args: &[&str], input: &str) -> Output {
        let mut child = Command::new(env!("CARGO_BIN_EXE_zahlentrainer"))
            .args(args)
            .env("XDG_CONFIG_HOME", self.temp_dir.path())
            .env("ZAHLENTRAINER_CONFIG", self.config_path())
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .expect("Failed to spawn zahlentrainer");

        child
            .stdin
            .take()
            .expect("stdin is piped")
            .write_all(input.as_bytes())
            .expect("Failed to write stdin");

        child
            .wait_with_output()
            .expect("Failed to wait for zahlentrainer")
    }

    pub fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "zahlentrainer {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).trim().to_string()
    }
}
