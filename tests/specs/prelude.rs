//! Shared helpers for black-box specs of the `ontimed` binary

use assert_cmd::Command;
use std::path::Path;
use std::process::Output;
use tempfile::TempDir;

pub const CONFIG_FILE: &str = "ontime.toml";

/// Weekday alarm at 07:30 on Monday, Wednesday and Friday
pub const MORNING_ALARM: &str = r#"
[hour]
name = "Alarm hour"
initial = 7

[minute]
name = "Alarm minute"
initial = 30

[weekdays.mon]
name = "Alarm Monday"
initial = true

[weekdays.wed]
initial = true

[weekdays.fri]
initial = true

[[actions]]
type = "log"
message = "Wake up"
"#;

/// A temporary directory holding a schedule config
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn with_config(toml: &str) -> Self {
        let project = Self::empty();
        project.file(CONFIG_FILE, toml);
        project
    }

    pub fn file(&self, name: &str, content: &str) {
        std::fs::write(self.dir.path().join(name), content).unwrap();
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// `ontimed` without arguments, run inside the project directory
    pub fn ontimed(&self) -> Cli {
        let mut cmd = Command::cargo_bin("ontimed").unwrap();
        cmd.current_dir(self.path()).env_remove("RUST_LOG");
        Cli { cmd }
    }

    /// `ontimed --config ontime.toml`
    pub fn daemon(&self) -> Cli {
        self.ontimed().args(&["--config", CONFIG_FILE])
    }
}

pub struct Cli {
    cmd: Command,
}

impl Cli {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Feed lines to stdin, one command per entry
    pub fn stdin_lines(mut self, lines: &[&str]) -> Self {
        let mut input = lines.join("\n");
        input.push('\n');
        self.cmd.write_stdin(input);
        self
    }

    pub fn passes(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status,
            run.stdout(),
            run.stderr()
        );
        run
    }

    pub fn fails(mut self) -> Run {
        let output = self.cmd.output().unwrap();
        let run = Run { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct Run {
    output: Output,
}

impl Run {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).to_string()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).to_string()
    }

    pub fn stdout_has(self, expected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            stdout.contains(expected),
            "stdout does not contain {:?}\nstdout:\n{}",
            expected,
            stdout
        );
        self
    }

    pub fn stdout_lacks(self, unexpected: &str) -> Self {
        let stdout = self.stdout();
        assert!(
            !stdout.contains(unexpected),
            "stdout unexpectedly contains {:?}\nstdout:\n{}",
            unexpected,
            stdout
        );
        self
    }

    pub fn stderr_has(self, expected: &str) -> Self {
        let stderr = self.stderr();
        assert!(
            stderr.contains(expected),
            "stderr does not contain {:?}\nstderr:\n{}",
            expected,
            stderr
        );
        self
    }

    /// Compare the full stdout, line by line
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }
}
