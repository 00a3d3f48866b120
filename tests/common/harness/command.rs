//! Fluent wrapper around assert_cmd::Command.

// Test utility; not every helper is used by every test binary
#![allow(dead_code)]

use assert_cmd::Command;
use serde_json::Value;
use std::path::Path;

/// Fluent wrapper around `assert_cmd::Command` for the `pressbook` binary.
pub struct PressbookCommand {
    args: Vec<String>,
    stdin: Option<String>,
}

impl PressbookCommand {
    pub fn new() -> Self {
        Self {
            args: Vec::new(),
            stdin: None,
        }
    }

    /// Sets the `--config` option.
    pub fn config(self, path: &Path) -> Self {
        self.args(["--config".to_string(), path.to_string_lossy().to_string()])
    }

    /// Adds arguments to the command.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.args
            .extend(args.into_iter().map(|s| s.as_ref().to_string()));
        self
    }

    /// Feeds the given lines to the shell on standard input.
    pub fn lines<I, S>(mut self, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut input = String::new();
        for line in lines {
            input.push_str(line.as_ref());
            input.push('\n');
        }
        self.stdin = Some(input);
        self
    }

    pub fn get_args(&self) -> &[String] {
        &self.args
    }

    // ===========================================
    // Flag Shortcuts
    // ===========================================

    pub fn sample(self) -> Self {
        self.args(["--sample"])
    }

    pub fn json(self) -> Self {
        self.args(["--format", "json"])
    }

    pub fn run_script(self, path: &Path) -> Self {
        self.args(["run".to_string(), path.to_string_lossy().to_string()])
    }

    /// Runs the command and returns an Assert for making assertions.
    #[allow(deprecated)]
    pub fn assert(self) -> assert_cmd::assert::Assert {
        let mut cmd = Command::cargo_bin("pressbook").expect("Failed to find pressbook binary");
        cmd.args(&self.args);
        cmd.env_remove("RUST_LOG");
        cmd.write_stdin(self.stdin.unwrap_or_default());
        cmd.assert()
    }

    /// Runs the command, expects success, and returns stdout as a string.
    pub fn output_success(self) -> String {
        let output = self.assert().success().get_output().stdout.clone();
        String::from_utf8(output).expect("Output was not valid UTF-8")
    }

    /// Runs the command, expects success, and parses each stdout line as JSON.
    pub fn output_json_lines(self) -> Vec<Value> {
        self.output_success()
            .lines()
            .map(|line| serde_json::from_str(line).expect("Failed to parse line as JSON"))
            .collect()
    }
}

impl Default for PressbookCommand {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lines_join_with_newlines() {
        let cmd = PressbookCommand::new().lines(["list -a", "exit"]);
        assert_eq!(cmd.stdin.as_deref(), Some("list -a\nexit\n"));
    }

    #[test]
    fn shortcuts_append_flags() {
        let cmd = PressbookCommand::new().sample().json();
        assert_eq!(cmd.get_args(), ["--sample", "--format", "json"]);
    }
}
