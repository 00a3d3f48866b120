//! Isolated test environment with temp directory.

#![allow(dead_code)]

use super::PressbookCommand;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test environment with its own config file.
///
/// Every command built from the environment passes `--config`, so the
/// user's real configuration never leaks into a test.
pub struct TestEnv {
    _temp_dir: TempDir,
    root: PathBuf,
}

impl TestEnv {
    /// Creates an environment with an empty config file.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let root = temp_dir.path().to_path_buf();
        let env = Self {
            _temp_dir: temp_dir,
            root,
        };
        env.write_config("");
        env
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> PathBuf {
        self.root.join("config.toml")
    }

    /// Replaces the config file contents.
    pub fn write_config(&self, contents: &str) {
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Writes a script file and returns its path.
    pub fn write_script(&self, name: &str, lines: &[&str]) -> PathBuf {
        let path = self.root.join(name);
        let mut contents = lines.join("\n");
        contents.push('\n');
        std::fs::write(&path, contents).expect("Failed to write script");
        path
    }

    /// Creates a PressbookCommand configured for this test environment.
    pub fn cmd(&self) -> PressbookCommand {
        PressbookCommand::new().config(&self.config_path())
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_env_writes_empty_config() {
        let env = TestEnv::new();
        assert!(env.config_path().exists());
        assert_eq!(std::fs::read_to_string(env.config_path()).unwrap(), "");
    }

    #[test]
    fn test_env_cleanup_on_drop() {
        let path = {
            let env = TestEnv::new();
            env.root().to_path_buf()
        };
        assert!(!path.exists(), "temp directory should be cleaned up on drop");
    }

    #[test]
    fn write_script_ends_with_newline() {
        let env = TestEnv::new();
        let path = env.write_script("s.txt", &["list -a", "exit"]);
        assert_eq!(std::fs::read_to_string(path).unwrap(), "list -a\nexit\n");
    }
}
