use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A config file living in its own temporary directory.
pub struct TempConfig {
    _dir: TempDir,
    path: PathBuf,
}

impl TempConfig {
    pub fn with_contents(contents: &str) -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).expect("Failed to write config");
        Self { _dir: dir, path }
    }

    /// A path inside a fresh temp dir where no file exists.
    pub fn missing() -> Self {
        let dir = TempDir::new().expect("Failed to create temp dir");
        let path = dir.path().join("absent.toml");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
