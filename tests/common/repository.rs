//! Test repository and settings setup utilities
//!
//! Provides functions for laying out marker-directory repositories, fake tool
//! scripts and settings files inside a temporary directory.

#![allow(dead_code)]

use assert_cmd::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Test workspace: a repository plus room for settings and fake tools next to it.
/// The TempDir must be kept alive for the duration of the test.
pub struct TestRepo {
    pub temp_dir: TempDir,
    pub path: PathBuf,
}

impl TestRepo {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Settings file used by [`tortoise_command`]
    pub fn settings_file(&self) -> PathBuf {
        self.temp_dir.path().join("settings.json")
    }

    /// Directory for fake tool scripts, outside the repository
    pub fn tools_dir(&self) -> PathBuf {
        self.temp_dir.path().join("tools")
    }
}

/// Sets up a repository whose root holds the given marker directory (`.git`, `.hg`, `.svn`)
pub fn setup_test_repo(marker: &str) -> anyhow::Result<TestRepo> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("repo");
    fs::create_dir_all(path.join(marker))?;
    fs::create_dir_all(temp_dir.path().join("tools"))?;

    Ok(TestRepo { temp_dir, path })
}

/// Creates a file (and its parent directories) inside the repository
pub fn create_file(repo_path: &Path, relative: &str, content: &str) -> anyhow::Result<PathBuf> {
    let file = repo_path.join(relative);
    if let Some(parent) = file.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file, content)?;
    Ok(file)
}

/// Writes the settings file from a JSON value
pub fn write_settings(repo: &TestRepo, settings: serde_json::Value) -> anyhow::Result<()> {
    fs::write(repo.settings_file(), serde_json::to_string_pretty(&settings)?)?;
    Ok(())
}

/// Writes an executable shell script into the tools directory
#[cfg(unix)]
pub fn write_script(repo: &TestRepo, name: &str, body: &str) -> anyhow::Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let script = repo.tools_dir().join(name);
    fs::write(&script, format!("#!/bin/sh\n{body}\n"))?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;
    Ok(script)
}

/// The launcher binary configured with the repository's settings file and no colors
pub fn tortoise_command(repo: &TestRepo) -> anyhow::Result<Command> {
    let mut cmd = Command::cargo_bin("tortoise-launcher")?;
    cmd.arg("--config")
        .arg(repo.settings_file())
        .env("NO_COLOR", "1")
        .current_dir(repo.path());
    Ok(cmd)
}
