//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`TortoiseError`] which covers every failure the launcher can
//! surface to a host. It uses `thiserror` for ergonomic error definitions and includes
//! named constructors for the variants that carry structured context.
//!
//! # Public API
//! - [`TortoiseError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, TortoiseError>`
//!
//! # Error Categories
//! - **Repository detection**: path is not under the probed VCS, or under none at all
//! - **Binary resolution**: a GUI or CLI tool could not be located
//! - **Dispatch**: unsaved paths, unknown action names, paths outside the root
//! - **Process**: child process spawn failures
//! - **Settings**: unreadable or malformed settings files

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for tortoise-launcher
#[derive(Error, Debug)]
pub enum TortoiseError {
    // Repository detection errors
    #[error("Unable to find \"{marker}\" directory.")]
    RepositoryNotFound { marker: String, path: PathBuf },

    #[error("The current file does not appear to be in a SVN, Git or Mercurial working copy.")]
    NotUnderVcs { path: PathBuf },

    #[error("Unable to run commands on an unsaved file")]
    UnsavedFile,

    // Binary resolution errors
    #[error(
        "Unable to find {label} executable.\n\n\
         Please add the path to {description} to the setting \"{config_key}\" in \"{}\".\n\n\
         Example:\n\n{example}",
        .settings_file.display()
    )]
    BinaryNotFound {
        label: String,
        description: String,
        config_key: String,
        settings_file: PathBuf,
        example: String,
    },

    // Dispatch errors
    #[error("Unknown action: '{name}'")]
    UnknownAction { name: String },

    #[error("Path '{}' is not inside repository root '{}'", .path.display(), .root.display())]
    PathOutsideRoot { path: PathBuf, root: PathBuf },

    // Process errors
    #[error("Failed to start '{}': {source}", .program.display())]
    ProcessSpawn {
        program: PathBuf,
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid status pattern: {0}")]
    Regex(#[from] regex::Error),

    // Settings errors
    #[error("Failed to read settings file '{}': {source}", .path.display())]
    SettingsReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse settings file '{}': {source}", .path.display())]
    SettingsParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using TortoiseError
pub type Result<T> = std::result::Result<T, TortoiseError>;

impl TortoiseError {
    /// Create a repository not found error for a marker directory
    pub fn repository_not_found(marker: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::RepositoryNotFound {
            marker: marker.into(),
            path: path.into(),
        }
    }

    /// Create a not-under-any-VCS error
    pub fn not_under_vcs(path: impl Into<PathBuf>) -> Self {
        Self::NotUnderVcs { path: path.into() }
    }

    /// Create a binary not found error with remediation details
    pub fn binary_not_found(
        label: impl Into<String>,
        description: impl Into<String>,
        config_key: impl Into<String>,
        settings_file: impl Into<PathBuf>,
        example: impl Into<String>,
    ) -> Self {
        Self::BinaryNotFound {
            label: label.into(),
            description: description.into(),
            config_key: config_key.into(),
            settings_file: settings_file.into(),
            example: example.into(),
        }
    }

    /// Create an unknown action error
    pub fn unknown_action(name: impl Into<String>) -> Self {
        Self::UnknownAction { name: name.into() }
    }

    /// Create a path outside root error
    pub fn path_outside_root(path: impl Into<PathBuf>, root: impl Into<PathBuf>) -> Self {
        Self::PathOutsideRoot {
            path: path.into(),
            root: root.into(),
        }
    }

    /// Create a process spawn error
    pub fn process_spawn(program: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ProcessSpawn {
            program: program.into(),
            source,
        }
    }

    /// Create a settings read failed error
    pub fn settings_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::SettingsReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a settings parse failed error
    pub fn settings_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::SettingsParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Repository detection misses are expected control flow, not user-facing failures
    pub fn is_repository_not_found(&self) -> bool {
        matches!(self, Self::RepositoryNotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TortoiseError::UnsavedFile;
        assert_eq!(err.to_string(), "Unable to run commands on an unsaved file");
    }

    #[test]
    fn test_repository_not_found_error() {
        let err = TortoiseError::repository_not_found(".hg", "/tmp/project");
        assert_eq!(err.to_string(), "Unable to find \".hg\" directory.");
        assert!(err.is_repository_not_found());
    }

    #[test]
    fn test_not_under_vcs_error() {
        let err = TortoiseError::not_under_vcs("/tmp/file.txt");
        assert!(err.to_string().contains("SVN, Git or Mercurial"));
        assert!(!err.is_repository_not_found());
    }

    #[test]
    fn test_binary_not_found_error() {
        let err = TortoiseError::binary_not_found(
            "TortoiseGit",
            "TortoiseProc.exe",
            "git_tortoiseproc_path",
            "/home/user/.config/tortoise-launcher/settings.json",
            "{\"git_tortoiseproc_path\": \"C:\\\\Program Files\\\\TortoiseGit\"}",
        );
        let message = err.to_string();
        assert!(message.starts_with("Unable to find TortoiseGit executable."));
        assert!(message.contains("Please add the path to TortoiseProc.exe"));
        assert!(message.contains("\"git_tortoiseproc_path\""));
        assert!(message.contains("settings.json"));
        assert!(message.contains("Example:"));
    }

    #[test]
    fn test_unknown_action_error() {
        let err = TortoiseError::unknown_action("rebase");
        assert_eq!(err.to_string(), "Unknown action: 'rebase'");
    }

    #[test]
    fn test_path_outside_root_error() {
        let err = TortoiseError::path_outside_root("/a/b", "/c");
        assert!(err.to_string().contains("/a/b"));
        assert!(err.to_string().contains("/c"));
    }

    #[test]
    fn test_process_spawn_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "no such file");
        let err = TortoiseError::process_spawn("/usr/bin/svn", io_err);
        assert!(err.to_string().contains("/usr/bin/svn"));
        assert!(err.to_string().contains("no such file"));
    }

    #[test]
    fn test_settings_parse_failed() {
        let json_err = serde_json::from_str::<serde_json::Value>("{ invalid json").unwrap_err();
        let err = TortoiseError::settings_parse_failed("/test/settings.json", json_err);
        assert!(err.to_string().contains("/test/settings.json"));
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_settings_read_failed() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "access denied");
        let err = TortoiseError::settings_read_failed("/test/settings.json", io_err);
        assert!(err.to_string().contains("access denied"));
    }
}
