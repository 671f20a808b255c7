//! VCS command-line status backends.
//!
//! Each backend is bound to one repository root and one CLI binary, and turns that
//! tool's short-status output into a single [`StatusCode`] for one path.
//!
//! # Public API
//! - [`StatusBackend`]: `check_status(path)` seam used by the status cache
//! - [`SvnBackend`], [`GitBackend`], [`HgBackend`]: per-tool implementations
//! - [`path_suffix_pattern`]: anchored, separator-agnostic matcher for status lines
//!
//! # Parsing rules
//! - **Directories** (Git/Hg): a one-entry log query; no history means untracked (`?`)
//! - **SVN files and directories**: `svn status <path>`, first column of the line
//!   ending in the root-relative path, verbatim
//! - **Git files**: `git status --short`, first non-space column of the matching
//!   line, upper-cased
//! - **Hg files**: `hg status <path>`, first column of the first line, upper-cased
//!
//! Suffix matching means `sub/foo.txt` also matches a query for `foo.txt` when the
//! query's relative path is itself `foo.txt`; the first matching line wins.

use crate::core::error::Result;
use crate::core::process::ProcessRunner;
use crate::core::status_code::StatusCode;
use regex::Regex;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

pub trait StatusBackend {
    fn check_status(&self, path: &Path) -> Result<StatusCode>;
}

/// Build a regex matching a status line that ends with `relative`, whichever
/// separator the tool printed.
pub fn path_suffix_pattern(relative: &str) -> Result<Regex> {
    let pattern = relative
        .split(['/', '\\'])
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"[/\\]");
    Ok(Regex::new(&format!("{pattern}$"))?)
}

/// `path` relative to `root` as a plain string, or the path itself when outside the root
fn relative_to_root(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .into_owned()
}

/// First line of `output` that belongs to `path`.
///
/// Querying the root itself accepts the first line unconditionally.
fn find_status_line<'a>(
    output: &'a str,
    path: &Path,
    root: &Path,
    min_len: usize,
) -> Result<Option<&'a str>> {
    let matcher = path_suffix_pattern(&relative_to_root(path, root))?;
    let is_root = path == root;

    Ok(output
        .lines()
        .filter(|line| line.chars().count() >= min_len)
        .find(|line| is_root || matcher.is_match(line)))
}

fn log_has_history(output: &str) -> StatusCode {
    if output.trim().is_empty() {
        StatusCode::UNTRACKED
    } else {
        StatusCode::CLEAN
    }
}

fn os_args<const N: usize>(args: [&str; N], path: &Path) -> Vec<OsString> {
    let mut argv: Vec<OsString> = args.into_iter().map(OsString::from).collect();
    argv.push(path.as_os_str().to_os_string());
    argv
}

pub struct SvnBackend {
    root: PathBuf,
    svn_path: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl SvnBackend {
    pub fn new(
        root: impl Into<PathBuf>,
        svn_path: impl Into<PathBuf>,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self {
            root: root.into(),
            svn_path: svn_path.into(),
            runner,
        }
    }

    pub fn parse_status(&self, output: &str, path: &Path) -> Result<StatusCode> {
        Ok(find_status_line(output, path, &self.root, 1)?
            .and_then(|line| line.chars().next())
            .map(StatusCode::from_char)
            .unwrap_or(StatusCode::CLEAN))
    }
}

impl StatusBackend for SvnBackend {
    fn check_status(&self, path: &Path) -> Result<StatusCode> {
        let output = self
            .runner
            .capture(&self.svn_path, &os_args(["status"], path), &self.root)?;
        self.parse_status(&output, path)
    }
}

pub struct GitBackend {
    root: PathBuf,
    git_path: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl GitBackend {
    pub fn new(
        root: impl Into<PathBuf>,
        git_path: impl Into<PathBuf>,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self {
            root: root.into(),
            git_path: git_path.into(),
            runner,
        }
    }

    pub fn parse_status(&self, output: &str, path: &Path) -> Result<StatusCode> {
        let Some(line) = find_status_line(output, path, &self.root, 2)? else {
            return Ok(StatusCode::CLEAN);
        };

        // Short format left-pads the index column when only the worktree column is set
        Ok(line
            .chars()
            .find(|c| *c != ' ')
            .map(StatusCode::from_char_upper)
            .unwrap_or(StatusCode::CLEAN))
    }

    fn check_status_dir(&self, path: &Path) -> Result<StatusCode> {
        let output = self
            .runner
            .capture(&self.git_path, &os_args(["log", "-1"], path), &self.root)?;
        Ok(log_has_history(&output))
    }

    fn check_status_file(&self, path: &Path) -> Result<StatusCode> {
        let args: Vec<OsString> = vec!["status".into(), "--short".into()];
        let output = self.runner.capture(&self.git_path, &args, &self.root)?;
        self.parse_status(&output, path)
    }
}

impl StatusBackend for GitBackend {
    fn check_status(&self, path: &Path) -> Result<StatusCode> {
        if path.is_dir() {
            self.check_status_dir(path)
        } else {
            self.check_status_file(path)
        }
    }
}

pub struct HgBackend {
    root: PathBuf,
    hg_path: PathBuf,
    runner: Arc<dyn ProcessRunner>,
}

impl HgBackend {
    pub fn new(
        root: impl Into<PathBuf>,
        hg_path: impl Into<PathBuf>,
        runner: Arc<dyn ProcessRunner>,
    ) -> Self {
        Self {
            root: root.into(),
            hg_path: hg_path.into(),
            runner,
        }
    }

    pub fn parse_status(output: &str) -> StatusCode {
        output
            .lines()
            .find_map(|line| line.chars().next())
            .map(StatusCode::from_char_upper)
            .unwrap_or(StatusCode::CLEAN)
    }

    fn check_status_dir(&self, path: &Path) -> Result<StatusCode> {
        let output = self
            .runner
            .capture(&self.hg_path, &os_args(["log", "-l", "1"], path), &self.root)?;
        Ok(log_has_history(&output))
    }

    fn check_status_file(&self, path: &Path) -> Result<StatusCode> {
        let output = self
            .runner
            .capture(&self.hg_path, &os_args(["status"], path), &self.root)?;
        Ok(Self::parse_status(&output))
    }
}

impl StatusBackend for HgBackend {
    fn check_status(&self, path: &Path) -> Result<StatusCode> {
        if path.is_dir() {
            self.check_status_dir(path)
        } else {
            self.check_status_file(path)
        }
    }
}
