//! Predefined repository scenarios
//!
//! Each scenario wires fake GUI and CLI scripts into the settings file so commands
//! run end to end without TortoiseSVN, TortoiseGit or TortoiseHg installed.

#![allow(dead_code)]

use super::repository::*;
use serde_json::json;
use std::path::PathBuf;

/// File name the fake GUI tool writes its arguments to
pub const LAUNCH_RECORD: &str = "launched.txt";

/// Scenario: Git repository with `src/foo.txt`, a recording GUI tool and a git
/// script that prints `status_output` for every query
#[cfg(unix)]
pub fn git_repo_with_fake_tools(status_output: &str) -> anyhow::Result<(TestRepo, PathBuf)> {
    let repo = setup_test_repo(".git")?;
    let file = create_file(repo.path(), "src/foo.txt", "foo\n")?;

    let record = repo.temp_dir.path().join(LAUNCH_RECORD);
    let gui = write_script(
        &repo,
        "TortoiseProc",
        &format!("echo \"$*\" > \"{}\"", record.display()),
    )?;
    let git = write_script(&repo, "git", &format!("printf '%s\\n' '{status_output}'"))?;

    write_settings(
        &repo,
        json!({
            "git_tortoiseproc_path": gui,
            "git_cli_path": git,
        }),
    )?;

    Ok((repo, file))
}

/// Scenario: Mercurial repository whose `hg` script (beside the GUI script) prints
/// `status_output`
#[cfg(unix)]
pub fn hg_repo_with_fake_tools(status_output: &str) -> anyhow::Result<(TestRepo, PathBuf)> {
    let repo = setup_test_repo(".hg")?;
    let file = create_file(repo.path(), "src/foo.txt", "foo\n")?;

    let gui = write_script(&repo, "thgw", "exit 0")?;
    write_script(&repo, "hg", &format!("printf '%s\\n' '{status_output}'"))?;

    write_settings(&repo, json!({ "hg_hgtk_path": gui }))?;

    Ok((repo, file))
}

/// Scenario: Subversion working copy with `src/foo.txt`, a recording TortoiseSVN and an
/// `svn` script (beside it) that prints `status_output`
#[cfg(unix)]
pub fn svn_repo_with_fake_tools(status_output: &str) -> anyhow::Result<(TestRepo, PathBuf)> {
    let repo = setup_test_repo(".svn")?;
    let file = create_file(repo.path(), "src/foo.txt", "foo\n")?;

    let record = repo.temp_dir.path().join(LAUNCH_RECORD);
    let gui = write_script(
        &repo,
        "TortoiseProc",
        &format!("echo \"$*\" > \"{}\"", record.display()),
    )?;
    write_script(&repo, "svn", &format!("printf '%s\\n' '{status_output}'"))?;

    write_settings(&repo, json!({ "svn_tortoiseproc_path": gui }))?;

    Ok((repo, file))
}

/// Scenario: Git repository with no tools configured at all
pub fn git_repo_without_tools() -> anyhow::Result<(TestRepo, PathBuf)> {
    let repo = setup_test_repo(".git")?;
    let file = create_file(repo.path(), "src/foo.txt", "foo\n")?;
    write_settings(&repo, json!({}))?;
    Ok((repo, file))
}
