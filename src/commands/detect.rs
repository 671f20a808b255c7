use crate::commands::host::absolute_path;
use crate::core::{
    dispatcher::detect,
    error::{Result, TortoiseError},
};
use colored::*;
use std::path::Path;

/// Print the VCS owning `path` and its repository root
pub fn execute_detect(path: &Path) -> Result<()> {
    let path = absolute_path(path)?;
    let detection = detect(&path).ok_or_else(|| TortoiseError::not_under_vcs(&path))?;

    println!(
        "{} {} {}",
        detection.kind.to_string().green(),
        "working copy at".bright_black(),
        detection.root.display().to_string().white()
    );
    Ok(())
}
