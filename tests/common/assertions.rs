//! Common assertion helpers for test output validation

#![allow(dead_code)]

use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::{Duration, Instant};

/// Error printed when a path is under no supported VCS
pub fn not_under_vcs() -> impl Predicate<str> {
    predicates::str::contains("does not appear to be in a SVN, Git or Mercurial working copy")
}

/// Remediation message for a missing executable naming its setting
pub fn binary_not_found(config_key: &str) -> impl Predicate<str> {
    predicates::str::contains("Unable to find")
        .and(predicates::str::contains(format!("\"{config_key}\"")))
        .and(predicates::str::contains("Example:"))
}

/// A menu line for an enabled action
pub fn has_enabled_action(name: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!(r"(?m)^  ● {name}\s")).expect("valid regex")
}

/// A menu line for a visible but disabled action
pub fn has_disabled_action(name: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!(r"(?m)^  ○ {name}\s+.*\(disabled\)$")).expect("valid regex")
}

/// Any menu line for the action
pub fn has_action(name: &str) -> impl Predicate<str> {
    predicates::str::is_match(format!(r"(?m)^  [●○] {name}\s")).expect("valid regex")
}

/// Waits for a detached child to write `file`, returning its trimmed content
pub fn wait_for_file(file: &Path) -> anyhow::Result<String> {
    let deadline = Instant::now() + Duration::from_secs(10);
    loop {
        if let Ok(content) = fs::read_to_string(file) {
            if !content.is_empty() {
                return Ok(content.trim_end().to_string());
            }
        }
        if Instant::now() > deadline {
            anyhow::bail!("{} was never written", file.display());
        }
        thread::sleep(Duration::from_millis(50));
    }
}
