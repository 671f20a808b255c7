//! Single-character VCS status codes.
//!
//! This module defines [`StatusCode`], the one signal the availability rules consume.
//! Each VCS reports status with its own letter alphabet, so the code wraps the raw
//! character instead of enumerating a closed set. An empty code means clean/unchanged.
//!
//! # Public API
//! - [`StatusCode`]: Raw status letter, or clean
//!
//! # Well-known codes
//! - **`M`** modified, **`A`** added, **`R`** renamed, **`C`** conflicted
//! - **`U`** unmerged/updated, **`D`** deleted, **`?`** untracked
//! - **clean** (`''`) tracked and unchanged

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StatusCode(Option<char>);

impl StatusCode {
    pub const CLEAN: StatusCode = StatusCode(None);
    pub const MODIFIED: StatusCode = StatusCode(Some('M'));
    pub const ADDED: StatusCode = StatusCode(Some('A'));
    pub const RENAMED: StatusCode = StatusCode(Some('R'));
    pub const CONFLICTED: StatusCode = StatusCode(Some('C'));
    pub const UNMERGED: StatusCode = StatusCode(Some('U'));
    pub const DELETED: StatusCode = StatusCode(Some('D'));
    pub const UNTRACKED: StatusCode = StatusCode(Some('?'));

    /// Wrap a raw status character verbatim
    pub fn from_char(code: char) -> Self {
        StatusCode(Some(code))
    }

    /// Wrap a status character, upper-casing letters
    pub fn from_char_upper(code: char) -> Self {
        StatusCode(Some(code.to_ascii_uppercase()))
    }

    pub fn as_char(&self) -> Option<char> {
        self.0
    }

    pub fn is_clean(&self) -> bool {
        self.0.is_none()
    }

    /// Get human-readable description for status
    pub fn description(&self) -> &'static str {
        match self.0 {
            None => "unchanged",
            Some('M') => "modified",
            Some('A') => "added",
            Some('R') => "renamed",
            Some('C') => "conflicted",
            Some('U') => "unmerged",
            Some('D') => "deleted",
            Some('?') => "untracked",
            Some('!') => "missing",
            Some('I') => "ignored",
            Some(_) => "other",
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(code) => write!(f, "{code}"),
            None => Ok(()),
        }
    }
}
