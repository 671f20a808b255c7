//! Abstract actions a host can invoke on a path.
//!
//! The action vocabulary is closed: every name maps onto an [`Action`] variant and
//! unknown names are rejected when parsed, instead of being silently ignored.

use crate::core::error::TortoiseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Explore,
    Status,
    Commit,
    Sync,
    Log,
    Blame,
    Diff,
    Add,
    Remove,
    Revert,
}

impl Action {
    pub const ALL: [Action; 10] = [
        Action::Explore,
        Action::Status,
        Action::Commit,
        Action::Sync,
        Action::Log,
        Action::Blame,
        Action::Diff,
        Action::Add,
        Action::Remove,
        Action::Revert,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Explore => "explore",
            Action::Status => "status",
            Action::Commit => "commit",
            Action::Sync => "sync",
            Action::Log => "log",
            Action::Blame => "blame",
            Action::Diff => "diff",
            Action::Add => "add",
            Action::Remove => "remove",
            Action::Revert => "revert",
        }
    }

    /// Menu label shown by the host
    pub fn label(&self) -> &'static str {
        match self {
            Action::Explore => "Explore Repository...",
            Action::Status => "Check for Modifications...",
            Action::Commit => "Commit...",
            Action::Sync => "Sync...",
            Action::Log => "Log...",
            Action::Blame => "Blame...",
            Action::Diff => "Diff...",
            Action::Add => "Add...",
            Action::Remove => "Remove...",
            Action::Revert => "Revert...",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Action {
    type Err = TortoiseError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|action| action.as_str() == name)
            .ok_or_else(|| TortoiseError::unknown_action(name))
    }
}
