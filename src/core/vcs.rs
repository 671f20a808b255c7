//! Supported version control systems and their per-tool conventions.

use crate::core::action::Action;
use crate::core::locator::LocateMode;
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VcsKind {
    Subversion,
    Git,
    Mercurial,
}

impl VcsKind {
    /// Detection priority: the first kind whose marker is found wins
    pub const PROBE_ORDER: [VcsKind; 3] = [VcsKind::Mercurial, VcsKind::Git, VcsKind::Subversion];

    pub fn marker(&self) -> &'static str {
        match self {
            VcsKind::Subversion => ".svn",
            VcsKind::Git => ".git",
            VcsKind::Mercurial => ".hg",
        }
    }

    pub fn locate_mode(&self) -> LocateMode {
        match self {
            VcsKind::Subversion => LocateMode::OutermostContiguous,
            VcsKind::Git | VcsKind::Mercurial => LocateMode::Nearest,
        }
    }

    /// Name of the GUI tool family, used in menu descriptions and error messages
    pub fn tool_name(&self) -> &'static str {
        match self {
            VcsKind::Subversion => "TortoiseSVN",
            VcsKind::Git => "TortoiseGit",
            VcsKind::Mercurial => "TortoiseHg",
        }
    }

    /// Settings key overriding the GUI binary location
    pub fn gui_config_key(&self) -> &'static str {
        match self {
            VcsKind::Subversion => "svn_tortoiseproc_path",
            VcsKind::Git => "git_tortoiseproc_path",
            VcsKind::Mercurial => "hg_hgtk_path",
        }
    }

    /// Translate an abstract action into the GUI tool's own command name
    pub fn map_command(&self, action: Action) -> &'static str {
        match (self, action) {
            (VcsKind::Subversion, Action::Status) => "repostatus",
            (VcsKind::Subversion, Action::Sync) => "update",
            (VcsKind::Git, Action::Status) => "repostatus",
            (VcsKind::Mercurial, Action::Sync) => "synch",
            (VcsKind::Mercurial, Action::Diff) => "vdiff",
            (_, action) => action.as_str(),
        }
    }
}

impl fmt::Display for VcsKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            VcsKind::Subversion => "Subversion",
            VcsKind::Git => "Git",
            VcsKind::Mercurial => "Mercurial",
        };
        f.write_str(name)
    }
}
