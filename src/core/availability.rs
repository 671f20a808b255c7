//! Declarative visibility and enablement rules for actions.
//!
//! Each action has separate rules for directories and files. A target kind without
//! a rule means the action does not apply there at all. Rules that name a status set
//! require a status lookup; [`StatusFilter::Any`] does not, so evaluating it never
//! spawns a process.

use crate::core::action::Action;
use crate::core::status_code::StatusCode;
use crate::core::vcs::VcsKind;

/// Statuses of files known to the VCS (including freshly added ones)
pub const TRACKED: &[StatusCode] = &[
    StatusCode::ADDED,
    StatusCode::CLEAN,
    StatusCode::MODIFIED,
    StatusCode::RENAMED,
    StatusCode::CONFLICTED,
    StatusCode::UNMERGED,
];

/// Statuses with history in the repository
pub const COMMITTED: &[StatusCode] = &[
    StatusCode::CLEAN,
    StatusCode::MODIFIED,
    StatusCode::RENAMED,
    StatusCode::CONFLICTED,
    StatusCode::UNMERGED,
];

/// Statuses carrying local changes
pub const CHANGED: &[StatusCode] = &[
    StatusCode::ADDED,
    StatusCode::MODIFIED,
    StatusCode::RENAMED,
    StatusCode::CONFLICTED,
    StatusCode::UNMERGED,
];

pub const ADDABLE: &[StatusCode] = &[StatusCode::DELETED, StatusCode::UNTRACKED];

pub const UNCHANGED: &[StatusCode] = &[StatusCode::CLEAN];

/// TortoiseHg's visual diff only handles modified files
pub const HG_DIFFABLE: &[StatusCode] = &[StatusCode::MODIFIED];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Any,
    OneOf(&'static [StatusCode]),
}

impl StatusFilter {
    pub fn needs_status(&self) -> bool {
        matches!(self, StatusFilter::OneOf(_))
    }

    pub fn allows(&self, status: StatusCode) -> bool {
        match self {
            StatusFilter::Any => true,
            StatusFilter::OneOf(codes) => codes.contains(&status),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Availability {
    pub visible: StatusFilter,
    pub enabled: StatusFilter,
}

impl Availability {
    const ALWAYS: Availability = Availability {
        visible: StatusFilter::Any,
        enabled: StatusFilter::Any,
    };

    const fn new(visible: StatusFilter, enabled: StatusFilter) -> Self {
        Self { visible, enabled }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionRule {
    pub directory: Option<Availability>,
    pub file: Option<Availability>,
}

impl ActionRule {
    pub fn for_target(&self, is_dir: bool) -> Option<Availability> {
        if is_dir {
            self.directory
        } else {
            self.file
        }
    }
}

/// Availability rule for `action` in a `kind` working copy
pub fn rule_for(action: Action, kind: VcsKind) -> ActionRule {
    use StatusFilter::{Any, OneOf};

    let (directory, file) = match action {
        Action::Explore => (Some(Availability::ALWAYS), Some(Availability::ALWAYS)),
        Action::Commit | Action::Status | Action::Sync => (Some(Availability::ALWAYS), None),
        Action::Log => (
            Some(Availability::ALWAYS),
            Some(Availability::new(OneOf(TRACKED), OneOf(COMMITTED))),
        ),
        Action::Blame => (None, Some(Availability::new(OneOf(TRACKED), OneOf(TRACKED)))),
        Action::Diff => {
            let diffable = match kind {
                VcsKind::Mercurial => HG_DIFFABLE,
                VcsKind::Git | VcsKind::Subversion => CHANGED,
            };
            (
                Some(Availability::ALWAYS),
                Some(Availability::new(OneOf(TRACKED), OneOf(diffable))),
            )
        }
        Action::Add => (
            Some(Availability::new(OneOf(ADDABLE), Any)),
            Some(Availability::new(OneOf(ADDABLE), Any)),
        ),
        Action::Remove => (
            Some(Availability::new(OneOf(TRACKED), Any)),
            Some(Availability::new(OneOf(TRACKED), OneOf(UNCHANGED))),
        ),
        Action::Revert => (
            Some(Availability::new(OneOf(TRACKED), Any)),
            Some(Availability::new(OneOf(TRACKED), OneOf(CHANGED))),
        ),
    };

    ActionRule { directory, file }
}
