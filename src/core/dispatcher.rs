//! Routing host requests to the right VCS adapter.
//!
//! The [`Dispatcher`] is what a host talks to. Given a path, it probes
//! [`VcsKind::PROBE_ORDER`] for a repository root, builds the matching
//! [`GuiAdapter`], and either launches an action or answers the menu predicates.
//!
//! # Error policy
//! - **Detection misses** are ordinary outcomes and never reported
//! - **Dispatch failures** (`run_reported`) go to the [`Notifier`] once
//! - **Predicates** swallow every failure and answer "not available"

use crate::core::action::Action;
use crate::core::adapter::GuiAdapter;
use crate::core::availability::{rule_for, Availability, StatusFilter};
use crate::core::binary::BinaryResolver;
use crate::core::config::Settings;
use crate::core::error::{Result, TortoiseError};
use crate::core::locator::find_root;
use crate::core::notify::{ConsoleNotifier, Notifier};
use crate::core::process::{ProcessRunner, SystemRunner};
use crate::core::status_cache::StatusCache;
use crate::core::status_code::StatusCode;
use crate::core::vcs::VcsKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// A path's owning VCS and its repository root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Detection {
    pub kind: VcsKind,
    pub root: PathBuf,
}

/// Probe `path` for each supported VCS in priority order
pub fn detect(path: &Path) -> Option<Detection> {
    VcsKind::PROBE_ORDER.into_iter().find_map(|kind| {
        find_root(kind.marker(), path, kind.locate_mode()).map(|root| Detection { kind, root })
    })
}

/// The path an action operates on: the first explicit path, else the active file
pub fn target_path<'a>(paths: &'a [PathBuf], active: Option<&'a Path>) -> Option<&'a Path> {
    paths.first().map(PathBuf::as_path).or(active)
}

pub struct Dispatcher {
    settings: Settings,
    resolver: BinaryResolver,
    cache: Arc<StatusCache>,
    runner: Arc<dyn ProcessRunner>,
    notifier: Arc<dyn Notifier>,
}

impl Dispatcher {
    pub fn new(settings: Settings, resolver: BinaryResolver, cache: Arc<StatusCache>) -> Self {
        Self {
            settings,
            resolver,
            cache,
            runner: Arc::new(SystemRunner),
            notifier: Arc::new(ConsoleNotifier),
        }
    }

    pub fn with_runner(mut self, runner: Arc<dyn ProcessRunner>) -> Self {
        self.runner = runner;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn cache(&self) -> &StatusCache {
        &self.cache
    }

    /// Build the adapter for the VCS owning `path`.
    ///
    /// A missing path, or one not on disk, is an unsaved file. Repository detection
    /// always happens before binary resolution.
    pub fn resolve(&self, path: Option<&Path>) -> Result<GuiAdapter> {
        let path = path
            .filter(|path| path.exists())
            .ok_or(TortoiseError::UnsavedFile)?;
        let detection = detect(path).ok_or_else(|| TortoiseError::not_under_vcs(path))?;
        log::debug!(
            "{} belongs to a {} working copy at {}",
            path.display(),
            detection.kind,
            detection.root.display()
        );

        GuiAdapter::with_root(
            detection.kind,
            detection.root,
            &self.settings,
            &self.resolver,
            Arc::clone(&self.runner),
        )
    }

    /// Run `action` on the first of `paths`, or on `active` when no paths are given
    pub fn run(&self, action: Action, paths: &[PathBuf], active: Option<&Path>) -> Result<()> {
        let path = target_path(paths, active);
        let adapter = self.resolve(path)?;
        let explicit = !paths.is_empty();

        let target = path.filter(|path| match action {
            Action::Commit | Action::Status | Action::Sync => path.is_dir(),
            Action::Explore | Action::Log | Action::Blame | Action::Diff => explicit,
            Action::Add | Action::Remove | Action::Revert => true,
        });

        adapter.perform(action, target)
    }

    /// Like [`Dispatcher::run`], but failures are reported instead of returned
    pub fn run_reported(&self, action: Action, paths: &[PathBuf], active: Option<&Path>) -> bool {
        match self.run(action, paths, active) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("{action} failed: {e}");
                self.notifier.error(&e.to_string());
                false
            }
        }
    }

    /// Cached status code of `path`
    pub fn status(&self, path: &Path) -> Result<StatusCode> {
        let adapter = self.resolve(Some(path))?;
        Ok(adapter.get_status(path, &self.cache, self.notifier.as_ref()))
    }

    pub fn is_visible(&self, action: Action, paths: &[PathBuf], active: Option<&Path>) -> bool {
        if !self.settings.enable_menus {
            return false;
        }
        self.evaluate(action, target_path(paths, active), |availability| availability.visible)
            .unwrap_or_else(|e| {
                log::debug!("{action} hidden: {e}");
                false
            })
    }

    pub fn is_enabled(&self, action: Action, paths: &[PathBuf], active: Option<&Path>) -> bool {
        self.evaluate(action, target_path(paths, active), |availability| availability.enabled)
            .unwrap_or_else(|e| {
                log::debug!("{action} disabled: {e}");
                false
            })
    }

    /// Menu caption, prefixed with the detected tool name when `show_vcs_name` is set
    pub fn description(&self, action: Action, paths: &[PathBuf], active: Option<&Path>) -> String {
        let prefix = target_path(paths, active)
            .filter(|_| self.settings.show_vcs_name)
            .and_then(detect)
            .map(|detection| detection.kind.tool_name())
            .unwrap_or("Tortoise");
        format!("{prefix} {}", action.label())
    }

    fn evaluate<F>(&self, action: Action, path: Option<&Path>, pick: F) -> Result<bool>
    where
        F: Fn(Availability) -> StatusFilter,
    {
        let path = path.ok_or(TortoiseError::UnsavedFile)?;
        let adapter = self.resolve(Some(path))?;

        let Some(availability) = rule_for(action, adapter.kind()).for_target(path.is_dir()) else {
            return Ok(false);
        };

        let filter = pick(availability);
        if !filter.needs_status() {
            return Ok(true);
        }

        let status = adapter.get_status(path, &self.cache, self.notifier.as_ref());
        Ok(filter.allows(status))
    }
}
