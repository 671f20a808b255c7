//! Tortoise Launcher - launch TortoiseSVN, TortoiseGit and TortoiseHg from any host.
//!
//! Given a file or directory, the library works out which version control system owns
//! it, finds the matching Tortoise GUI tool, and launches it for an abstract action
//! (commit, log, diff, ...). It also answers the questions a host menu needs: which
//! actions are visible and enabled for a path, based on cached status codes from the
//! VCS command-line tools.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - [`Dispatcher`] for detection, launching and menu predicates
//! - [`Settings`] for the JSON settings file
//! - [`StatusCache`] and [`StatusCode`] for status queries
//! - [`TortoiseError`] and [`Result`] for error handling

pub mod commands;
pub mod core;

pub use crate::core::{
    detect,
    Action,
    Detection,
    Dispatcher,
    GuiAdapter,
    Notifier,
    ProcessRunner,
    Result,
    Settings,
    StatusCache,
    StatusCode,
    TortoiseError,
    VcsKind,
};
