//! Core functionality for tortoise-launcher.
//!
//! This module provides the building blocks for detecting a path's version control
//! system, locating the Tortoise GUI and CLI tools, querying cached status codes,
//! and deciding which actions a host should offer.

pub mod action;
pub mod adapter;
pub mod availability;
pub mod backend;
pub mod binary;
pub mod colors;
pub mod config;
pub mod dirs;
pub mod dispatcher;
pub mod error;
pub mod locator;
pub mod notify;
pub mod output;
pub mod process;
pub mod status_cache;
pub mod status_code;
pub mod vcs;

// === Error handling ===
pub use error::{Result, TortoiseError};

// === Detection ===
// Marker-directory walks and the VCS kinds they identify
pub use locator::{find_root, LocateMode};
pub use vcs::VcsKind;

// === Tools ===
// Executable discovery, process plumbing and the GUI/CLI adapters built on them
pub use adapter::GuiAdapter;
pub use backend::{GitBackend, HgBackend, StatusBackend, SvnBackend};
pub use binary::{BinaryProbe, BinaryResolver, ProbeChain};
pub use process::{Invocation, InvocationStyle, ProcessRunner, SystemRunner};

// === Status ===
pub use status_cache::{Clock, ManualClock, StatusCache, SystemClock};
pub use status_code::StatusCode;

// === Dispatch ===
// Host-facing entry point and the action availability rules
pub use action::Action;
pub use availability::{rule_for, ActionRule, Availability, StatusFilter};
pub use dispatcher::{detect, target_path, Detection, Dispatcher};
pub use notify::{ConsoleNotifier, Notifier, RecordingNotifier};

// === Settings ===
pub use config::Settings;

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success};
