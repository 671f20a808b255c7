//! GUI tool adapters for TortoiseSVN, TortoiseGit and TortoiseHg.
//!
//! A [`GuiAdapter`] owns a detected repository root and a resolved GUI binary. It turns
//! an abstract [`Action`] into that tool's command line and launches it detached, and
//! builds the matching CLI [`StatusBackend`] for status queries.
//!
//! # Command-line conventions
//! - **TortoiseSVN / TortoiseGit**: `"<gui>" /command:<name> /path:"<relative path>"`
//! - **TortoiseHg**: `[<gui>, <name>, --nofork, <relative path>]`
//!
//! Paths handed to the GUI tools are relative to the repository root, and the tools
//! are started with the root as working directory.

use crate::core::action::Action;
use crate::core::backend::{GitBackend, HgBackend, StatusBackend, SvnBackend};
use crate::core::binary::{exe_name, BinaryProbe, BinaryResolver, ProbeChain};
use crate::core::config::Settings;
use crate::core::error::{Result, TortoiseError};
use crate::core::locator::find_root;
use crate::core::notify::Notifier;
use crate::core::process::{Invocation, ProcessRunner};
use crate::core::status_cache::StatusCache;
use crate::core::status_code::StatusCode;
use crate::core::vcs::VcsKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Candidate install locations for a kind's GUI binary, in probe order
pub fn gui_probes(kind: VcsKind) -> ProbeChain {
    let key = kind.gui_config_key();
    match kind {
        VcsKind::Subversion => {
            let tortoise_proc = exe_name("TortoiseProc");
            ProbeChain::new(BinaryProbe::new(
                kind.tool_name(),
                Path::new("TortoiseSVN").join("bin").join(&tortoise_proc),
                tortoise_proc,
                key,
            ))
        }
        VcsKind::Git => {
            let tortoise_proc = exe_name("TortoiseProc");
            ProbeChain::new(BinaryProbe::new(
                kind.tool_name(),
                Path::new("TortoiseGit").join("bin").join(&tortoise_proc),
                tortoise_proc,
                key,
            ))
        }
        VcsKind::Mercurial => {
            let thgw = exe_name("thgw");
            let hgtk = exe_name("hgtk");
            ProbeChain::new(BinaryProbe::new(
                kind.tool_name(),
                Path::new("TortoiseHg").join(&hgtk),
                format!("{thgw} (for TortoiseHg v2.x) or {hgtk} (for TortoiseHg v1.x)"),
                key,
            ))
            .preferring(
                BinaryProbe::new(kind.tool_name(), Path::new("TortoiseHg").join(&thgw), thgw, key)
                    .on_path(exe_name("thg")),
            )
        }
    }
}

fn git_cli_probe() -> BinaryProbe {
    let git = exe_name("git");
    BinaryProbe::new(
        "Git",
        Path::new("Git").join("bin").join(&git),
        format!("{git} or {}", exe_name("tgit")),
        "git_cli_path",
    )
    .on_path(git)
}

/// Launch the platform file manager on `dir`
pub fn file_manager_invocation(dir: &Path) -> Invocation {
    if cfg!(windows) {
        Invocation::command_line("explorer.exe", vec![format!("\"{}\"", dir.display())])
    } else if cfg!(target_os = "macos") {
        Invocation::argv("open", vec![dir.display().to_string()])
    } else {
        Invocation::argv("xdg-open", vec![dir.display().to_string()])
    }
}

pub struct GuiAdapter {
    kind: VcsKind,
    root: PathBuf,
    gui_path: PathBuf,
    cli_override: Option<PathBuf>,
    resolver: BinaryResolver,
    runner: Arc<dyn ProcessRunner>,
}

impl GuiAdapter {
    /// Detect `path`'s repository for `kind` and resolve the GUI binary.
    ///
    /// Fails with [`TortoiseError::RepositoryNotFound`] when `path` is not under `kind`.
    pub fn new(
        kind: VcsKind,
        path: &Path,
        settings: &Settings,
        resolver: &BinaryResolver,
        runner: Arc<dyn ProcessRunner>,
    ) -> Result<Self> {
        let root = find_root(kind.marker(), path, kind.locate_mode())
            .ok_or_else(|| TortoiseError::repository_not_found(kind.marker(), path))?;
        Self::with_root(kind, root, settings, resolver, runner)
    }

    /// Build an adapter for an already detected root
    pub fn with_root(
        kind: VcsKind,
        root: PathBuf,
        settings: &Settings,
        resolver: &BinaryResolver,
        runner: Arc<dyn ProcessRunner>,
    ) -> Result<Self> {
        let configured = match kind {
            VcsKind::Subversion => settings.svn_tortoiseproc_path.as_deref(),
            VcsKind::Git => settings.git_tortoiseproc_path.as_deref(),
            VcsKind::Mercurial => settings.hg_hgtk_path.as_deref(),
        };

        let gui_path = match configured {
            Some(path) => path.to_path_buf(),
            None => resolver.find_first(&gui_probes(kind))?,
        };
        log::debug!(
            "{} adapter for {} using {}",
            kind.tool_name(),
            root.display(),
            gui_path.display()
        );

        Ok(Self {
            kind,
            root,
            gui_path,
            cli_override: match kind {
                VcsKind::Git => settings.git_cli_path.clone(),
                VcsKind::Subversion | VcsKind::Mercurial => None,
            },
            resolver: resolver.clone(),
            runner,
        })
    }

    pub fn kind(&self) -> VcsKind {
        self.kind
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn gui_path(&self) -> &Path {
        &self.gui_path
    }

    /// Locate the CLI tool used for status queries
    pub fn cli_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.cli_override {
            return Ok(path.clone());
        }

        let gui_dir = self.gui_path.parent().unwrap_or_else(|| Path::new(""));
        match self.kind {
            VcsKind::Subversion => Ok(gui_dir.join(exe_name("svn"))),
            VcsKind::Mercurial => Ok(gui_dir.join(exe_name("hg"))),
            VcsKind::Git => {
                let tgit = gui_dir.join(exe_name("tgit"));
                if tgit.exists() {
                    Ok(tgit)
                } else {
                    self.resolver.find_binary(&git_cli_probe())
                }
            }
        }
    }

    pub fn new_backend(&self) -> Result<Box<dyn StatusBackend>> {
        let cli = self.cli_path()?;
        let root = self.root.clone();
        let runner = Arc::clone(&self.runner);
        let backend: Box<dyn StatusBackend> = match self.kind {
            VcsKind::Subversion => Box::new(SvnBackend::new(root, cli, runner)),
            VcsKind::Git => Box::new(GitBackend::new(root, cli, runner)),
            VcsKind::Mercurial => Box::new(HgBackend::new(root, cli, runner)),
        };
        Ok(backend)
    }

    /// Query the CLI tool directly, bypassing any cache
    pub fn check_status(&self, path: &Path) -> Result<StatusCode> {
        self.new_backend()?.check_status(path)
    }

    /// Cached status lookup; failures are reported and read as clean
    pub fn get_status(
        &self,
        path: &Path,
        cache: &StatusCache,
        notifier: &dyn Notifier,
    ) -> StatusCode {
        cache.get_status(path, notifier, || self.check_status(path))
    }

    /// `path` relative to the root, `.` for the root itself
    pub fn relative_path(&self, path: &Path) -> Result<String> {
        let relative = path
            .strip_prefix(&self.root)
            .map_err(|_| TortoiseError::path_outside_root(path, &self.root))?;

        if relative.as_os_str().is_empty() {
            Ok(".".to_string())
        } else {
            Ok(relative.display().to_string())
        }
    }

    /// Build the invocation and working directory for `action`.
    ///
    /// A missing `path` targets the repository root; for `explore` a given path is
    /// replaced by its containing directory.
    pub fn invocation(
        &self,
        action: Action,
        path: Option<&Path>,
    ) -> Result<(Invocation, Option<PathBuf>)> {
        if action == Action::Explore {
            let dir = match path {
                Some(path) => path.parent().unwrap_or(&self.root),
                None => &self.root,
            };
            return Ok((file_manager_invocation(dir), None));
        }

        let name = self.kind.map_command(action);
        let relative = self.relative_path(path.unwrap_or(&self.root))?;

        let invocation = match self.kind {
            VcsKind::Subversion | VcsKind::Git => Invocation::command_line(
                &self.gui_path,
                vec![format!("/command:{name}"), format!("/path:\"{relative}\"")],
            ),
            VcsKind::Mercurial => Invocation::argv(
                &self.gui_path,
                vec![name.to_string(), "--nofork".to_string(), relative],
            ),
        };

        Ok((invocation, Some(self.root.clone())))
    }

    /// Launch the GUI tool for `action` without waiting for it
    pub fn perform(&self, action: Action, path: Option<&Path>) -> Result<()> {
        let (invocation, cwd) = self.invocation(action, path)?;
        log::debug!(
            "{} {} -> {}",
            self.kind.tool_name(),
            action,
            invocation.to_command_line()
        );
        self.runner.launch(&invocation, cwd.as_deref())
    }

    pub fn explore(&self, path: Option<&Path>) -> Result<()> {
        self.perform(Action::Explore, path)
    }
}
