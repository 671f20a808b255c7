//! Child process plumbing.
//!
//! Two kinds of child processes are spawned: GUI tools launched without blocking (a
//! background thread reaps them), and CLI tools run to completion with their output
//! captured. Both go through the [`ProcessRunner`] trait so callers can be exercised
//! without real tools.
//!
//! # Public API
//! - [`Invocation`]: Program, arguments and command-line style for a launch
//! - [`ProcessRunner`]: Launch/capture seam
//! - [`SystemRunner`]: Implementation backed by `std::process`
//! - [`normalize_output`]: Line-ending and trailing-whitespace normalization

use crate::core::error::{Result, TortoiseError};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};
use std::thread;

#[cfg(windows)]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// How the arguments of an [`Invocation`] reach the child process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvocationStyle {
    /// One pre-formatted command line, handed over verbatim where the platform allows
    CommandLine,
    /// A plain argument vector
    Argv,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: PathBuf,
    pub args: Vec<String>,
    pub style: InvocationStyle,
}

impl Invocation {
    pub fn argv(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            style: InvocationStyle::Argv,
        }
    }

    pub fn command_line(program: impl Into<PathBuf>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
            style: InvocationStyle::CommandLine,
        }
    }

    /// Render as a single command line with the program quoted
    pub fn to_command_line(&self) -> String {
        let mut line = format!("\"{}\"", self.program.display());
        for arg in &self.args {
            line.push(' ');
            line.push_str(arg);
        }
        line
    }

    fn to_command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        match self.style {
            #[cfg(windows)]
            InvocationStyle::CommandLine => {
                use std::os::windows::process::CommandExt;
                for arg in &self.args {
                    cmd.raw_arg(arg);
                }
            }
            #[cfg(not(windows))]
            InvocationStyle::CommandLine => {
                cmd.args(self.args.iter().map(|arg| arg.replace('"', "")));
            }
            InvocationStyle::Argv => {
                cmd.args(&self.args);
            }
        }
        cmd
    }
}

/// Spawns child processes on behalf of adapters and status backends
pub trait ProcessRunner: Send + Sync {
    /// Start a GUI tool without waiting for it; output and exit status are never inspected
    fn launch(&self, invocation: &Invocation, cwd: Option<&Path>) -> Result<()>;

    /// Run a CLI tool to completion and return its normalized combined output
    fn capture(&self, program: &Path, args: &[OsString], cwd: &Path) -> Result<String>;
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn launch(&self, invocation: &Invocation, cwd: Option<&Path>) -> Result<()> {
        let mut cmd = invocation.to_command();
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        if let Some(dir) = cwd {
            cmd.current_dir(dir);
        }

        log::debug!("Launching {}", invocation.to_command_line());
        let mut child = cmd
            .spawn()
            .map_err(|e| TortoiseError::process_spawn(&invocation.program, e))?;

        // Waited on in the background; launch never blocks on the GUI tool
        let program = invocation.program.clone();
        thread::Builder::new()
            .name("tortoise-reaper".to_string())
            .spawn(move || match child.wait() {
                Ok(status) => log::debug!("{} exited with {status}", program.display()),
                Err(e) => log::warn!("Failed to wait for {}: {e}", program.display()),
            })?;

        Ok(())
    }

    fn capture(&self, program: &Path, args: &[OsString], cwd: &Path) -> Result<String> {
        let mut cmd = Command::new(program);
        cmd.args(args).current_dir(cwd).stdin(Stdio::null());

        #[cfg(windows)]
        {
            use std::os::windows::process::CommandExt;
            cmd.creation_flags(CREATE_NO_WINDOW);
        }

        log::debug!("Running {} {:?} in {}", program.display(), args, cwd.display());
        let output = cmd
            .output()
            .map_err(|e| TortoiseError::process_spawn(program, e))?;

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        Ok(normalize_output(&combined))
    }
}

/// Convert CRLF to LF and strip trailing spaces and line breaks
pub fn normalize_output(raw: &str) -> String {
    raw.replace("\r\n", "\n")
        .trim_end_matches([' ', '\n', '\r'])
        .to_string()
}
