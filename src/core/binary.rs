//! Locating external tool executables.
//!
//! A [`BinaryProbe`] describes where a tool normally lives relative to a program
//! installation root, plus an optional bare executable name to look for on `PATH`.
//! [`BinaryResolver`] checks those candidates in order and, when nothing exists,
//! produces a [`TortoiseError::BinaryNotFound`] telling the user which setting to fill
//! in, with a pasteable example.

use crate::core::dirs::get_settings_file;
use crate::core::error::{Result, TortoiseError};
use std::env;
use std::path::{Path, PathBuf};

/// Append the platform executable suffix (`.exe` on Windows) to a file name
pub fn exe_name(stem: &str) -> String {
    format!("{stem}{}", env::consts::EXE_SUFFIX)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryProbe {
    /// Label used in the error headline, e.g. `TortoiseGit`
    pub label: String,
    /// Path below an installation root, e.g. `TortoiseGit/bin/TortoiseProc.exe`
    pub install_suffix: PathBuf,
    /// Executable name searched on `PATH` after the installation roots
    pub path_name: Option<String>,
    /// Human description of the binary, e.g. `TortoiseProc.exe`
    pub description: String,
    /// Settings key the user should populate
    pub config_key: String,
}

impl BinaryProbe {
    pub fn new(
        label: impl Into<String>,
        install_suffix: impl Into<PathBuf>,
        description: impl Into<String>,
        config_key: impl Into<String>,
    ) -> Self {
        Self {
            label: label.into(),
            install_suffix: install_suffix.into(),
            path_name: None,
            description: description.into(),
            config_key: config_key.into(),
        }
    }

    pub fn on_path(mut self, name: impl Into<String>) -> Self {
        self.path_name = Some(name.into());
        self
    }
}

/// Ordered candidates for one tool: preferred probes first, then a fallback that is
/// always present
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeChain {
    pub preferred: Vec<BinaryProbe>,
    pub fallback: BinaryProbe,
}

impl ProbeChain {
    pub fn new(fallback: BinaryProbe) -> Self {
        Self {
            preferred: Vec::new(),
            fallback,
        }
    }

    /// Try `probe` before the fallback (and after earlier preferred probes)
    pub fn preferring(mut self, probe: BinaryProbe) -> Self {
        self.preferred.push(probe);
        self
    }
}

#[derive(Debug, Clone)]
pub struct BinaryResolver {
    install_roots: Vec<PathBuf>,
    search_path: Vec<PathBuf>,
    settings_file: PathBuf,
}

impl BinaryResolver {
    pub fn new(
        install_roots: Vec<PathBuf>,
        search_path: Vec<PathBuf>,
        settings_file: impl Into<PathBuf>,
    ) -> Self {
        Self {
            install_roots,
            search_path,
            settings_file: settings_file.into(),
        }
    }

    /// Resolver probing the platform's standard installation roots and `PATH`
    pub fn from_env() -> Result<Self> {
        Ok(Self::from_env_for(get_settings_file()?))
    }

    /// Like [`BinaryResolver::from_env`], pointing remediation messages at `settings_file`
    pub fn from_env_for(settings_file: impl Into<PathBuf>) -> Self {
        let search_path = env::var_os("PATH")
            .map(|paths| env::split_paths(&paths).collect())
            .unwrap_or_default();

        Self::new(default_install_roots(), search_path, settings_file)
    }

    pub fn settings_file(&self) -> &Path {
        &self.settings_file
    }

    /// Use `configured` when present, otherwise probe for the binary
    pub fn resolve(&self, configured: Option<&Path>, probe: &BinaryProbe) -> Result<PathBuf> {
        match configured {
            Some(path) => {
                log::debug!("Using configured {} at {}", probe.label, path.display());
                Ok(path.to_path_buf())
            }
            None => self.find_binary(probe),
        }
    }

    /// Probe the preferred candidates, then the fallback; only the fallback's miss is reported
    pub fn find_first(&self, chain: &ProbeChain) -> Result<PathBuf> {
        for probe in &chain.preferred {
            if let Some(found) = self.find_path(probe) {
                log::debug!("Found {} at {}", probe.label, found.display());
                return Ok(found);
            }
        }
        self.find_binary(&chain.fallback)
    }

    pub fn find_binary(&self, probe: &BinaryProbe) -> Result<PathBuf> {
        if let Some(found) = self.find_path(probe) {
            log::debug!("Found {} at {}", probe.label, found.display());
            return Ok(found);
        }

        log::warn!("Unable to locate {} executable", probe.label);
        Err(TortoiseError::binary_not_found(
            &probe.label,
            &probe.description,
            &probe.config_key,
            &self.settings_file,
            self.example_setting(probe)?,
        ))
    }

    fn find_path(&self, probe: &BinaryProbe) -> Option<PathBuf> {
        let installed = self
            .install_roots
            .iter()
            .map(|root| root.join(&probe.install_suffix));

        let on_path = probe
            .path_name
            .iter()
            .flat_map(|name| self.search_path.iter().map(move |dir| dir.join(name)));

        installed.chain(on_path).find(|candidate| candidate.is_file())
    }

    fn example_setting(&self, probe: &BinaryProbe) -> Result<String> {
        let normal_path = self
            .install_roots
            .first()
            .map(|root| root.join(&probe.install_suffix))
            .unwrap_or_else(|| probe.install_suffix.clone());

        let mut example = serde_json::Map::new();
        example.insert(
            probe.config_key.clone(),
            serde_json::Value::String(normal_path.display().to_string()),
        );
        Ok(serde_json::to_string(&example)?)
    }
}

#[cfg(windows)]
fn default_install_roots() -> Vec<PathBuf> {
    let mut roots: Vec<PathBuf> = ["ProgramFiles", "ProgramFiles(x86)", "ProgramW6432"]
        .iter()
        .filter_map(|var| env::var_os(var).map(PathBuf::from))
        .collect();

    if let Some(drive) = env::var_os("HOMEDRIVE") {
        let drive = PathBuf::from(format!("{}\\", drive.to_string_lossy()));
        roots.push(drive.join("Program Files"));
        roots.push(drive.join("Program Files (x86)"));
    }

    roots.dedup();
    roots
}

#[cfg(not(windows))]
fn default_install_roots() -> Vec<PathBuf> {
    ["/usr/local", "/usr", "/opt"]
        .iter()
        .map(PathBuf::from)
        .collect()
}
