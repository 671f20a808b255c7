//! Host settings for the launcher.
//!
//! Settings live in a JSON file (by default `<config dir>/tortoise-launcher/settings.json`).
//! Every key is optional; a missing file means "all defaults".

use crate::core::dirs::get_settings_file;
use crate::core::error::{Result, TortoiseError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Override for TortoiseSVN's `TortoiseProc` binary
    pub svn_tortoiseproc_path: Option<PathBuf>,
    /// Override for TortoiseGit's `TortoiseProc` binary
    pub git_tortoiseproc_path: Option<PathBuf>,
    /// Override for TortoiseHg's `thgw`/`hgtk` binary
    pub hg_hgtk_path: Option<PathBuf>,
    /// Override for the Git CLI used for status queries
    pub git_cli_path: Option<PathBuf>,
    pub enable_menus: bool,
    pub show_vcs_name: bool,
    /// Status cache time-to-live, in seconds
    pub cache_length: u64,
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            svn_tortoiseproc_path: None,
            git_tortoiseproc_path: None,
            hg_hgtk_path: None,
            git_cli_path: None,
            enable_menus: true,
            show_vcs_name: false,
            cache_length: 5,
            debug: false,
        }
    }
}

impl Settings {
    /// Load settings from the default settings file
    pub fn load() -> Result<Self> {
        Self::load_from(&get_settings_file()?)
    }

    /// Load settings from `path`, falling back to defaults when the file is absent
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No settings file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| TortoiseError::settings_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| TortoiseError::settings_parse_failed(path, e))
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;

        Ok(())
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_length)
    }
}
