use crate::core::error::TortoiseError;
use std::path::PathBuf;

const APP_DIR: &str = "tortoise-launcher";
const SETTINGS_FILE: &str = "settings.json";

pub fn get_config_directory() -> Result<PathBuf, TortoiseError> {
    let base = match std::env::consts::OS {
        "linux" | "freebsd" | "netbsd" | "openbsd" => std::env::var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| dirs::home_dir().unwrap_or_default().join(".config")),
        "macos" => dirs::home_dir()
            .unwrap_or_default()
            .join("Library/Application Support"),
        "windows" => dirs::config_dir().unwrap_or_default(),
        _ => dirs::config_dir().unwrap_or_default(),
    };

    Ok(base.join(APP_DIR))
}

/// Default location of the settings file named in remediation messages
pub fn get_settings_file() -> Result<PathBuf, TortoiseError> {
    Ok(get_config_directory()?.join(SETTINGS_FILE))
}
