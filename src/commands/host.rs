//! Shared setup for host commands.
//!
//! Every command needs the same pieces: settings from the chosen settings file, a
//! binary resolver pointing its remediation messages at that file, and a dispatcher
//! sharing one status cache.

use crate::core::{
    binary::BinaryResolver,
    config::Settings,
    dirs::get_settings_file,
    dispatcher::Dispatcher,
    error::Result,
    status_cache::StatusCache,
};
use std::env;
use std::path::{Component, Path, PathBuf};
use std::sync::Arc;

/// Settings together with the file they were read from
pub struct HostContext {
    pub settings: Settings,
    pub settings_file: PathBuf,
    /// Whether the settings file existed, as opposed to defaults being used
    pub from_file: bool,
}

impl HostContext {
    /// Load settings from `config`, or from the default settings file
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let settings_file = match config {
            Some(path) => path.to_path_buf(),
            None => get_settings_file()?,
        };
        let from_file = settings_file.exists();
        let settings = Settings::load_from(&settings_file)?;

        Ok(Self {
            settings,
            settings_file,
            from_file,
        })
    }

    /// Logs where the settings came from; call once logging is set up
    pub fn log_source(&self) {
        if self.from_file {
            log::debug!("Loaded settings from {}", self.settings_file.display());
        } else {
            log::debug!(
                "No settings file at {}, using defaults",
                self.settings_file.display()
            );
        }
    }

    pub fn dispatcher(self) -> Dispatcher {
        let cache = StatusCache::new(self.settings.cache_ttl()).verbose(self.settings.debug);
        let resolver = BinaryResolver::from_env_for(self.settings_file);
        Dispatcher::new(self.settings, resolver, Arc::new(cache))
    }
}

/// Anchor relative command-line paths at the current directory and drop `.`/`..`
pub fn absolute_path(path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        env::current_dir()?.join(path)
    };
    Ok(normalize_lexically(&joined))
}

/// Resolve `.` and `..` components of an absolute path without touching the disk.
///
/// `..` at the root stays at the root.
pub fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

pub fn absolute_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    paths.iter().map(|path| absolute_path(path)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_config_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("settings.json");

        let context = HostContext::load(Some(&config)).unwrap();
        assert_eq!(context.settings, Settings::default());
        assert_eq!(context.settings_file, config);
        assert!(!context.from_file);
        context.log_source();
    }

    #[test]
    fn test_dispatcher_uses_cache_length() {
        let temp_dir = TempDir::new().unwrap();
        let config = temp_dir.path().join("settings.json");
        Settings {
            cache_length: 30,
            ..Settings::default()
        }
        .save_to(&config)
        .unwrap();

        let context = HostContext::load(Some(&config)).unwrap();
        assert!(context.from_file);
        let dispatcher = context.dispatcher();
        assert_eq!(dispatcher.cache().ttl().as_secs(), 30);
    }

    #[test]
    fn test_absolute_path_keeps_absolute() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(absolute_path(temp_dir.path()).unwrap(), temp_dir.path());
        assert!(absolute_path(Path::new("src/lib.rs")).unwrap().is_absolute());
    }

    #[cfg(unix)]
    #[test]
    fn test_normalize_lexically_drops_dot_components() {
        assert_eq!(
            normalize_lexically(Path::new("/work/tools/../wc/./sub")),
            PathBuf::from("/work/wc/sub")
        );
        assert_eq!(normalize_lexically(Path::new("/../a")), PathBuf::from("/a"));
        assert_eq!(normalize_lexically(Path::new("/a/b/..")), PathBuf::from("/a"));
    }

    #[test]
    fn test_relative_parent_path_is_resolved_against_real_ancestors() {
        let temp_dir = TempDir::new().unwrap();
        let wc = temp_dir.path().join("wc");
        std::fs::create_dir_all(wc.join(".svn")).unwrap();
        std::fs::create_dir_all(wc.join("sub").join(".svn")).unwrap();
        std::fs::create_dir_all(temp_dir.path().join("tools").join(".svn")).unwrap();

        let dotted = temp_dir.path().join("tools").join("..").join("wc").join("sub");
        let resolved = absolute_path(&dotted).unwrap();
        assert_eq!(resolved, wc.join("sub"));

        let detection = crate::core::dispatcher::detect(&resolved).unwrap();
        assert_eq!(detection.root, wc);
    }
}
