use crate::commands::host::absolute_paths;
use crate::core::{
    colors::{get_aligned_status, get_colored_path},
    dispatcher::Dispatcher,
    error::Result,
};
use std::path::PathBuf;

/// Print the single-character status code of each path, one per line
pub fn execute_status(dispatcher: &Dispatcher, paths: &[PathBuf]) -> Result<()> {
    for path in absolute_paths(paths)? {
        let status = dispatcher.status(&path)?;
        log::debug!("{} is {}", path.display(), status.description());

        let display = path.display().to_string();
        println!(
            "{} {}",
            get_aligned_status(status),
            get_colored_path(status, &display)
        );
    }

    Ok(())
}
