use crate::commands::host::{absolute_path, absolute_paths};
use crate::core::{
    action::Action, dispatcher::Dispatcher, error::Result, output::print_success,
};
use std::path::PathBuf;

/// Launch the GUI tool for `action` on the first path (or the active file)
pub fn execute_launch(
    dispatcher: &Dispatcher,
    action: &str,
    paths: &[PathBuf],
    active: Option<PathBuf>,
) -> Result<()> {
    let action: Action = action.parse()?;
    let paths = absolute_paths(paths)?;
    let active = active.as_deref().map(absolute_path).transpose()?;

    log::debug!("Launching {action} for {paths:?} (active: {active:?})");
    dispatcher.run(action, &paths, active.as_deref())?;

    print_success(&dispatcher.description(action, &paths, active.as_deref()));
    Ok(())
}
