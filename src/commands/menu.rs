use crate::commands::host::absolute_path;
use crate::core::{
    action::Action,
    colors::get_menu_marker,
    dispatcher::{detect, Dispatcher},
    error::{Result, TortoiseError},
    output::{print_info, print_section_header},
};
use colored::*;
use std::path::Path;

/// Print every action visible for `path`, marking disabled ones
pub fn execute_menu(dispatcher: &Dispatcher, path: &Path) -> Result<()> {
    let path = absolute_path(path)?;
    let detection = detect(&path).ok_or_else(|| TortoiseError::not_under_vcs(&path))?;

    if !dispatcher.settings().enable_menus {
        print_info("Menus are disabled");
        return Ok(());
    }

    let paths = [path];
    let visible: Vec<Action> = Action::ALL
        .into_iter()
        .filter(|action| dispatcher.is_visible(*action, &paths, None))
        .collect();

    if visible.is_empty() {
        print_info("No actions available");
        return Ok(());
    }

    print_section_header(&format!(
        "{} actions for {}",
        detection.kind.tool_name(),
        paths[0].display()
    ));

    for action in visible {
        let enabled = dispatcher.is_enabled(action, &paths, None);
        let description = dispatcher.description(action, &paths, None);
        let name = format!("{:<8}", action.as_str());

        if enabled {
            println!("  {} {} {}", get_menu_marker(true), name.white(), description.white());
        } else {
            println!(
                "  {} {} {} {}",
                get_menu_marker(false),
                name.bright_black(),
                description.bright_black(),
                "(disabled)".bright_black()
            );
        }
    }
    println!();

    Ok(())
}
