//! Color mapping for status codes and menu entries.
//!
//! # Color Scheme
//! - **Modified**: Yellow
//! - **Added**: Green
//! - **Deleted / Conflicted**: Red (conflicts bold)
//! - **Renamed**: Blue
//! - **Untracked**: Cyan
//! - **Clean / other**: White

use crate::core::status_code::StatusCode;
use colored::*;

/// Color function for a status code
pub fn get_status_color_style(status: StatusCode) -> Box<dyn Fn(&str) -> ColoredString> {
    match status.as_char() {
        Some('M') => Box::new(|text: &str| text.yellow()),
        Some('A') => Box::new(|text: &str| text.green()),
        Some('D') => Box::new(|text: &str| text.red()),
        Some('C') | Some('U') => Box::new(|text: &str| text.red().bold()),
        Some('R') => Box::new(|text: &str| text.blue()),
        Some('?') => Box::new(|text: &str| text.cyan()),
        _ => Box::new(|text: &str| text.white()),
    }
}

/// One-column status symbol; clean renders as a blank column
pub fn get_aligned_status(status: StatusCode) -> ColoredString {
    let color_fn = get_status_color_style(status);
    match status.as_char() {
        Some(code) => color_fn(&code.to_string()),
        None => color_fn(" "),
    }
}

pub fn get_colored_path(status: StatusCode, path: &str) -> ColoredString {
    get_status_color_style(status)(path)
}

/// Menu entry marker: bright for enabled, muted for disabled
pub fn get_menu_marker(enabled: bool) -> ColoredString {
    if enabled {
        "●".green()
    } else {
        "○".bright_black()
    }
}
