//! Unified output formatting for the command-line host.
//!
//! # Design Principles
//! - **Consistent color scheme**: Red for errors, green for success, white for content
//! - **Standardized spacing**: Newline before and after messages

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✕ Error: <message>
///
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}\n", "✕ Error:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

/// Formats and prints an informational message with consistent styling
pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

/// Formats and prints a section header with consistent styling
///
/// # Format
/// ```text
///
/// <header>:
///
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("Unable to find TortoiseGit executable.");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("Launched TortoiseGit commit");
    }

    #[test]
    fn test_print_info_does_not_panic() {
        print_info("Menus are disabled");
    }

    #[test]
    fn test_print_section_header_does_not_panic() {
        print_section_header("TortoiseHg actions for /repo");
    }
}
