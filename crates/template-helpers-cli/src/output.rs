//! Terminal output formatting for the template-helpers CLI.
//!
//! Status lines go to stderr so rendered output on stdout stays clean.
//! Colors come from the [`console`] crate.

use console::style;

/// Print a success message prefixed with green `[OK]`.
pub fn print_success(text: &str) {
    eprintln!("{} {}", style("[OK]").green().bold(), text);
}

/// Print a warning message prefixed with yellow `[WARN]`.
pub fn print_warning(text: &str) {
    eprintln!("{} {}", style("[WARN]").yellow().bold(), text);
}
