//! Styled terminal output for fatal errors.
//!
//! Rename lines and missing-file warnings are plain text with a fixed format;
//! only the error banner is coloured.

use colored::Colorize;
use std::io::{self, IsTerminal, Write};

use crate::error::AppError;

/// Check if we should use colors in output
pub fn should_use_colors() -> bool {
    // Check NO_COLOR env (standard: https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    io::stderr().is_terminal()
}

/// Write `Error: <detailed message>` to `writer`
pub fn write_error(writer: &mut impl Write, err: &AppError, colors_enabled: bool) -> io::Result<()> {
    let prefix = if colors_enabled {
        "Error:".red().bold().to_string()
    } else {
        String::from("Error:")
    };

    writeln!(writer, "{} {}", prefix, err.detailed_message())
}

/// Print a fatal error to stderr
pub fn print_error(err: &AppError) {
    let colors_enabled = should_use_colors();
    colored::control::set_override(colors_enabled);
    // Nothing left to report to if stderr itself fails
    let _ = write_error(&mut io::stderr(), err, colors_enabled);
}
