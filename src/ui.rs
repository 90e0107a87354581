//! Terminal output. stdout carries only the resolved tag so pipelines can
//! capture it; everything else goes to stderr.

use console::style;

use crate::boundary::BoundaryWarning;

/// Prefix of every failure line; CI scripts match on it.
pub const ERROR_PREFIX: &str = "An error occurred:";

/// Plain-text failure line, without styling.
pub fn error_line(message: &str) -> String {
    format!("{} {}", ERROR_PREFIX, message)
}

/// Print a failure to stderr, coloured when stderr is a terminal.
pub fn display_error(message: &str) {
    eprintln!("{}", style(error_line(message)).red().for_stderr());
}

/// Print a non-fatal warning to stderr.
pub fn display_boundary_warning(warning: &BoundaryWarning) {
    eprintln!("{} {}", style("warning:").yellow().bold().for_stderr(), warning);
}

/// Print the resolved tag on its own line.
pub fn display_version(tag: &str) {
    println!("{}", tag);
}
