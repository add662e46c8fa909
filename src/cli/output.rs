use colored::Colorize;

use crate::cli::context::{self, Verbosity};

// stdout carries the export, so every diagnostic goes to stderr.

/// Print a success message.
pub fn success(msg: &str) {
    if context::verbosity() != Verbosity::Quiet {
        eprintln!("  {} {}", "✓".green(), msg);
    }
}

/// Print a detail line, only with `--verbose`.
pub fn info(msg: &str) {
    if context::verbosity() == Verbosity::Verbose {
        eprintln!("  {} {}", "·".dimmed(), msg);
    }
}

/// Print a warning message.
pub fn warning(msg: &str) {
    if context::verbosity() != Verbosity::Quiet {
        eprintln!("  {} {}", "⚠".yellow(), msg);
    }
}

/// Print an error message. Never suppressed.
pub fn error(msg: &str) {
    eprintln!("  {} {}", "✗".red(), msg);
}
