// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! Terminal output for `stgcn-graph`.
//!
//! Matrices and tables go to stdout; diagnostics go to stderr with a
//! `warning:` or `error:` label. Verbosity only gates the extra lines
//! (`verbose!`, `section!`), never diagnostics.

use std::sync::atomic::{AtomicBool, Ordering};

use colored::{ColoredString, Colorize};

static VERBOSE: AtomicBool = AtomicBool::new(true);

pub fn set_verbose(verbose: bool) {
    VERBOSE.store(verbose, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Severity of a stderr diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Warning,
    Error,
}

impl Level {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Warning => "warning:",
            Self::Error => "error:",
        }
    }

    /// Colored label printed before the message.
    #[must_use]
    pub fn label(self) -> ColoredString {
        match self {
            Self::Warning => self.as_str().yellow().bold(),
            Self::Error => self.as_str().red().bold(),
        }
    }
}

/// Title line and a rule of the same width, for grouping matrix dumps.
#[must_use]
pub fn heading(title: &str) -> String {
    format!(
        "{}\n{}",
        title.cyan().bold(),
        "-".repeat(title.chars().count()).dimmed()
    )
}

/// Print to stdout.
#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!($($arg)*)
    };
}

/// Print a `warning:` diagnostic to stderr.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!(
            "{} {}",
            $crate::cli::logging::Level::Warning.label(),
            format_args!($($arg)*)
        )
    };
}

/// Print an `error:` diagnostic to stderr.
#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!(
            "{} {}",
            $crate::cli::logging::Level::Error.label(),
            format_args!($($arg)*)
        )
    };
}

/// Print to stdout when verbose.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!($($arg)*);
        }
    };
}

/// Print a [`heading`] to stdout when verbose.
#[macro_export]
macro_rules! section {
    ($($arg:tt)*) => {
        if $crate::cli::logging::is_verbose() {
            println!("\n{}", $crate::cli::logging::heading(&format!($($arg)*)));
        }
    };
}
