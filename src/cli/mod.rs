// Ultralytics 🚀 AGPL-3.0 License - https://ultralytics.com/license

//! CLI module for inspecting skeleton graphs.
//!
//! This module contains the command-line interface logic, including argument parsing
//! and the `inspect` and `topology` command implementations.

/// CLI arguments.
pub mod args;

/// Diagnostic printing of adjacency matrices and topology.
pub mod inspect;

/// Console logging macros and verbosity flag.
pub mod logging;
