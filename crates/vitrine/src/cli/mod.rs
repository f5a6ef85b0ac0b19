//! Command-line interface module.
//!
//! This module provides the CLI structure and command handlers for the
//! vitrine binary.

mod check;
mod commands;
mod run;

pub use check::check_deployment;
pub use commands::{Cli, Commands};
pub use run::run_scheduler;
