//! CLI argument definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Automated social-media publication scheduler.
#[derive(Debug, Parser)]
#[command(name = "vitrine", version, about)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Validate configuration, templates, and image folders
    Check {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "vitrine.toml")]
        config: PathBuf,
    },

    /// Run the scheduler loop with the built-in rehearsal collaborators
    Run {
        /// Path to the TOML configuration file
        #[arg(short, long, default_value = "vitrine.toml")]
        config: PathBuf,
    },
}
