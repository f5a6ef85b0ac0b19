//! Vitrine CLI binary.
//!
//! This binary provides command-line access to the publication scheduler:
//! - Validate a deployment's configuration, templates, and image folders
//! - Run the scheduler loop with the built-in rehearsal collaborators

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, check_deployment, run_scheduler};

    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute the requested command
    match cli.command {
        Commands::Check { config } => {
            check_deployment(&config)?;
        }

        Commands::Run { config } => {
            run_scheduler(&config).await?;
        }
    }

    Ok(())
}
