//! # Dashboard CLI Binary
//!
//! Command-line interface over the analytics views.

use anyhow::Result;
use clap::Parser;
use dashboard::cli::{Cli, CliHandler};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Create CLI handler
    let handler = CliHandler::new(cli.tier.as_deref(), &cli.name);

    // Handle command
    handler.handle_command(cli.command)?;

    Ok(())
}
