//! CFNgin CLI - Render CloudFormation templates from declarative stack configs
//!
//! This is the main entry point for the cfngin command-line interface.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        Commands::Render(args) => commands::render::run(args, cli.config.as_deref()),
        Commands::Validate(args) => commands::validate::run(args, cli.config.as_deref()),
        Commands::Blueprints(cmd) => commands::blueprints::run(cmd),
        Commands::Init(args) => commands::init::run(args),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    // stdout carries rendered templates
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}
