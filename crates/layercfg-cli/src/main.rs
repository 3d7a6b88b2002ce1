//! layercfg CLI
//!
//! Loads a stack of configuration files (and optionally the environment)
//! and reads or writes values by dot/bracket path.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = commands::load(&cli)?;

    let output = match &cli.command {
        Commands::Get {
            path,
            default,
            json,
        } => commands::run_get(&config, path, default.as_deref(), *json)?,
        Commands::Set {
            path,
            value,
            value_type,
        } => commands::run_set(&mut config, path, value, *value_type)?,
        Commands::Dump => commands::run_dump(&config)?,
    };

    println!("{output}");
    Ok(())
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose)
        .try_init();

    tracing::debug!("Verbose mode enabled");
}
