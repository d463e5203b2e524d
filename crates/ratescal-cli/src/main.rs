//! Ratescal CLI - load and inspect rates curve calibration sets.
//!
//! # Usage
//!
//! ```bash
//! # Load from explicit files
//! ratescal load --groups groups.csv --settings settings.csv --nodes usd.csv eur.csv
//!
//! # Load from a manifest, as JSON
//! ratescal --format json load --manifest calibration.toml
//!
//! # List the built-in conventions for FRAs
//! ratescal conventions --kind FRA
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    // stdout carries command output only.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let format = cli.format;

    match cli.command {
        Commands::Load(args) => commands::load::execute(args, format)?,
        Commands::Conventions(args) => commands::conventions::execute(args, format)?,
    }

    Ok(())
}
