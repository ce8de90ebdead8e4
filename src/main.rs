//! Sap - A stage-aware build-time asset pipeline.

#![allow(dead_code)]

mod asset;
mod cli;
mod config;
mod logger;
mod pipeline;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SapConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = SapConfig::load(&cli.config)?;

    match &cli.command {
        Commands::Build { function, .. } => {
            cli::build::build(&config, cli.stage(), function.as_deref())
        }
        Commands::Clean => cli::build::clean(&config),
        Commands::Tasks { json, .. } => cli::tasks::list_tasks(&config, cli.stage(), *json),
    }
}
