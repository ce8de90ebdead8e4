//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Stage-aware asset pipeline
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path, searched upward from the current directory
    #[arg(short = 'C', long, global = true, default_value = "sap.toml", value_hint = clap::ValueHint::FilePath)]
    pub config: PathBuf,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Clear destinations, then copy and minify every task's files
    #[command(visible_alias = "b")]
    Build {
        #[command(flatten)]
        args: StageArgs,

        /// Run only this task
        #[arg(short, long, value_name = "TASK")]
        function: Option<String>,
    },

    /// Clear every task's destination without building
    #[command(visible_alias = "c")]
    Clean,

    /// Show the resolved task table
    #[command(visible_alias = "t")]
    Tasks {
        #[command(flatten)]
        args: StageArgs,

        /// Print JSON instead of a table
        #[arg(short, long)]
        json: bool,
    },
}

/// Stage selection shared by `build` and `tasks`
#[derive(clap::Args, Debug, Clone)]
pub struct StageArgs {
    /// Deployment stage (default: `[provider] stage` from config)
    #[arg(short, long)]
    pub stage: Option<String>,
}

impl Cli {
    /// Stage given on the command line, if any.
    pub fn stage(&self) -> Option<&str> {
        match &self.command {
            Commands::Build { args, .. } | Commands::Tasks { args, .. } => args.stage.as_deref(),
            Commands::Clean => None,
        }
    }
}
