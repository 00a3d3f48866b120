//! CLI definitions and the interactive session

pub mod config;
pub mod handlers;
pub mod logging;
pub mod output;
pub mod session;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use output::OutputFormat;

/// pressbook - track news articles and the people behind them
#[derive(Parser, Debug)]
#[command(name = "pressbook", version, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to ~/.config/pressbook/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Start the session with sample articles and persons
    #[arg(long, global = true)]
    pub sample: bool,

    /// Output format (overrides config file)
    #[arg(short = 'f', long, value_enum, global = true)]
    pub format: Option<OutputFormat>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Read commands interactively from standard input (default)
    Shell,

    /// Execute the commands in a script file, one per line
    Run(RunArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Script file; blank lines and lines starting with '#' are skipped
    pub script: PathBuf,

    /// Keep going after a command fails
    #[arg(long)]
    pub keep_going: bool,
}

/// Arguments for the `completions` command
#[derive(Parser, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for (bash, zsh, fish)
    #[arg(value_enum)]
    pub shell: Shell,
}
