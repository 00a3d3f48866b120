//! pressbook - a journalist's book of news articles and the people in them

pub mod cli;
pub mod commands;
pub mod domain;
pub mod model;
pub mod parser;

#[cfg(test)]
pub(crate) mod testutil;

use anyhow::Result;
use clap::Parser;

use cli::{
    Cli, Command,
    config::Config,
    handlers::{handle_completions, handle_run, handle_shell},
    logging,
};

/// Main entry point for the CLI application.
pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = Config::load(cli.config.as_deref())?;

    match &cli.command {
        None | Some(Command::Shell) => handle_shell(&cli, &config),
        Some(Command::Run(args)) => handle_run(args, &cli, &config),
        Some(Command::Completions(args)) => handle_completions(args),
    }
}
