//! Command handlers for the CLI.

use std::io::{self, IsTerminal};

use anyhow::{Context, Result, bail};
use clap::CommandFactory;

use super::config::Config;
use super::output::OutputFormat;
use super::session::Session;
use super::{Cli, CompletionsArgs, RunArgs};
use crate::model::{ModelManager, sample::sample_model};

/// Builds the session's starting model.
pub(crate) fn open_session(sample: bool, format: OutputFormat) -> Result<Session> {
    let model = if sample {
        sample_model().context("failed to build sample data")?
    } else {
        ModelManager::new()
    };
    tracing::debug!(sample, ?format, "session opened");
    Ok(Session::new(model, format))
}

/// Reads commands from standard input until `exit` or end of input.
///
/// The prompt is only shown when standard input is a terminal.
pub fn handle_shell(cli: &Cli, config: &Config) -> Result<()> {
    let mut session = open_session(config.sample_data(cli.sample), config.format(cli.format))?;

    let stdin = io::stdin();
    let prompt = stdin.is_terminal().then(|| config.prompt());
    session.run_interactive(
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
        prompt,
    )?;
    Ok(())
}

/// Executes a script file and fails if any command in it was rejected.
pub fn handle_run(args: &RunArgs, cli: &Cli, config: &Config) -> Result<()> {
    let script = std::fs::read_to_string(&args.script)
        .with_context(|| format!("failed to read script: {}", args.script.display()))?;

    let mut session = open_session(config.sample_data(cli.sample), config.format(cli.format))?;
    let summary = session.run_script(
        &script,
        args.keep_going,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;

    if !summary.is_success() {
        let lines: Vec<String> = summary.failed_lines.iter().map(usize::to_string).collect();
        bail!(
            "{}: {} command(s) rejected (line {})",
            args.script.display(),
            summary.failed_lines.len(),
            lines.join(", ")
        );
    }
    Ok(())
}

pub fn handle_completions(args: &CompletionsArgs) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(args.shell, &mut cmd, "pressbook", &mut io::stdout());
    Ok(())
}
