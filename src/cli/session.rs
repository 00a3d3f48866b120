//! A running pressbook session: one model, fed one command line at a time.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use super::output::{
    ArticleListing, CommandOutput, ErrorOutput, Output, OutputFormat, PersonListing,
};
use crate::commands::{CommandError, CommandResult, View, general};
use crate::model::{Model, ModelManager};
use crate::parser::{BookParser, ParseError};

/// Why a line was rejected.
#[derive(Debug, Error)]
pub enum LineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("Input line is not valid UTF-8")]
    InvalidUtf8(#[from] std::str::Utf8Error),
}

/// What the caller should do after a line has been handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Failed,
    Exit,
}

/// Totals for a script run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScriptSummary {
    pub executed: usize,
    /// One-based line numbers of rejected commands.
    pub failed_lines: Vec<usize>,
}

impl ScriptSummary {
    pub fn is_success(&self) -> bool {
        self.failed_lines.is_empty()
    }
}

pub struct Session {
    model: ModelManager,
    parser: BookParser,
    format: OutputFormat,
}

impl Session {
    pub fn new(model: ModelManager, format: OutputFormat) -> Self {
        Self {
            model,
            parser: BookParser,
            format,
        }
    }

    pub fn model(&self) -> &ModelManager {
        &self.model
    }

    /// Parses and executes one command line, writing feedback to `out`.
    ///
    /// Rejected commands are reported on `err` in human mode and as an
    /// `{"error": ...}` document on `out` in JSON mode. The model is left
    /// untouched when a command is rejected.
    pub fn execute_line<W: Write, E: Write>(
        &mut self,
        line: &str,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<LineOutcome> {
        match self.run_command(line) {
            Ok(result) => {
                self.write_result(&result, out)?;
                if result.is_exit() {
                    Ok(LineOutcome::Exit)
                } else {
                    Ok(LineOutcome::Continue)
                }
            }
            Err(e) => self.reject(line, &e, out, err),
        }
    }

    fn reject<W: Write, E: Write>(
        &self,
        line: &str,
        error: &LineError,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<LineOutcome> {
        tracing::warn!(line, %error, "command rejected");
        self.write_error(error, out, err)?;
        Ok(LineOutcome::Failed)
    }

    fn run_command(&mut self, line: &str) -> Result<CommandResult, LineError> {
        let command = self.parser.parse_command(line)?;
        Ok(command.execute(&mut self.model)?)
    }

    fn write_result<W: Write>(&self, result: &CommandResult, out: &mut W) -> io::Result<()> {
        let mut output = CommandOutput {
            feedback: result.feedback().to_string(),
            help: result.show_help().then(general::usage),
            ..CommandOutput::default()
        };
        match result.view() {
            Some(View::Articles) => {
                output.articles = Some(
                    self.model
                        .filtered_article_list()
                        .into_iter()
                        .enumerate()
                        .map(|(i, a)| ArticleListing::new(i + 1, a))
                        .collect(),
                );
            }
            Some(View::Persons) => {
                output.persons = Some(
                    self.model
                        .filtered_person_list()
                        .into_iter()
                        .enumerate()
                        .map(|(i, p)| PersonListing::new(i + 1, p))
                        .collect(),
                );
            }
            None => {}
        }

        match self.format {
            OutputFormat::Human => {
                writeln!(out, "{}", output.feedback)?;
                if let Some(help) = &output.help {
                    writeln!(out, "{}", help)?;
                }
                if result.view() == Some(View::Articles) {
                    for (i, article) in self.model.filtered_article_list().iter().enumerate() {
                        writeln!(out, "{}. {}", i + 1, article)?;
                    }
                }
                if result.view() == Some(View::Persons) {
                    for (i, person) in self.model.filtered_person_list().iter().enumerate() {
                        writeln!(out, "{}. {}", i + 1, person)?;
                    }
                }
            }
            OutputFormat::Json => {
                serde_json::to_writer(&mut *out, &Output::new(output))?;
                writeln!(out)?;
            }
        }
        Ok(())
    }

    fn write_error<W: Write, E: Write>(
        &self,
        error: &LineError,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<()> {
        match self.format {
            OutputFormat::Human => writeln!(err, "{}", error),
            OutputFormat::Json => {
                let output = ErrorOutput {
                    error: error.to_string(),
                };
                serde_json::to_writer(&mut *out, &output)?;
                writeln!(out)
            }
        }
    }

    /// Reads commands until end of input or `exit`.
    ///
    /// `prompt` is written before every line when given. A line that is not
    /// valid UTF-8 is rejected like any other bad command.
    pub fn run_interactive<R: BufRead, W: Write, E: Write>(
        &mut self,
        mut input: R,
        out: &mut W,
        err: &mut E,
        prompt: Option<&str>,
    ) -> io::Result<()> {
        let mut buf = Vec::new();
        loop {
            if let Some(prompt) = prompt {
                write!(out, "{}", prompt)?;
                out.flush()?;
            }
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let line = match std::str::from_utf8(&buf) {
                Ok(line) => line,
                Err(e) => {
                    let lossy = String::from_utf8_lossy(&buf);
                    self.reject(lossy.trim(), &LineError::from(e), out, err)?;
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            if self.execute_line(line, out, err)? == LineOutcome::Exit {
                break;
            }
        }
        Ok(())
    }

    /// Executes a script, one command per line.
    ///
    /// Blank lines and lines starting with `#` are skipped. Execution stops
    /// at the first rejected command unless `keep_going` is set, and always
    /// stops at `exit`.
    pub fn run_script<W: Write, E: Write>(
        &mut self,
        script: &str,
        keep_going: bool,
        out: &mut W,
        err: &mut E,
    ) -> io::Result<ScriptSummary> {
        let mut summary = ScriptSummary::default();
        for (number, line) in script.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            summary.executed += 1;
            match self.execute_line(trimmed, out, err)? {
                LineOutcome::Continue => {}
                LineOutcome::Exit => break,
                LineOutcome::Failed => {
                    summary.failed_lines.push(number + 1);
                    if !keep_going {
                        break;
                    }
                }
            }
        }
        tracing::info!(
            executed = summary.executed,
            failed = summary.failed_lines.len(),
            "script finished"
        );
        Ok(summary)
    }
}
