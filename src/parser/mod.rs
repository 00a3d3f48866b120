//! Parser for the command language typed into the shell.
//!
//! A command line is `WORD [-a|-p] ARGS`: the command word, the entity
//! prefix (`-a` for articles, `-p` for persons) and prefixed arguments such
//! as `h/Headline t/tag`.

pub mod article;
pub mod person;
pub mod syntax;
pub mod tokenizer;
mod util;

use crate::commands::general::{EXIT_COMMAND_WORD, HELP_COMMAND_WORD};
use crate::commands::{
    Command, ExitCommand, HelpCommand,
    article::{ClearArticlesCommand, ListArticlesCommand},
    person::ListPersonsCommand,
};
use thiserror::Error;

pub const MESSAGE_UNKNOWN_COMMAND: &str = "Unknown command";

pub const MESSAGE_HELP_HINT: &str = "Type 'help' to see the available commands.";

/// Errors raised while turning user input into a command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The input does not follow the command's syntax.
    #[error("Invalid command format! \n{usage}")]
    InvalidCommandFormat { usage: String },

    #[error("{}", MESSAGE_UNKNOWN_COMMAND)]
    UnknownCommand,

    /// Single-valued prefixes given more than once.
    #[error(
        "Multiple values specified for the following single-valued field(s): {}",
        .prefixes.join(" ")
    )]
    DuplicatePrefixes { prefixes: Vec<String> },

    #[error("{}", crate::commands::article::edit::MESSAGE_NOT_EDITED)]
    NotEdited,

    /// A field value failed validation.
    #[error("{0}")]
    InvalidValue(String),
}

/// Entry point of the parser.
#[derive(Debug, Clone, Copy, Default)]
pub struct BookParser;

impl BookParser {
    /// Parses one line of user input into a command.
    ///
    /// # Errors
    ///
    /// Returns a `ParseError` describing the first problem found.
    pub fn parse_command(&self, input: &str) -> Result<Box<dyn Command>, ParseError> {
        let input = input.trim();
        let (word, rest) = split_first_word(input);

        if word.is_empty() {
            return Err(ParseError::InvalidCommandFormat {
                usage: MESSAGE_HELP_HINT.to_string(),
            });
        }

        let command: Box<dyn Command> = match word {
            HELP_COMMAND_WORD => Box::new(HelpCommand),
            EXIT_COMMAND_WORD => Box::new(ExitCommand),
            _ => {
                let (entity, args) = split_first_word(rest);
                parse_entity_command(word, entity, args)?
            }
        };

        tracing::debug!(?command, "parsed command");
        Ok(command)
    }
}

fn parse_entity_command(
    word: &str,
    entity: &str,
    args: &str,
) -> Result<Box<dyn Command>, ParseError> {
    use crate::commands::{article as a, person as p};

    let command: Box<dyn Command> = match (word, entity) {
        (a::add::COMMAND_WORD, a::COMMAND_PREFIX) => Box::new(article::parse_add(args)?),
        (a::edit::COMMAND_WORD, a::COMMAND_PREFIX) => Box::new(article::parse_edit(args)?),
        (a::delete::COMMAND_WORD, a::COMMAND_PREFIX) => Box::new(article::parse_delete(args)?),
        (a::find::COMMAND_WORD, a::COMMAND_PREFIX) => Box::new(article::parse_find(args)?),
        (a::filter::COMMAND_WORD, a::COMMAND_PREFIX) => Box::new(article::parse_filter(args)?),
        (a::list::COMMAND_WORD, a::COMMAND_PREFIX) => Box::new(ListArticlesCommand),
        (a::clear::COMMAND_WORD, a::COMMAND_PREFIX) => Box::new(ClearArticlesCommand),
        (p::add::COMMAND_WORD, p::COMMAND_PREFIX) => Box::new(person::parse_add(args)?),
        (p::delete::COMMAND_WORD, p::COMMAND_PREFIX) => Box::new(person::parse_delete(args)?),
        (p::find::COMMAND_WORD, p::COMMAND_PREFIX) => Box::new(person::parse_find(args)?),
        (p::list::COMMAND_WORD, p::COMMAND_PREFIX) => Box::new(ListPersonsCommand),
        ("add" | "edit" | "delete" | "find" | "filter" | "list" | "clear", _) => {
            return Err(ParseError::InvalidCommandFormat {
                usage: format!(
                    "'{}' must be followed by {} (articles) or {} (persons). {}",
                    word,
                    a::COMMAND_PREFIX,
                    p::COMMAND_PREFIX,
                    MESSAGE_HELP_HINT
                ),
            });
        }
        _ => return Err(ParseError::UnknownCommand),
    };
    Ok(command)
}

/// Splits off the first whitespace-delimited word.
fn split_first_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(i) => (&s[..i], &s[i..]),
        None => (s, ""),
    }
}
