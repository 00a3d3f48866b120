//! Commands: one struct per user action, executed against a [`Model`].

pub mod article;
pub mod general;
pub mod person;

pub use general::{ExitCommand, HelpCommand};

use crate::model::{Model, ModelError};
use std::fmt;
use thiserror::Error;

/// Message shown when a displayed-article index is out of range.
pub const MESSAGE_INVALID_ARTICLE_DISPLAYED_INDEX: &str = "The article index provided is invalid";

/// Message shown when a displayed-person index is out of range.
pub const MESSAGE_INVALID_PERSON_DISPLAYED_INDEX: &str = "The person index provided is invalid";

/// Which list the user should be shown after a command runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Articles,
    Persons,
}

/// Outcome of a successful command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandResult {
    feedback: String,
    view: Option<View>,
    show_help: bool,
    exit: bool,
}

impl CommandResult {
    /// A result that only carries feedback for the user.
    pub fn new(feedback: impl Into<String>) -> Self {
        Self {
            feedback: feedback.into(),
            view: None,
            show_help: false,
            exit: false,
        }
    }

    /// Asks the front end to display the given list.
    pub fn with_view(mut self, view: View) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_help(mut self) -> Self {
        self.show_help = true;
        self
    }

    pub fn with_exit(mut self) -> Self {
        self.exit = true;
        self
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn view(&self) -> Option<View> {
        self.view
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn is_exit(&self) -> bool {
        self.exit
    }
}

/// Recoverable, user-facing command failures.
///
/// A failed command leaves the model unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("{}", MESSAGE_INVALID_ARTICLE_DISPLAYED_INDEX)]
    InvalidArticleIndex,

    #[error("{}", MESSAGE_INVALID_PERSON_DISPLAYED_INDEX)]
    InvalidPersonIndex,

    #[error("{}", article::edit::MESSAGE_DUPLICATE_ARTICLE)]
    DuplicateArticle,

    #[error("{}", person::MESSAGE_DUPLICATE_PERSON)]
    DuplicatePerson,

    #[error(transparent)]
    Model(#[from] ModelError),
}

/// Result of executing a command.
pub type ExecuteResult = Result<CommandResult, CommandError>;

/// A parsed user action.
pub trait Command: fmt::Debug {
    /// Runs the command, mutating `model` on success.
    ///
    /// # Errors
    ///
    /// Returns a `CommandError` describing why nothing was changed.
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult;
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn result_builders_set_flags() {
        let result = CommandResult::new("ok").with_view(View::Persons).with_help();
        assert_eq!(result.feedback(), "ok");
        assert_eq!(result.view(), Some(View::Persons));
        assert!(result.show_help());
        assert!(!result.is_exit());
    }

    #[test]
    fn error_messages_are_user_facing() {
        assert_eq!(
            CommandError::InvalidArticleIndex.to_string(),
            "The article index provided is invalid"
        );
        assert_eq!(
            CommandError::DuplicateArticle.to_string(),
            "This article already exists in the article book."
        );
        assert_eq!(
            CommandError::from(ModelError::DuplicatePerson).to_string(),
            "This person already exists in the address book."
        );
    }
}
