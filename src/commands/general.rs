//! Commands that do not touch the model.

use super::{Command, CommandResult, ExecuteResult, article, person};
use crate::model::Model;

pub const HELP_COMMAND_WORD: &str = "help";

pub const EXIT_COMMAND_WORD: &str = "exit";

pub const MESSAGE_EXIT_ACKNOWLEDGEMENT: &str = "Exiting pressbook as requested ...";

pub const MESSAGE_SHOWING_HELP: &str = "Showing help.";

/// Usage text of every command, in the order `help` prints them.
pub fn usage() -> String {
    [
        article::add::MESSAGE_USAGE,
        article::edit::MESSAGE_USAGE,
        article::delete::MESSAGE_USAGE,
        article::find::MESSAGE_USAGE,
        article::filter::MESSAGE_USAGE,
        "list -a: Lists all articles.",
        "clear -a: Removes every article.",
        person::add::MESSAGE_USAGE,
        person::delete::MESSAGE_USAGE,
        person::find::MESSAGE_USAGE,
        "list -p: Lists all persons.",
        "help: Shows this message.",
        "exit: Exits the program.",
    ]
    .join("\n\n")
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HelpCommand;

impl Command for HelpCommand {
    fn execute(&self, _model: &mut dyn Model) -> ExecuteResult {
        Ok(CommandResult::new(MESSAGE_SHOWING_HELP).with_help())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExitCommand;

impl Command for ExitCommand {
    fn execute(&self, _model: &mut dyn Model) -> ExecuteResult {
        Ok(CommandResult::new(MESSAGE_EXIT_ACKNOWLEDGEMENT).with_exit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ModelManager;

    #[test]
    fn help_requests_usage() {
        let result = HelpCommand.execute(&mut ModelManager::new()).unwrap();
        assert!(result.show_help());
        assert_eq!(result.feedback(), MESSAGE_SHOWING_HELP);
    }

    #[test]
    fn usage_lists_every_command() {
        let usage = usage();
        for word in ["add -a", "edit -a", "delete -p", "filter -a", "exit"] {
            assert!(usage.contains(word), "missing {word}");
        }
    }

    #[test]
    fn exit_sets_flag() {
        let result = ExitCommand.execute(&mut ModelManager::new()).unwrap();
        assert!(result.is_exit());
    }
}
