//! Lists every person.

use crate::commands::{Command, CommandResult, ExecuteResult, View};
use crate::model::{Model, PersonPredicate};

pub const COMMAND_WORD: &str = "list";

pub const MESSAGE_SUCCESS: &str = "Listed all persons";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListPersonsCommand;

impl Command for ListPersonsCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        let predicate = PersonPredicate::ShowAll;
        tracing::info!(filter = %predicate, "person filter changed");
        model.update_filtered_person_list(predicate);
        Ok(CommandResult::new(MESSAGE_SUCCESS).with_view(View::Persons))
    }
}
