//! Deletes the person at a displayed index.

use crate::commands::{Command, CommandError, CommandResult, ExecuteResult};
use crate::domain::Index;
use crate::model::Model;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete -p: Deletes the person identified by the index number \
used in the displayed person list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete -p 1";

pub const MESSAGE_SUCCESS: &str = "Deleted Person: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePersonCommand {
    index: Index,
}

impl DeletePersonCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeletePersonCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        let target = model
            .filtered_person_list()
            .get(self.index.zero_based())
            .map(|person| (*person).clone())
            .ok_or(CommandError::InvalidPersonIndex)?;

        model.delete_person(&target)?;
        tracing::info!(name = %target.name(), "person deleted");

        Ok(CommandResult::new(format!("{}{}", MESSAGE_SUCCESS, target)))
    }
}
