//! Adds a person to the person book.

use crate::commands::{Command, CommandError, CommandResult, ExecuteResult};
use crate::domain::Person;
use crate::model::Model;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add -p: Adds a person to the address book.\n\
Parameters: n/NAME [p/PHONE] [e/EMAIL] [t/TAG]...\n\
Example: add -p n/John Doe p/98765432 e/johnd@example.com t/source";

pub const MESSAGE_SUCCESS: &str = "New person added: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddPersonCommand {
    to_add: Person,
}

impl AddPersonCommand {
    pub fn new(to_add: Person) -> Self {
        Self { to_add }
    }
}

impl Command for AddPersonCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        if model.has_person(&self.to_add) {
            return Err(CommandError::DuplicatePerson);
        }

        model.add_person(self.to_add.clone())?;
        tracing::info!(name = %self.to_add.name(), "person added");

        Ok(CommandResult::new(format!("{}{}", MESSAGE_SUCCESS, self.to_add)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{alice, typical_model};

    #[test]
    fn rejects_existing_name() {
        let mut model = typical_model();
        let err = AddPersonCommand::new(alice()).execute(&mut model).unwrap_err();
        assert_eq!(err, CommandError::DuplicatePerson);
    }
}
