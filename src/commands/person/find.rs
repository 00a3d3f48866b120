//! Finds persons whose names contain any of the given keywords.

use crate::commands::{Command, CommandResult, ExecuteResult, View};
use crate::model::{Model, PersonPredicate};

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find -p: Finds all persons whose names contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find -p alice bob";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindPersonsCommand {
    keywords: Vec<String>,
}

impl FindPersonsCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindPersonsCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        let predicate = PersonPredicate::NameKeywords(self.keywords.clone());
        tracing::info!(filter = %predicate, "person filter changed");
        model.update_filtered_person_list(predicate);
        let count = model.filtered_person_list().len();
        Ok(CommandResult::new(format!("{} persons listed!", count)).with_view(View::Persons))
    }
}
