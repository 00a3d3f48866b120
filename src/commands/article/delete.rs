//! Deletes the article at a displayed index.

use crate::commands::{Command, CommandError, CommandResult, ExecuteResult};
use crate::domain::Index;
use crate::model::Model;

pub const COMMAND_WORD: &str = "delete";

pub const MESSAGE_USAGE: &str = "delete -a: Deletes the article identified by the index number \
used in the displayed article list.\n\
Parameters: INDEX (must be a positive integer)\n\
Example: delete -a 1";

pub const MESSAGE_SUCCESS: &str = "Deleted Article: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteArticleCommand {
    index: Index,
}

impl DeleteArticleCommand {
    pub fn new(index: Index) -> Self {
        Self { index }
    }
}

impl Command for DeleteArticleCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        let target = model
            .filtered_article_list()
            .get(self.index.zero_based())
            .map(|article| (*article).clone())
            .ok_or(CommandError::InvalidArticleIndex)?;

        model.delete_article(&target)?;
        tracing::info!(title = %target.title(), "article deleted");

        Ok(CommandResult::new(format!("{}{}", MESSAGE_SUCCESS, target)))
    }
}
