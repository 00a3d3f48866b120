//! Shows only articles with a given status.

use super::articles_listed;
use crate::commands::{Command, CommandResult, ExecuteResult, View};
use crate::domain::Status;
use crate::model::{ArticlePredicate, Model};

pub const COMMAND_WORD: &str = "filter";

pub const MESSAGE_USAGE: &str = "filter -a: Shows the articles with the given status.\n\
Parameters: STATUS (DRAFT, PUBLISHED or ARCHIVED)\n\
Example: filter -a DRAFT";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterArticlesCommand {
    status: Status,
}

impl FilterArticlesCommand {
    pub fn new(status: Status) -> Self {
        Self { status }
    }
}

impl Command for FilterArticlesCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        let predicate = ArticlePredicate::Status(self.status);
        tracing::info!(filter = %predicate, "article filter changed");
        model.update_filtered_article_list(predicate);

        let count = model.filtered_article_list().len();
        Ok(CommandResult::new(articles_listed(count)).with_view(View::Articles))
    }
}
