//! Finds articles whose titles contain any of the given keywords.

use super::articles_listed;
use crate::commands::{Command, CommandResult, ExecuteResult, View};
use crate::model::{ArticlePredicate, Model};

pub const COMMAND_WORD: &str = "find";

pub const MESSAGE_USAGE: &str = "find -a: Finds all articles whose headlines contain any of \
the specified keywords (case-insensitive) and displays them as a list with index numbers.\n\
Parameters: KEYWORD [MORE_KEYWORDS]...\n\
Example: find -a harbour budget";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FindArticlesCommand {
    keywords: Vec<String>,
}

impl FindArticlesCommand {
    pub fn new(keywords: Vec<String>) -> Self {
        Self { keywords }
    }
}

impl Command for FindArticlesCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        let predicate = ArticlePredicate::TitleKeywords(self.keywords.clone());
        tracing::info!(filter = %predicate, "article filter changed");
        model.update_filtered_article_list(predicate);

        let count = model.filtered_article_list().len();
        Ok(CommandResult::new(articles_listed(count)).with_view(View::Articles))
    }
}
