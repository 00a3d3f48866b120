//! Lists every article.

use crate::commands::{Command, CommandResult, ExecuteResult, View};
use crate::model::{ArticlePredicate, Model};

pub const COMMAND_WORD: &str = "list";

pub const MESSAGE_SUCCESS: &str = "Listed all articles";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListArticlesCommand;

impl Command for ListArticlesCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        let predicate = ArticlePredicate::ShowAll;
        tracing::info!(filter = %predicate, "article filter changed");
        model.update_filtered_article_list(predicate);
        Ok(CommandResult::new(MESSAGE_SUCCESS).with_view(View::Articles))
    }
}
