//! Clears the article book.

use crate::commands::{Command, CommandResult, ExecuteResult};
use crate::model::{ArticlePredicate, Model};

pub const COMMAND_WORD: &str = "clear";

pub const MESSAGE_SUCCESS: &str = "Article book has been cleared!";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClearArticlesCommand;

impl Command for ClearArticlesCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        model.clear_articles();
        model.update_filtered_article_list(ArticlePredicate::ShowAll);
        tracing::info!("article book cleared");
        Ok(CommandResult::new(MESSAGE_SUCCESS))
    }
}
