//! Adds an article to the article book.

use crate::commands::{Command, CommandError, CommandResult, ExecuteResult};
use crate::domain::Article;
use crate::model::Model;

pub const COMMAND_WORD: &str = "add";

pub const MESSAGE_USAGE: &str = "add -a: Adds an article to the article book.\n\
Parameters: h/HEADLINE [c/CONTRIBUTOR]... [i/INTERVIEWEE]... [t/TAG]... [o/OUTLET]... \
d/DATE s/STATUS [l/LINK]\n\
Example: add -a h/Harbour Reopens c/Alex Yeoh i/Harbour Master t/local o/The Daily Courier \
d/12-03-2024 s/PUBLISHED l/https://www.example.com/harbour";

pub const MESSAGE_SUCCESS: &str = "New article added: ";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddArticleCommand {
    to_add: Article,
}

impl AddArticleCommand {
    pub fn new(to_add: Article) -> Self {
        Self { to_add }
    }
}

impl Command for AddArticleCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        if model.has_article(&self.to_add) {
            return Err(CommandError::DuplicateArticle);
        }

        model.add_article(self.to_add.clone())?;
        tracing::info!(title = %self.to_add.title(), "article added");

        Ok(CommandResult::new(format!("{}{}", MESSAGE_SUCCESS, self.to_add)))
    }
}
