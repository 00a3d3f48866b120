//! Commands acting on the article book (`-a`).

pub mod add;
pub mod clear;
pub mod delete;
pub mod edit;
pub mod filter;
pub mod find;
pub mod list;

pub use add::AddArticleCommand;
pub use clear::ClearArticlesCommand;
pub use delete::DeleteArticleCommand;
pub use edit::{EditArticleCommand, EditArticleDescriptor, create_edited_article};
pub use filter::FilterArticlesCommand;
pub use find::FindArticlesCommand;
pub use list::ListArticlesCommand;

/// Entity prefix selecting the article book.
pub const COMMAND_PREFIX: &str = "-a";

/// Message reporting how many articles are visible after filtering.
pub(crate) fn articles_listed(count: usize) -> String {
    format!("{} articles listed!", count)
}
