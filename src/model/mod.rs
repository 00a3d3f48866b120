//! In-memory model: article and person books plus the filtered views.

mod book;
mod manager;
mod predicate;
pub mod sample;

pub use book::{ArticleBook, PersonBook};
pub use manager::ModelManager;
pub use predicate::{ArticlePredicate, PersonPredicate};

use crate::domain::{Article, Person};
use thiserror::Error;

/// Errors raised by the backing books when an update would break uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// The article to update or remove is not in the book.
    #[error("article not found: {title}")]
    ArticleNotFound { title: String },

    /// The operation would store two articles with the same identity.
    #[error("This article already exists in the article book.")]
    DuplicateArticle,

    /// The person to update or remove is not in the book.
    #[error("person not found: {name}")]
    PersonNotFound { name: String },

    /// The operation would store two persons with the same identity.
    #[error("This person already exists in the address book.")]
    DuplicatePerson,
}

/// Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// The API commands execute against.
///
/// Lists returned by the `filtered_*` methods are views: they reflect the
/// active predicate and keep book order.
pub trait Model {
    /// Returns true if an article with the same identity exists.
    fn has_article(&self, article: &Article) -> bool;

    /// Adds an article. It must not already exist.
    fn add_article(&mut self, article: Article) -> ModelResult<()>;

    /// Removes `target`, which must be in the book.
    fn delete_article(&mut self, target: &Article) -> ModelResult<()>;

    /// Replaces `target` with `edited`, keeping its position.
    ///
    /// `edited` may share the identity of `target`, but not of any other article.
    fn set_article(&mut self, target: &Article, edited: Article) -> ModelResult<()>;

    /// Removes every article.
    fn clear_articles(&mut self);

    /// Returns the articles matching the active article predicate.
    fn filtered_article_list(&self) -> Vec<&Article>;

    /// Replaces the active article predicate.
    fn update_filtered_article_list(&mut self, predicate: ArticlePredicate);

    fn article_predicate(&self) -> &ArticlePredicate;

    /// Returns true if a person with the same identity exists.
    fn has_person(&self, person: &Person) -> bool;

    fn add_person(&mut self, person: Person) -> ModelResult<()>;

    fn delete_person(&mut self, target: &Person) -> ModelResult<()>;

    /// Returns the persons matching the active person predicate.
    fn filtered_person_list(&self) -> Vec<&Person>;

    fn update_filtered_person_list(&mut self, predicate: PersonPredicate);
}
