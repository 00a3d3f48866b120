//! Concrete [`Model`] holding both books and their active filters.

use super::{ArticleBook, ArticlePredicate, Model, ModelResult, PersonBook, PersonPredicate};
use crate::domain::{Article, Person};

/// The application's model.
#[derive(Debug, Default)]
pub struct ModelManager {
    articles: ArticleBook,
    persons: PersonBook,
    article_predicate: ArticlePredicate,
    person_predicate: PersonPredicate,
}

impl ModelManager {
    /// Creates an empty model showing everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a model over existing books, showing everything.
    pub fn with_books(articles: ArticleBook, persons: PersonBook) -> Self {
        Self {
            articles,
            persons,
            ..Self::default()
        }
    }

    pub fn article_book(&self) -> &ArticleBook {
        &self.articles
    }

    pub fn person_book(&self) -> &PersonBook {
        &self.persons
    }
}

impl Model for ModelManager {
    fn has_article(&self, article: &Article) -> bool {
        self.articles.contains(article)
    }

    fn add_article(&mut self, article: Article) -> ModelResult<()> {
        self.articles.add(article)?;
        self.article_predicate = ArticlePredicate::ShowAll;
        Ok(())
    }

    fn delete_article(&mut self, target: &Article) -> ModelResult<()> {
        self.articles.remove(target)
    }

    fn set_article(&mut self, target: &Article, edited: Article) -> ModelResult<()> {
        self.articles.set(target, edited)
    }

    fn clear_articles(&mut self) {
        self.articles.clear();
    }

    fn filtered_article_list(&self) -> Vec<&Article> {
        self.articles
            .articles()
            .iter()
            .filter(|a| self.article_predicate.matches(a))
            .collect()
    }

    fn update_filtered_article_list(&mut self, predicate: ArticlePredicate) {
        self.article_predicate = predicate;
    }

    fn article_predicate(&self) -> &ArticlePredicate {
        &self.article_predicate
    }

    fn has_person(&self, person: &Person) -> bool {
        self.persons.contains(person)
    }

    fn add_person(&mut self, person: Person) -> ModelResult<()> {
        self.persons.add(person)?;
        self.person_predicate = PersonPredicate::ShowAll;
        Ok(())
    }

    fn delete_person(&mut self, target: &Person) -> ModelResult<()> {
        self.persons.remove(target)
    }

    fn filtered_person_list(&self) -> Vec<&Person> {
        self.persons
            .persons()
            .iter()
            .filter(|p| self.person_predicate.matches(p))
            .collect()
    }

    fn update_filtered_person_list(&mut self, predicate: PersonPredicate) {
        self.person_predicate = predicate;
    }
}
