//! Unique lists backing the model.

use super::{ModelError, ModelResult};
use crate::domain::{Article, Person};

/// Ordered list of articles in which no two articles share an identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleBook {
    articles: Vec<Article>,
}

impl ArticleBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Returns true if an article with the same identity is stored.
    pub fn contains(&self, article: &Article) -> bool {
        self.articles.iter().any(|a| a.is_same_article(article))
    }

    /// # Errors
    ///
    /// Returns `ModelError::DuplicateArticle` if the identity is taken.
    pub fn add(&mut self, article: Article) -> ModelResult<()> {
        if self.contains(&article) {
            return Err(ModelError::DuplicateArticle);
        }
        self.articles.push(article);
        Ok(())
    }

    /// Replaces `target` with `edited` in place.
    ///
    /// # Errors
    ///
    /// - `ModelError::ArticleNotFound` if `target` is not stored
    /// - `ModelError::DuplicateArticle` if `edited` changes identity to one
    ///   already held by another article
    pub fn set(&mut self, target: &Article, edited: Article) -> ModelResult<()> {
        let position = self
            .articles
            .iter()
            .position(|a| a == target)
            .ok_or_else(|| ModelError::ArticleNotFound {
                title: target.title().to_string(),
            })?;

        if !target.is_same_article(&edited) && self.contains(&edited) {
            return Err(ModelError::DuplicateArticle);
        }

        self.articles[position] = edited;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ModelError::ArticleNotFound` if `target` is not stored.
    pub fn remove(&mut self, target: &Article) -> ModelResult<()> {
        let position = self
            .articles
            .iter()
            .position(|a| a == target)
            .ok_or_else(|| ModelError::ArticleNotFound {
                title: target.title().to_string(),
            })?;
        self.articles.remove(position);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.articles.clear();
    }
}

/// Ordered list of persons in which no two persons share a name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PersonBook {
    persons: Vec<Person>,
}

impl PersonBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persons(&self) -> &[Person] {
        &self.persons
    }

    pub fn contains(&self, person: &Person) -> bool {
        self.persons.iter().any(|p| p.is_same_person(person))
    }

    /// # Errors
    ///
    /// Returns `ModelError::DuplicatePerson` if the name is taken.
    pub fn add(&mut self, person: Person) -> ModelResult<()> {
        if self.contains(&person) {
            return Err(ModelError::DuplicatePerson);
        }
        self.persons.push(person);
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `ModelError::PersonNotFound` if `target` is not stored.
    pub fn remove(&mut self, target: &Person) -> ModelResult<()> {
        let position = self
            .persons
            .iter()
            .position(|p| p == target)
            .ok_or_else(|| ModelError::PersonNotFound {
                name: target.name().to_string(),
            })?;
        self.persons.remove(position);
        Ok(())
    }
}
