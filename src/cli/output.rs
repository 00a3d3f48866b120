//! Output format types for command results.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::domain::{Article, Person, Status, Tag};

/// Output format for command results.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output (default)
    #[default]
    Human,
    /// One JSON document per command, for programmatic consumption
    Json,
}

/// Wrapper for serializable command output.
#[derive(Debug, Serialize)]
pub struct Output<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> Output<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Result of one successful command.
#[derive(Debug, Default, Serialize)]
pub struct CommandOutput {
    pub feedback: String,
    /// Usage text, present only for `help`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub help: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub articles: Option<Vec<ArticleListing>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons: Option<Vec<PersonListing>>,
}

/// A rejected command.
#[derive(Debug, Serialize)]
pub struct ErrorOutput {
    pub error: String,
}

/// A single article in listing output.
#[derive(Debug, Serialize)]
pub struct ArticleListing {
    pub index: usize,
    pub title: String,
    pub contributors: Vec<String>,
    pub interviewees: Vec<String>,
    pub tags: Vec<Tag>,
    pub outlets: Vec<String>,
    pub date: String,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub persons: Vec<String>,
}

impl ArticleListing {
    /// Builds the listing for the article shown at one-based `index`.
    pub fn new(index: usize, article: &Article) -> Self {
        Self {
            index,
            title: article.title().to_string(),
            contributors: strings(article.authors()),
            interviewees: strings(article.sources()),
            tags: article.tags().iter().cloned().collect(),
            outlets: strings(article.outlets()),
            date: article.publication_date().to_string(),
            status: article.status(),
            link: article.link().map(ToString::to_string),
            persons: article
                .persons()
                .iter()
                .map(|p| p.name().to_string())
                .collect(),
        }
    }
}

/// A single person in listing output.
#[derive(Debug, Serialize)]
pub struct PersonListing {
    pub index: usize,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub tags: Vec<Tag>,
}

impl PersonListing {
    pub fn new(index: usize, person: &Person) -> Self {
        Self {
            index,
            name: person.name().to_string(),
            phone: person.phone().map(ToString::to_string),
            email: person.email().map(ToString::to_string),
            tags: person.tags().iter().cloned().collect(),
        }
    }
}

fn strings<'a, T: ToString + 'a>(items: impl IntoIterator<Item = &'a T>) -> Vec<String> {
    items.into_iter().map(ToString::to_string).collect()
}
