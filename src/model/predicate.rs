//! Predicates that decide which entries the filtered lists show.

use crate::domain::{Article, ParseStatusError, Person, Status};
use std::fmt;

/// Filter applied to the displayed article list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ArticlePredicate {
    /// Every article is shown.
    #[default]
    ShowAll,
    /// Articles whose status equals the given one.
    Status(Status),
    /// Articles with a title word equal (ignoring case) to any keyword.
    TitleKeywords(Vec<String>),
}

impl ArticlePredicate {
    /// Builds a status predicate from a status name such as `"DRAFT"`.
    ///
    /// # Errors
    ///
    /// Returns `ParseStatusError` if the name is not a known status.
    pub fn status(name: &str) -> Result<Self, ParseStatusError> {
        name.parse().map(Self::Status)
    }

    pub fn matches(&self, article: &Article) -> bool {
        match self {
            Self::ShowAll => true,
            Self::Status(status) => article.status() == *status,
            Self::TitleKeywords(keywords) => article
                .title()
                .words()
                .any(|word| keywords.iter().any(|k| k.eq_ignore_ascii_case(word))),
        }
    }
}

impl fmt::Display for ArticlePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowAll => f.write_str("all articles"),
            Self::Status(status) => write!(f, "status = {}", status),
            Self::TitleKeywords(keywords) => {
                write!(f, "title contains any of [{}]", keywords.join(", "))
            }
        }
    }
}

/// Filter applied to the displayed person list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PersonPredicate {
    #[default]
    ShowAll,
    /// Persons with a name word equal (ignoring case) to any keyword.
    NameKeywords(Vec<String>),
}

impl PersonPredicate {
    pub fn matches(&self, person: &Person) -> bool {
        match self {
            Self::ShowAll => true,
            Self::NameKeywords(keywords) => person
                .name()
                .as_str()
                .split_whitespace()
                .any(|word| keywords.iter().any(|k| k.eq_ignore_ascii_case(word))),
        }
    }
}

impl fmt::Display for PersonPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShowAll => f.write_str("all persons"),
            Self::NameKeywords(keywords) => {
                write!(f, "name contains any of [{}]", keywords.join(", "))
            }
        }
    }
}
