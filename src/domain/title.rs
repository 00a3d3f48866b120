//! Article headline.

use std::fmt;
use std::str::FromStr;

/// The headline of an article.
///
/// Titles are the identity key of an article: two articles with equal titles
/// are considered the same article. Surrounding whitespace is trimmed;
/// interior text is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Title(String);

/// Error returned when parsing an invalid title.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ParseTitleError(String);

impl Title {
    /// Creates a new Title.
    ///
    /// # Errors
    ///
    /// Returns `ParseTitleError` if the title is empty or whitespace-only.
    pub fn new(s: &str) -> Result<Self, ParseTitleError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParseTitleError("headline cannot be empty".to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the whitespace-separated words of the title.
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.0.split_whitespace()
    }
}

impl fmt::Display for Title {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Title {
    type Err = ParseTitleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
