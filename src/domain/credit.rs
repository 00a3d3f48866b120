//! Contributor and interviewee names credited on an article.

use std::fmt;
use std::str::FromStr;

/// A person who contributed to an article (shown as "contributor").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Author(String);

/// A person interviewed for an article (shown as "interviewee").
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Source(String);

/// Error returned when parsing an invalid contributor or interviewee name.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ParseCreditError(String);

/// Validates a credited name: non-empty, letters, digits, spaces, `.`, `'` and `-`.
fn validate_credit(kind: &str, s: &str) -> Result<String, ParseCreditError> {
    let trimmed = s.trim();

    if trimmed.is_empty() {
        return Err(ParseCreditError(format!("{} name cannot be empty", kind)));
    }

    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '.' || c == '\'' || c == '-')
    {
        return Err(ParseCreditError(format!(
            "invalid {} name '{}': names may contain only letters, digits, spaces, '.', '\\'' and '-'",
            kind, trimmed
        )));
    }

    Ok(trimmed.to_string())
}

impl Author {
    /// Creates a new contributor name.
    ///
    /// # Errors
    ///
    /// Returns `ParseCreditError` if the name is blank or contains invalid characters.
    pub fn new(s: &str) -> Result<Self, ParseCreditError> {
        validate_credit("contributor", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Source {
    /// Creates a new interviewee name.
    ///
    /// # Errors
    ///
    /// Returns `ParseCreditError` if the name is blank or contains invalid characters.
    pub fn new(s: &str) -> Result<Self, ParseCreditError> {
        validate_credit("interviewee", s).map(Self)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Author {
    type Err = ParseCreditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Source {
    type Err = ParseCreditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
