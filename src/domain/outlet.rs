//! Publication outlet (newspaper, site, broadcaster).

use std::fmt;
use std::str::FromStr;

/// An outlet an article is published in, e.g. `The Straits Times`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Outlet(String);

/// Error returned when parsing an invalid outlet.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ParseOutletError(String);

impl Outlet {
    /// Creates a new Outlet.
    ///
    /// # Errors
    ///
    /// Returns `ParseOutletError` if the outlet is blank or contains characters
    /// other than letters, digits, spaces, `.`, `&`, `'` and `-`.
    pub fn new(s: &str) -> Result<Self, ParseOutletError> {
        let trimmed = s.trim();

        if trimmed.is_empty() {
            return Err(ParseOutletError("outlet cannot be empty".to_string()));
        }

        if !trimmed
            .chars()
            .all(|c| c.is_alphanumeric() || matches!(c, ' ' | '.' | '&' | '\'' | '-'))
        {
            return Err(ParseOutletError(format!(
                "invalid outlet '{}': outlets may contain only letters, digits, spaces, '.', '&', '\\'' and '-'",
                trimmed
            )));
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Outlet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Outlet {
    type Err = ParseOutletError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
