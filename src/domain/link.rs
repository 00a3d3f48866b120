//! Web link to a published article.

use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)https?://[a-z0-9]([a-z0-9-]*[a-z0-9])?(\.[a-z0-9]([a-z0-9-]*[a-z0-9])?)*(:\d+)?(/\S*)?$")
        .expect("link pattern is valid")
});

/// An `http`/`https` URL pointing at the article online.
///
/// # Examples
///
/// ```
/// use pressbook::domain::Link;
///
/// let link = Link::new("https://www.example.com/news/1").unwrap();
/// assert_eq!(link.as_str(), "https://www.example.com/news/1");
/// assert!(Link::new("www.example.com").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Link(String);

/// Error returned when parsing an invalid link.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid link '{0}': links must start with http:// or https:// followed by a host name")]
pub struct ParseLinkError(String);

impl Link {
    /// Creates a new Link.
    ///
    /// # Errors
    ///
    /// Returns `ParseLinkError` if the text is not an absolute `http(s)` URL
    /// or contains whitespace.
    pub fn new(s: &str) -> Result<Self, ParseLinkError> {
        let trimmed = s.trim();
        if !LINK_RE.is_match(trimmed) {
            return Err(ParseLinkError(trimmed.to_string()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Link {
    type Err = ParseLinkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
