//! Case-insensitive tag type for labelling articles and persons.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// A case-insensitive tag.
///
/// Tags are flat labels such as `politics` or `follow-up`.
/// They are normalized to lowercase internally, making `Politics`, `politics`, and `POLITICS` equivalent.
///
/// # Validation Rules
/// - Non-empty after normalization
/// - Must contain only alphanumeric characters, hyphens, and underscores
///
/// # Examples
///
/// ```
/// use pressbook::domain::Tag;
///
/// let tag = Tag::new("Politics").unwrap();
/// assert_eq!(tag.as_str(), "politics");
///
/// let tag2 = Tag::new("POLITICS").unwrap();
/// assert_eq!(tag, tag2);
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag(String); // Always stored lowercase

/// Error returned when parsing an invalid tag.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ParseTagError(String);

impl Tag {
    /// Creates a new Tag from a string.
    ///
    /// The input is normalized (trimmed, converted to lowercase) and validated.
    ///
    /// # Errors
    ///
    /// Returns `ParseTagError` if:
    /// - The tag is empty or whitespace-only
    /// - The tag contains invalid characters (only alphanumeric, hyphens, underscores allowed)
    pub fn new(s: &str) -> Result<Self, ParseTagError> {
        let normalized = s.trim().to_lowercase();

        if normalized.is_empty() {
            return Err(ParseTagError("tag cannot be empty".to_string()));
        }

        if !normalized
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        {
            return Err(ParseTagError(format!(
                "invalid tag '{}': tags must contain only alphanumeric characters, hyphens, and underscores",
                normalized
            )));
        }

        Ok(Self(normalized))
    }

    /// Returns the normalized tag value as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Tag(\"{}\")", self.0)
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}
