//! Contact records ("persons") kept alongside articles.

use crate::domain::Tag;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9]([A-Za-z0-9+_.-]*[A-Za-z0-9])?@[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]*[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

/// A person's full name. Identity key of a [`Person`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

/// A phone number of at least three digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Phone(String);

/// An email address of the form `local@domain.tld`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Email(String);

/// Error returned when a person field fails validation.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{0}")]
pub struct ParsePersonFieldError(String);

impl Name {
    /// # Errors
    ///
    /// Returns `ParsePersonFieldError` if the name is blank or not alphanumeric with spaces.
    pub fn new(s: &str) -> Result<Self, ParsePersonFieldError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ParsePersonFieldError("name cannot be empty".to_string()));
        }
        if !trimmed.chars().all(|c| c.is_alphanumeric() || c == ' ') {
            return Err(ParsePersonFieldError(format!(
                "invalid name '{}': names should only contain alphanumeric characters and spaces",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Phone {
    /// # Errors
    ///
    /// Returns `ParsePersonFieldError` unless the input is at least three ASCII digits.
    pub fn new(s: &str) -> Result<Self, ParsePersonFieldError> {
        let trimmed = s.trim();
        if trimmed.len() < 3 || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ParsePersonFieldError(format!(
                "invalid phone '{}': phone numbers should only contain digits, and be at least 3 digits long",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Email {
    /// # Errors
    ///
    /// Returns `ParsePersonFieldError` if the address is not `local@domain.tld`.
    pub fn new(s: &str) -> Result<Self, ParsePersonFieldError> {
        let trimmed = s.trim();
        if !EMAIL_RE.is_match(trimmed) {
            return Err(ParsePersonFieldError(format!(
                "invalid email '{}': emails should be of the format local-part@domain",
                trimmed
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Name {
    type Err = ParsePersonFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Phone {
    type Err = ParsePersonFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl FromStr for Email {
    type Err = ParsePersonFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// A contact record.
///
/// Persons are identified by name: two records with the same name are the
/// same person even if their phone or email differ.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Person {
    name: Name,
    phone: Option<Phone>,
    email: Option<Email>,
    tags: BTreeSet<Tag>,
}

impl Person {
    pub fn new(
        name: Name,
        phone: Option<Phone>,
        email: Option<Email>,
        tags: BTreeSet<Tag>,
    ) -> Self {
        Self {
            name,
            phone,
            email,
            tags,
        }
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn phone(&self) -> Option<&Phone> {
        self.phone.as_ref()
    }

    pub fn email(&self) -> Option<&Email> {
        self.email.as_ref()
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    /// Returns true if both records describe the same person.
    pub fn is_same_person(&self, other: &Person) -> bool {
        self.name == other.name
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        write!(f, "; Phone: {}", self.phone.as_ref().map_or("-", Phone::as_str))?;
        write!(f, "; Email: {}", self.email.as_ref().map_or("-", Email::as_str))?;
        write!(f, "; Tags: ")?;
        if self.tags.is_empty() {
            write!(f, "-")?;
        }
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        Ok(())
    }
}
