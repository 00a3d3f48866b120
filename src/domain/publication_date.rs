//! Publication date of an article.

use chrono::NaiveDate;
use std::fmt;
use std::str::FromStr;

/// Format used both to parse and display publication dates (`10-10-2024`).
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// The calendar date an article was (or will be) published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PublicationDate(NaiveDate);

/// Error returned when parsing an invalid publication date.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid date '{0}': dates must be a real calendar date written DD-MM-YYYY")]
pub struct ParsePublicationDateError(String);

impl PublicationDate {
    /// Parses a `DD-MM-YYYY` date.
    ///
    /// # Errors
    ///
    /// Returns `ParsePublicationDateError` if the text is not in `DD-MM-YYYY`
    /// form or names a date that does not exist (e.g. `31-02-2024`).
    pub fn new(s: &str) -> Result<Self, ParsePublicationDateError> {
        let s = s.trim();
        NaiveDate::parse_from_str(s, DATE_FORMAT)
            .map(Self)
            .map_err(|_| ParsePublicationDateError(s.to_string()))
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self(date)
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for PublicationDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(DATE_FORMAT))
    }
}

impl FromStr for PublicationDate {
    type Err = ParsePublicationDateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
