//! Editorial status of an article.

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Where an article is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Draft,
    Published,
    Archived,
}

/// Error returned when parsing an unknown status.
#[derive(Debug, Clone, thiserror::Error)]
#[error("invalid status '{0}': expected one of DRAFT, PUBLISHED, ARCHIVED")]
pub struct ParseStatusError(String);

impl Status {
    pub const ALL: [Status; 3] = [Status::Draft, Status::Published, Status::Archived];

    /// Returns the canonical upper-case name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Draft => "DRAFT",
            Status::Published => "PUBLISHED",
            Status::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    /// Parses a status case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Status::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseStatusError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("draft".parse::<Status>().unwrap(), Status::Draft);
        assert_eq!("Published".parse::<Status>().unwrap(), Status::Published);
        assert_eq!(" ARCHIVED ".parse::<Status>().unwrap(), Status::Archived);
    }

    #[test]
    fn rejects_unknown() {
        let err = "pending".parse::<Status>().unwrap_err();
        assert!(err.to_string().contains("DRAFT, PUBLISHED, ARCHIVED"));
    }

    #[test]
    fn display_round_trips() {
        for status in Status::ALL {
            assert_eq!(status.to_string().parse::<Status>().unwrap(), status);
        }
    }

    #[test]
    fn serializes_upper_case() {
        assert_eq!(
            serde_json::to_string(&Status::Published).unwrap(),
            "\"PUBLISHED\""
        );
    }
}
