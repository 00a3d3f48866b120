//! Conversions from argument text to domain values.

use super::ParseError;
use crate::domain::Index;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

/// Wraps a value-type error as `ParseError::InvalidValue`.
pub(crate) fn invalid(err: impl Display) -> ParseError {
    ParseError::InvalidValue(err.to_string())
}

/// Parses a 1-based index written as plain digits, rejecting zero and signs.
pub(crate) fn parse_index(s: &str) -> Option<Index> {
    let s = s.trim();
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<usize>()
        .ok()
        .and_then(|n| Index::from_one_based(n).ok())
}

/// Parses a single value.
pub(crate) fn parse_value<T>(s: &str) -> Result<T, ParseError>
where
    T: FromStr,
    T::Err: Display,
{
    s.parse().map_err(invalid)
}

/// Parses every value of a repeatable prefix into a set.
pub(crate) fn parse_set<T>(values: &[String]) -> Result<BTreeSet<T>, ParseError>
where
    T: FromStr + Ord,
    T::Err: Display,
{
    values.iter().map(|v| parse_value(v)).collect()
}

/// Parses a repeatable prefix for an edit.
///
/// Returns `None` when the prefix was not given, and an empty set when it
/// was given exactly once with no value (`t/`), which clears the field.
pub(crate) fn parse_set_for_edit<T>(values: &[String]) -> Result<Option<BTreeSet<T>>, ParseError>
where
    T: FromStr + Ord,
    T::Err: Display,
{
    match values {
        [] => Ok(None),
        [only] if only.is_empty() => Ok(Some(BTreeSet::new())),
        _ => parse_set(values).map(Some),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Tag;
    use crate::testutil::tag_set;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_index_accepts_positive() {
        assert_eq!(parse_index(" 3 ").unwrap().one_based(), 3);
    }

    #[test]
    fn parse_index_rejects_others() {
        for input in ["0", "-1", "+1", "a", "", "1 2", "+"] {
            assert!(parse_index(input).is_none(), "accepted {input:?}");
        }
    }

    #[test]
    fn set_for_edit_absent() {
        assert_eq!(parse_set_for_edit::<Tag>(&[]).unwrap(), None);
    }

    #[test]
    fn set_for_edit_single_empty_clears() {
        assert_eq!(
            parse_set_for_edit::<Tag>(&["".to_string()]).unwrap(),
            Some(BTreeSet::new())
        );
    }

    #[test]
    fn set_for_edit_parses_values() {
        let values = vec!["News".to_string(), "local".to_string()];
        assert_eq!(
            parse_set_for_edit::<Tag>(&values).unwrap(),
            Some(tag_set(&["news", "local"]))
        );
    }

    #[test]
    fn set_for_edit_rejects_empty_among_others() {
        let values = vec!["news".to_string(), "".to_string()];
        assert!(parse_set_for_edit::<Tag>(&values).is_err());
    }
}
