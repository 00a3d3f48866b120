//! Splits command arguments into a preamble and prefixed values.

use super::ParseError;
use super::syntax::Prefix;
use std::collections::HashMap;

/// Arguments grouped by prefix, in the order they were given.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentMultimap {
    preamble: String,
    values: HashMap<Prefix, Vec<String>>,
}

impl ArgumentMultimap {
    /// Returns the text before the first prefix, trimmed.
    pub fn preamble(&self) -> &str {
        &self.preamble
    }

    /// Returns the last value given for `prefix`.
    pub fn value(&self, prefix: Prefix) -> Option<&str> {
        self.values
            .get(&prefix)
            .and_then(|v| v.last())
            .map(String::as_str)
    }

    /// Returns every value given for `prefix`, possibly none.
    pub fn all_values(&self, prefix: Prefix) -> &[String] {
        self.values.get(&prefix).map_or(&[], Vec::as_slice)
    }

    pub fn is_present(&self, prefix: Prefix) -> bool {
        self.values.contains_key(&prefix)
    }

    /// Fails if any of `prefixes` was given more than once.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::DuplicatePrefixes` naming the repeated prefixes.
    pub fn verify_no_duplicate_prefixes_for(&self, prefixes: &[Prefix]) -> Result<(), ParseError> {
        let duplicated: Vec<String> = prefixes
            .iter()
            .filter(|p| self.all_values(**p).len() > 1)
            .map(|p| p.to_string())
            .collect();

        if duplicated.is_empty() {
            Ok(())
        } else {
            Err(ParseError::DuplicatePrefixes {
                prefixes: duplicated,
            })
        }
    }
}

/// Tokenizes `args` against `prefixes`.
///
/// A prefix only counts at the start of `args` or right after whitespace,
/// so `https://a/b/` inside a value is not mistaken for a prefix.
pub fn tokenize(args: &str, prefixes: &[Prefix]) -> ArgumentMultimap {
    let mut positions: Vec<(usize, Prefix)> = prefixes
        .iter()
        .flat_map(|prefix| {
            args.match_indices(prefix.as_str())
                .filter(|(i, _)| {
                    args[..*i]
                        .chars()
                        .next_back()
                        .is_none_or(char::is_whitespace)
                })
                .map(move |(i, _)| (i, *prefix))
        })
        .collect();
    positions.sort_by_key(|(i, _)| *i);

    let preamble_end = positions.first().map_or(args.len(), |(i, _)| *i);
    let mut map = ArgumentMultimap {
        preamble: args[..preamble_end].trim().to_string(),
        values: HashMap::new(),
    };

    for (n, (start, prefix)) in positions.iter().enumerate() {
        let value_start = start + prefix.as_str().len();
        let value_end = positions.get(n + 1).map_or(args.len(), |(i, _)| *i);
        map.values
            .entry(*prefix)
            .or_default()
            .push(args[value_start..value_end].trim().to_string());
    }

    map
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::syntax::{PREFIX_HEADLINE, PREFIX_LINK, PREFIX_STATUS, PREFIX_TAG};
    use pretty_assertions::assert_eq;

    const PREFIXES: [Prefix; 4] = [PREFIX_HEADLINE, PREFIX_TAG, PREFIX_STATUS, PREFIX_LINK];

    #[test]
    fn preamble_only() {
        let map = tokenize("  1  ", &PREFIXES);
        assert_eq!(map.preamble(), "1");
        assert!(!map.is_present(PREFIX_HEADLINE));
    }

    #[test]
    fn splits_values_and_trims() {
        let map = tokenize("2 h/ Rail Strike  t/labour t/transport s/DRAFT", &PREFIXES);
        assert_eq!(map.preamble(), "2");
        assert_eq!(map.value(PREFIX_HEADLINE), Some("Rail Strike"));
        assert_eq!(map.all_values(PREFIX_TAG), &["labour", "transport"]);
        assert_eq!(map.value(PREFIX_STATUS), Some("DRAFT"));
    }

    #[test]
    fn prefix_inside_value_is_ignored() {
        let map = tokenize("h/Review l/https://example.com/a/s/t/", &PREFIXES);
        assert_eq!(map.value(PREFIX_LINK), Some("https://example.com/a/s/t/"));
        assert!(!map.is_present(PREFIX_TAG));
    }

    #[test]
    fn empty_value_is_kept() {
        let map = tokenize("1 t/", &PREFIXES);
        assert_eq!(map.all_values(PREFIX_TAG), &[""]);
    }

    #[test]
    fn value_returns_last_occurrence() {
        let map = tokenize("h/First h/Second", &PREFIXES);
        assert_eq!(map.value(PREFIX_HEADLINE), Some("Second"));
    }

    #[test]
    fn duplicate_single_valued_prefixes_rejected() {
        let map = tokenize("h/First h/Second s/DRAFT s/ARCHIVED t/a t/b", &PREFIXES);
        let err = map
            .verify_no_duplicate_prefixes_for(&[PREFIX_HEADLINE, PREFIX_STATUS, PREFIX_LINK])
            .unwrap_err();
        assert_eq!(
            err,
            ParseError::DuplicatePrefixes {
                prefixes: vec!["h/".into(), "s/".into()]
            }
        );
    }
}
