//! Parsers for person commands (`-p`).

use super::ParseError;
use super::syntax::{
    PERSON_PREFIXES, PERSON_SINGLE_VALUED, PREFIX_EMAIL, PREFIX_NAME, PREFIX_PHONE, PREFIX_TAG,
};
use super::tokenizer::tokenize;
use super::util::{parse_index, parse_set, parse_value};
use crate::commands::person::{
    AddPersonCommand, DeletePersonCommand, FindPersonsCommand, add, delete, find,
};
use crate::domain::{Email, Name, Person, Phone, Tag};

/// Parses `n/NAME [p/PHONE] [e/EMAIL] [t/TAG]...`.
///
/// # Errors
///
/// - `InvalidCommandFormat` if a preamble is present or `n/` is missing
/// - `DuplicatePrefixes` if `n/`, `p/` or `e/` repeats
/// - `InvalidValue` if a field fails validation
pub fn parse_add(args: &str) -> Result<AddPersonCommand, ParseError> {
    let map = tokenize(args, &PERSON_PREFIXES);

    let Some(name) = map.value(PREFIX_NAME).filter(|_| map.preamble().is_empty()) else {
        return Err(ParseError::InvalidCommandFormat {
            usage: add::MESSAGE_USAGE.to_string(),
        });
    };
    map.verify_no_duplicate_prefixes_for(&PERSON_SINGLE_VALUED)?;

    let person = Person::new(
        parse_value::<Name>(name)?,
        map.value(PREFIX_PHONE).map(parse_value::<Phone>).transpose()?,
        map.value(PREFIX_EMAIL).map(parse_value::<Email>).transpose()?,
        parse_set::<Tag>(map.all_values(PREFIX_TAG))?,
    );

    Ok(AddPersonCommand::new(person))
}

/// # Errors
///
/// Returns `InvalidCommandFormat` if the argument is not a positive index.
pub fn parse_delete(args: &str) -> Result<DeletePersonCommand, ParseError> {
    parse_index(args)
        .map(DeletePersonCommand::new)
        .ok_or_else(|| ParseError::InvalidCommandFormat {
            usage: delete::MESSAGE_USAGE.to_string(),
        })
}

/// # Errors
///
/// Returns `InvalidCommandFormat` if no keyword is given.
pub fn parse_find(args: &str) -> Result<FindPersonsCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(ParseError::InvalidCommandFormat {
            usage: find::MESSAGE_USAGE.to_string(),
        });
    }
    Ok(FindPersonsCommand::new(keywords))
}
