//! Parsers for article commands (`-a`).

use super::ParseError;
use super::syntax::{
    ARTICLE_PREFIXES, ARTICLE_SINGLE_VALUED, PREFIX_CONTRIBUTOR, PREFIX_DATE, PREFIX_HEADLINE,
    PREFIX_INTERVIEWEE, PREFIX_LINK, PREFIX_OUTLET, PREFIX_STATUS, PREFIX_TAG,
};
use super::tokenizer::tokenize;
use super::util::{parse_index, parse_set, parse_set_for_edit, parse_value};
use crate::commands::article::{
    AddArticleCommand, DeleteArticleCommand, EditArticleCommand, EditArticleDescriptor,
    FilterArticlesCommand, FindArticlesCommand, add, delete, edit, filter, find,
};
use crate::domain::{Article, Author, Link, Outlet, PublicationDate, Source, Status, Tag, Title};

fn format_error(usage: &str) -> ParseError {
    ParseError::InvalidCommandFormat {
        usage: usage.to_string(),
    }
}

/// Parses `h/TITLE [c/..]... [i/..]... [t/..]... [o/..]... d/DATE s/STATUS [l/LINK]`.
///
/// # Errors
///
/// - `InvalidCommandFormat` if a preamble is present or `h/`, `d/`, `s/` is missing
/// - `DuplicatePrefixes` if a single-valued prefix repeats
/// - `InvalidValue` if a field fails validation
pub fn parse_add(args: &str) -> Result<AddArticleCommand, ParseError> {
    let map = tokenize(args, &ARTICLE_PREFIXES);

    let required = [PREFIX_HEADLINE, PREFIX_DATE, PREFIX_STATUS];
    if !map.preamble().is_empty() || !required.iter().all(|p| map.is_present(*p)) {
        return Err(format_error(add::MESSAGE_USAGE));
    }
    map.verify_no_duplicate_prefixes_for(&ARTICLE_SINGLE_VALUED)?;

    let title: Title = parse_value(map.value(PREFIX_HEADLINE).unwrap_or_default())?;
    let date: PublicationDate = parse_value(map.value(PREFIX_DATE).unwrap_or_default())?;
    let status: Status = parse_value(map.value(PREFIX_STATUS).unwrap_or_default())?;
    let link = map.value(PREFIX_LINK).map(parse_value::<Link>).transpose()?;

    let article = Article::builder(title, date, status)
        .authors(parse_set::<Author>(map.all_values(PREFIX_CONTRIBUTOR))?)
        .sources(parse_set::<Source>(map.all_values(PREFIX_INTERVIEWEE))?)
        .tags(parse_set::<Tag>(map.all_values(PREFIX_TAG))?)
        .outlets(parse_set::<Outlet>(map.all_values(PREFIX_OUTLET))?)
        .link(link)
        .build();

    Ok(AddArticleCommand::new(article))
}

/// Parses `INDEX [h/..] [c/..]... [i/..]... [t/..]... [o/..]... [d/..] [s/..] [l/..]`.
///
/// # Errors
///
/// - `InvalidCommandFormat` if the preamble is not a positive index
/// - `DuplicatePrefixes` if a single-valued prefix repeats
/// - `InvalidValue` if a field fails validation
/// - `NotEdited` if no field is given
pub fn parse_edit(args: &str) -> Result<EditArticleCommand, ParseError> {
    let map = tokenize(args, &ARTICLE_PREFIXES);

    let index = parse_index(map.preamble()).ok_or_else(|| format_error(edit::MESSAGE_USAGE))?;
    map.verify_no_duplicate_prefixes_for(&ARTICLE_SINGLE_VALUED)?;

    let mut descriptor = EditArticleDescriptor::new();

    if let Some(value) = map.value(PREFIX_HEADLINE) {
        descriptor.set_title(parse_value(value)?);
    }
    if let Some(authors) = parse_set_for_edit::<Author>(map.all_values(PREFIX_CONTRIBUTOR))? {
        descriptor.set_authors(authors);
    }
    if let Some(sources) = parse_set_for_edit::<Source>(map.all_values(PREFIX_INTERVIEWEE))? {
        descriptor.set_sources(sources);
    }
    if let Some(tags) = parse_set_for_edit::<Tag>(map.all_values(PREFIX_TAG))? {
        descriptor.set_tags(tags);
    }
    if let Some(outlets) = parse_set_for_edit::<Outlet>(map.all_values(PREFIX_OUTLET))? {
        descriptor.set_outlets(outlets);
    }
    if let Some(value) = map.value(PREFIX_DATE) {
        descriptor.set_publication_date(parse_value(value)?);
    }
    if let Some(value) = map.value(PREFIX_STATUS) {
        descriptor.set_status(parse_value(value)?);
    }
    if let Some(value) = map.value(PREFIX_LINK) {
        descriptor.set_link(parse_value(value)?);
    }

    if !descriptor.is_any_field_edited() {
        return Err(ParseError::NotEdited);
    }

    Ok(EditArticleCommand::new(index, descriptor))
}

/// Parses `INDEX`.
///
/// # Errors
///
/// Returns `InvalidCommandFormat` if the argument is not a positive index.
pub fn parse_delete(args: &str) -> Result<DeleteArticleCommand, ParseError> {
    parse_index(args)
        .map(DeleteArticleCommand::new)
        .ok_or_else(|| format_error(delete::MESSAGE_USAGE))
}

/// Parses `KEYWORD [MORE_KEYWORDS]...`.
///
/// # Errors
///
/// Returns `InvalidCommandFormat` if no keyword is given.
pub fn parse_find(args: &str) -> Result<FindArticlesCommand, ParseError> {
    let keywords: Vec<String> = args.split_whitespace().map(str::to_string).collect();
    if keywords.is_empty() {
        return Err(format_error(find::MESSAGE_USAGE));
    }
    Ok(FindArticlesCommand::new(keywords))
}

/// Parses `STATUS`.
///
/// # Errors
///
/// - `InvalidCommandFormat` if no status is given
/// - `InvalidValue` if the status is unknown
pub fn parse_filter(args: &str) -> Result<FilterArticlesCommand, ParseError> {
    if args.trim().is_empty() {
        return Err(format_error(filter::MESSAGE_USAGE));
    }
    parse_value(args).map(FilterArticlesCommand::new)
}
