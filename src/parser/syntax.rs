//! Argument prefixes of the command language.

use std::fmt;

/// A marker such as `h/` that introduces an argument value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(&'static str);

impl Prefix {
    pub const fn new(prefix: &'static str) -> Self {
        Self(prefix)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

pub const PREFIX_HEADLINE: Prefix = Prefix::new("h/");
pub const PREFIX_CONTRIBUTOR: Prefix = Prefix::new("c/");
pub const PREFIX_INTERVIEWEE: Prefix = Prefix::new("i/");
pub const PREFIX_TAG: Prefix = Prefix::new("t/");
pub const PREFIX_OUTLET: Prefix = Prefix::new("o/");
pub const PREFIX_DATE: Prefix = Prefix::new("d/");
pub const PREFIX_STATUS: Prefix = Prefix::new("s/");
pub const PREFIX_LINK: Prefix = Prefix::new("l/");

pub const PREFIX_NAME: Prefix = Prefix::new("n/");
pub const PREFIX_PHONE: Prefix = Prefix::new("p/");
pub const PREFIX_EMAIL: Prefix = Prefix::new("e/");

/// Every prefix understood by article commands.
pub const ARTICLE_PREFIXES: [Prefix; 8] = [
    PREFIX_HEADLINE,
    PREFIX_CONTRIBUTOR,
    PREFIX_INTERVIEWEE,
    PREFIX_TAG,
    PREFIX_OUTLET,
    PREFIX_DATE,
    PREFIX_STATUS,
    PREFIX_LINK,
];

/// Article prefixes that may appear at most once.
pub const ARTICLE_SINGLE_VALUED: [Prefix; 4] =
    [PREFIX_HEADLINE, PREFIX_DATE, PREFIX_STATUS, PREFIX_LINK];

/// Every prefix understood by person commands.
pub const PERSON_PREFIXES: [Prefix; 4] = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL, PREFIX_TAG];

pub const PERSON_SINGLE_VALUED: [Prefix; 3] = [PREFIX_NAME, PREFIX_PHONE, PREFIX_EMAIL];
