//! Article entity: a news piece tracked in the article book.

use crate::domain::{Author, Link, Outlet, Person, PublicationDate, Source, Status, Tag, Title};
use std::collections::BTreeSet;
use std::fmt;

/// A news article.
///
/// Articles are immutable; edits build a replacement with
/// [`Article::builder`] or [`Article::to_builder`].
///
/// # Identity
///
/// Two articles are the *same article* ([`Article::is_same_article`]) when
/// their titles are equal. Full equality (`==`) compares every field,
/// including the associated persons.
///
/// # Examples
///
/// ```
/// use pressbook::domain::{Article, PublicationDate, Status, Title};
///
/// let article = Article::builder(
///     Title::new("Harbour Reopens").unwrap(),
///     PublicationDate::new("10-10-2024").unwrap(),
///     Status::Draft,
/// )
/// .build();
/// assert_eq!(article.title().as_str(), "Harbour Reopens");
/// assert!(article.link().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Article {
    title: Title,
    authors: BTreeSet<Author>,
    sources: BTreeSet<Source>,
    tags: BTreeSet<Tag>,
    outlets: BTreeSet<Outlet>,
    publication_date: PublicationDate,
    status: Status,
    link: Option<Link>,
    persons: BTreeSet<Person>,
}

impl Article {
    /// Creates a builder for an article with the required fields set.
    pub fn builder(
        title: Title,
        publication_date: PublicationDate,
        status: Status,
    ) -> ArticleBuilder {
        ArticleBuilder {
            title,
            authors: BTreeSet::new(),
            sources: BTreeSet::new(),
            tags: BTreeSet::new(),
            outlets: BTreeSet::new(),
            publication_date,
            status,
            link: None,
            persons: BTreeSet::new(),
        }
    }

    /// Creates a builder pre-filled with every field of this article.
    pub fn to_builder(&self) -> ArticleBuilder {
        ArticleBuilder {
            title: self.title.clone(),
            authors: self.authors.clone(),
            sources: self.sources.clone(),
            tags: self.tags.clone(),
            outlets: self.outlets.clone(),
            publication_date: self.publication_date,
            status: self.status,
            link: self.link.clone(),
            persons: self.persons.clone(),
        }
    }

    pub fn title(&self) -> &Title {
        &self.title
    }

    /// Returns the contributors.
    pub fn authors(&self) -> &BTreeSet<Author> {
        &self.authors
    }

    /// Returns the interviewees.
    pub fn sources(&self) -> &BTreeSet<Source> {
        &self.sources
    }

    pub fn tags(&self) -> &BTreeSet<Tag> {
        &self.tags
    }

    pub fn outlets(&self) -> &BTreeSet<Outlet> {
        &self.outlets
    }

    pub fn publication_date(&self) -> PublicationDate {
        self.publication_date
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }

    /// Returns the persons associated with this article.
    pub fn persons(&self) -> &BTreeSet<Person> {
        &self.persons
    }

    /// Returns true if both articles have the same title.
    ///
    /// This is the identity used for duplicate detection, and is weaker
    /// than full equality.
    pub fn is_same_article(&self, other: &Article) -> bool {
        self.title == other.title
    }
}

/// Writes `items` separated by `, `, or `-` when there are none.
fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &BTreeSet<T>) -> fmt::Result {
    if items.is_empty() {
        return f.write_str("-");
    }
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}; Contributors: ", self.title)?;
        write_list(f, &self.authors)?;
        f.write_str("; Interviewees: ")?;
        write_list(f, &self.sources)?;
        f.write_str("; Tags: ")?;
        if self.tags.is_empty() {
            f.write_str("-")?;
        }
        for tag in &self.tags {
            write!(f, "[{}]", tag)?;
        }
        f.write_str("; Outlets: ")?;
        write_list(f, &self.outlets)?;
        write!(
            f,
            "; Date: {}; Status: {}; Link: {}",
            self.publication_date,
            self.status,
            self.link.as_ref().map_or("-", Link::as_str)
        )
    }
}

/// Builder for constructing an Article with optional fields.
#[derive(Debug, Clone)]
pub struct ArticleBuilder {
    title: Title,
    authors: BTreeSet<Author>,
    sources: BTreeSet<Source>,
    tags: BTreeSet<Tag>,
    outlets: BTreeSet<Outlet>,
    publication_date: PublicationDate,
    status: Status,
    link: Option<Link>,
    persons: BTreeSet<Person>,
}

impl ArticleBuilder {
    pub fn title(mut self, title: Title) -> Self {
        self.title = title;
        self
    }

    /// Sets the contributors.
    pub fn authors(mut self, authors: impl IntoIterator<Item = Author>) -> Self {
        self.authors = authors.into_iter().collect();
        self
    }

    /// Sets the interviewees.
    pub fn sources(mut self, sources: impl IntoIterator<Item = Source>) -> Self {
        self.sources = sources.into_iter().collect();
        self
    }

    pub fn tags(mut self, tags: impl IntoIterator<Item = Tag>) -> Self {
        self.tags = tags.into_iter().collect();
        self
    }

    pub fn outlets(mut self, outlets: impl IntoIterator<Item = Outlet>) -> Self {
        self.outlets = outlets.into_iter().collect();
        self
    }

    pub fn publication_date(mut self, publication_date: PublicationDate) -> Self {
        self.publication_date = publication_date;
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn link(mut self, link: Option<Link>) -> Self {
        self.link = link;
        self
    }

    pub fn persons(mut self, persons: impl IntoIterator<Item = Person>) -> Self {
        self.persons = persons.into_iter().collect();
        self
    }

    pub fn build(self) -> Article {
        Article {
            title: self.title,
            authors: self.authors,
            sources: self.sources,
            tags: self.tags,
            outlets: self.outlets,
            publication_date: self.publication_date,
            status: self.status,
            link: self.link,
            persons: self.persons,
        }
    }
}
