//! Shared fixtures for unit tests.

use crate::commands::article::EditArticleDescriptor;
use crate::domain::{
    Article, Author, Email, Index, Link, Name, Outlet, Person, Phone, PublicationDate, Source,
    Status, Tag, Title,
};
use crate::model::{ArticleBook, ArticlePredicate, ModelManager, PersonBook};
use std::collections::BTreeSet;
use std::io;
use std::sync::{Arc, Mutex};

pub const INDEX_FIRST: Index = Index::from_zero_based(0);
pub const INDEX_SECOND: Index = Index::from_zero_based(1);

// ===========================================
// Typical status predicates
// ===========================================

pub fn draft() -> ArticlePredicate {
    ArticlePredicate::status("DRAFT").unwrap()
}

pub fn published() -> ArticlePredicate {
    ArticlePredicate::status("PUBLISHED").unwrap()
}

pub fn archived() -> ArticlePredicate {
    ArticlePredicate::status("ARCHIVED").unwrap()
}

// ===========================================
// Typical persons
// ===========================================

fn person(name: &str, phone: &str, email: &str, tags: &[&str]) -> Person {
    Person::new(
        Name::new(name).unwrap(),
        Some(Phone::new(phone).unwrap()),
        Some(Email::new(email).unwrap()),
        tags.iter().map(|t| Tag::new(t).unwrap()).collect(),
    )
}

pub fn alice() -> Person {
    person("Alice Pauline", "94351253", "alice@example.com", &["friends"])
}

pub fn benson() -> Person {
    person("Benson Meier", "98765432", "johnd@example.com", &["owesmoney", "friends"])
}

pub fn carl() -> Person {
    person("Carl Kurz", "95352563", "heinz@example.com", &[])
}

pub fn typical_persons() -> Vec<Person> {
    vec![alice(), benson(), carl()]
}

// ===========================================
// Typical articles
// ===========================================

pub fn harbour() -> Article {
    ArticleFixture::new("Harbour Reopens After Storm")
        .authors(&["Alex Yeoh"])
        .sources(&["Harbour Master"])
        .tags(&["weather", "local"])
        .outlets(&["The Daily Courier"])
        .date("12-03-2024")
        .status(Status::Published)
        .link("https://www.example.com/harbour")
        .persons(vec![alice(), benson()])
        .build()
}

pub fn council() -> Article {
    ArticleFixture::new("Council Votes On Transit Plan")
        .authors(&["Bernice Yu", "David Li"])
        .tags(&["politics"])
        .outlets(&["Metro Weekly"])
        .date("02-05-2024")
        .status(Status::Draft)
        .link("https://www.example.com/transit")
        .build()
}

pub fn museum() -> Article {
    ArticleFixture::new("Museum Unveils Lost Portrait")
        .authors(&["David Li"])
        .sources(&["Curator Jones"])
        .tags(&["culture"])
        .outlets(&["Food & Life"])
        .date("21-11-2019")
        .status(Status::Archived)
        .link("https://www.example.com/portrait")
        .persons(vec![carl()])
        .build()
}

pub fn school_lunch() -> Article {
    ArticleFixture::new("School Lunch Programme Expands")
        .authors(&["Alex Yeoh"])
        .outlets(&["Metro Weekly"])
        .date("15-08-2024")
        .status(Status::Draft)
        .link("https://www.example.com/lunch")
        .build()
}

/// Returns the typical articles in book order: published, draft, archived, draft.
pub fn typical_articles() -> Vec<Article> {
    vec![harbour(), council(), museum(), school_lunch()]
}

/// Returns a model holding the typical articles and persons.
pub fn typical_model() -> ModelManager {
    let mut articles = ArticleBook::new();
    for article in typical_articles() {
        articles.add(article).unwrap();
    }
    let mut persons = PersonBook::new();
    for person in typical_persons() {
        persons.add(person).unwrap();
    }
    ModelManager::with_books(articles, persons)
}

// ===========================================
// Builders
// ===========================================

/// Test builder for articles taking plain strings.
pub struct ArticleFixture {
    title: String,
    authors: Vec<String>,
    sources: Vec<String>,
    tags: Vec<String>,
    outlets: Vec<String>,
    date: String,
    status: Status,
    link: Option<String>,
    persons: Vec<Person>,
}

impl ArticleFixture {
    /// A published article dated 01-01-2024 with no optional fields.
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            authors: Vec::new(),
            sources: Vec::new(),
            tags: Vec::new(),
            outlets: Vec::new(),
            date: "01-01-2024".to_string(),
            status: Status::Published,
            link: None,
            persons: Vec::new(),
        }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.title = title.to_string();
        self
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.authors = authors.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn sources(mut self, sources: &[&str]) -> Self {
        self.sources = sources.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.tags = tags.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn outlets(mut self, outlets: &[&str]) -> Self {
        self.outlets = outlets.iter().map(|s| s.to_string()).collect();
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.date = date.to_string();
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.status = status;
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.link = Some(link.to_string());
        self
    }

    pub fn persons(mut self, persons: Vec<Person>) -> Self {
        self.persons = persons;
        self
    }

    pub fn build(self) -> Article {
        Article::builder(
            Title::new(&self.title).unwrap(),
            PublicationDate::new(&self.date).unwrap(),
            self.status,
        )
        .authors(self.authors.iter().map(|s| Author::new(s).unwrap()))
        .sources(self.sources.iter().map(|s| Source::new(s).unwrap()))
        .tags(self.tags.iter().map(|s| Tag::new(s).unwrap()))
        .outlets(self.outlets.iter().map(|s| Outlet::new(s).unwrap()))
        .link(self.link.as_deref().map(|s| Link::new(s).unwrap()))
        .persons(self.persons)
        .build()
    }
}

impl From<&Article> for ArticleFixture {
    fn from(article: &Article) -> Self {
        Self {
            title: article.title().to_string(),
            authors: article.authors().iter().map(|a| a.to_string()).collect(),
            sources: article.sources().iter().map(|s| s.to_string()).collect(),
            tags: article.tags().iter().map(|t| t.to_string()).collect(),
            outlets: article.outlets().iter().map(|o| o.to_string()).collect(),
            date: article.publication_date().to_string(),
            status: article.status(),
            link: article.link().map(|l| l.to_string()),
            persons: article.persons().iter().cloned().collect(),
        }
    }
}

/// Test builder for edit descriptors taking plain strings.
#[derive(Default)]
pub struct EditArticleDescriptorBuilder {
    descriptor: EditArticleDescriptor,
}

impl EditArticleDescriptorBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A descriptor that sets every field to the article's value.
    pub fn from_article(article: &Article) -> Self {
        let mut descriptor = EditArticleDescriptor::new();
        descriptor.set_title(article.title().clone());
        descriptor.set_authors(article.authors().clone());
        descriptor.set_sources(article.sources().clone());
        descriptor.set_tags(article.tags().clone());
        descriptor.set_outlets(article.outlets().clone());
        descriptor.set_publication_date(article.publication_date());
        descriptor.set_status(article.status());
        if let Some(link) = article.link() {
            descriptor.set_link(link.clone());
        }
        Self { descriptor }
    }

    pub fn title(mut self, title: &str) -> Self {
        self.descriptor.set_title(Title::new(title).unwrap());
        self
    }

    pub fn authors(mut self, authors: &[&str]) -> Self {
        self.descriptor
            .set_authors(authors.iter().map(|s| Author::new(s).unwrap()));
        self
    }

    pub fn sources(mut self, sources: &[&str]) -> Self {
        self.descriptor
            .set_sources(sources.iter().map(|s| Source::new(s).unwrap()));
        self
    }

    pub fn tags(mut self, tags: &[&str]) -> Self {
        self.descriptor
            .set_tags(tags.iter().map(|s| Tag::new(s).unwrap()));
        self
    }

    pub fn outlets(mut self, outlets: &[&str]) -> Self {
        self.descriptor
            .set_outlets(outlets.iter().map(|s| Outlet::new(s).unwrap()));
        self
    }

    pub fn date(mut self, date: &str) -> Self {
        self.descriptor
            .set_publication_date(PublicationDate::new(date).unwrap());
        self
    }

    pub fn status(mut self, status: Status) -> Self {
        self.descriptor.set_status(status);
        self
    }

    pub fn link(mut self, link: &str) -> Self {
        self.descriptor.set_link(Link::new(link).unwrap());
        self
    }

    pub fn build(self) -> EditArticleDescriptor {
        self.descriptor
    }
}

/// Collects tags for assertions.
pub fn tag_set(tags: &[&str]) -> BTreeSet<Tag> {
    tags.iter().map(|t| Tag::new(t).unwrap()).collect()
}

// ===========================================
// Log capture
// ===========================================

#[derive(Clone, Default)]
struct LogBuffer(Arc<Mutex<Vec<u8>>>);

impl io::Write for LogBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `f` under a thread-local subscriber and returns the formatted events.
pub fn capture_logs(f: impl FnOnce()) -> String {
    let buffer = LogBuffer::default();
    let writer = buffer.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    let bytes = buffer.0.lock().unwrap().clone();
    String::from_utf8(bytes).unwrap()
}
