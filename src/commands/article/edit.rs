//! Edits the details of an existing article in the article book.

use crate::commands::{Command, CommandError, CommandResult, ExecuteResult};
use crate::domain::{
    Article, Author, Index, Link, Outlet, PublicationDate, Source, Status, Tag, Title,
};
use crate::model::{ArticlePredicate, Model};
use std::collections::BTreeSet;

pub const COMMAND_WORD: &str = "edit";

pub use super::COMMAND_PREFIX;

pub const MESSAGE_USAGE: &str = "edit -a: Edits the details of the article identified \
by the index number used in the displayed article list. \
Existing values will be overwritten by the input values.\n\
Parameters: INDEX (must be a positive integer) \
[h/HEADLINE] [c/CONTRIBUTOR]... [i/INTERVIEWEE]... [t/TAG]... [o/OUTLET]... \
[d/DATE] [s/STATUS] [l/LINK]\n\
Example: edit -a 1 h/Headline c/Contributor i/Interviewee t/politics o/Outlet \
d/10-10-2024 s/PUBLISHED l/https://www.example.com";

pub const MESSAGE_EDIT_ARTICLE_SUCCESS: &str = "Edited Article: ";

pub const MESSAGE_NOT_EDITED: &str = "At least one field to edit must be provided.";

pub const MESSAGE_DUPLICATE_ARTICLE: &str = "This article already exists in the article book.";

/// Replaces the article at a displayed index with an edited copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditArticleCommand {
    index: Index,
    descriptor: EditArticleDescriptor,
}

impl EditArticleCommand {
    /// `index` refers to the filtered article list; `descriptor` holds the
    /// fields to overwrite.
    pub fn new(index: Index, descriptor: EditArticleDescriptor) -> Self {
        Self { index, descriptor }
    }

    pub fn index(&self) -> Index {
        self.index
    }

    pub fn descriptor(&self) -> &EditArticleDescriptor {
        &self.descriptor
    }
}

impl Command for EditArticleCommand {
    fn execute(&self, model: &mut dyn Model) -> ExecuteResult {
        let article_to_edit = model
            .filtered_article_list()
            .get(self.index.zero_based())
            .map(|article| (*article).clone())
            .ok_or(CommandError::InvalidArticleIndex)?;

        let edited_article = create_edited_article(&article_to_edit, &self.descriptor);

        if !article_to_edit.is_same_article(&edited_article) && model.has_article(&edited_article) {
            return Err(CommandError::DuplicateArticle);
        }

        model.set_article(&article_to_edit, edited_article.clone())?;
        model.update_filtered_article_list(ArticlePredicate::ShowAll);

        tracing::info!(
            index = self.index.one_based(),
            from = %article_to_edit.title(),
            to = %edited_article.title(),
            "article edited"
        );

        Ok(CommandResult::new(format!(
            "{}{}",
            MESSAGE_EDIT_ARTICLE_SUCCESS, edited_article
        )))
    }
}

/// Builds the article that results from applying `descriptor` to `article_to_edit`.
///
/// Each field comes from the descriptor when set, otherwise from the
/// original. Associated persons always come from the original.
pub fn create_edited_article(
    article_to_edit: &Article,
    descriptor: &EditArticleDescriptor,
) -> Article {
    let title = descriptor
        .title()
        .unwrap_or(article_to_edit.title())
        .clone();
    let authors = descriptor
        .authors()
        .unwrap_or(article_to_edit.authors())
        .clone();
    let sources = descriptor
        .sources()
        .unwrap_or(article_to_edit.sources())
        .clone();
    let tags = descriptor.tags().unwrap_or(article_to_edit.tags()).clone();
    let outlets = descriptor
        .outlets()
        .unwrap_or(article_to_edit.outlets())
        .clone();
    let publication_date = descriptor
        .publication_date()
        .unwrap_or(article_to_edit.publication_date());
    let status = descriptor.status().unwrap_or(article_to_edit.status());
    let link = descriptor.link().or(article_to_edit.link()).cloned();

    Article::builder(title, publication_date, status)
        .authors(authors)
        .sources(sources)
        .tags(tags)
        .outlets(outlets)
        .link(link)
        .persons(article_to_edit.persons().iter().cloned())
        .build()
}

/// The fields to change on an article. Unset fields keep their current value.
///
/// Setters take ownership, so a descriptor never shares a set with its caller.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditArticleDescriptor {
    title: Option<Title>,
    authors: Option<BTreeSet<Author>>,
    sources: Option<BTreeSet<Source>>,
    tags: Option<BTreeSet<Tag>>,
    outlets: Option<BTreeSet<Outlet>>,
    publication_date: Option<PublicationDate>,
    status: Option<Status>,
    link: Option<Link>,
}

impl EditArticleDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if at least one field is set.
    pub fn is_any_field_edited(&self) -> bool {
        self.title.is_some()
            || self.authors.is_some()
            || self.sources.is_some()
            || self.tags.is_some()
            || self.outlets.is_some()
            || self.publication_date.is_some()
            || self.status.is_some()
            || self.link.is_some()
    }

    pub fn set_title(&mut self, title: Title) {
        self.title = Some(title);
    }

    pub fn title(&self) -> Option<&Title> {
        self.title.as_ref()
    }

    /// Sets the contributors. An empty collection clears them.
    pub fn set_authors(&mut self, authors: impl IntoIterator<Item = Author>) {
        self.authors = Some(authors.into_iter().collect());
    }

    pub fn authors(&self) -> Option<&BTreeSet<Author>> {
        self.authors.as_ref()
    }

    /// Sets the interviewees. An empty collection clears them.
    pub fn set_sources(&mut self, sources: impl IntoIterator<Item = Source>) {
        self.sources = Some(sources.into_iter().collect());
    }

    pub fn sources(&self) -> Option<&BTreeSet<Source>> {
        self.sources.as_ref()
    }

    pub fn set_tags(&mut self, tags: impl IntoIterator<Item = Tag>) {
        self.tags = Some(tags.into_iter().collect());
    }

    pub fn tags(&self) -> Option<&BTreeSet<Tag>> {
        self.tags.as_ref()
    }

    pub fn set_outlets(&mut self, outlets: impl IntoIterator<Item = Outlet>) {
        self.outlets = Some(outlets.into_iter().collect());
    }

    pub fn outlets(&self) -> Option<&BTreeSet<Outlet>> {
        self.outlets.as_ref()
    }

    pub fn set_publication_date(&mut self, publication_date: PublicationDate) {
        self.publication_date = Some(publication_date);
    }

    pub fn publication_date(&self) -> Option<PublicationDate> {
        self.publication_date
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = Some(status);
    }

    pub fn status(&self) -> Option<Status> {
        self.status
    }

    pub fn set_link(&mut self, link: Link) {
        self.link = Some(link);
    }

    pub fn link(&self) -> Option<&Link> {
        self.link.as_ref()
    }
}
