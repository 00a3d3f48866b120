//! Sample data used to seed a fresh model.

use super::{ArticleBook, ModelManager, PersonBook};
use crate::domain::{
    Article, Author, Email, Link, Name, Outlet, Person, Phone, PublicationDate, Source, Status,
    Tag, Title,
};
use anyhow::{Context, Result};
use std::collections::BTreeSet;

fn person(name: &str, phone: &str, email: &str, tags: &[&str]) -> Result<Person> {
    Ok(Person::new(
        Name::new(name)?,
        Some(Phone::new(phone)?),
        Some(Email::new(email)?),
        tags.iter().map(|t| Tag::new(t)).collect::<Result<BTreeSet<_>, _>>()?,
    ))
}

/// Returns the sample contact records.
pub fn sample_persons() -> Result<Vec<Person>> {
    Ok(vec![
        person("Alex Yeoh", "87438807", "alexyeoh@example.com", &["editor"])?,
        person("Bernice Yu", "99272758", "berniceyu@example.com", &["photographer"])?,
        person("Charlotte Oliveiro", "93210283", "charlotte@example.com", &["source"])?,
        person("David Li", "91031282", "lidavid@example.com", &["freelance"])?,
    ])
}

/// Returns the sample articles. Some reference the sample persons.
pub fn sample_articles() -> Result<Vec<Article>> {
    let persons = sample_persons()?;

    let harbour = Article::builder(
        Title::new("Harbour Reopens After Storm")?,
        PublicationDate::new("12-03-2024")?,
        Status::Published,
    )
    .authors([Author::new("Alex Yeoh")?])
    .sources([Source::new("Charlotte Oliveiro")?])
    .tags([Tag::new("weather")?, Tag::new("local")?])
    .outlets([Outlet::new("The Daily Courier")?])
    .link(Some(Link::new("https://www.example.com/harbour-reopens")?))
    .persons(persons.iter().take(3).cloned())
    .build();

    let budget = Article::builder(
        Title::new("City Budget Draft Leaked")?,
        PublicationDate::new("02-05-2024")?,
        Status::Draft,
    )
    .authors([Author::new("Bernice Yu")?, Author::new("David Li")?])
    .tags([Tag::new("politics")?])
    .outlets([Outlet::new("Metro Weekly")?])
    .persons(persons.iter().skip(1).take(1).cloned())
    .build();

    let archive = Article::builder(
        Title::new("Ten Years Of The Night Market")?,
        PublicationDate::new("21-11-2019")?,
        Status::Archived,
    )
    .authors([Author::new("David Li")?])
    .sources([Source::new("Mei Ling Tan")?])
    .tags([Tag::new("culture")?])
    .outlets([Outlet::new("The Daily Courier")?, Outlet::new("Food & Life")?])
    .link(Some(Link::new("https://www.example.com/night-market")?))
    .build();

    Ok(vec![harbour, budget, archive])
}

/// Builds a model pre-populated with the sample persons and articles.
///
/// # Errors
///
/// Fails only if a sample value no longer passes validation.
pub fn sample_model() -> Result<ModelManager> {
    let mut persons = PersonBook::new();
    for person in sample_persons().context("invalid sample person")? {
        persons.add(person)?;
    }

    let mut articles = ArticleBook::new();
    for article in sample_articles().context("invalid sample article")? {
        articles.add(article)?;
    }

    Ok(ModelManager::with_books(articles, persons))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Model;

    #[test]
    fn sample_model_builds() {
        let model = sample_model().unwrap();
        assert_eq!(model.filtered_article_list().len(), 3);
        assert_eq!(model.filtered_person_list().len(), 4);
    }

    #[test]
    fn sample_articles_reference_sample_persons() {
        let articles = sample_articles().unwrap();
        assert!(articles.iter().any(|a| !a.persons().is_empty()));
    }
}
