//! Core types: Article, Person, and their validated field values

mod article;
mod credit;
mod index;
mod link;
mod outlet;
mod person;
mod publication_date;
mod status;
mod tag;
mod title;

pub use article::{Article, ArticleBuilder};
pub use credit::{Author, ParseCreditError, Source};
pub use index::{Index, ParseIndexError};
pub use link::{Link, ParseLinkError};
pub use outlet::{Outlet, ParseOutletError};
pub use person::{Email, Name, ParsePersonFieldError, Person, Phone};
pub use publication_date::{DATE_FORMAT, ParsePublicationDateError, PublicationDate};
pub use status::{ParseStatusError, Status};
pub use tag::{ParseTagError, Tag};
pub use title::{ParseTitleError, Title};
