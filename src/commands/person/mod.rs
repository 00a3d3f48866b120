//! Commands acting on the person book (`-p`).

pub mod add;
pub mod delete;
pub mod find;
pub mod list;

pub use add::AddPersonCommand;
pub use delete::DeletePersonCommand;
pub use find::FindPersonsCommand;
pub use list::ListPersonsCommand;

/// Entity prefix selecting the person book.
pub const COMMAND_PREFIX: &str = "-p";

pub const MESSAGE_DUPLICATE_PERSON: &str = "This person already exists in the address book.";
