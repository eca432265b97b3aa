//! Data models for the contact book.
//!
//! A [`Record`] is one contact; an [`AddressBook`] owns every record and is
//! the only way to add, change or remove them.

pub mod address_book;
pub mod record;

pub use address_book::{AddressBook, UPCOMING_WINDOW_DAYS};
pub use record::Record;
