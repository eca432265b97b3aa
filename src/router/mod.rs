//! Command router for the interactive contact book.
//!
//! Turns raw input lines into [`Command`]s, runs them against the owned
//! [`crate::models::AddressBook`] and renders the reply text.

pub mod command;
pub mod handlers;
pub mod repl;

pub use command::{Command, HELP_TEXT};
pub use handlers::{CommandRouter, Reply};
pub use repl::run;
