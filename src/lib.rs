//! Assistant Bot - an interactive command-line contact book.
//!
//! The bot reads one command per line, keeps contacts in memory for the
//! length of the session, and answers lookups, searches and
//! upcoming-birthday queries.
//!
//! # Architecture
//!
//! - **domain**: Validated value objects (name, phone number, birthday)
//! - **models**: `Record` and the `AddressBook` that owns every record
//! - **search**: Regex term matching over names and phone numbers
//! - **router**: Command parsing, dispatch and the REPL driver
//! - **observability**: Session metrics and timers
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod observability;
pub mod router;
pub mod search;

pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, CommandError, ConfigError};
pub use models::{AddressBook, Record};
pub use observability::MetricsTracker;
pub use router::{Command, CommandRouter, Reply};
pub use search::SearchMatch;
