//! Error types for the assistant bot.
//!
//! This module defines custom error types using `thiserror` for precise error handling.
//! None of them is fatal: the command router renders each one as a single line.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors that can occur when operating on the address book.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BookError {
    /// A phone number, date, name or search term failed validation
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No contact with the given name
    #[error("Contact '{0}' not found.")]
    ContactNotFound(String),

    /// No contact stores the given phone number
    #[error("Contact with phone number '{0}' not found.")]
    PhoneNotFound(String),

    /// A contact with the same name already exists
    #[error("Contact with this name already exists.")]
    DuplicateName(String),

    /// The contact already has a birthday and add does not overwrite
    #[error("Birthday already exists for this contact. If you want to update it, please use the 'change_birthday' command.")]
    BirthdayExists(String),
}

impl BookError {
    /// Whether this error means "the referenced thing is absent".
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ContactNotFound(_) | Self::PhoneNotFound(_))
    }
}

/// Errors that can occur while parsing a command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Wrong number of arguments for a known command
    #[error("{0}")]
    Usage(&'static str),

    /// The command word is not recognised
    #[error("Invalid command.")]
    Unknown(String),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with BookError
pub type BookResult<T> = Result<T, BookError>;

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
