//! Search utilities for contact records.
//!
//! This module matches a user-supplied term against record names and phone
//! numbers and returns a tagged result per matching record.

pub mod record_matcher;

pub use record_matcher::{RecordMatcher, SearchMatch};
