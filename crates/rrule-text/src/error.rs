//! Error types for rrule-text operations.
//!
//! Rendering a [`RuleDescriptor`](crate::RuleDescriptor) never fails; these
//! errors only come out of the RRULE string front end in [`crate::parse`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextError {
    #[error("Invalid RRULE: {0}")]
    InvalidRule(String),

    #[error("Invalid DTSTART: {0}")]
    InvalidDtstart(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, TextError>;
