//! # rrule-text
//!
//! Human-readable English descriptions of RFC 5545 recurrence rules.
//!
//! Calendar UIs show "Every other Tuesday until January 1, 2066" instead of
//! `FREQ=WEEKLY;INTERVAL=2;BYDAY=TU;UNTIL=20660101T080000Z`. The renderer works
//! on an already-parsed [`RuleDescriptor`]; [`parse`] builds one from an RRULE
//! string with the `rrule` crate.
//!
//! ## Modules
//!
//! - [`rule`] — Rule descriptor types
//! - [`sentence`] — Descriptor → sentence, with approximation reasons
//! - [`clause`] — Per-frequency clause selection and precedence
//! - [`template`] — Cardinality/frequency keyed phrasing templates
//! - [`tables`] — Constant English phrasing tables
//! - [`ordinal`] — Signed ordinal phrases ("3rd", "last", "2nd to last")
//! - [`join`] — Comma/conjunction enumerations
//! - [`names`] — Weekday and month name lookup
//! - [`parse`] — RRULE string → descriptor via the `rrule` crate
//! - [`error`] — Error types

pub mod clause;
pub mod error;
pub mod join;
pub mod names;
pub mod ordinal;
pub mod parse;
pub mod rule;
pub mod sentence;
pub mod tables;
pub mod template;

pub use clause::ByField;
pub use error::TextError;
pub use join::join;
pub use names::{CalendarNames, EnglishNames};
pub use ordinal::ordinal;
pub use parse::{describe_rrule, descriptor_from_rrule, parse_rrule, validate};
pub use rule::{Frequency, RuleDescriptor, WeekdayNum};
pub use sentence::{describe, describe_with, to_text, Approximation, Description};
pub use tables::UNSUPPORTED_TEXT;
