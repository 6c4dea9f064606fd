//! Calendar-name lookup.
//!
//! Weekday and month names are opaque to the renderer: whatever a
//! [`CalendarNames`] implementation returns is inserted verbatim, casing
//! included. Only the first character of the finished sentence is ever
//! upper-cased.

use std::borrow::Cow;

use chrono::{Month, Weekday};

/// Source of weekday and month names.
pub trait CalendarNames {
    fn weekday(&self, weekday: Weekday) -> Cow<'_, str>;
    fn month(&self, month: Month) -> Cow<'_, str>;
}

/// English full names ("Monday", "January").
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishNames;

impl CalendarNames for EnglishNames {
    fn weekday(&self, weekday: Weekday) -> Cow<'_, str> {
        Cow::Borrowed(match weekday {
            Weekday::Mon => "Monday",
            Weekday::Tue => "Tuesday",
            Weekday::Wed => "Wednesday",
            Weekday::Thu => "Thursday",
            Weekday::Fri => "Friday",
            Weekday::Sat => "Saturday",
            Weekday::Sun => "Sunday",
        })
    }

    fn month(&self, month: Month) -> Cow<'_, str> {
        Cow::Borrowed(month.name())
    }
}

/// Map a BYMONTH value (1-12) to a [`Month`].
pub(crate) fn month_from_number(n: u32) -> Option<Month> {
    Some(match n {
        1 => Month::January,
        2 => Month::February,
        3 => Month::March,
        4 => Month::April,
        5 => Month::May,
        6 => Month::June,
        7 => Month::July,
        8 => Month::August,
        9 => Month::September,
        10 => Month::October,
        11 => Month::November,
        12 => Month::December,
        _ => return None,
    })
}
