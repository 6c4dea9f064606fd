//! Rule descriptor -- the already-parsed recurrence rule that gets described.
//!
//! A [`RuleDescriptor`] is produced by an RRULE parser (see [`crate::parse`] for
//! the one backed by the `rrule` crate) and handed to the renderer by reference.
//! The renderer never mutates or retains it.
//!
//! Preconditions the producer must uphold: `interval >= 1`, by-field sets are
//! de-duplicated, and no ordinal (weekday, month day, year day, set position)
//! is zero.

use std::fmt;

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

/// Recurrence frequency (RFC 5545 §3.3.10).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Frequency {
    Secondly,
    Minutely,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

impl Frequency {
    /// Returns the RRULE token (`"DAILY"`).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Secondly => "SECONDLY",
            Self::Minutely => "MINUTELY",
            Self::Hourly => "HOURLY",
            Self::Daily => "DAILY",
            Self::Weekly => "WEEKLY",
            Self::Monthly => "MONTHLY",
            Self::Yearly => "YEARLY",
        }
    }

    /// Parses a frequency from its RRULE token (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_uppercase().as_str() {
            "SECONDLY" => Self::Secondly,
            "MINUTELY" => Self::Minutely,
            "HOURLY" => Self::Hourly,
            "DAILY" => Self::Daily,
            "WEEKLY" => Self::Weekly,
            "MONTHLY" => Self::Monthly,
            "YEARLY" => Self::Yearly,
            _ => return None,
        })
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Weekday with an optional position inside the period.
///
/// - `MO` -- every Monday (`ordinal: None`)
/// - `+3TU` -- the 3rd Tuesday
/// - `-1FR` -- the last Friday
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayNum {
    pub weekday: Weekday,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ordinal: Option<i16>,
}

impl WeekdayNum {
    /// A plain weekday without a position.
    pub const fn every(weekday: Weekday) -> Self {
        Self {
            weekday,
            ordinal: None,
        }
    }

    /// An ordinal weekday. `n` must be non-zero.
    pub const fn nth(n: i16, weekday: Weekday) -> Self {
        Self {
            weekday,
            ordinal: Some(n),
        }
    }

    pub fn is_ordinal(&self) -> bool {
        self.ordinal.is_some()
    }
}

/// A fully resolved recurrence rule.
///
/// `frequency` is `None` when the producer could not determine one; such a
/// descriptor is described with the fixed
/// [`UNSUPPORTED_TEXT`](crate::UNSUPPORTED_TEXT) diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleDescriptor {
    pub frequency: Option<Frequency>,
    #[serde(default = "default_interval")]
    pub interval: u32,
    #[serde(default)]
    pub count: Option<u32>,
    /// Local wall-clock end. [`NaiveDateTime::MAX`] means "no end".
    #[serde(default)]
    pub until: Option<NaiveDateTime>,
    /// Local wall-clock start; supplies the implicit weekday, month and day.
    pub dtstart: NaiveDateTime,
    #[serde(default)]
    pub by_weekday: Vec<WeekdayNum>,
    #[serde(default)]
    pub by_month_day: Vec<i8>,
    #[serde(default)]
    pub by_year_day: Vec<i16>,
    #[serde(default)]
    pub by_week_no: Vec<i8>,
    #[serde(default)]
    pub by_month: Vec<u8>,
    #[serde(default)]
    pub by_hour: Vec<u8>,
    #[serde(default)]
    pub by_minute: Vec<u8>,
    #[serde(default)]
    pub by_second: Vec<u8>,
    #[serde(default)]
    pub by_set_pos: Vec<i32>,
}

fn default_interval() -> u32 {
    1
}

impl RuleDescriptor {
    /// A rule with the given frequency, interval 1 and no by-fields.
    pub fn new(frequency: Frequency, dtstart: NaiveDateTime) -> Self {
        Self {
            frequency: Some(frequency),
            interval: 1,
            count: None,
            until: None,
            dtstart,
            by_weekday: Vec::new(),
            by_month_day: Vec::new(),
            by_year_day: Vec::new(),
            by_week_no: Vec::new(),
            by_month: Vec::new(),
            by_hour: Vec::new(),
            by_minute: Vec::new(),
            by_second: Vec::new(),
            by_set_pos: Vec::new(),
        }
    }

    pub fn with_interval(mut self, interval: u32) -> Self {
        self.interval = interval;
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_until(mut self, until: NaiveDateTime) -> Self {
        self.until = Some(until);
        self
    }

    pub fn with_by_weekday(mut self, days: impl IntoIterator<Item = WeekdayNum>) -> Self {
        self.by_weekday = days.into_iter().collect();
        self
    }

    pub fn with_by_month_day(mut self, days: impl IntoIterator<Item = i8>) -> Self {
        self.by_month_day = days.into_iter().collect();
        self
    }

    pub fn with_by_year_day(mut self, days: impl IntoIterator<Item = i16>) -> Self {
        self.by_year_day = days.into_iter().collect();
        self
    }

    pub fn with_by_week_no(mut self, weeks: impl IntoIterator<Item = i8>) -> Self {
        self.by_week_no = weeks.into_iter().collect();
        self
    }

    pub fn with_by_month(mut self, months: impl IntoIterator<Item = u8>) -> Self {
        self.by_month = months.into_iter().collect();
        self
    }

    pub fn with_by_hour(mut self, hours: impl IntoIterator<Item = u8>) -> Self {
        self.by_hour = hours.into_iter().collect();
        self
    }

    pub fn with_by_minute(mut self, minutes: impl IntoIterator<Item = u8>) -> Self {
        self.by_minute = minutes.into_iter().collect();
        self
    }

    pub fn with_by_second(mut self, seconds: impl IntoIterator<Item = u8>) -> Self {
        self.by_second = seconds.into_iter().collect();
        self
    }

    pub fn with_by_set_pos(mut self, positions: impl IntoIterator<Item = i32>) -> Self {
        self.by_set_pos = positions.into_iter().collect();
        self
    }

    /// The end boundary, unless it is absent or the "no end" sentinel.
    pub fn effective_until(&self) -> Option<NaiveDateTime> {
        self.until.filter(|u| *u != NaiveDateTime::MAX)
    }
}
