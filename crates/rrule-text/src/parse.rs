//! RRULE string front end.
//!
//! Parsing is delegated to the `rrule` crate. The rule is kept unvalidated so
//! that the descriptor holds only the parts the author wrote: a validated
//! `rrule::RRule` fills BYHOUR, BYMINUTE, BYSECOND and friends from DTSTART,
//! which would then show up in the description.

use chrono::NaiveDateTime;
use chrono_tz::Tz;
use rrule::{NWeekday, RRule, Unvalidated};

use crate::error::{Result, TextError};
use crate::rule::{Frequency, RuleDescriptor, WeekdayNum};
use crate::sentence::{describe, Description};

/// Datetime layouts accepted for `dtstart`.
const DTSTART_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S", "%Y%m%dT%H%M%S"];

/// Describe an RRULE string in English.
///
/// # Arguments
/// - `rrule` -- RFC 5545 RRULE value (e.g., "FREQ=WEEKLY;BYDAY=TU,TH"), with or
///   without the `RRULE:` prefix
/// - `dtstart` -- Local datetime string (e.g., "2026-02-17T14:00:00")
/// - `timezone` -- IANA timezone the rule is anchored in (e.g., "America/Los_Angeles");
///   a UTC UNTIL is shown as a date in this zone
///
/// # Errors
/// Returns `TextError::InvalidRule` if the RRULE string is empty or unparseable.
/// Returns `TextError::InvalidDtstart` if `dtstart` is not a local datetime.
/// Returns `TextError::InvalidTimezone` if the timezone is not a valid IANA identifier.
pub fn describe_rrule(rrule: &str, dtstart: &str, timezone: &str) -> Result<Description> {
    let descriptor = parse_rrule(rrule, dtstart, timezone)?;
    Ok(describe(&descriptor))
}

/// Parse an RRULE string into a [`RuleDescriptor`].
///
/// Takes the same arguments as [`describe_rrule`].
pub fn parse_rrule(rrule: &str, dtstart: &str, timezone: &str) -> Result<RuleDescriptor> {
    let body = strip_prefix(rrule.trim());
    if body.is_empty() {
        return Err(TextError::InvalidRule("empty RRULE string".to_string()));
    }

    let tz: Tz = timezone
        .parse()
        .map_err(|_| TextError::InvalidTimezone(timezone.to_string()))?;

    let dtstart = parse_dtstart(dtstart)?;

    let rule: RRule<Unvalidated> = body
        .parse()
        .map_err(|e| TextError::InvalidRule(format!("{}", e)))?;

    let descriptor = descriptor_from_rrule(&rule, dtstart, tz);
    validate(&descriptor)?;
    Ok(descriptor)
}

/// Build a descriptor from a rule already parsed by the `rrule` crate.
///
/// `dtstart` is local wall-clock time in `tz`; UNTIL is converted into `tz`.
/// By-field sets are de-duplicated, keeping the first occurrence, and month
/// and year days list positive positions before negative ones. Values are not
/// range-checked; [`parse_rrule`] rejects zero positions and a zero interval.
pub fn descriptor_from_rrule(
    rule: &RRule<Unvalidated>,
    dtstart: NaiveDateTime,
    tz: Tz,
) -> RuleDescriptor {
    RuleDescriptor {
        frequency: Some(frequency_from_rrule(rule.get_freq())),
        interval: u32::from(rule.get_interval()),
        count: rule.get_count(),
        until: rule.get_until().map(|u| u.with_timezone(&tz).naive_local()),
        dtstart,
        by_weekday: dedup(rule.get_by_weekday().iter().map(|wd| match *wd {
            NWeekday::Every(day) => WeekdayNum::every(day),
            NWeekday::Nth(n, day) => WeekdayNum::nth(n, day),
        })),
        by_month_day: positives_first(dedup(rule.get_by_month_day().iter().copied())),
        by_year_day: positives_first(dedup(rule.get_by_year_day().iter().copied())),
        by_week_no: dedup(rule.get_by_week_no().iter().copied()),
        by_month: dedup(rule.get_by_month().iter().copied()),
        by_hour: dedup(rule.get_by_hour().iter().copied()),
        by_minute: dedup(rule.get_by_minute().iter().copied()),
        by_second: dedup(rule.get_by_second().iter().copied()),
        by_set_pos: dedup(rule.get_by_set_pos().iter().copied()),
    }
}

/// Check the descriptor preconditions: an interval of at least 1, non-zero
/// positions and week numbers of at least 1.
///
/// [`parse_rrule`] runs this on every rule it builds. Descriptors built by
/// hand or deserialized from JSON should be checked before rendering.
///
/// # Errors
/// Returns `TextError::InvalidRule` naming the first offending part.
pub fn validate(rule: &RuleDescriptor) -> Result<()> {
    if rule.interval == 0 {
        return Err(invalid("INTERVAL must be at least 1"));
    }
    if rule.by_weekday.iter().any(|wd| wd.ordinal == Some(0)) {
        return Err(invalid("BYDAY positions must be non-zero"));
    }
    if rule.by_month_day.contains(&0) {
        return Err(invalid("BYMONTHDAY values must be non-zero"));
    }
    if rule.by_year_day.contains(&0) {
        return Err(invalid("BYYEARDAY values must be non-zero"));
    }
    if rule.by_set_pos.contains(&0) {
        return Err(invalid("BYSETPOS values must be non-zero"));
    }
    if rule.by_week_no.iter().any(|w| *w < 1) {
        return Err(invalid("BYWEEKNO values must be positive"));
    }
    Ok(())
}

fn invalid(reason: &str) -> TextError {
    tracing::debug!(reason, "rejecting rule");
    TextError::InvalidRule(reason.to_string())
}

/// Collect `values`, dropping repeats of an earlier value.
fn dedup<T: PartialEq>(values: impl IntoIterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = Vec::new();
    for value in values {
        if !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Positive positions in their given order, then negative ones.
fn positives_first<T: Copy + Into<i32>>(values: Vec<T>) -> Vec<T> {
    let (mut out, negatives): (Vec<T>, Vec<T>) =
        values.into_iter().partition(|v| Into::<i32>::into(*v) > 0);
    out.extend(negatives);
    out
}

fn frequency_from_rrule(freq: rrule::Frequency) -> Frequency {
    match freq {
        rrule::Frequency::Secondly => Frequency::Secondly,
        rrule::Frequency::Minutely => Frequency::Minutely,
        rrule::Frequency::Hourly => Frequency::Hourly,
        rrule::Frequency::Daily => Frequency::Daily,
        rrule::Frequency::Weekly => Frequency::Weekly,
        rrule::Frequency::Monthly => Frequency::Monthly,
        rrule::Frequency::Yearly => Frequency::Yearly,
    }
}

fn strip_prefix(rrule: &str) -> &str {
    match rrule.get(..6) {
        Some(prefix) if prefix.eq_ignore_ascii_case("RRULE:") => &rrule[6..],
        _ => rrule,
    }
}

fn parse_dtstart(dtstart: &str) -> Result<NaiveDateTime> {
    DTSTART_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(dtstart, fmt).ok())
        .ok_or_else(|| TextError::InvalidDtstart(dtstart.to_string()))
}
