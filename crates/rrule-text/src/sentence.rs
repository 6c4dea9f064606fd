//! Sentence assembly -- clauses, termination suffix, approximate marker.
//!
//! [`describe`] is a pure function of its descriptor: it allocates its own
//! clause slots, reads only the constant tables, and keeps nothing between
//! calls, so any number of renderings may run in parallel.

use std::fmt;

use serde::Serialize;

use crate::clause::{self, ByField};
use crate::names::{CalendarNames, EnglishNames};
use crate::rule::{Frequency, RuleDescriptor};
use crate::tables::{self, UNSUPPORTED_TEXT};
use crate::template::{resolve, TemplateKey};

/// Why a description does not exactly match its rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Approximation {
    /// Both UNTIL and COUNT are set; only UNTIL is described.
    AmbiguousTermination,
    /// The by-field combination has no exact phrasing under this frequency.
    UnrepresentableCombination {
        frequency: Frequency,
        fields: Vec<ByField>,
    },
}

/// The result of describing a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Description {
    /// A sentence describing the rule, possibly only approximately.
    Rendered {
        text: String,
        approximations: Vec<Approximation>,
    },
    /// The rule has no frequency the renderer can convert.
    Unsupported,
}

impl Description {
    /// The sentence, or the fixed diagnostic for unsupported rules.
    pub fn text(&self) -> &str {
        match self {
            Description::Rendered { text, .. } => text,
            Description::Unsupported => UNSUPPORTED_TEXT,
        }
    }

    pub fn is_approximate(&self) -> bool {
        !self.approximations().is_empty()
    }

    pub fn approximations(&self) -> &[Approximation] {
        match self {
            Description::Rendered { approximations, .. } => approximations,
            Description::Unsupported => &[],
        }
    }

    pub fn is_supported(&self) -> bool {
        matches!(self, Description::Rendered { .. })
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Describe `rule` in English.
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use rrule_text::{describe, Frequency, RuleDescriptor, WeekdayNum};
///
/// let dtstart = NaiveDate::from_ymd_opt(2026, 2, 17)
///     .unwrap()
///     .and_hms_opt(14, 0, 0)
///     .unwrap();
/// let rule = RuleDescriptor::new(Frequency::Monthly, dtstart)
///     .with_by_weekday([WeekdayNum::nth(3, Weekday::Tue)]);
///
/// assert_eq!(describe(&rule).text(), "The 3rd Tuesday of every month");
/// ```
pub fn describe(rule: &RuleDescriptor) -> Description {
    describe_with(rule, &EnglishNames)
}

/// Describe `rule` using `names` for weekday and month names.
pub fn describe_with(rule: &RuleDescriptor, names: &dyn CalendarNames) -> Description {
    let Some(freq) = rule.frequency else {
        tracing::debug!("rule has no frequency, returning diagnostic text");
        return Description::Unsupported;
    };

    let selection = clause::select(rule, freq, names);

    let mut approximations = Vec::new();
    if !selection.unrepresented.is_empty() {
        approximations.push(Approximation::UnrepresentableCombination {
            frequency: freq,
            fields: selection.unrepresented,
        });
    }
    if rule.effective_until().is_some() && rule.count.is_some() {
        approximations.push(Approximation::AmbiguousTermination);
    }

    let mut sentence: String = selection.clauses.iter().map(|(_, text)| text).collect();
    sentence.push_str(&termination(rule));
    if !approximations.is_empty() {
        tracing::debug!(?approximations, "description is approximate");
        sentence.push_str(&resolve(&tables::APPROXIMATE, TemplateKey::None, &[]));
    }

    let text = capitalize_first(sentence.trim_start());
    tracing::trace!(%text, "described rule");

    Description::Rendered {
        text,
        approximations,
    }
}

/// Describe `rule` in English, returning only the text.
pub fn to_text(rule: &RuleDescriptor) -> String {
    describe(rule).text().to_string()
}

/// " until January 1, 2066", " for 20 times", or nothing.
fn termination(rule: &RuleDescriptor) -> String {
    if let Some(until) = rule.effective_until() {
        let date = until.format(tables::UNTIL_DATE_FORMAT).to_string();
        return resolve(&tables::UNTIL, TemplateKey::None, &[("date", &date)]);
    }

    match rule.count {
        Some(count) => resolve(
            &tables::COUNT,
            TemplateKey::Count(i64::from(count)),
            &[("count", &count.to_string())],
        ),
        None => String::new(),
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
