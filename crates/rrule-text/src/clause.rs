//! Clause selection -- which by-field clauses a rule renders, per frequency.
//!
//! Each frequency branch fills some of the fixed [`Slot`]s and records which
//! by-fields it consumed. A by-field that is present but not consumed, or one
//! that was consumed only partially, makes the description approximate.
//!
//! Precedence under YEARLY: BYMONTH > BYYEARDAY > BYWEEKNO > BYDAY, then the
//! month and day of DTSTART. BYMONTH may additionally be qualified by
//! BYMONTHDAY and BYDAY.

use std::collections::BTreeSet;

use chrono::{Datelike, Weekday};
use serde::Serialize;

use crate::join::{join, AND, OR};
use crate::names::{month_from_number, CalendarNames};
use crate::ordinal::ordinal;
use crate::rule::{Frequency, RuleDescriptor, WeekdayNum};
use crate::tables;
use crate::template::{resolve, Template, TemplateKey};

/// Clause positions, in sentence order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Freq,
    ByWeekday,
    ByMonth,
    ByWeekNo,
    ByYearDay,
    ByMonthDay,
    ByHour,
    ByMinute,
    BySecond,
    BySetPos,
}

impl Slot {
    pub const ORDER: [Slot; 10] = [
        Slot::Freq,
        Slot::ByWeekday,
        Slot::ByMonth,
        Slot::ByWeekNo,
        Slot::ByYearDay,
        Slot::ByMonthDay,
        Slot::ByHour,
        Slot::ByMinute,
        Slot::BySecond,
        Slot::BySetPos,
    ];

    fn index(self) -> usize {
        self as usize
    }
}

/// Rendered clause fragments for one rule, one per [`Slot`].
///
/// Each fragment carries its own leading separator, so assembling a sentence
/// is plain concatenation in [`Slot::ORDER`].
#[derive(Debug, Clone, Default)]
pub struct Clauses {
    parts: [String; 10],
}

impl Clauses {
    pub fn get(&self, slot: Slot) -> &str {
        &self.parts[slot.index()]
    }

    fn set(&mut self, slot: Slot, text: String) {
        self.parts[slot.index()] = text;
    }

    /// Non-empty fragments in sentence order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &str)> + '_ {
        Slot::ORDER
            .iter()
            .map(|slot| (*slot, self.get(*slot)))
            .filter(|(_, text)| !text.is_empty())
    }
}

/// A by-field of the rule, named by its RRULE part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ByField {
    #[serde(rename = "BYDAY")]
    ByWeekday,
    ByMonth,
    ByWeekNo,
    ByYearDay,
    ByMonthDay,
    ByHour,
    ByMinute,
    BySecond,
    BySetPos,
}

impl ByField {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ByWeekday => "BYDAY",
            Self::ByMonth => "BYMONTH",
            Self::ByWeekNo => "BYWEEKNO",
            Self::ByYearDay => "BYYEARDAY",
            Self::ByMonthDay => "BYMONTHDAY",
            Self::ByHour => "BYHOUR",
            Self::ByMinute => "BYMINUTE",
            Self::BySecond => "BYSECOND",
            Self::BySetPos => "BYSETPOS",
        }
    }

    /// Fields that are set on `rule`.
    fn present_in(rule: &RuleDescriptor) -> BTreeSet<ByField> {
        [
            (Self::ByWeekday, rule.by_weekday.is_empty()),
            (Self::ByMonth, rule.by_month.is_empty()),
            (Self::ByWeekNo, rule.by_week_no.is_empty()),
            (Self::ByYearDay, rule.by_year_day.is_empty()),
            (Self::ByMonthDay, rule.by_month_day.is_empty()),
            (Self::ByHour, rule.by_hour.is_empty()),
            (Self::ByMinute, rule.by_minute.is_empty()),
            (Self::BySecond, rule.by_second.is_empty()),
            (Self::BySetPos, rule.by_set_pos.is_empty()),
        ]
        .into_iter()
        .filter(|(_, empty)| !empty)
        .map(|(field, _)| field)
        .collect()
    }
}

/// Outcome of clause selection.
#[derive(Debug, Clone)]
pub struct Selection {
    pub clauses: Clauses,
    /// By-fields the clauses do not faithfully express, in field order.
    pub unrepresented: Vec<ByField>,
}

/// Select and render the clauses for `rule` under `freq`.
pub fn select(rule: &RuleDescriptor, freq: Frequency, names: &dyn CalendarNames) -> Selection {
    let mut selector = ClauseSelector {
        rule,
        freq,
        names,
        clauses: Clauses::default(),
        consumed: BTreeSet::new(),
        partial: BTreeSet::new(),
    };

    match freq {
        Frequency::Secondly | Frequency::Minutely | Frequency::Hourly | Frequency::Daily => {
            selector.interval_only();
        }
        Frequency::Weekly => selector.weekly(),
        Frequency::Monthly => selector.monthly(),
        Frequency::Yearly => selector.yearly(),
    }

    selector.by_set_pos();
    selector.by_hour();
    selector.by_minute();
    selector.by_second();

    selector.finish()
}

struct ClauseSelector<'a> {
    rule: &'a RuleDescriptor,
    freq: Frequency,
    names: &'a dyn CalendarNames,
    clauses: Clauses,
    consumed: BTreeSet<ByField>,
    partial: BTreeSet<ByField>,
}

impl ClauseSelector<'_> {
    fn finish(self) -> Selection {
        let present = ByField::present_in(self.rule);
        let unrepresented: Vec<ByField> = present
            .iter()
            .filter(|field| !self.consumed.contains(*field) || self.partial.contains(*field))
            .copied()
            .collect();

        Selection {
            clauses: self.clauses,
            unrepresented,
        }
    }

    fn consume(&mut self, field: ByField) {
        self.consumed.insert(field);
    }

    /// Mark a field as rendered, but not faithfully.
    fn approximate(&mut self, field: ByField) {
        tracing::debug!(
            frequency = %self.freq,
            field = field.as_str(),
            "by-field cannot be described exactly"
        );
        self.partial.insert(field);
    }

    // -----------------------------------------------------------------------
    // Per-frequency branches
    // -----------------------------------------------------------------------

    fn interval_only(&mut self) {
        let text = self.interval_phrase(tables::interval_template(self.freq), &[]);
        self.clauses.set(Slot::Freq, text);
    }

    fn weekly(&mut self) {
        let rule = self.rule;

        if !rule.by_weekday.is_empty() {
            self.consume(ByField::ByWeekday);
            if rule.by_weekday.iter().any(WeekdayNum::is_ordinal) {
                self.approximate(ByField::ByWeekday);
            }
            let days: Vec<Weekday> = rule.by_weekday.iter().map(|w| w.weekday).collect();
            let text = self.weekly_days_phrase(&days);
            self.clauses.set(Slot::Freq, text);
        } else if !rule.by_month_day.is_empty() {
            let text = self.interval_phrase(&tables::WEEKLY, &[]);
            self.clauses.set(Slot::Freq, text);
        } else {
            let text = self.weekly_days_phrase(&[rule.dtstart.weekday()]);
            self.clauses.set(Slot::Freq, text);
        }

        if !rule.by_month_day.is_empty() {
            self.consume(ByField::ByMonthDay);
            self.by_month_day_qualifier();
        }
    }

    fn monthly(&mut self) {
        let rule = self.rule;
        let (nth, plain) = split_weekdays(&rule.by_weekday);

        if !nth.is_empty() {
            self.consume(ByField::ByWeekday);
            if !plain.is_empty() {
                self.approximate(ByField::ByWeekday);
            }
            let x = self.nth_weekdays(&nth);
            let text = self.x_of_every_period(&x);
            self.clauses.set(Slot::ByMonthDay, text);
        } else if !plain.is_empty() && !rule.by_set_pos.is_empty() {
            self.consume(ByField::ByWeekday);
            self.consume(ByField::BySetPos);
            let x = self.set_pos_over_weekdays(&plain);
            let text = self.x_of_every_period(&x);
            self.clauses.set(Slot::ByMonthDay, text);
        } else if !plain.is_empty() {
            self.consume(ByField::ByWeekday);
            let freq = self.interval_phrase(&tables::MONTHLY, &[]);
            self.clauses.set(Slot::Freq, freq);
            let days = self.weekday_names(&plain, AND);
            let text = resolve(&tables::BYWEEKDAY, TemplateKey::None, &[("weekdays", &days)]);
            self.clauses.set(Slot::ByWeekday, text);
        } else if !rule.by_month_day.is_empty() {
            self.consume(ByField::ByMonthDay);
            let x = self.month_days(&rule.by_month_day);
            let text = self.x_of_every_period(&x);
            self.clauses.set(Slot::ByMonthDay, text);
        } else {
            let x = month_day(i64::from(rule.dtstart.day()));
            let text = self.x_of_every_period(&x);
            self.clauses.set(Slot::ByMonthDay, text);
        }

        if !rule.by_set_pos.is_empty() && !self.consumed.contains(&ByField::BySetPos) {
            self.approximate(ByField::BySetPos);
        }
    }

    fn yearly(&mut self) {
        let rule = self.rule;

        if !rule.by_month.is_empty() {
            self.consume(ByField::ByMonth);
            let freq = self.interval_phrase(&tables::YEARLY, &[]);
            self.clauses.set(Slot::Freq, freq);

            let months: Vec<String> = rule
                .by_month
                .iter()
                .map(|m| self.month_name(u32::from(*m)))
                .collect();
            let months = join(&months, AND);
            let text = resolve(&tables::BYMONTH, TemplateKey::None, &[("months", &months)]);
            self.clauses.set(Slot::ByMonth, text);

            if !rule.by_month_day.is_empty() {
                self.consume(ByField::ByMonthDay);
                self.by_month_day_qualifier();
            }
            if !rule.by_weekday.is_empty() {
                self.consume(ByField::ByWeekday);
                self.by_weekday_qualifier();
            }
        } else if !rule.by_year_day.is_empty() {
            self.consume(ByField::ByYearDay);
            let days: Vec<String> = rule
                .by_year_day
                .iter()
                .map(|d| year_day(i64::from(*d)))
                .collect();
            let x = resolve(
                &tables::BYYEARDAY,
                TemplateKey::count_of(days.len()),
                &[("yeardays", &join(&days, AND))],
            );
            let text = self.x_of_every_period(&x);
            self.clauses.set(Slot::ByYearDay, text);
        } else if !rule.by_week_no.is_empty() {
            self.consume(ByField::ByWeekNo);
            let freq = self.interval_phrase(&tables::YEARLY, &[]);
            self.clauses.set(Slot::Freq, freq);

            let weeks: Vec<String> = rule.by_week_no.iter().map(i8::to_string).collect();
            let text = resolve(
                &tables::BYWEEKNO,
                TemplateKey::count_of(weeks.len()),
                &[("weeks", &join(&weeks, AND))],
            );
            self.clauses.set(Slot::ByWeekNo, text);

            if !rule.by_set_pos.is_empty() {
                self.approximate(ByField::BySetPos);
            }
        } else if !rule.by_weekday.is_empty() {
            self.consume(ByField::ByWeekday);
            let (nth, plain) = split_weekdays(&rule.by_weekday);
            if nth.is_empty() {
                let freq = self.interval_phrase(&tables::YEARLY, &[]);
                self.clauses.set(Slot::Freq, freq);
                let days = self.weekday_names(&plain, AND);
                let text = resolve(&tables::BYWEEKDAY, TemplateKey::None, &[("weekdays", &days)]);
                self.clauses.set(Slot::ByWeekday, text);
            } else {
                if !plain.is_empty() {
                    self.approximate(ByField::ByWeekday);
                }
                let x = self.nth_weekdays(&nth);
                let text = self.x_of_every_period(&x);
                self.clauses.set(Slot::ByMonthDay, text);
            }
        } else if !rule.by_month_day.is_empty() {
            // Month days without a month: rendered, but left unconsumed.
            let freq = self.interval_phrase(&tables::YEARLY, &[]);
            self.clauses.set(Slot::Freq, freq);
            self.by_month_day_qualifier();
        } else {
            let month = self.month_name(rule.dtstart.month());
            let nth = month_day(i64::from(rule.dtstart.day()));
            let text = self.interval_phrase(
                &tables::YEARLY_ON_DATE,
                &[("month", &month), ("nth", &nth)],
            );
            self.clauses.set(Slot::Freq, text);
        }
    }

    // -----------------------------------------------------------------------
    // Shared trailing clauses
    // -----------------------------------------------------------------------

    fn by_set_pos(&mut self) {
        let rule = self.rule;
        let positions = &rule.by_set_pos;
        if positions.is_empty() || self.consumed.contains(&ByField::BySetPos) {
            return;
        }
        self.consume(ByField::BySetPos);

        let items: Vec<String> = positions.iter().map(|p| set_pos(i64::from(*p))).collect();
        let setpos = join(&items, AND);
        let text = resolve(&tables::BYSETPOS, TemplateKey::None, &[("setpos", &setpos)]);
        self.clauses.set(Slot::BySetPos, text);
    }

    fn by_hour(&mut self) {
        if let Some(text) = time_clause(&tables::BYHOUR, "hours", &self.rule.by_hour) {
            self.consume(ByField::ByHour);
            self.clauses.set(Slot::ByHour, text);
        }
    }

    fn by_minute(&mut self) {
        if let Some(text) = time_clause(&tables::BYMINUTE, "minutes", &self.rule.by_minute) {
            self.consume(ByField::ByMinute);
            self.clauses.set(Slot::ByMinute, text);
        }
    }

    fn by_second(&mut self) {
        if let Some(text) = time_clause(&tables::BYSECOND, "seconds", &self.rule.by_second) {
            self.consume(ByField::BySecond);
            self.clauses.set(Slot::BySecond, text);
        }
    }

    // -----------------------------------------------------------------------
    // Qualifiers and phrase helpers
    // -----------------------------------------------------------------------

    /// " on the 3rd and 17th"
    fn by_month_day_qualifier(&mut self) {
        let days = self.month_days(&self.rule.by_month_day);
        let text = resolve(&tables::BYMONTHDAY, TemplateKey::None, &[("monthdays", &days)]);
        self.clauses.set(Slot::ByMonthDay, text);
    }

    /// " on Monday" or " on the last Sunday", qualifying a BYMONTH clause.
    fn by_weekday_qualifier(&mut self) {
        let (nth, plain) = split_weekdays(&self.rule.by_weekday);
        let text = if nth.is_empty() {
            let days = self.weekday_names(&plain, AND);
            resolve(&tables::BYWEEKDAY, TemplateKey::None, &[("weekdays", &days)])
        } else {
            if !plain.is_empty() {
                self.approximate(ByField::ByWeekday);
            }
            let days = self.nth_weekdays(&nth);
            resolve(&tables::BYWEEKDAY_NTH, TemplateKey::None, &[("weekdays", &days)])
        };
        self.clauses.set(Slot::ByWeekday, text);
    }

    /// Resolve an interval-keyed template with `%{interval}` pre-filled.
    fn interval_phrase(&self, template: &Template, extra: &[(&str, &str)]) -> String {
        let interval = self.rule.interval.to_string();
        let mut substitutions = vec![("interval", interval.as_str())];
        substitutions.extend_from_slice(extra);
        resolve(
            template,
            TemplateKey::Count(i64::from(self.rule.interval)),
            &substitutions,
        )
    }

    /// "the <x> of every month", "the <x> of every other year", ...
    fn x_of_every_period(&self, x: &str) -> String {
        let unit = resolve(&tables::PERIOD_UNIT, TemplateKey::Frequency(self.freq), &[]);
        let period = self.interval_phrase(&tables::PERIOD, &[("unit", &unit)]);
        resolve(&tables::X_OF_THE_Y, TemplateKey::None, &[("x", x), ("period", &period)])
    }

    /// WEEKLY `freq` clause for an explicit set of weekdays.
    fn weekly_days_phrase(&self, days: &[Weekday]) -> String {
        match WeekdaySet::classify(days) {
            WeekdaySet::Weekdays => self.interval_phrase(&tables::WEEKLY_WEEKDAYS, &[]),
            WeekdaySet::EveryDay => self.interval_phrase(&tables::WEEKLY_EVERY_DAY, &[]),
            WeekdaySet::Other => {
                let names = self.weekday_names(days, AND);
                self.interval_phrase(&tables::WEEKLY_ON_DAYS, &[("weekdays", &names)])
            }
        }
    }

    /// "3rd Tuesday and last Friday"
    fn nth_weekdays(&self, days: &[(i16, Weekday)]) -> String {
        let items: Vec<String> = days
            .iter()
            .map(|(n, day)| {
                let n = ordinal(i64::from(*n));
                let weekday = self.names.weekday(*day);
                resolve(
                    &tables::NTH_WEEKDAY,
                    TemplateKey::None,
                    &[("n", &n), ("weekday", &weekday)],
                )
            })
            .collect();
        join(&items, AND)
    }

    /// "3rd Monday or Tuesday", "1st and last weekday"
    fn set_pos_over_weekdays(&self, days: &[Weekday]) -> String {
        let positions: Vec<String> = self
            .rule
            .by_set_pos
            .iter()
            .map(|p| ordinal(i64::from(*p)))
            .collect();
        let weekdays = match WeekdaySet::classify(days) {
            WeekdaySet::Weekdays => tables::WEEKDAY_SET.to_string(),
            WeekdaySet::EveryDay => tables::EVERY_DAY_SET.to_string(),
            WeekdaySet::Other => self.weekday_names(days, OR),
        };
        resolve(
            &tables::SETPOS_WEEKDAYS,
            TemplateKey::None,
            &[("setpos", &join(&positions, AND)), ("weekdays", &weekdays)],
        )
    }

    fn weekday_names(&self, days: &[Weekday], conjunction: &str) -> String {
        let names: Vec<String> = days
            .iter()
            .map(|d| self.names.weekday(*d).into_owned())
            .collect();
        join(&names, conjunction)
    }

    fn month_days(&self, days: &[i8]) -> String {
        let items: Vec<String> = days.iter().map(|d| month_day(i64::from(*d))).collect();
        join(&items, AND)
    }

    fn month_name(&self, month: u32) -> String {
        match month_from_number(month) {
            Some(m) => self.names.month(m).into_owned(),
            None => month.to_string(),
        }
    }
}

/// Special weekday sets that have their own name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeekdaySet {
    /// Monday through Friday.
    Weekdays,
    /// All seven days.
    EveryDay,
    Other,
}

impl WeekdaySet {
    fn classify(days: &[Weekday]) -> Self {
        let distinct: BTreeSet<u32> = days.iter().map(Weekday::num_days_from_monday).collect();
        match distinct.len() {
            7 => Self::EveryDay,
            5 if !days.contains(&Weekday::Sat) && !days.contains(&Weekday::Sun) => Self::Weekdays,
            _ => Self::Other,
        }
    }
}

/// Split BYDAY into ordinal and plain weekdays, keeping their order.
fn split_weekdays(days: &[WeekdayNum]) -> (Vec<(i16, Weekday)>, Vec<Weekday>) {
    let mut nth = Vec::new();
    let mut plain = Vec::new();
    for day in days {
        match day.ordinal {
            Some(n) => nth.push((n, day.weekday)),
            None => plain.push(day.weekday),
        }
    }
    (nth, plain)
}

/// Month-day ordinal ("3rd", "last day", "4th to last day").
fn month_day(n: i64) -> String {
    let table = if n < 0 {
        &tables::NEG_NTH_MONTHDAY
    } else {
        &tables::NTH_MONTHDAY
    };
    resolve(table, TemplateKey::Count(n), &[("n", &ordinal(n))])
}

/// Year-day ordinal ("1st", "last", "101st").
fn year_day(n: i64) -> String {
    let table = if n < 0 {
        &tables::NEG_NTH_YEARDAY
    } else {
        &tables::NTH_YEARDAY
    };
    resolve(table, TemplateKey::Count(n), &[("n", &ordinal(n))])
}

/// Set-position phrase ("the first", "the penultimate", "the 4th to last").
fn set_pos(n: i64) -> String {
    let table = if n < 0 {
        &tables::NEG_NTH_SETPOS
    } else {
        &tables::NTH_SETPOS
    };
    resolve(table, TemplateKey::Count(n), &[("n", &ordinal(n))])
}

/// " at hours 10, 12 and 17"; `None` when the field is unset.
fn time_clause(template: &Template, name: &str, values: &[u8]) -> Option<String> {
    if values.is_empty() {
        return None;
    }
    let items: Vec<String> = values.iter().map(u8::to_string).collect();
    Some(resolve(
        template,
        TemplateKey::count_of(items.len()),
        &[(name, &join(&items, AND))],
    ))
}
