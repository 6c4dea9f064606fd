//! Constant English phrasing tables.
//!
//! Interval tables are keyed by the rule's INTERVAL (1, 2, generic); by-field
//! tables are keyed by the number of entries in the field; the ordinal
//! sub-tables are keyed by the signed position and fall back to the generic
//! [`ordinal`](crate::ordinal::ordinal) phrase passed in as `%{n}`.

use crate::rule::Frequency;
use crate::template::Template;

/// Returned instead of a sentence when a rule has no usable frequency.
pub const UNSUPPORTED_TEXT: &str = "Unable to fully convert this rrule to text";

/// Appended to sentences that do not fully describe their rule.
pub const APPROXIMATE: Template = Template::Literal(" (~ approximate)");

/// Long-form date used for UNTIL ("January 2, 2006").
pub const UNTIL_DATE_FORMAT: &str = "%B %-d, %Y";

// ---------------------------------------------------------------------------
// Interval phrasing
// ---------------------------------------------------------------------------

pub const SECONDLY: Template = Template::Cardinality {
    cases: &[(1, "Every second"), (2, "Every other second")],
    other: "Every %{interval} seconds",
};

pub const MINUTELY: Template = Template::Cardinality {
    cases: &[(1, "Every minute"), (2, "Every other minute")],
    other: "Every %{interval} minutes",
};

pub const HOURLY: Template = Template::Cardinality {
    cases: &[(1, "Every hour"), (2, "Every other hour")],
    other: "Every %{interval} hours",
};

pub const DAILY: Template = Template::Cardinality {
    cases: &[(1, "Every day"), (2, "Every other day")],
    other: "Every %{interval} days",
};

pub const WEEKLY: Template = Template::Cardinality {
    cases: &[(1, "Every week"), (2, "Every other week")],
    other: "Every %{interval} weeks",
};

pub const MONTHLY: Template = Template::Cardinality {
    cases: &[(1, "Every month"), (2, "Every other month")],
    other: "Every %{interval} months",
};

pub const YEARLY: Template = Template::Cardinality {
    cases: &[(1, "Every year"), (2, "Every other year")],
    other: "Every %{interval} years",
};

/// Interval table for the `freq` clause of each frequency.
pub fn interval_template(freq: Frequency) -> &'static Template {
    match freq {
        Frequency::Secondly => &SECONDLY,
        Frequency::Minutely => &MINUTELY,
        Frequency::Hourly => &HOURLY,
        Frequency::Daily => &DAILY,
        Frequency::Weekly => &WEEKLY,
        Frequency::Monthly => &MONTHLY,
        Frequency::Yearly => &YEARLY,
    }
}

pub const WEEKLY_ON_DAYS: Template = Template::Cardinality {
    cases: &[(1, "Every %{weekdays}"), (2, "Every other %{weekdays}")],
    other: "Every %{interval} weeks on %{weekdays}",
};

pub const WEEKLY_WEEKDAYS: Template = Template::Cardinality {
    cases: &[
        (1, "Every weekday"),
        (2, "Every weekday of every other week"),
    ],
    other: "Every weekday of every %{interval} weeks",
};

pub const WEEKLY_EVERY_DAY: Template = Template::Cardinality {
    cases: &[(1, "Every day"), (2, "Every day of every other week")],
    other: "Every day of every %{interval} weeks",
};

pub const YEARLY_ON_DATE: Template = Template::Cardinality {
    cases: &[
        (1, "Every %{month} %{nth}"),
        (2, "Every other %{month} %{nth}"),
    ],
    other: "Every %{interval} years on %{month} %{nth}",
};

// ---------------------------------------------------------------------------
// "the X of every <period>"
// ---------------------------------------------------------------------------

pub const PERIOD_UNIT: Template = Template::ByFrequency(&[
    (Frequency::Weekly, "week"),
    (Frequency::Monthly, "month"),
    (Frequency::Yearly, "year"),
]);

pub const PERIOD: Template = Template::Cardinality {
    cases: &[(1, "%{unit}"), (2, "other %{unit}")],
    other: "%{interval} %{unit}s",
};

pub const X_OF_THE_Y: Template = Template::Literal("the %{x} of every %{period}");

// ---------------------------------------------------------------------------
// By-field clauses
// ---------------------------------------------------------------------------

pub const BYMONTH: Template = Template::Literal(" in %{months}");

pub const BYWEEKDAY: Template = Template::Literal(" on %{weekdays}");

pub const BYWEEKDAY_NTH: Template = Template::Literal(" on the %{weekdays}");

pub const NTH_WEEKDAY: Template = Template::Literal("%{n} %{weekday}");

/// Ordinal set positions over alternative weekdays ("3rd Monday or Tuesday").
pub const SETPOS_WEEKDAYS: Template = Template::Literal("%{setpos} %{weekdays}");

pub const BYWEEKNO: Template = Template::Cardinality {
    cases: &[(1, " in week %{weeks}")],
    other: " in weeks %{weeks}",
};

pub const BYMONTHDAY: Template = Template::Literal(" on the %{monthdays}");

pub const NTH_MONTHDAY: Template = Template::Cardinality {
    cases: &[
        (1, "1st"),
        (2, "2nd"),
        (3, "3rd"),
        (21, "21st"),
        (22, "22nd"),
        (23, "23rd"),
        (31, "31st"),
    ],
    other: "%{n}",
};

pub const NEG_NTH_MONTHDAY: Template = Template::Cardinality {
    cases: &[
        (-1, "last day"),
        (-2, "2nd to last day"),
        (-3, "3rd to last day"),
        (-21, "21st to last day"),
        (-22, "22nd to last day"),
        (-23, "23rd to last day"),
        (-31, "31st to last day"),
    ],
    other: "%{n} day",
};

pub const BYYEARDAY: Template = Template::Cardinality {
    cases: &[(1, "%{yeardays} day")],
    other: "%{yeardays} days",
};

pub const NTH_YEARDAY: Template = Template::Cardinality {
    cases: &[(1, "1st"), (2, "2nd"), (3, "3rd")],
    other: "%{n}",
};

pub const NEG_NTH_YEARDAY: Template = Template::Cardinality {
    cases: &[(-1, "last"), (-2, "2nd to last"), (-3, "3rd to last")],
    other: "%{n}",
};

pub const BYHOUR: Template = Template::Cardinality {
    cases: &[(1, " at hour %{hours}")],
    other: " at hours %{hours}",
};

pub const BYMINUTE: Template = Template::Cardinality {
    cases: &[(1, " at minute %{minutes}")],
    other: " at minutes %{minutes}",
};

pub const BYSECOND: Template = Template::Cardinality {
    cases: &[(1, " at second %{seconds}")],
    other: " at seconds %{seconds}",
};

pub const BYSETPOS: Template = Template::Literal(", but only %{setpos} instance of this set");

pub const NTH_SETPOS: Template = Template::Cardinality {
    cases: &[(1, "the first"), (2, "the second"), (3, "the third")],
    other: "the %{n}",
};

pub const NEG_NTH_SETPOS: Template = Template::Cardinality {
    cases: &[
        (-1, "the last"),
        (-2, "the penultimate"),
        (-3, "the antepenultimate"),
    ],
    other: "the %{n}",
};

/// Name of the Monday-Friday set inside "of every" phrases.
pub const WEEKDAY_SET: &str = "weekday";

/// Name of the seven-day set inside "of every" phrases.
pub const EVERY_DAY_SET: &str = "day";

// ---------------------------------------------------------------------------
// Termination
// ---------------------------------------------------------------------------

pub const UNTIL: Template = Template::Literal(" until %{date}");

pub const COUNT: Template = Template::Cardinality {
    cases: &[(1, " for 1 time")],
    other: " for %{count} times",
};
