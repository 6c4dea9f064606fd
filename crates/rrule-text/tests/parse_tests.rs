//! Tests for the RRULE string front end.

use chrono::{NaiveDate, Weekday};
use rrule_text::{
    describe_rrule, parse_rrule, validate, Frequency, RuleDescriptor, TextError, WeekdayNum,
};

const DTSTART: &str = "2026-02-17T14:00:00";

fn text(rrule: &str) -> String {
    describe_rrule(rrule, DTSTART, "UTC")
        .expect("should describe successfully")
        .to_string()
}

// ---------------------------------------------------------------------------
// Descriptions of parsed rules
// ---------------------------------------------------------------------------

#[test]
fn daily() {
    assert_eq!(text("FREQ=DAILY"), "Every day");
}

#[test]
fn daily_by_hour() {
    assert_eq!(
        text("FREQ=DAILY;BYHOUR=10,12,17"),
        "Every day at hours 10, 12 and 17"
    );
}

#[test]
fn rrule_prefix_is_accepted() {
    assert_eq!(text("RRULE:FREQ=WEEKLY;BYDAY=TU"), "Every Tuesday");
    assert_eq!(text("rrule:FREQ=HOURLY;INTERVAL=4"), "Every 4 hours");
}

#[test]
fn weekly_work_week() {
    assert_eq!(text("FREQ=WEEKLY;BYDAY=MO,TU,WE,TH,FR"), "Every weekday");
}

#[test]
fn weekly_without_byday_uses_dtstart() {
    assert_eq!(text("FREQ=WEEKLY"), "Every Tuesday");
    assert_eq!(text("INTERVAL=2;FREQ=WEEKLY"), "Every other Tuesday");
}

#[test]
fn monthly_ordinal_weekdays() {
    assert_eq!(text("FREQ=MONTHLY;BYDAY=+3TU"), "The 3rd Tuesday of every month");
    assert_eq!(text("FREQ=MONTHLY;BYDAY=-1MO"), "The last Monday of every month");
    assert_eq!(
        text("FREQ=MONTHLY;BYDAY=-2FR"),
        "The 2nd to last Friday of every month"
    );
}

#[test]
fn monthly_set_pos_idiom() {
    assert_eq!(
        text("FREQ=MONTHLY;BYDAY=TU;BYSETPOS=3"),
        "The 3rd Tuesday of every month"
    );
}

#[test]
fn monthly_by_month_day() {
    assert_eq!(text("FREQ=MONTHLY;BYMONTHDAY=4"), "The 4th of every month");
    assert_eq!(
        text("FREQ=MONTHLY;BYMONTHDAY=-4"),
        "The 4th to last day of every month"
    );
}

#[test]
fn count_and_until() {
    assert_eq!(text("FREQ=WEEKLY;COUNT=20"), "Every Tuesday for 20 times");
    assert_eq!(
        text("FREQ=WEEKLY;UNTIL=20660101T080000Z"),
        "Every Tuesday until January 1, 2066"
    );
    assert_eq!(
        text("FREQ=WEEKLY;UNTIL=20771110T000000Z"),
        "Every Tuesday until November 10, 2077"
    );
}

#[test]
fn until_is_shown_in_rule_timezone() {
    // 05:00 UTC on Jan 1 is still Dec 31 in Los Angeles.
    let d = describe_rrule(
        "FREQ=DAILY;UNTIL=20660101T050000Z",
        DTSTART,
        "America/Los_Angeles",
    )
    .expect("should describe successfully");
    assert_eq!(d.text(), "Every day until December 31, 2065");
}

#[test]
fn ical_dtstart_format_is_accepted() {
    let d = describe_rrule("FREQ=MONTHLY", "20260217T140000", "UTC")
        .expect("should describe successfully");
    assert_eq!(d.text(), "The 17th of every month");
}

// ---------------------------------------------------------------------------
// Descriptor contents
// ---------------------------------------------------------------------------

#[test]
fn only_written_parts_are_kept() {
    let r = parse_rrule("FREQ=DAILY", DTSTART, "UTC").expect("should parse");
    assert_eq!(r.frequency, Some(Frequency::Daily));
    assert_eq!(r.interval, 1);
    assert!(r.by_hour.is_empty());
    assert!(r.by_minute.is_empty());
    assert!(r.by_second.is_empty());
    assert!(r.by_weekday.is_empty());
    assert!(r.by_month_day.is_empty());
    assert!(r.count.is_none());
    assert!(r.until.is_none());
}

#[test]
fn by_fields_are_carried_over() {
    let r = parse_rrule(
        "FREQ=YEARLY;INTERVAL=2;BYMONTH=3;BYDAY=-1SU,MO;BYHOUR=2;COUNT=4",
        DTSTART,
        "UTC",
    )
    .expect("should parse");
    assert_eq!(r.frequency, Some(Frequency::Yearly));
    assert_eq!(r.interval, 2);
    assert_eq!(r.count, Some(4));
    assert_eq!(r.by_month, vec![3]);
    assert_eq!(r.by_hour, vec![2]);
    assert_eq!(
        r.by_weekday,
        vec![
            WeekdayNum::nth(-1, Weekday::Sun),
            WeekdayNum::every(Weekday::Mon)
        ]
    );
}

#[test]
fn repeated_values_are_dropped() {
    assert_eq!(text("FREQ=WEEKLY;BYDAY=MO,MO"), "Every Monday");
    assert_eq!(text("FREQ=DAILY;BYHOUR=9,9,17"), "Every day at hours 9 and 17");

    let r = parse_rrule("FREQ=MONTHLY;BYDAY=MO,+1MO,MO", DTSTART, "UTC")
        .expect("should parse");
    assert_eq!(
        r.by_weekday,
        vec![WeekdayNum::every(Weekday::Mon), WeekdayNum::nth(1, Weekday::Mon)]
    );
}

#[test]
fn positive_days_come_before_negative_days() {
    assert_eq!(
        text("FREQ=YEARLY;BYYEARDAY=1,100,-1"),
        "The 1st, 100th and last days of every year"
    );

    let r = parse_rrule("FREQ=MONTHLY;BYMONTHDAY=-1,1,15", DTSTART, "UTC")
        .expect("should parse");
    assert_eq!(r.by_month_day, vec![1, 15, -1]);
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[test]
fn empty_rule_is_rejected() {
    let err = describe_rrule("", DTSTART, "UTC").unwrap_err();
    assert!(matches!(err, TextError::InvalidRule(_)), "{:?}", err);

    let err = describe_rrule("RRULE:", DTSTART, "UTC").unwrap_err();
    assert!(matches!(err, TextError::InvalidRule(_)), "{:?}", err);
}

#[test]
fn unknown_frequency_is_rejected() {
    let err = describe_rrule("FREQ=SOMETIMES", DTSTART, "UTC").unwrap_err();
    assert!(matches!(err, TextError::InvalidRule(_)), "{:?}", err);
}

#[test]
fn invalid_timezone_is_rejected() {
    let err = describe_rrule("FREQ=DAILY", DTSTART, "Mars/Olympus_Mons").unwrap_err();
    assert!(matches!(err, TextError::InvalidTimezone(_)), "{:?}", err);
}

#[test]
fn invalid_dtstart_is_rejected() {
    let err = describe_rrule("FREQ=DAILY", "next tuesday", "UTC").unwrap_err();
    assert!(matches!(err, TextError::InvalidDtstart(_)), "{:?}", err);
    assert_eq!(err.to_string(), "Invalid DTSTART: next tuesday");
}

#[test]
fn zero_interval_is_rejected() {
    let err = describe_rrule("FREQ=WEEKLY;INTERVAL=0", DTSTART, "UTC").unwrap_err();
    assert!(matches!(err, TextError::InvalidRule(_)), "{:?}", err);
}

#[test]
fn zero_positions_are_rejected() {
    for rule in [
        "FREQ=MONTHLY;BYMONTHDAY=0",
        "FREQ=YEARLY;BYYEARDAY=0",
        "FREQ=DAILY;BYSETPOS=0",
        "FREQ=MONTHLY;BYDAY=MO,TU;BYSETPOS=0",
    ] {
        let err = describe_rrule(rule, DTSTART, "UTC").unwrap_err();
        assert!(matches!(err, TextError::InvalidRule(_)), "{}: {:?}", rule, err);
    }
}

#[test]
fn zero_weekday_position_is_rejected() {
    let r = parse_rrule("FREQ=MONTHLY;BYDAY=+1MO", DTSTART, "UTC").expect("should parse");
    assert_eq!(r.by_weekday, vec![WeekdayNum::nth(1, Weekday::Mon)]);

    // The rrule crate may refuse "0MO" itself; either way it must not render.
    let err = describe_rrule("FREQ=MONTHLY;BYDAY=0MO", DTSTART, "UTC").unwrap_err();
    assert!(matches!(err, TextError::InvalidRule(_)), "{:?}", err);
}

#[test]
fn non_positive_week_numbers_are_rejected() {
    for rule in ["FREQ=YEARLY;BYWEEKNO=-1", "FREQ=YEARLY;BYWEEKNO=0"] {
        let err = describe_rrule(rule, DTSTART, "UTC").unwrap_err();
        assert!(matches!(err, TextError::InvalidRule(_)), "{}: {:?}", rule, err);
    }
}

#[test]
fn rejection_names_the_field() {
    let err = describe_rrule("FREQ=MONTHLY;BYMONTHDAY=0", DTSTART, "UTC").unwrap_err();
    assert_eq!(err.to_string(), "Invalid RRULE: BYMONTHDAY values must be non-zero");
}

#[test]
fn hand_built_descriptors_can_be_checked() {
    let dtstart = NaiveDate::from_ymd_opt(2026, 2, 17)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();
    let ok = RuleDescriptor::new(Frequency::Monthly, dtstart).with_by_month_day([1, -1]);
    assert!(validate(&ok).is_ok());

    let bad = RuleDescriptor::new(Frequency::Monthly, dtstart).with_by_set_pos([0]);
    assert!(matches!(validate(&bad), Err(TextError::InvalidRule(_))));

    let bad = RuleDescriptor::new(Frequency::Weekly, dtstart).with_interval(0);
    assert!(matches!(validate(&bad), Err(TextError::InvalidRule(_))));
}
