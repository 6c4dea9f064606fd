//! Tests for the leaf formatters: ordinals, list joining, template resolution
//! and frequency tokens.

use rrule_text::join::{join, AND, OR};
use rrule_text::ordinal;
use rrule_text::template::{resolve, Template, TemplateKey};
use rrule_text::Frequency;

// ---------------------------------------------------------------------------
// Ordinals
// ---------------------------------------------------------------------------

#[test]
fn ordinal_suffixes_for_small_numbers() {
    assert_eq!(ordinal(1), "1st");
    assert_eq!(ordinal(2), "2nd");
    assert_eq!(ordinal(3), "3rd");
    assert_eq!(ordinal(4), "4th");
    assert_eq!(ordinal(10), "10th");
}

#[test]
fn ordinal_teens_always_take_th() {
    assert_eq!(ordinal(11), "11th");
    assert_eq!(ordinal(12), "12th");
    assert_eq!(ordinal(13), "13th");
    assert_eq!(ordinal(111), "111th");
    assert_eq!(ordinal(112), "112th");
    assert_eq!(ordinal(213), "213th");
}

#[test]
fn ordinal_twenties_and_beyond() {
    assert_eq!(ordinal(21), "21st");
    assert_eq!(ordinal(22), "22nd");
    assert_eq!(ordinal(23), "23rd");
    assert_eq!(ordinal(31), "31st");
    assert_eq!(ordinal(101), "101st");
    assert_eq!(ordinal(366), "366th");
}

#[test]
fn ordinal_negative_counts_from_end() {
    assert_eq!(ordinal(-1), "last");
    assert_eq!(ordinal(-2), "2nd to last");
    assert_eq!(ordinal(-3), "3rd to last");
    assert_eq!(ordinal(-11), "11th to last");
    assert_eq!(ordinal(-21), "21st to last");
}

// ---------------------------------------------------------------------------
// Joining
// ---------------------------------------------------------------------------

#[test]
fn join_single_token_is_unchanged() {
    assert_eq!(join(&["A"], AND), "A");
}

#[test]
fn join_two_tokens_has_no_comma() {
    assert_eq!(join(&["A", "B"], AND), "A and B");
}

#[test]
fn join_three_or_more_tokens() {
    assert_eq!(join(&["A", "B", "C"], AND), "A, B and C");
    assert_eq!(join(&["A", "B", "C", "D"], AND), "A, B, C and D");
}

#[test]
fn join_with_or() {
    assert_eq!(join(&["Monday", "Tuesday"], OR), "Monday or Tuesday");
}

#[test]
fn join_empty_is_empty() {
    let empty: [&str; 0] = [];
    assert_eq!(join(&empty, AND), "");
}

#[test]
fn join_accepts_owned_strings() {
    let tokens = vec!["10".to_string(), "12".to_string(), "17".to_string()];
    assert_eq!(join(&tokens, AND), "10, 12 and 17");
}

// ---------------------------------------------------------------------------
// Templates
// ---------------------------------------------------------------------------

const INTERVAL: Template = Template::Cardinality {
    cases: &[(1, "Every day"), (2, "Every other day")],
    other: "Every %{interval} days",
};

#[test]
fn cardinality_exact_match_wins() {
    assert_eq!(
        resolve(&INTERVAL, TemplateKey::Count(1), &[("interval", "1")]),
        "Every day"
    );
    assert_eq!(
        resolve(&INTERVAL, TemplateKey::Count(2), &[("interval", "2")]),
        "Every other day"
    );
}

#[test]
fn cardinality_falls_back_to_generic() {
    assert_eq!(
        resolve(&INTERVAL, TemplateKey::Count(5), &[("interval", "5")]),
        "Every 5 days"
    );
    assert_eq!(INTERVAL.select(TemplateKey::None), "Every %{interval} days");
}

#[test]
fn count_of_maps_lengths() {
    assert_eq!(TemplateKey::count_of(3), TemplateKey::Count(3));
}

#[test]
fn literal_ignores_key() {
    let t = Template::Literal(" in %{months}");
    assert_eq!(
        resolve(&t, TemplateKey::Count(9), &[("months", "May")]),
        " in May"
    );
}

#[test]
fn frequency_template_selects_by_frequency() {
    let t = Template::ByFrequency(&[
        (Frequency::Monthly, "month"),
        (Frequency::Yearly, "year"),
    ]);
    assert_eq!(resolve(&t, TemplateKey::Frequency(Frequency::Yearly), &[]), "year");
    assert_eq!(resolve(&t, TemplateKey::Frequency(Frequency::Daily), &[]), "");
    assert_eq!(resolve(&t, TemplateKey::None, &[]), "");
}

#[test]
fn substitution_is_single_pass() {
    let t = Template::Literal("%{a} %{b}");
    assert_eq!(
        resolve(&t, TemplateKey::None, &[("a", "%{b}"), ("b", "x")]),
        "%{b} x"
    );
}

#[test]
fn unknown_and_unterminated_placeholders_are_kept() {
    let t = Template::Literal("%{known} %{unknown} %{open");
    assert_eq!(
        resolve(&t, TemplateKey::None, &[("known", "yes")]),
        "yes %{unknown} %{open"
    );
}

// ---------------------------------------------------------------------------
// Frequency tokens
// ---------------------------------------------------------------------------

#[test]
fn frequency_parses_rrule_tokens() {
    assert_eq!(Frequency::parse("DAILY"), Some(Frequency::Daily));
    assert_eq!(Frequency::parse("weekly"), Some(Frequency::Weekly));
    assert_eq!(Frequency::parse("Yearly"), Some(Frequency::Yearly));
    assert_eq!(Frequency::parse("FORTNIGHTLY"), None);
    assert_eq!(Frequency::parse(""), None);
}

#[test]
fn frequency_token_roundtrips_through_display() {
    for freq in [
        Frequency::Secondly,
        Frequency::Minutely,
        Frequency::Hourly,
        Frequency::Daily,
        Frequency::Weekly,
        Frequency::Monthly,
        Frequency::Yearly,
    ] {
        assert_eq!(Frequency::parse(&freq.to_string()), Some(freq));
        assert_eq!(freq.to_string(), freq.as_str());
    }
}
