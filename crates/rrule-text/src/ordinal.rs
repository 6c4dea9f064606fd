//! Ordinal phrases for signed positions ("3rd", "last", "2nd to last").
//!
//! Positive positions count from the start of the period, negative positions
//! from its end. Zero is never a valid position in a recurrence rule; callers
//! must not pass it.

/// Render a signed position as an English ordinal phrase.
///
/// - `-1` -- `"last"`
/// - `-n` -- `"<nth> to last"`, e.g. `-2` is `"2nd to last"`
/// - `n` -- `"<nth>"`, e.g. `21` is `"21st"` and `12` is `"12th"`
pub fn ordinal(n: i64) -> String {
    debug_assert_ne!(n, 0, "ordinal position must be non-zero");

    match n {
        -1 => "last".to_string(),
        n if n < -1 => format!("{} to last", ordinal_digits(n.unsigned_abs())),
        n => ordinal_digits(n.unsigned_abs()),
    }
}

/// `n` followed by its English suffix.
fn ordinal_digits(n: u64) -> String {
    let suffix = match (n % 100, n % 10) {
        (11..=13, _) => "th",
        (_, 1) => "st",
        (_, 2) => "nd",
        (_, 3) => "rd",
        _ => "th",
    };
    format!("{}{}", n, suffix)
}
