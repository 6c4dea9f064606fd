//! Join rendered tokens into an English enumeration.

/// Conjunction for enumerations that apply together ("10, 12 and 17").
pub const AND: &str = "and";

/// Conjunction for alternative identities ("the 3rd Monday or Tuesday").
pub const OR: &str = "or";

/// Join `tokens` with commas and a final `conjunction`.
///
/// - `[]` -- `""` (callers should not ask for an empty enumeration)
/// - `["A"]` -- `"A"`
/// - `["A", "B"]` -- `"A and B"`
/// - `["A", "B", "C"]` -- `"A, B and C"`
pub fn join<S: AsRef<str>>(tokens: &[S], conjunction: &str) -> String {
    match tokens {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(|t| t.as_ref()).collect();
            format!("{} {} {}", head.join(", "), conjunction, last.as_ref())
        }
    }
}
