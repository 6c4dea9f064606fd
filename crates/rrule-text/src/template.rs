//! Phrasing templates selected by cardinality or frequency.
//!
//! A [`Template`] is one entry of the constant tables in [`crate::tables`].
//! [`resolve`] picks the variant for a [`TemplateKey`] (exact match first,
//! then the generic fallback) and substitutes `%{name}` placeholders.

use crate::rule::Frequency;

/// A phrasing template.
#[derive(Debug, Clone, Copy)]
pub enum Template {
    /// One phrasing regardless of key.
    Literal(&'static str),
    /// Phrasings keyed by a small signed integer, with a generic fallback.
    Cardinality {
        cases: &'static [(i64, &'static str)],
        other: &'static str,
    },
    /// Phrasings keyed by frequency. A missing frequency selects nothing.
    ByFrequency(&'static [(Frequency, &'static str)]),
}

/// What a template variant is selected by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKey {
    None,
    Count(i64),
    Frequency(Frequency),
}

impl TemplateKey {
    /// Key for the number of entries in a by-field set.
    pub fn count_of(n: usize) -> Self {
        Self::Count(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl Template {
    /// The raw template string for `key`, before substitution.
    pub fn select(&self, key: TemplateKey) -> &'static str {
        match (self, key) {
            (Template::Literal(s), _) => *s,
            (Template::Cardinality { cases, other }, TemplateKey::Count(n)) => cases
                .iter()
                .find(|(k, _)| *k == n)
                .map_or(*other, |(_, s)| *s),
            (Template::Cardinality { other, .. }, _) => *other,
            (Template::ByFrequency(cases), TemplateKey::Frequency(freq)) => cases
                .iter()
                .find(|(f, _)| *f == freq)
                .map_or("", |(_, s)| *s),
            (Template::ByFrequency(_), _) => "",
        }
    }
}

/// Select the variant of `template` for `key` and fill in its placeholders.
///
/// Every `%{name}` whose name appears in `substitutions` is replaced by the
/// paired value; unknown placeholders are left as they are. Substitution is a
/// single left-to-right pass, so placeholder syntax inside a substituted value
/// is never expanded again.
pub fn resolve(template: &Template, key: TemplateKey, substitutions: &[(&str, &str)]) -> String {
    substitute(template.select(key), substitutions)
}

fn substitute(format: &str, substitutions: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(format.len());
    let mut rest = format;

    while let Some(start) = rest.find("%{") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            // Unterminated placeholder: copy the remainder untouched.
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match substitutions.iter().find(|(k, _)| *k == name) {
            Some((_, value)) => out.push_str(value),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}
