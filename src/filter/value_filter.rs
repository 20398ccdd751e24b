//! Input value filtering
//!
//! Validates the raw search text against an allowed-character policy before
//! any request is sent. Invalid input is flagged visually by the controller;
//! the user's text is never auto-corrected.

/// Allowed-character policy over search input.
///
/// `sanitize` must be idempotent: `sanitize(sanitize(x)) == sanitize(x)`.
pub trait ValueFilter {
    /// Strip every character outside the allowed set
    fn sanitize(&self, raw: &str) -> String;

    /// A value is valid when sanitizing it changes nothing
    fn is_valid(&self, raw: &str) -> bool {
        self.sanitize(raw) == raw
    }
}

/// Default filter: ASCII letters and digits, hyphen, apostrophe, whitespace,
/// period, colon, and plus.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultValueFilter;

impl DefaultValueFilter {
    fn is_allowed(ch: char) -> bool {
        ch.is_ascii_alphanumeric()
            || ch.is_whitespace()
            || matches!(ch, '-' | '\'' | '.' | ':' | '+')
    }
}

impl ValueFilter for DefaultValueFilter {
    fn sanitize(&self, raw: &str) -> String {
        raw.chars().filter(|ch| Self::is_allowed(*ch)).collect()
    }
}

#[cfg(test)]
#[path = "value_filter_tests.rs"]
mod value_filter_tests;
