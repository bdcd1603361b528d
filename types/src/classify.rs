//! Per-character predicates used by the line grammar.

use crate::Marker;

/// Digit, sign, or decimal point.
#[must_use]
pub fn is_numeric(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '+' | '-' | '.')
}

/// Character belongs to the assignment marker.
#[must_use]
pub fn is_assignment(c: char, marker: &Marker) -> bool {
    marker.contains_char(c)
}

#[must_use]
pub fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

/// Optional leading sign, at least one digit, at most one decimal point.
#[must_use]
pub fn is_numeric_literal(text: &str) -> bool {
    let digits = text.strip_prefix(['+', '-']).unwrap_or(text);
    let mut seen_digit = false;
    let mut seen_point = false;
    for c in digits.chars() {
        match c {
            '0'..='9' => seen_digit = true,
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    seen_digit
}
