//! Numeric literals.

/// Parses an integer literal: an optional leading `-` followed by one or more ASCII digits.
///
/// A leading `+` is rejected, to keep `+` free for operators. The value is returned as an `f64`,
/// so literals too large for any integer type are still accepted, rounded to the nearest `f64`.
pub fn parse_int(lexeme: &str) -> Option<f64> {
    let digits = lexeme.strip_prefix('-').unwrap_or(lexeme);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    lexeme.parse().ok()
}
