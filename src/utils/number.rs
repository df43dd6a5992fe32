//! Parsing of user-typed decimal amounts.

/// Parse a decimal the way the form fields expect it.
///
/// Surrounding whitespace is ignored. Zero and negative values are accepted;
/// `NaN` and infinities are not numbers a user can spend.
pub fn parse_decimal(s: &str) -> Option<f64> {
    s.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}
