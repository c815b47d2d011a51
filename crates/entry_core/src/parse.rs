//! Permissive float parsing and fixed-point formatting.
//!
//! Text coming out of an entry field is never trusted to be numeric; these
//! helpers degrade to a caller-chosen default instead of returning errors.

/// Parse `text` as a float, returning `None` when it does not denote one.
///
/// Leading/trailing whitespace is ignored. Empty (or all-whitespace) text is
/// `None`, not an error.
///
/// # Examples
///
/// ```
/// use entry_core::parse_float;
///
/// assert_eq!(parse_float("1.25"), Some(1.25));
/// assert_eq!(parse_float("  -3 "), Some(-3.0));
/// assert_eq!(parse_float(""), None);
/// assert_eq!(parse_float("12x"), None);
/// ```
#[inline]
pub fn parse_float(text: &str) -> Option<f64> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}

/// Parse `text` as a float, falling back to `default` when it does not parse.
///
/// This is the permissive-parse-or-default used for bounds and initial
/// values: a non-numeric bound simply means "unbounded".
#[inline]
pub fn parse_float_or(text: &str, default: Option<f64>) -> Option<f64> {
    parse_float(text).or(default)
}

/// Format `value` as fixed-point with exactly `precision` fractional digits.
///
/// `precision == 0` produces no fractional digits and no decimal point.
///
/// # Examples
///
/// ```
/// use entry_core::format_fixed;
///
/// assert_eq!(format_fixed(1.5, 3), "1.500");
/// assert_eq!(format_fixed(-0.25, 1), "-0.2");
/// assert_eq!(format_fixed(42.7, 0), "43");
/// ```
#[inline]
pub fn format_fixed(value: f64, precision: usize) -> String {
    format!("{value:.precision$}")
}

/// Round `value` to `precision` fractional digits.
///
/// With `precision == 0` this truncates toward zero (integer cast), matching
/// what an integer-only entry reports as its value.
pub fn round_to(value: f64, precision: usize) -> f64 {
    if precision == 0 {
        return value.trunc();
    }
    let scale = 10f64.powi(precision as i32);
    (value * scale).round_ties_even() / scale
}
