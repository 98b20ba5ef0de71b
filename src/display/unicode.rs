//! Unicode formatting utilities
use crate::value::Value;

const SUPERSCRIPT_DIGITS: [char; 10] = ['⁰', '¹', '²', '³', '⁴', '⁵', '⁶', '⁷', '⁸', '⁹'];
const SUBSCRIPT_DIGITS: [char; 10] = ['₀', '₁', '₂', '₃', '₄', '₅', '₆', '₇', '₈', '₉'];

/// Most significant digits [`significant`] will write; enough to round-trip any `f64`
pub const MAX_SIGNIFICANT_DIGITS: usize = 17;

/// Format a number with a fixed count of significant digits
///
/// Output follows the conventions of C's `%g`: trailing zeros are trimmed, and values with
/// a decimal exponent below `-4` or at least `digits` are written in scientific notation (`1.23e4`).
///
/// Values that are not real numbers (NaN, infinities) cannot be rounded to a precision,
/// and are written with their plain [`std::fmt::Display`] form instead.
///
/// # Parameters
/// - `n`: The number to format
/// - `digits`: The number of significant digits to keep, clamped to `1..=`[`MAX_SIGNIFICANT_DIGITS`]
///
/// # Example
/// ```
/// # use polycalc::display::unicode::significant;
/// assert_eq!(significant(2.0, 3), "2");
/// assert_eq!(significant(-1.0 / 3.0, 3), "-0.333");
/// assert_eq!(significant(12345.0, 3), "1.23e4");
/// assert_eq!(significant(f64::INFINITY, 3), "inf");
/// ```
pub fn significant<T: Value>(n: T, digits: usize) -> String {
    if !n.is_real() {
        return n.to_string();
    }

    if n.is_zero() {
        return "0".to_string();
    }

    // Rounding first, so that 999.7 becomes 1e3 rather than 1000
    let digits = digits.clamp(1, MAX_SIGNIFICANT_DIGITS);
    let sci = format!("{n:.precision$e}", precision = digits - 1);
    let Some((mantissa, exponent)) = sci.split_once('e') else {
        return n.to_string();
    };
    let Ok(exponent) = exponent.parse::<i64>() else {
        return n.to_string();
    };

    let digits = i64::try_from(digits).unwrap_or(i64::MAX);
    if exponent < -4 || exponent >= digits {
        format!("{}e{exponent}", trim_fraction(mantissa))
    } else {
        let decimals = usize::try_from(digits - 1 - exponent).unwrap_or(0);
        trim_fraction(&format!("{n:.decimals$}")).to_string()
    }
}

/// Strips trailing zeros (and a dangling decimal point) from a fixed-point number
fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Convert the digits of a string into superscript, leaving other characters untouched
pub fn superscript(s: &str) -> String {
    s.chars().map(|c| transliterate(c, &SUPERSCRIPT_DIGITS)).collect()
}

/// Convert the digits of a string into subscript, leaving other characters untouched
pub fn subscript(s: &str) -> String {
    s.chars().map(|c| transliterate(c, &SUBSCRIPT_DIGITS)).collect()
}

fn transliterate(c: char, table: &[char; 10]) -> char {
    match c.to_digit(10) {
        Some(d) => table[d as usize],
        None => c,
    }
}
