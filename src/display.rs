//! Utilities for displaying and formatting polynomials
//!
//! This module converts coefficient sequences into conventional math notation,
//! such as `-x⁶ - 2x² + 1`. It is kept apart from the numeric model so that the
//! rendering rules (precision, sign convention, glyphs) can change without
//! touching evaluation or arithmetic.
//!
//! # Key Concepts
//! - **[`PolynomialDisplay`]**: Trait to define how the terms of a polynomial are rendered.
//! - **[`DisplayOptions`]**: The default rendering style, with configurable precision and variable name.
//! - **[`Sign`]**: Tracks whether a term is positive or negative.
//!
//! # Rendering rules
//! Coefficients are ordered highest degree first. For each term index `k`:
//! - A polynomial made of a single constant renders that constant, sign included.
//! - The leading term carries its own sign with no padding (`-x⁶`, `2.5x`), and drops a unit coefficient.
//! - Every other term is written as a padded, signed fragment (` + 2.5x`, ` - x²`, ` + 1`).
//! - Zero coefficients produce no output at all.
//! - Unit coefficients are omitted, except on the constant term.
//! - Degree 1 renders a bare `x`, degree 0 renders no `x`.
//!
//! # Helpers
//! - [`format_term`]: Renders one term with the default options.
//! - [`format_coefficient`]: Renders a signed, padded coefficient fragment.
//! - [`superscript_digits`]: Converts the digits of a value to superscript or subscript glyphs.
use crate::value::Value;

pub mod unicode;

/// Default count of significant digits used for coefficients
pub const DEFAULT_PRECISION: usize = 3;

/// Default name of the polynomial's variable
pub const DEFAULT_VARIABLE: &str = "x";

/// Trait for formatting and displaying polynomial expressions.
///
/// Implementors control how individual terms are displayed,
/// while a default implementation assembles them into a full expression.
///
/// # Provided behavior
/// - [`PolynomialDisplay::format_term`] is required: renders the fragment for one term index.
/// - [`PolynomialDisplay::format_polynomial`] is provided: concatenates every fragment
///   into any [`std::fmt::Write`] buffer.
pub trait PolynomialDisplay<T: Value> {
    /// Formats a single polynomial term for display.
    ///
    /// `coefficients[term_index]` is the coefficient of `x^(len - 1 - term_index)`.
    /// The fragment includes any separator it needs, so fragments can be joined as-is.
    /// An empty string means the term is not shown.
    fn format_term(&self, term_index: usize, coefficients: &[T]) -> String;

    /// Writes the full polynomial expression into the provided buffer.
    ///
    /// # Errors
    /// Returns an error if writing to `buffer` fails.
    fn format_polynomial<B: std::fmt::Write>(
        &self,
        buffer: &mut B,
        coefficients: &[T],
    ) -> std::fmt::Result {
        for term_index in 0..coefficients.len() {
            buffer.write_str(&self.format_term(term_index, coefficients))?;
        }

        Ok(())
    }
}

/// Represents the sign of a polynomial term.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Positive sign (`+` when displayed).
    Positive,

    /// Negative sign (`-` when displayed).
    Negative,
}

impl Sign {
    /// Determines the sign from a numeric coefficient.
    ///
    /// Only values strictly below zero are negative; `-0.0` and NaN are positive.
    ///
    /// # Example
    /// ```
    /// # use polycalc::display::Sign;
    /// assert_eq!(Sign::from_coef(3.0), Sign::Positive);
    /// assert_eq!(Sign::from_coef(-2.0), Sign::Negative);
    /// ```
    pub fn from_coef<T: Value>(coef: T) -> Self {
        if coef < T::zero() {
            Self::Negative
        } else {
            Self::Positive
        }
    }

    /// Returns the character representation of the sign.
    #[must_use]
    pub fn char(&self) -> char {
        match self {
            Sign::Positive => '+',
            Sign::Negative => '-',
        }
    }
}

/// Rendering options for polynomials.
///
/// [`DisplayOptions::default`] gives the standard notation used by
/// [`crate::Polynomial::equation`]: 3 significant digits and the variable `x`.
///
/// # Example
/// ```
/// # use polycalc::{Polynomial, display::DisplayOptions};
/// let poly = Polynomial::new(vec![2.0, 0.0, 1.0 / 3.0]).unwrap();
/// let options = DisplayOptions::default().with_precision(5).with_variable("t");
/// assert_eq!(poly.equation_with(&options), "2t² + 0.33333");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Number of significant digits for coefficients
    pub precision: usize,

    /// Name of the variable
    pub variable: String,
}
impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            precision: DEFAULT_PRECISION,
            variable: DEFAULT_VARIABLE.to_string(),
        }
    }
}
impl DisplayOptions {
    /// Sets the number of significant digits for coefficients
    #[must_use]
    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the name of the variable
    #[must_use]
    pub fn with_variable(mut self, variable: impl Into<String>) -> Self {
        self.variable = variable.into();
        self
    }

    /// Formats a signed, padded coefficient fragment. See [`format_coefficient`].
    pub fn coefficient<T: Value>(&self, term_index: usize, coefficients: &[T]) -> String {
        let Some(&coef) = coefficients.get(term_index) else {
            return String::new();
        };

        if coef.is_zero() {
            return String::new();
        }

        let is_constant_term = term_index + 1 == coefficients.len();
        let numeral = if coef.abs() == T::one() && !is_constant_term {
            String::new()
        } else {
            unicode::significant(coef.abs(), self.precision)
        };

        format!(" {} {numeral}", Sign::from_coef(coef).char())
    }

    /// Formats the fragment for one term. See [`format_term`].
    pub fn term<T: Value>(&self, term_index: usize, coefficients: &[T]) -> String {
        let Some(&coef) = coefficients.get(term_index) else {
            return String::new();
        };

        let degree = coefficients.len() - 1;
        let is_leading_term = term_index == 0;
        let is_constant_term = term_index == degree;

        if is_leading_term && is_constant_term {
            if coef.is_zero() {
                return "0".to_string();
            }
            return coef.to_string();
        }

        if is_constant_term || coef.is_zero() {
            return self.coefficient(term_index, coefficients);
        }

        let coef = if is_leading_term {
            self.leading_coefficient(coef)
        } else {
            self.coefficient(term_index, coefficients)
        };
        let variable = format_variable(&self.variable, degree - term_index);

        format!("{coef}{variable}")
    }

    /// The leading term carries its own sign, with no padding
    fn leading_coefficient<T: Value>(&self, coef: T) -> String {
        if coef == T::one() {
            String::new()
        } else if coef == -T::one() {
            "-".to_string()
        } else {
            unicode::significant(coef, self.precision)
        }
    }
}
impl<T: Value> PolynomialDisplay<T> for DisplayOptions {
    fn format_term(&self, term_index: usize, coefficients: &[T]) -> String {
        self.term(term_index, coefficients)
    }
}

/// Formats one term of a polynomial using the default [`DisplayOptions`].
///
/// Handles four cases:
/// - the whole polynomial is a single constant: the constant, with its sign (`"-2.5"`)
/// - the leading term: its own sign, no unit coefficient (`"-x⁶"`, `"2.5x"`)
/// - the constant term: a padded coefficient (`" + 1"`)
/// - an interior term: a padded coefficient followed by the variable (`" - 2x²"`)
///
/// Zero coefficients (other than a lone constant) and out-of-range indices render as an empty string.
///
/// # Example
/// ```
/// # use polycalc::display::format_term;
/// let coefficients = [-1.0, 0.0, 0.0, 0.0, -2.0, 0.0, 1.0];
/// assert_eq!(format_term(0, &coefficients), "-x⁶");
/// assert_eq!(format_term(1, &coefficients), "");
/// assert_eq!(format_term(4, &coefficients), " - 2x²");
/// assert_eq!(format_term(6, &coefficients), " + 1");
/// ```
pub fn format_term<T: Value>(term_index: usize, coefficients: &[T]) -> String {
    DisplayOptions::default().term(term_index, coefficients)
}

/// Formats a signed, space-padded coefficient fragment using the default [`DisplayOptions`].
///
/// - Returns an empty string for a zero coefficient.
/// - Omits the numeral when the magnitude is exactly 1, unless it is the constant term.
/// - Magnitudes are written with [`DEFAULT_PRECISION`] significant digits.
///
/// # Example
/// ```
/// # use polycalc::display::format_coefficient;
/// assert_eq!(format_coefficient(0, &[1.0, 2.5, -1.0]), " + ");
/// assert_eq!(format_coefficient(1, &[1.0, 2.5, -1.0]), " + 2.5");
/// assert_eq!(format_coefficient(2, &[1.0, 2.5, -1.0]), " - 1");
/// assert_eq!(format_coefficient(1, &[1.0, 0.0, -1.0]), "");
/// ```
pub fn format_coefficient<T: Value>(term_index: usize, coefficients: &[T]) -> String {
    DisplayOptions::default().coefficient(term_index, coefficients)
}

/// Formats the variable part of a term: empty for degree 0, bare for degree 1,
/// and with a superscript exponent otherwise.
///
/// # Examples
/// ```
/// # use polycalc::display::format_variable;
/// assert_eq!(format_variable("x", 0), "");
/// assert_eq!(format_variable("x", 1), "x");
/// assert_eq!(format_variable("x", 12), "x¹²");
/// ```
#[must_use]
pub fn format_variable(base: &str, exponent: usize) -> String {
    match exponent {
        0 => String::new(),
        1 => base.to_string(),
        _ => format!("{base}{}", superscript_digits(exponent, false)),
    }
}

/// Transliterates each ASCII digit in the decimal form of `value` into its
/// Unicode superscript glyph, or subscript glyph if `use_subscript` is set.
///
/// Other characters pass through unchanged.
///
/// # Example
/// ```
/// # use polycalc::display::superscript_digits;
/// assert_eq!(superscript_digits(42, false), "⁴²");
/// assert_eq!(superscript_digits(3, true), "₃");
/// assert_eq!(superscript_digits("H2SO4", true), "H₂SO₄");
/// ```
pub fn superscript_digits(value: impl std::fmt::Display, use_subscript: bool) -> String {
    let value = value.to_string();
    if use_subscript {
        unicode::subscript(&value)
    } else {
        unicode::superscript(&value)
    }
}

/// Formats a legend label for the `index`th polynomial (1-based): `P₁(x) = …`
///
/// # Example
/// ```
/// # use polycalc::display::format_label;
/// assert_eq!(format_label(12, "x + 1"), "P₁₂(x) = x + 1");
/// ```
#[must_use]
pub fn format_label(index: usize, equation: &str) -> String {
    format!(
        "P{}({DEFAULT_VARIABLE}) = {equation}",
        superscript_digits(index, true)
    )
}
