use std::ops::RangeInclusive;

use crate::{
    display::{self, DisplayOptions, PolynomialDisplay},
    error::{Error, Result},
    value::{Linspace, SteppedValues, Value},
};

/// Represents a real polynomial of a single variable.
///
/// Coefficients are stored **highest degree first**, so `[c₀, c₁, …, cₙ]` represents
/// ```text
/// P(x) = c₀xⁿ + c₁xⁿ⁻¹ + … + cₙ
/// ```
///
/// A polynomial is always in canonical form:
/// - it has at least one coefficient
/// - if its degree is above 0, its leading coefficient is non-zero
///
/// Polynomials are immutable; every operation returns a new instance.
///
/// # Type Parameters
/// - `T`: Numeric type for the coefficients, default is `f64`.
///
/// # Example
/// ```
/// # use polycalc::Polynomial;
/// let poly = Polynomial::new(vec![-1.0, 0.0, 0.0, 0.0, -2.0, 0.0, 1.0]).unwrap();
/// assert_eq!(poly.degree(), 6);
/// assert_eq!(poly.to_string(), "-x⁶ - 2x² + 1");
/// ```
#[derive(Clone, PartialEq)]
pub struct Polynomial<T: Value = f64> {
    degree: usize,
    coefficients: Vec<T>,
}
impl<T: Value> Polynomial<T> {
    /// Creates a new polynomial from coefficients ordered highest degree first.
    ///
    /// The coefficients are stored as given.
    ///
    /// # Errors
    /// - [`Error::MissingCoefficients`] if `coefficients` is empty.
    /// - [`Error::InvalidLeadingCoefficient`] if there is more than one coefficient and the first is zero.
    ///
    /// # Example
    /// ```
    /// # use polycalc::{Polynomial, error::Error};
    /// let poly = Polynomial::new([3.0, -3.0, -5.0]).unwrap(); // 3x² - 3x - 5
    /// assert_eq!(poly.degree(), 2);
    ///
    /// assert_eq!(Polynomial::new([0.0, 1.0, 2.0]), Err(Error::InvalidLeadingCoefficient));
    /// assert_eq!(Polynomial::<f64>::new([]), Err(Error::MissingCoefficients));
    /// ```
    pub fn new(coefficients: impl Into<Vec<T>>) -> Result<Self> {
        let coefficients = coefficients.into();

        match coefficients.first() {
            None => {
                log::debug!("rejected polynomial with no coefficients");
                Err(Error::MissingCoefficients)
            }

            Some(leading) if leading.is_zero() && coefficients.len() > 1 => {
                log::debug!(
                    "rejected polynomial with zero leading coefficient: {coefficients:?}"
                );
                Err(Error::InvalidLeadingCoefficient)
            }

            Some(_) => Ok(Self {
                degree: coefficients.len() - 1,
                coefficients,
            }),
        }
    }

    /// Creates a new polynomial from values of any numeric type, such as integers.
    ///
    /// Each value is cast to `T` before construction.
    ///
    /// # Errors
    /// - [`Error::CastFailed`] if a value cannot be represented as `T`.
    /// - Any error from [`Polynomial::new`].
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::<f64>::try_cast_from(&[1, -2, 1]).unwrap(); // x² - 2x + 1
    /// assert_eq!(poly.value(1.0), 0.0);
    /// ```
    pub fn try_cast_from<U: num_traits::NumCast + Copy>(values: &[U]) -> Result<Self> {
        let coefficients = values
            .iter()
            .map(|&v| T::try_cast(v))
            .collect::<Result<Vec<_>>>()?;
        Self::new(coefficients)
    }

    /// Creates a constant (degree 0) polynomial.
    #[must_use]
    pub fn constant(value: T) -> Self {
        Self {
            degree: 0,
            coefficients: vec![value],
        }
    }

    /// Creates the zero polynomial: the single coefficient `0`.
    #[must_use]
    pub fn zero() -> Self {
        Self::constant(T::zero())
    }

    /// Builds a polynomial from coefficients that may start with zeros, by dropping them.
    ///
    /// If every coefficient is zero, the result is the zero polynomial.
    pub(crate) fn trimmed(mut coefficients: Vec<T>) -> Self {
        match coefficients.iter().position(|c| !c.is_zero()) {
            Some(0) => {}
            Some(leading) => {
                log::trace!("dropping {leading} leading zero coefficients");
                coefficients.drain(..leading);
            }
            None => return Self::zero(),
        }

        Self {
            degree: coefficients.len() - 1,
            coefficients,
        }
    }

    /// Returns the coefficients, highest degree first.
    #[must_use]
    pub fn coefficients(&self) -> &[T] {
        &self.coefficients
    }

    /// Consumes the polynomial, returning its coefficients highest degree first.
    #[must_use]
    pub fn into_coefficients(self) -> Vec<T> {
        self.coefficients
    }

    /// Returns the degree of the polynomial.
    ///
    /// This is always `coefficients().len() - 1`.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.degree
    }

    /// Returns the coefficient of the highest-degree term.
    #[must_use]
    pub fn leading_coefficient(&self) -> T {
        self.coefficients[0]
    }

    /// Returns the coefficient of the degree 0 term, which is also the y-intercept `P(0)`.
    #[must_use]
    pub fn constant_term(&self) -> T {
        self.coefficients[self.degree]
    }

    /// Returns true for a degree 0 polynomial: `P(x) = c`
    #[must_use]
    pub fn is_constant(&self) -> bool {
        self.degree == 0
    }

    /// Returns true for a degree 1 polynomial: `P(x) = ax + b`
    #[must_use]
    pub fn is_linear(&self) -> bool {
        self.degree == 1
    }

    /// Returns true for the zero polynomial
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.is_constant() && self.coefficients[0].is_zero()
    }

    /// Evaluates the polynomial at a given x-value.
    ///
    /// Uses Horner's scheme (see [`horner`]), which takes exactly `degree` multiply-add steps.
    ///
    /// Constant polynomials, and the y-intercept `P(0)`, are returned directly without evaluation.
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::new([-1.0, 0.0, 0.0, 3.0, 4.0, -1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(poly.value(0.0), 1.0);
    /// assert_eq!(poly.value(1.0), 6.0);
    /// ```
    pub fn value(&self, x: T) -> T {
        if self.is_constant() || x.is_zero() {
            return self.constant_term();
        }

        horner(&self.coefficients, x)
    }

    /// Evaluates the polynomial at multiple x-values.
    ///
    /// # Returns
    /// A `Vec` of `(x, y)` pairs corresponding to each input value.
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::new([3.0, 2.0, 1.0]).unwrap(); // 3x² + 2x + 1
    /// let points = poly.solve(vec![0.0, 1.0, 2.0]);
    /// assert_eq!(points, vec![(0.0, 1.0), (1.0, 6.0), (2.0, 17.0)]);
    /// ```
    pub fn solve(&self, x: impl IntoIterator<Item = T>) -> Vec<(T, T)> {
        x.into_iter().map(|x| (x, self.value(x))).collect()
    }

    /// Evaluates the polynomial over a range of x-values with a fixed step.
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::new([3.0, 2.0, 1.0]).unwrap(); // 3x² + 2x + 1
    /// let points = poly.solve_range(0.0..=2.0, 1.0);
    /// assert_eq!(points, vec![(0.0, 1.0), (1.0, 6.0), (2.0, 17.0)]);
    /// ```
    pub fn solve_range(&self, range: RangeInclusive<T>, step: T) -> Vec<(T, T)> {
        self.solve(SteppedValues::new(range, step))
    }

    /// Evaluates the polynomial at `samples` evenly spaced x-values, endpoints included.
    ///
    /// This is the sampling used to draw a curve over a symmetric window, such as `-3.0..=3.0`.
    pub fn linspace(&self, range: RangeInclusive<T>, samples: usize) -> Vec<(T, T)> {
        self.solve(Linspace::new(range, samples))
    }

    /// Computes the derivative `dP/dx`.
    ///
    /// The derivative of a constant is the zero polynomial. Otherwise, coefficient `cᵢ`
    /// becomes `cᵢ·(n - i)` and the constant term is dropped.
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::new([1.0, -1.5, -5.0, 5.5]).unwrap();
    /// assert_eq!(poly.differentiate(), Polynomial::new([3.0, -3.0, -5.0]).unwrap());
    /// ```
    #[must_use]
    pub fn differentiate(&self) -> Self {
        if self.is_constant() {
            return Self::zero();
        }

        let n = self.degree;
        let coefficients = self.coefficients[..n]
            .iter()
            .enumerate()
            .map(|(i, &c)| c * T::from_positive_int(n - i))
            .collect();

        Self::trimmed(coefficients)
    }

    /// Computes the indefinite integral `∫P(x)dx + constant`.
    ///
    /// Coefficient `cᵢ` becomes `cᵢ / (n + 1 - i)`, and `constant` is appended as the new constant term.
    ///
    /// Integrating the zero polynomial gives the constant polynomial `constant`.
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::new([-1.0]).unwrap();
    /// assert_eq!(poly.integrate(1.0), Polynomial::new([-1.0, 1.0]).unwrap()); // -x + 1
    /// ```
    #[must_use]
    pub fn integrate(&self, constant: T) -> Self {
        let n = self.degree;
        let mut coefficients: Vec<T> = self
            .coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| c / T::from_positive_int(n + 1 - i))
            .collect();
        coefficients.push(constant);

        Self::trimmed(coefficients)
    }

    /// Computes the definite integral (area under the curve) between `a` and `b`.
    ///
    /// ```math
    /// ∫[a to b] P(x) dx = F(b) - F(a)
    /// ```
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::new([6.0, 7.0, 8.0]).unwrap(); // 6x² + 7x + 8
    /// assert_eq!(poly.definite_integral(0.0, 3.0), 109.5);
    /// ```
    pub fn definite_integral(&self, a: T, b: T) -> T {
        let integral = self.integrate(T::zero());
        integral.value(b) - integral.value(a)
    }

    /// Computes the tangent line of the polynomial at `x`.
    ///
    /// The result is `slope·x + intercept`, where `slope = P'(x)` and `intercept = P(x) - slope·x`.
    ///
    /// - The tangent of a constant polynomial is the polynomial itself.
    /// - A horizontal tangent (zero slope) is the constant polynomial `P(x)`.
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::new([1.0, 0.0, 0.0]).unwrap(); // x²
    /// assert_eq!(poly.tangent(1.0), Polynomial::new([2.0, -1.0]).unwrap()); // 2x - 1
    /// assert_eq!(poly.tangent(0.0), Polynomial::zero());
    /// ```
    #[must_use]
    pub fn tangent(&self, x: T) -> Self {
        if self.is_constant() {
            return self.clone();
        }

        let slope = self.differentiate().value(x);
        let intercept = self.value(x) - slope * x;

        Self::trimmed(vec![slope, intercept])
    }

    /// Adds a polynomial or a scalar to this polynomial.
    ///
    /// - Polynomials are added term by term. Leading terms that cancel are dropped,
    ///   and if every term cancels the result is the zero polynomial.
    /// - A scalar is added to the constant term only, shifting the curve vertically.
    ///
    /// The `+` operator is a shorthand for this method.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedOperand`] if a scalar operand is not a real number (NaN or infinite).
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let p = Polynomial::new([1.0, 2.0, 3.0]).unwrap();
    /// let q = Polynomial::new([-1.0, 0.0, 1.0]).unwrap();
    /// assert_eq!(p.try_add(&q).unwrap(), Polynomial::new([2.0, 4.0]).unwrap());
    /// assert_eq!(p.try_add(1.0).unwrap(), Polynomial::new([1.0, 2.0, 4.0]).unwrap());
    /// ```
    pub fn try_add<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Self> {
        match other.into() {
            Operand::Polynomial(other) => self.add_polynomial(other),
            Operand::Scalar(scalar) => self.add_scalar(scalar),
        }
    }

    /// Subtracts a polynomial or a scalar from this polynomial.
    ///
    /// Defined as `self + (other · -1)`. The `-` operator is a shorthand for this method.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedOperand`] if a scalar operand is not a real number (NaN or infinite).
    pub fn try_sub<'a>(&self, other: impl Into<Operand<'a, T>>) -> Result<Self> {
        match other.into() {
            Operand::Polynomial(other) => self.add_polynomial(&-other),
            Operand::Scalar(scalar) => self.add_scalar(-scalar),
        }
    }

    /// Subtracts this polynomial from a scalar: `scalar - self`.
    ///
    /// Defined as `scalar + (self · -1)`.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedOperand`] if `scalar` is not a real number (NaN or infinite).
    pub fn try_rsub(&self, scalar: T) -> Result<Self> {
        (-self).add_scalar(scalar)
    }

    /// Multiplies every coefficient by a scalar factor.
    ///
    /// Scaling by zero always gives the zero polynomial, whatever the original degree.
    ///
    /// The `*` operator is a shorthand for this method, and accepts the scalar on either side.
    ///
    /// # Errors
    /// Returns [`Error::UnsupportedOperand`] if `factor` is not a real number (NaN or infinite).
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let p = Polynomial::new([1.0, -2.0]).unwrap();
    /// assert_eq!(p.scale(3.0).unwrap(), Polynomial::new([3.0, -6.0]).unwrap());
    /// assert_eq!(p.scale(0.0).unwrap(), Polynomial::zero());
    /// assert!(p.scale(f64::NAN).is_err());
    /// ```
    pub fn scale(&self, factor: T) -> Result<Self> {
        ensure_real(factor)?;

        if factor.is_zero() {
            return Ok(Self::zero());
        }

        let coefficients = self.coefficients.iter().map(|&c| c * factor).collect();
        Ok(Self::trimmed(coefficients))
    }

    fn add_polynomial(&self, other: &Self) -> Result<Self> {
        let len = self.coefficients.len().max(other.coefficients.len());
        let sum = padded(&self.coefficients, len)
            .zip(padded(&other.coefficients, len))
            .map(|(a, b)| a + b)
            .collect();

        let sum = Self::trimmed(sum);
        Self::new(sum.coefficients)
    }

    fn add_scalar(&self, scalar: T) -> Result<Self> {
        ensure_real(scalar)?;

        let mut coefficients = self.coefficients.clone();
        coefficients[self.degree] = coefficients[self.degree] + scalar;
        Self::new(coefficients)
    }

    /// Returns a human-readable string of the polynomial, such as `-x⁶ - 2x² + 1`.
    ///
    /// Same as the [`std::fmt::Display`] output. See [`crate::display`] for the rendering rules.
    #[must_use]
    pub fn equation(&self) -> String {
        self.to_string()
    }

    /// Returns a human-readable string of the polynomial using a custom display style.
    ///
    /// # Example
    /// ```
    /// # use polycalc::{Polynomial, display::DisplayOptions};
    /// let poly = Polynomial::new([2.0, -1.0]).unwrap();
    /// let options = DisplayOptions::default().with_variable("t");
    /// assert_eq!(poly.equation_with(&options), "2t - 1");
    /// ```
    pub fn equation_with(&self, style: &impl PolynomialDisplay<T>) -> String {
        (0..self.coefficients.len())
            .map(|k| style.format_term(k, &self.coefficients))
            .collect()
    }

    /// Returns a legend label for this polynomial, as the `index`th curve of a plot (1-based).
    ///
    /// # Example
    /// ```
    /// # use polycalc::Polynomial;
    /// let poly = Polynomial::new([1.0, 0.0, -4.0]).unwrap();
    /// assert_eq!(poly.label(2), "P₂(x) = x² - 4");
    /// ```
    #[must_use]
    pub fn label(&self, index: usize) -> String {
        display::format_label(index, &self.equation())
    }
}

/// An operand that can be added to or subtracted from a polynomial.
///
/// Built implicitly from a `&Polynomial<T>` or a scalar `T`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a, T: Value = f64> {
    /// Another polynomial
    Polynomial(&'a Polynomial<T>),

    /// A scalar, applied to the constant term
    Scalar(T),
}
impl<'a, T: Value> From<&'a Polynomial<T>> for Operand<'a, T> {
    fn from(value: &'a Polynomial<T>) -> Self {
        Self::Polynomial(value)
    }
}
impl<T: Value> From<T> for Operand<'_, T> {
    fn from(value: T) -> Self {
        Self::Scalar(value)
    }
}

/// Evaluates a polynomial given by coefficients ordered highest degree first, using Horner's scheme.
///
/// Starting from the leading coefficient, each step computes `acc = acc·x + cᵢ`,
/// so a polynomial of degree `n` takes exactly `n` multiply-add steps and never computes a power of `x`.
///
/// Returns zero for an empty slice.
///
/// # Example
/// ```
/// # use polycalc::horner;
/// assert_eq!(horner(&[2.0, -3.0, 1.0], 3.0), 10.0); // 2·9 - 3·3 + 1
/// ```
pub fn horner<T: Value>(coefficients: &[T], x: T) -> T {
    let Some((&leading, rest)) = coefficients.split_first() else {
        return T::zero();
    };

    rest.iter().fold(leading, |acc, &c| acc * x + c)
}

/// Left-pads coefficients with zeros up to `len`
fn padded<T: Value>(coefficients: &[T], len: usize) -> impl Iterator<Item = T> + '_ {
    std::iter::repeat(T::zero())
        .take(len - coefficients.len())
        .chain(coefficients.iter().copied())
}

fn ensure_real<T: Value>(scalar: T) -> Result<()> {
    if scalar.is_real() {
        Ok(())
    } else {
        Err(Error::UnsupportedOperand(scalar.to_string()))
    }
}

impl<T: Value> AsRef<Polynomial<T>> for Polynomial<T> {
    fn as_ref(&self) -> &Polynomial<T> {
        self
    }
}

impl<T: Value> std::fmt::Display for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        DisplayOptions::default().format_polynomial(f, &self.coefficients)
    }
}

/// Shows the constructor form, such as `Polynomial(1.0, -2.0)`
impl<T: Value> std::fmt::Debug for Polynomial<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tuple = f.debug_tuple("Polynomial");
        for c in &self.coefficients {
            tuple.field(c);
        }
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_all_close, assert_close, assert_y, function};

    use super::*;

    #[test]
    fn test_new() {
        let poly = Polynomial::new([5.0]).unwrap();
        assert_eq!(poly.degree(), 0);
        assert!(poly.is_constant());
        assert_y!(&poly, -100.0, 5.0);
        assert_y!(&poly, 0.0, 5.0);
        assert_y!(&poly, 3.5, 5.0);

        let poly = Polynomial::new(vec![2.0, 1.0]).unwrap();
        assert!(poly.is_linear());
        assert_eq!(poly.coefficients(), &[2.0, 1.0]);
    }

    #[test]
    fn test_new_errors() {
        assert_eq!(
            Polynomial::new([0.0, 1.0, 2.0]),
            Err(Error::InvalidLeadingCoefficient)
        );
        assert_eq!(
            Polynomial::<f64>::new(Vec::new()),
            Err(Error::MissingCoefficients)
        );

        // A lone zero is the zero polynomial, not an error
        let zero = Polynomial::new([0.0]).unwrap();
        assert!(zero.is_zero());
        assert_eq!(zero, Polynomial::zero());
    }

    #[test]
    fn test_try_cast_from() {
        let poly = Polynomial::<f64>::try_cast_from(&[3_i32, 0, -1]).unwrap();
        assert_eq!(poly.coefficients(), &[3.0, 0.0, -1.0]);

        assert_eq!(
            Polynomial::<f64>::try_cast_from(&[0_u8, 1]),
            Err(Error::InvalidLeadingCoefficient)
        );
        assert_eq!(
            Polynomial::<f64>::try_cast_from::<i64>(&[]),
            Err(Error::MissingCoefficients)
        );
    }

    #[test]
    fn test_accessors() {
        let poly = Polynomial::new([4.0, 0.0, -7.0]).unwrap();
        assert_eq!(poly.leading_coefficient(), 4.0);
        assert_eq!(poly.constant_term(), -7.0);
        assert!(!poly.is_constant());
        assert!(!poly.is_linear());
        assert!(!poly.is_zero());
        assert_eq!(poly.into_coefficients(), vec![4.0, 0.0, -7.0]);
    }

    #[test]
    fn test_value() {
        function!(test(x) = 6.0 x^2 + 7.0 x + 8.0);
        assert_y!(&test, 0.0, 8.0);
        assert_y!(&test, 1.0, 21.0);
        assert_y!(&test, 2.0, 46.0);
        assert_y!(&test, -2.0, 18.0);
    }

    #[test]
    fn test_value_degree_7() {
        let poly = Polynomial::new([-1.0, 0.0, 0.0, 3.0, 4.0, -1.0, 0.0, 1.0]).unwrap();
        assert_eq!(poly.degree(), 7);
        assert_eq!(poly.value(0.0), 1.0);
        assert_eq!(poly.value(1.0), 6.0);

        // -128 + 3*16 + 4*8 - 4 + 1
        assert_eq!(poly.value(2.0), -51.0);
    }

    #[test]
    fn test_horner() {
        assert_eq!(horner::<f64>(&[], 2.0), 0.0);
        assert_eq!(horner(&[4.0], 2.0), 4.0);
        assert_eq!(horner(&[1.0, 0.0, 0.0, 0.0], 3.0), 27.0);
        assert_close!(horner(&[0.5, -0.25], 0.1), -0.2);
    }

    #[test]
    fn test_solve() {
        function!(test(x) = 6.0 x^2 + 7.0 x + 8.0);
        let points: Vec<_> = test.solve(vec![0.0, 1.0, 2.0]).into_iter().map(|(_, y)| y).collect();
        assert_all_close!(points, &[8.0, 21.0, 46.0]);
    }

    #[test]
    fn test_solve_range() {
        function!(test(x) = 6.0 x^2 + 7.0 x + 8.0);
        let points: Vec<_> = test.solve_range(0.0..=3.0, 1.0).into_iter().map(|(_, y)| y).collect();
        assert_all_close!(points, &[8.0, 21.0, 46.0, 83.0]);
    }

    #[test]
    fn test_linspace() {
        let poly = Polynomial::new([1.0, 0.0]).unwrap();
        let points = poly.linspace(-3.0..=3.0, 10_000);
        assert_eq!(points.len(), 10_000);
        assert_eq!(points[0], (-3.0, -3.0));
        assert_close!(points[9_999].1, 3.0);
    }

    #[test]
    fn test_differentiate() {
        let poly = Polynomial::new([1.0, -1.5, -5.0, 5.5]).unwrap();
        let derivative = poly.differentiate();
        assert_eq!(derivative.degree(), 2);
        assert_eq!(derivative, Polynomial::new([3.0, -3.0, -5.0]).unwrap());

        assert_eq!(Polynomial::constant(42.0).differentiate(), Polynomial::zero());
        assert_eq!(
            Polynomial::new([-2.0, 9.0]).unwrap().differentiate(),
            Polynomial::constant(-2.0)
        );
    }

    #[test]
    fn test_integrate() {
        let poly = Polynomial::new([-1.0]).unwrap();
        let integral = poly.integrate(1.0);
        assert_eq!(integral.degree(), 1);
        assert_eq!(integral, Polynomial::new([-1.0, 1.0]).unwrap());

        let poly = Polynomial::new([4.0, 3.0, 2.0, 1.0]).unwrap();
        assert_eq!(
            poly.integrate(5.0),
            Polynomial::new([1.0, 1.0, 1.0, 1.0, 5.0]).unwrap()
        );

        // 0·x + C is not canonical, so the constant remains
        assert_eq!(Polynomial::zero().integrate(7.0), Polynomial::constant(7.0));
    }

    #[test]
    fn test_integrate_then_differentiate() {
        let poly = Polynomial::new([-1.0, 0.0, 0.0, 3.0, 4.0, -1.0, 0.0, 1.0]).unwrap();
        let round_trip = poly.integrate(0.0).differentiate();
        assert_all_close!(round_trip.coefficients(), poly.coefficients());
    }

    #[test]
    fn test_definite_integral() {
        function!(test(x) = 6.0 x^2 + 7.0 x + 8.0);
        assert_close!(test.definite_integral(0.0, 3.0), 109.5);
        assert_close!(test.definite_integral(3.0, 0.0), -109.5);
    }

    #[test]
    fn test_tangent() {
        // x³ at x = 2: slope 12, passes through (2, 8)
        let poly = Polynomial::new([1.0, 0.0, 0.0, 0.0]).unwrap();
        let tangent = poly.tangent(2.0);
        assert!(tangent.is_linear());
        assert_eq!(tangent, Polynomial::new([12.0, -16.0]).unwrap());
        assert_y!(&tangent, 2.0, 8.0);

        // Horizontal tangent at the vertex of x² - 4
        let poly = Polynomial::new([1.0, 0.0, -4.0]).unwrap();
        assert_eq!(poly.tangent(0.0), Polynomial::constant(-4.0));

        // A constant is its own tangent
        let poly = Polynomial::constant(3.0);
        assert_eq!(poly.tangent(10.0), poly);

        // A line is its own tangent
        let poly = Polynomial::new([2.0, 1.0]).unwrap();
        assert_eq!(poly.tangent(-5.0), poly);
    }

    #[test]
    fn test_add_polynomials() {
        let p = Polynomial::new([1.0, 2.0, 3.0]).unwrap();
        let q = Polynomial::new([5.0, 1.0]).unwrap();
        assert_eq!(p.try_add(&q).unwrap(), Polynomial::new([1.0, 7.0, 4.0]).unwrap());
        assert_eq!(q.try_add(&p).unwrap(), Polynomial::new([1.0, 7.0, 4.0]).unwrap());
    }

    #[test]
    fn test_add_cancellation() {
        let p = Polynomial::new([1.0, 2.0, 3.0]).unwrap();
        let q = Polynomial::new([-1.0, -2.0, 5.0]).unwrap();
        assert_eq!(p.try_add(&q).unwrap(), Polynomial::constant(8.0));

        let negated = Polynomial::new([-1.0, -2.0, -3.0]).unwrap();
        let sum = p.try_add(&negated).unwrap();
        assert_eq!(sum.degree(), 0);
        assert!(sum.is_zero());
    }

    #[test]
    fn test_add_scalar() {
        let p = Polynomial::new([-1.0, 0.0, 0.0, 3.0, 4.0, -1.0, 0.0, 1.0]).unwrap();
        let shifted = p.try_add(-1.0).unwrap();
        assert_eq!(shifted.degree(), 7);
        assert_eq!(shifted.constant_term(), 0.0);
        assert_eq!(shifted.leading_coefficient(), -1.0);

        assert_eq!(p.try_add(0.0).unwrap(), p);
        assert_eq!(
            Polynomial::constant(2.0).try_add(-2.0).unwrap(),
            Polynomial::zero()
        );
    }

    #[test]
    fn test_add_unsupported() {
        let p = Polynomial::new([1.0, 2.0]).unwrap();
        assert_eq!(
            p.try_add(f64::NAN),
            Err(Error::UnsupportedOperand("NaN".to_string()))
        );
        assert!(matches!(
            p.try_add(f64::INFINITY),
            Err(Error::UnsupportedOperand(_))
        ));
    }

    #[test]
    fn test_sub() {
        let p = Polynomial::new([1.0, 2.0, 3.0]).unwrap();
        let q = Polynomial::new([1.0, 0.0, 1.0]).unwrap();
        assert_eq!(p.try_sub(&q).unwrap(), Polynomial::new([2.0, 2.0]).unwrap());
        assert_eq!(p.try_sub(&p).unwrap(), Polynomial::zero());
        assert_eq!(p.try_sub(3.0).unwrap(), Polynomial::new([1.0, 2.0, 0.0]).unwrap());
        assert_eq!(
            p.try_rsub(3.0).unwrap(),
            Polynomial::new([-1.0, -2.0, 0.0]).unwrap()
        );
        assert!(p.try_rsub(f64::NAN).is_err());
    }

    #[test]
    fn test_scale() {
        let p = Polynomial::new([1.0, -2.0, 0.5]).unwrap();
        assert_eq!(p.scale(2.0).unwrap(), Polynomial::new([2.0, -4.0, 1.0]).unwrap());
        assert_eq!(p.scale(-1.0).unwrap(), Polynomial::new([-1.0, 2.0, -0.5]).unwrap());

        let zero = p.scale(0.0).unwrap();
        assert_eq!(zero.degree(), 0);
        assert!(zero.is_zero());

        assert!(matches!(
            p.scale(f64::NEG_INFINITY),
            Err(Error::UnsupportedOperand(_))
        ));
    }

    #[test]
    fn test_scale_underflow() {
        let p = Polynomial::new([1e-200, 1.0]).unwrap();
        let scaled = p.scale(1e-200).unwrap();
        assert_eq!(scaled, Polynomial::constant(1e-200));
    }

    #[test]
    fn test_equation() {
        let poly = Polynomial::new([-1.0, 0.0, 0.0, 0.0, -2.0, 0.0, 1.0]).unwrap();
        assert_eq!(poly.equation(), "-x⁶ - 2x² + 1");
        assert_eq!(format!("{poly}"), "-x⁶ - 2x² + 1");

        assert_eq!(Polynomial::constant(-3.0).to_string(), "-3");
        assert_eq!(Polynomial::constant(123_456.0).to_string(), "123456");
        assert_eq!(Polynomial::new([1.0, -1.0]).unwrap().to_string(), "x - 1");
    }

    #[test]
    fn test_debug() {
        let poly = Polynomial::new([1.0, -2.5]).unwrap();
        assert_eq!(format!("{poly:?}"), "Polynomial(1.0, -2.5)");
    }

    #[test]
    fn test_label() {
        let poly = Polynomial::new([-1.0, 1.0]).unwrap();
        assert_eq!(poly.label(1), "P₁(x) = -x + 1");
    }

    #[test]
    fn test_f32() {
        let poly = Polynomial::<f32>::new([2.0, 0.0, -1.0]).unwrap();
        assert_eq!(poly.value(2.0), 7.0);
        assert_eq!(poly.differentiate(), Polynomial::new([4.0f32, 0.0]).unwrap());
        assert_eq!(poly.to_string(), "2x² - 1");
    }
}
