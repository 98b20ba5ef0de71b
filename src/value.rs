//! Numeric types and iteration utilities for polynomial curves.
//!
//! This module defines the [`Value`] trait, which abstracts the real scalar
//! types a polynomial can be built from, along with helpers for sampling a
//! domain (used when handing points to a plotting collaborator).
//!
//! # Traits
//!
//! - [`Value`]: Extends `Float` to provide:
//!   - `try_cast` for safe type conversion with error handling.
//!   - `is_real` to tell finite scalars apart from NaN or infinities.
//! - [`CoordExt`]: Accessors for sampled `(x, y)` points.
//!
//! # Iterators
//!
//! - [`SteppedValues`]: A floating-point range iterator with a specified step.
//! - [`Linspace`]: A fixed number of evenly spaced samples, endpoints included.
//!
//! # Example
//!
//! ```rust
//! use polycalc::value::{SteppedValues, Value};
//!
//! // Create a range of f64 values from 0.0 to 1.0 in steps of 0.1
//! for x in SteppedValues::new(0.0..=1.0, 0.1) {
//!     println!("{x}");
//! }
//!
//! assert!(!f64::NAN.is_real());
//! ```
use std::ops::{Range, RangeInclusive};

use crate::error::Error;

/// Numeric type for polynomial coefficients
pub trait Value:
    num_traits::Float
    + std::fmt::Debug
    + std::fmt::Display
    + std::fmt::LowerExp
    + Send
    + Sync
    + 'static
{
    /// Tries to cast a value to the target type
    ///
    /// # Errors
    /// Returns an error if the cast fails
    fn try_cast<U: num_traits::NumCast>(n: U) -> Result<Self, Error> {
        num_traits::cast(n).ok_or(Error::CastFailed)
    }

    /// Converts a `usize` to the target numeric type.
    ///
    /// Results in `infinity` if the value is out of range.
    #[must_use]
    fn from_positive_int(n: usize) -> Self {
        Self::try_cast(n).unwrap_or(Self::infinity())
    }

    /// Returns true if the value is a real number, i.e. neither NaN nor infinite
    fn is_real(&self) -> bool {
        self.is_finite()
    }
}

impl<T> Value for T where
    T: num_traits::Float
        + std::fmt::Debug
        + std::fmt::Display
        + std::fmt::LowerExp
        + Send
        + Sync
        + 'static
{
}

/// Iterator over a range of floating-point values with a specified step.
///
/// This iterator yields values starting from `start` up to and including `end`,
/// incrementing by `step` on each iteration.
pub struct SteppedValues<T: Value> {
    range: RangeInclusive<T>,
    step: T,
    index: T,
}
impl<T: Value> SteppedValues<T> {
    /// Creates a new iterator over stepped values in a range
    ///
    /// Will yield values starting from `range.start` up to and including `range.end`.
    /// A step that is not strictly positive yields nothing.
    pub fn new(range: RangeInclusive<T>, step: T) -> Self {
        Self {
            range,
            step,
            index: T::zero(),
        }
    }

    /// Creates a new iterator over stepped values in a range with a step of 1.0
    pub fn new_unit(range: RangeInclusive<T>) -> Self {
        Self::new(range, T::one())
    }
}
impl<T: Value> Iterator for SteppedValues<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.step <= T::zero() || !self.step.is_real() {
            return None;
        }

        let value = *self.range.start() + self.index * self.step;
        if value <= *self.range.end() {
            self.index = self.index + T::one();
            Some(value)
        } else {
            None
        }
    }
}

/// Iterator over `samples` evenly spaced values covering a range, endpoints included.
///
/// A single sample yields the range start; zero samples yield nothing.
pub struct Linspace<T: Value> {
    start: T,
    end: T,
    step: T,
    index: usize,
    samples: usize,
}
impl<T: Value> Linspace<T> {
    /// Creates a new evenly spaced sampler over `range`
    pub fn new(range: RangeInclusive<T>, samples: usize) -> Self {
        let (start, end) = range.into_inner();
        let step = match samples {
            0 | 1 => T::zero(),
            n => (end - start) / T::from_positive_int(n - 1),
        };

        Self {
            start,
            end,
            step,
            index: 0,
            samples,
        }
    }
}
impl<T: Value> Iterator for Linspace<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.index >= self.samples {
            return None;
        }

        // The last sample lands exactly on the end of the range
        let value = if self.index > 0 && self.index + 1 == self.samples {
            self.end
        } else {
            self.start + T::from_positive_int(self.index) * self.step
        };
        self.index += 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.samples - self.index;
        (remaining, Some(remaining))
    }
}
impl<T: Value> ExactSizeIterator for Linspace<T> {}

/// Extension trait for accessing the `x` and `y` coordinates of sampled points.
///
/// # Examples
///
/// ```
/// # use polycalc::value::CoordExt;
/// let data = vec![(1.5, -2.0), (2.0, 3.0), (0.0, 1.0)];
/// assert_eq!(data.y(), vec![-2.0, 3.0, 1.0]);
/// assert_eq!(data.y_range(), Some(-2.0..3.0));
/// ```
pub trait CoordExt<T: Value> {
    /// Returns an iterator over the x-coordinates of this value.
    fn x_iter(&self) -> impl Iterator<Item = T>;

    /// Returns an iterator over the y-coordinates of this value.
    fn y_iter(&self) -> impl Iterator<Item = T>;

    /// Returns the x-coordinates of this value.
    fn x(&self) -> Vec<T> {
        self.x_iter().collect()
    }

    /// Returns the y-coordinates of this value.
    fn y(&self) -> Vec<T> {
        self.y_iter().collect()
    }

    /// Returns the range of x-coordinates of this value.
    fn x_range(&self) -> Option<Range<T>> {
        min_max(self.x_iter())
    }

    /// Returns the range of y-coordinates of this value.
    ///
    /// Non-real values (NaN, infinities) are ignored.
    fn y_range(&self) -> Option<Range<T>> {
        min_max(self.y_iter().filter(Value::is_real))
    }
}
impl<T: Value> CoordExt<T> for Vec<(T, T)> {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}
impl<T: Value> CoordExt<T> for &[(T, T)] {
    fn x_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(x, _)| *x)
    }

    fn y_iter(&self) -> impl Iterator<Item = T> {
        self.iter().map(|(_, y)| *y)
    }
}

fn min_max<T: Value>(values: impl Iterator<Item = T>) -> Option<Range<T>> {
    values
        .fold(None, |acc: Option<(T, T)>, v| {
            Some(match acc {
                Some((min, max)) => (min.min(v), max.max(v)),
                None => (v, v),
            })
        })
        .map(|(start, end)| start..end)
}
