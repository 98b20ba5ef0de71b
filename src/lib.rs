//! # Polycalc
//! ## Real polynomials of one variable, done carefully
//!
//! This crate provides a small, immutable polynomial type with the everyday operations you
//! reach for when a curve is described by its coefficients:
//! - Evaluate it anywhere with Horner's scheme
//! - Shift, scale, add and subtract polynomials and scalars
//! - Differentiate, integrate, and find tangent lines
//! - Render it in conventional math notation, such as `-x⁶ - 2x² + 1`
//! - Sample it over a domain, to hand points to a plotting tool
//!
//! ```rust
//! use polycalc::Polynomial;
//!
//! // x³ - 1.5x² - 5x + 5.5
//! let p = Polynomial::new([1.0, -1.5, -5.0, 5.5]).unwrap();
//! assert_eq!(p.to_string(), "x³ - 1.5x² - 5x + 5.5");
//!
//! let dp = p.differentiate();
//! assert_eq!(dp.to_string(), "3x² - 3x - 5");
//!
//! let shifted = (&p + 1.0).unwrap();
//! assert_eq!(shifted.value(0.0), 6.5);
//! ```
//!
//! # Core Concepts
//! - A [`Polynomial`] stores its coefficients **highest degree first**: `[c₀, c₁, …, cₙ]` is `c₀xⁿ + … + cₙ`.
//!     - It is always canonical: at least one coefficient, and no leading zero unless it is the only coefficient.
//!     - It is immutable; every operation returns a new polynomial.
//! - The **degree** is the highest power of `x`, always `coefficients().len() - 1`.
//! - Operations that can be rejected return [`Result`], see [`Error`] for the failure cases.
//!
//! # Arithmetic
//! The `+`, `-` and `*` operators are implemented for owned and borrowed polynomials, and for
//! `f32`/`f64` scalars on either side. They return a [`Result`], since a scalar operand must be a
//! real number. See [`arithmetic`].
//!
//! # Logging
//! The library logs through the [`log`] facade: rejected constructions at `debug` level, and
//! cancelled leading terms at `trace` level. Install any logger to see them.
//!
//! # Testing utilities
//!
//! This crate includes macros to write polynomials in tests and compare floating-point results. See [`test`].
//!
#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)] // I don't care about this one
#![allow(clippy::similar_names)] //       Clippy does not get to decide what names are similar


pub mod arithmetic;
pub mod display;
pub mod error;
pub mod value;

mod polynomial;

mod proptests;

pub use error::{Error, Result};
pub use polynomial::{horner, Operand, Polynomial};

pub use num_traits;
