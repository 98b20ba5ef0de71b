//! Operator overloads for [`Polynomial`]
//!
//! Addition, subtraction and scalar multiplication can be rejected (see [`Polynomial::try_add`]),
//! so those operators return a [`Result`]. Negation cannot fail.
//!
//! Both owned and borrowed polynomials are accepted, and scalars can appear on either side.
//! A scalar on the left is only implemented for `f32` and `f64`, so the polynomial's value
//! type must be known at that point; annotate bindings such as `let p: Polynomial = ...`.
//! ```
//! # use polycalc::Polynomial;
//! let p: Polynomial = Polynomial::new([1.0, 0.0, -1.0]).unwrap(); // x² - 1
//! let q: Polynomial = Polynomial::new([2.0, 3.0]).unwrap(); // 2x + 3
//!
//! assert_eq!((&p + &q).unwrap(), Polynomial::new([1.0, 2.0, 2.0]).unwrap());
//! assert_eq!((1.0 - &p).unwrap(), Polynomial::new([-1.0, 0.0, 2.0]).unwrap());
//! assert_eq!((2.0 * &q).unwrap(), Polynomial::new([4.0, 6.0]).unwrap());
//! assert_eq!(-q, Polynomial::new([-2.0, -3.0]).unwrap());
//! ```
use std::ops::{Add, Mul, Neg, Sub};

use crate::{error::Result, value::Value, Polynomial};

impl<T: Value> Add for Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(&rhs)
    }
}
impl<T: Value> Add for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn add(self, rhs: Self) -> Self::Output {
        self.try_add(rhs)
    }
}
impl<T: Value> Add<T> for Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn add(self, rhs: T) -> Self::Output {
        self.try_add(rhs)
    }
}
impl<T: Value> Add<T> for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn add(self, rhs: T) -> Self::Output {
        self.try_add(rhs)
    }
}

impl<T: Value> Sub for Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(&rhs)
    }
}
impl<T: Value> Sub for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn sub(self, rhs: Self) -> Self::Output {
        self.try_sub(rhs)
    }
}
impl<T: Value> Sub<T> for Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn sub(self, rhs: T) -> Self::Output {
        self.try_sub(rhs)
    }
}
impl<T: Value> Sub<T> for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn sub(self, rhs: T) -> Self::Output {
        self.try_sub(rhs)
    }
}

impl<T: Value> Mul<T> for Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}
impl<T: Value> Mul<T> for &Polynomial<T> {
    type Output = Result<Polynomial<T>>;
    fn mul(self, rhs: T) -> Self::Output {
        self.scale(rhs)
    }
}

impl<T: Value> Neg for Polynomial<T> {
    type Output = Polynomial<T>;
    fn neg(self) -> Self::Output {
        -&self
    }
}
impl<T: Value> Neg for &Polynomial<T> {
    type Output = Polynomial<T>;

    /// Negating a non-zero coefficient never yields zero, so the result stays canonical
    fn neg(self) -> Self::Output {
        let coefficients: Vec<T> = self.coefficients().iter().map(|&c| -c).collect();
        Polynomial::trimmed(coefficients)
    }
}

/// Scalar on the left-hand side: `scalar + p`, `scalar - p` and `scalar * p`
macro_rules! impl_scalar_lhs {
    ($($t:ty),+) => {$(
        impl Add<Polynomial<$t>> for $t {
            type Output = Result<Polynomial<$t>>;
            fn add(self, rhs: Polynomial<$t>) -> Self::Output {
                rhs.try_add(self)
            }
        }
        impl Add<&Polynomial<$t>> for $t {
            type Output = Result<Polynomial<$t>>;
            fn add(self, rhs: &Polynomial<$t>) -> Self::Output {
                rhs.try_add(self)
            }
        }

        impl Sub<Polynomial<$t>> for $t {
            type Output = Result<Polynomial<$t>>;
            fn sub(self, rhs: Polynomial<$t>) -> Self::Output {
                rhs.try_rsub(self)
            }
        }
        impl Sub<&Polynomial<$t>> for $t {
            type Output = Result<Polynomial<$t>>;
            fn sub(self, rhs: &Polynomial<$t>) -> Self::Output {
                rhs.try_rsub(self)
            }
        }

        impl Mul<Polynomial<$t>> for $t {
            type Output = Result<Polynomial<$t>>;
            fn mul(self, rhs: Polynomial<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }
        impl Mul<&Polynomial<$t>> for $t {
            type Output = Result<Polynomial<$t>>;
            fn mul(self, rhs: &Polynomial<$t>) -> Self::Output {
                rhs.scale(self)
            }
        }
    )+};
}
impl_scalar_lhs!(f32, f64);
