//! Error types for polynomial construction and arithmetic
//!
//! This module defines the failures that can occur when building a
//! polynomial or combining it with other operands, along with a convenient
//! `Result` alias.

/// Errors that can occur when constructing or operating on polynomials.
///
/// Every variant is local to a single call; nothing is retried and no
/// default value is substituted on failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A polynomial needs at least one coefficient.
    #[error("A polynomial requires at least 1 coefficient")]
    MissingCoefficients,

    /// The leading coefficient of a non-constant polynomial is zero.
    ///
    /// Coefficients are given highest degree first, so the first one must be non-zero
    /// unless it is the only one. Trim leading zeros before constructing.
    #[error("First coefficient of a non-constant polynomial must be non-zero")]
    InvalidLeadingCoefficient,

    /// An arithmetic operand is neither a polynomial nor a real-valued scalar.
    ///
    /// Contains a description of the rejected operand.
    #[error("Unsupported operand `{0}`: only polynomials and real (finite) scalars are supported")]
    UnsupportedOperand(String),

    /// A numeric value could not be cast to the target type.
    #[error("Failed to cast value to target type")]
    CastFailed,
}

/// Result type for polynomial operations
pub type Result<T> = std::result::Result<T, Error>;
