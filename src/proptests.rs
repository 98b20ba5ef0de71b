//! Property-based tests for polynomial arithmetic and calculus.
