//! Calculator API trait
//!
//! Contract trait for the calculator.

use crate::error::CalculatorError;

/// Calculator API trait
///
/// Seven stateless scalar operations. Integer operations wrap on overflow;
/// validated operations fail fast with a [`CalculatorError`].
pub trait CalculatorClientV1: Send + Sync {
    /// Add two integers.
    fn add(&self, a: i32, b: i32) -> i32;

    /// Subtract `b` from `a`.
    fn subtract(&self, a: i32, b: i32) -> i32;

    /// Multiply two integers.
    fn multiply(&self, a: i32, b: i32) -> i32;

    /// Divide `a` by `b` as floating point.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `b` is zero.
    fn divide(&self, a: i32, b: i32) -> Result<f64, CalculatorError>;

    /// Raise `base` to `exponent`.
    fn power(&self, base: f64, exponent: f64) -> f64;

    /// Square root of `x`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `x` is negative.
    fn square_root(&self, x: f64) -> Result<f64, CalculatorError>;

    /// Area of a circle with the given radius.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `radius` is negative.
    fn circle_area(&self, radius: f64) -> Result<f64, CalculatorError>;
}
