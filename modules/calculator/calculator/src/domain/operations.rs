//! Pure scalar operations
//!
//! Every function here is referentially transparent. Integer operations wrap
//! on overflow instead of panicking; validated operations return
//! [`CalculatorError`] rather than a NaN sentinel.

use std::f64::consts::PI;

use calculator_sdk::{CalculatorError, NEGATIVE_RADIUS, NEGATIVE_SQUARE_ROOT};

/// Namespace for the calculator's scalar functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorOperations;

impl CalculatorOperations {
    #[must_use]
    pub fn add(a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    #[must_use]
    pub fn subtract(a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }

    #[must_use]
    pub fn multiply(a: i32, b: i32) -> i32 {
        a.wrapping_mul(b)
    }

    /// Divide `a` by `b`, returning the quotient as floating point.
    ///
    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `b == 0`.
    pub fn divide(a: i32, b: i32) -> Result<f64, CalculatorError> {
        if b == 0 {
            return Err(CalculatorError::DivisionByZero);
        }
        Ok(f64::from(a) / f64::from(b))
    }

    /// `base` raised to `exponent`.
    ///
    /// Invalid domains (negative base with a fractional exponent) yield NaN,
    /// exactly as `f64::powf` does.
    #[must_use]
    pub fn power(base: f64, exponent: f64) -> f64 {
        base.powf(exponent)
    }

    /// Square root of a non-negative number.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `x < 0`.
    pub fn square_root(x: f64) -> Result<f64, CalculatorError> {
        if x < 0.0 {
            return Err(CalculatorError::invalid_argument(NEGATIVE_SQUARE_ROOT));
        }
        Ok(x.sqrt())
    }

    /// Area of a circle, `pi * r^2`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `radius < 0`.
    pub fn circle_area(radius: f64) -> Result<f64, CalculatorError> {
        if radius < 0.0 {
            return Err(CalculatorError::invalid_argument(NEGATIVE_RADIUS));
        }
        Ok(PI * radius * radius)
    }
}
