//! Domain service for calculator
//!
//! Wraps [`CalculatorOperations`] with tracing so that REST handlers and the
//! local client share one instrumented entry point.

use calculator_sdk::CalculatorError;
use tracing::{debug, warn};

use super::operations::CalculatorOperations;

/// Domain service that performs calculator operations.
///
/// Stateless; shared behind an `Arc` by the router and the local client.
#[derive(Debug, Clone, Default)]
pub struct Service;

#[allow(clippy::unused_self)] // Stateless; method form keeps the Arc<Service> call sites uniform
impl Service {
    /// Create a new service.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    #[must_use]
    pub fn add(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing addition");
        CalculatorOperations::add(a, b)
    }

    #[must_use]
    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing subtraction");
        CalculatorOperations::subtract(a, b)
    }

    #[must_use]
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        debug!(a, b, "performing multiplication");
        CalculatorOperations::multiply(a, b)
    }

    /// # Errors
    /// Returns [`CalculatorError::DivisionByZero`] when `b == 0`.
    pub fn divide(&self, a: i32, b: i32) -> Result<f64, CalculatorError> {
        debug!(a, b, "performing division");
        CalculatorOperations::divide(a, b).inspect_err(|e| warn!(a, b, error = %e, "division rejected"))
    }

    #[must_use]
    pub fn power(&self, base: f64, exponent: f64) -> f64 {
        debug!(base, exponent, "raising to power");
        CalculatorOperations::power(base, exponent)
    }

    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `x < 0`.
    pub fn square_root(&self, x: f64) -> Result<f64, CalculatorError> {
        debug!(x, "computing square root");
        CalculatorOperations::square_root(x).inspect_err(|e| warn!(x, error = %e, "square root rejected"))
    }

    /// # Errors
    /// Returns [`CalculatorError::InvalidArgument`] when `radius < 0`.
    pub fn circle_area(&self, radius: f64) -> Result<f64, CalculatorError> {
        debug!(radius, "computing circle area");
        CalculatorOperations::circle_area(radius)
            .inspect_err(|e| warn!(radius, error = %e, "circle area rejected"))
    }
}
