//! In-process implementation of `CalculatorClientV1`
//!
//! Not exported directly; obtain it through `calculator::local_client()`.

use std::sync::Arc;

use calculator_sdk::{CalculatorClientV1, CalculatorError};

use super::service::Service;

/// Local client that delegates to the module's Service.
pub(crate) struct CalculatorLocalClient {
    service: Arc<Service>,
}

impl CalculatorLocalClient {
    pub(crate) fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

impl CalculatorClientV1 for CalculatorLocalClient {
    fn add(&self, a: i32, b: i32) -> i32 {
        self.service.add(a, b)
    }

    fn subtract(&self, a: i32, b: i32) -> i32 {
        self.service.subtract(a, b)
    }

    fn multiply(&self, a: i32, b: i32) -> i32 {
        self.service.multiply(a, b)
    }

    fn divide(&self, a: i32, b: i32) -> Result<f64, CalculatorError> {
        self.service.divide(a, b)
    }

    fn power(&self, base: f64, exponent: f64) -> f64 {
        self.service.power(base, exponent)
    }

    fn square_root(&self, x: f64) -> Result<f64, CalculatorError> {
        self.service.square_root(x)
    }

    fn circle_area(&self, radius: f64) -> Result<f64, CalculatorError> {
        self.service.circle_area(radius)
    }
}
