//! Calculator SDK
//!
//! This crate provides everything needed to consume the calculator:
//! - API trait (`CalculatorClientV1`)
//! - Error types (`CalculatorError`)
//!
//! ## Usage
//!
//! ```ignore
//! use std::sync::Arc;
//!
//! use calculator_sdk::CalculatorClientV1;
//!
//! let client = calculator::local_client(Arc::new(calculator::Service::new()));
//! let quotient = client.divide(30, 3)?;
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

mod api;
mod error;

pub use api::CalculatorClientV1;
pub use error::{CalculatorError, NEGATIVE_RADIUS, NEGATIVE_SQUARE_ROOT};
