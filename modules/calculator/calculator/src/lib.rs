//! Calculator Module
//!
//! Stateless scalar math exposed three ways: as plain functions
//! (`CalculatorOperations`), as the SDK trait (`local_client()`), and over REST.
//!
//! ## Architecture
//!
//! - `domain/operations.rs` - pure math and input validation
//! - `domain/service.rs` - traced facade used by handlers and the local client
//! - `api/rest` - DTOs, handlers, routes and error mapping
//!
//! External consumers should depend on `calculator-sdk` for the
//! `CalculatorClientV1` trait and obtain an implementation from `local_client()`.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod domain;
pub use domain::{CalculatorOperations, Service};

mod wiring;
pub use wiring::local_client;

#[doc(hidden)]
pub mod api;
pub use api::rest::routes::register_routes;
