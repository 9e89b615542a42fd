//! Domain layer for calculator module

pub mod local_client;
pub mod operations;
pub mod service;

pub use operations::CalculatorOperations;
pub use service::Service;
