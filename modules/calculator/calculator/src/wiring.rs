//! Wiring for the calculator client

use std::sync::Arc;

use calculator_sdk::CalculatorClientV1;

use crate::domain::Service;
use crate::domain::local_client::CalculatorLocalClient;

/// Build a `CalculatorClientV1` backed by the given Service.
///
/// # Example
/// ```ignore
/// let client = calculator::local_client(Arc::new(calculator::Service::new()));
/// assert_eq!(client.add(1, 2), 3);
/// ```
#[must_use]
pub fn local_client(service: Arc<Service>) -> Arc<dyn CalculatorClientV1> {
    tracing::debug!("CalculatorClientV1 local client wired");
    Arc::new(CalculatorLocalClient::new(service))
}
