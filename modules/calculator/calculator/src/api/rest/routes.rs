//! Route registration for calculator module

use std::sync::Arc;

use axum::routing::post;
use axum::{Extension, Router};

use crate::domain::Service;

use super::handlers;

/// Register all calculator REST routes under `/calculator/v1`.
///
/// # Arguments
/// * `router` - Axum router to add routes to
/// * `service` - Domain Service shared by the handlers
#[must_use]
pub fn register_routes(router: Router, service: Arc<Service>) -> Router {
    let routes = Router::new()
        .route("/calculator/v1/add", post(handlers::add))
        .route("/calculator/v1/subtract", post(handlers::subtract))
        .route("/calculator/v1/multiply", post(handlers::multiply))
        .route("/calculator/v1/divide", post(handlers::divide))
        .route("/calculator/v1/power", post(handlers::power))
        .route("/calculator/v1/sqrt", post(handlers::square_root))
        .route("/calculator/v1/circle-area", post(handlers::circle_area))
        .layer(Extension(service));

    tracing::debug!("calculator REST routes registered");
    router.merge(routes)
}
