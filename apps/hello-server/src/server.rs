//! Router assembly and the HTTP serve loop

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::http::{HeaderName, Request};
use axum::routing::get;
use axum::{Extension, Router};
use tokio_util::sync::CancellationToken;
use tower_http::request_id::{
    MakeRequestId, PropagateRequestIdLayer, RequestId, SetRequestIdLayer,
};
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::AppConfig;
use crate::signals;
use crate::web;

const X_REQUEST_ID: &str = "x-request-id";

/// Generates a UUID v4 request id when the client did not send one.
#[derive(Clone, Copy, Debug, Default)]
struct MakeReqId;

impl MakeRequestId for MakeReqId {
    fn make_request_id<B>(&mut self, _request: &Request<B>) -> Option<RequestId> {
        let id = uuid::Uuid::new_v4().to_string();
        id.parse().ok().map(RequestId::new)
    }
}

/// Build the full application router: demo routes, calculator API, middleware.
pub fn build_router(config: &AppConfig) -> Router {
    let router = Router::new()
        .route("/", get(web::root))
        .route("/health", get(web::health_check))
        .route("/healthz", get(|| async { "ok" }))
        .route("/weatherforecast", get(web::weather_forecast))
        .layer(Extension(config.forecast));

    let router = calculator::register_routes(router, Arc::new(calculator::Service::new()));

    apply_middleware_stack(router)
}

/// Registration order is innermost first; at runtime requests flow
/// `SetRequestId` -> `PropagateRequestId` -> Trace -> Router.
fn apply_middleware_stack(router: Router) -> Router {
    let x_request_id = HeaderName::from_static(X_REQUEST_ID);

    let router = router.layer(
        TraceLayer::new_for_http()
            .make_span_with(|req: &Request<axum::body::Body>| {
                let rid = req
                    .headers()
                    .get(X_REQUEST_ID)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or("n/a");

                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    request_id = %rid,
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: std::time::Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
    );

    router
        .layer(PropagateRequestIdLayer::new(x_request_id.clone()))
        .layer(SetRequestIdLayer::new(x_request_id, MakeReqId))
}

/// Bind, serve until a shutdown signal arrives, then drain gracefully.
///
/// # Errors
/// Returns an error if the address is invalid, binding fails, or serving fails.
pub async fn run_server(config: &AppConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let router = build_router(config);

    let cancel = CancellationToken::new();
    signals::cancel_on_shutdown(cancel.clone());

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind HTTP server on {addr}"))?;
    tracing::info!("HTTP server bound on {addr}");

    let shutdown = async move {
        cancel.cancelled().await;
        tracing::info!("HTTP server shutting down gracefully");
    };

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;
    tracing::info!("HTTP server stopped");
    Ok(())
}
