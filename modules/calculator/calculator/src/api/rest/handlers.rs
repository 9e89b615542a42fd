use std::sync::Arc;

use axum::{Extension, Json};
use hello_errors::ApiResult;
use http::Uri;

use crate::domain::Service;

use super::dto::{
    BinaryIntRequest, CircleAreaRequest, FloatResultResponse, IntResultResponse, PowerRequest,
    SquareRootRequest,
};
use super::error::problem_at;
use super::extract::ProblemJson;

pub async fn add(
    Extension(svc): Extension<Arc<Service>>,
    ProblemJson(req): ProblemJson<BinaryIntRequest>,
) -> Json<IntResultResponse> {
    Json(IntResultResponse {
        result: svc.add(req.a, req.b),
    })
}

pub async fn subtract(
    Extension(svc): Extension<Arc<Service>>,
    ProblemJson(req): ProblemJson<BinaryIntRequest>,
) -> Json<IntResultResponse> {
    Json(IntResultResponse {
        result: svc.subtract(req.a, req.b),
    })
}

pub async fn multiply(
    Extension(svc): Extension<Arc<Service>>,
    ProblemJson(req): ProblemJson<BinaryIntRequest>,
) -> Json<IntResultResponse> {
    Json(IntResultResponse {
        result: svc.multiply(req.a, req.b),
    })
}

pub async fn divide(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    ProblemJson(req): ProblemJson<BinaryIntRequest>,
) -> ApiResult<Json<FloatResultResponse>> {
    let result = svc.divide(req.a, req.b).map_err(problem_at("b", uri))?;
    Ok(Json(FloatResultResponse { result }))
}

pub async fn power(
    Extension(svc): Extension<Arc<Service>>,
    ProblemJson(req): ProblemJson<PowerRequest>,
) -> Json<FloatResultResponse> {
    Json(FloatResultResponse {
        result: svc.power(req.base, req.exponent),
    })
}

pub async fn square_root(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    ProblemJson(req): ProblemJson<SquareRootRequest>,
) -> ApiResult<Json<FloatResultResponse>> {
    let result = svc.square_root(req.value).map_err(problem_at("value", uri))?;
    Ok(Json(FloatResultResponse { result }))
}

pub async fn circle_area(
    uri: Uri,
    Extension(svc): Extension<Arc<Service>>,
    ProblemJson(req): ProblemJson<CircleAreaRequest>,
) -> ApiResult<Json<FloatResultResponse>> {
    let result = svc
        .circle_area(req.radius)
        .map_err(problem_at("radius", uri))?;
    Ok(Json(FloatResultResponse { result }))
}
