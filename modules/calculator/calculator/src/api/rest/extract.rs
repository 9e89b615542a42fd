//! JSON body extractor whose rejections are Problem responses

use axum::Json;
use axum::extract::{FromRequest, Request};
use hello_errors::Problem;
use serde::de::DeserializeOwned;

use super::error::json_rejection_to_problem;

/// Drop-in replacement for `axum::Json` on request bodies.
///
/// Syntax errors, missing content type and out-of-range fields come back as
/// `application/problem+json` with the status axum assigned to the rejection.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProblemJson<T>(pub T);

impl<T, S> FromRequest<S> for ProblemJson<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let instance = req.uri().path().to_owned();
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(json_rejection_to_problem(&rejection, &instance)),
        }
    }
}
