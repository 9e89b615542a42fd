//! Error types shared by the hello-calc HTTP surface
//!
//! This crate provides pure data types for error handling:
//! - RFC 9457 Problem Details (`Problem`)
//! - Static error catalog entries (`ErrDef`)
//! - The `ApiResult` alias used by axum handlers
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod catalog;
pub mod problem;

pub use catalog::ErrDef;
pub use problem::{APPLICATION_PROBLEM_JSON, Problem, ValidationViolation};

/// Standard result type for HTTP handlers.
///
/// The `?` operator converts any error implementing `Into<Problem>`,
/// and `Problem` implements `IntoResponse` when the `axum` feature is on.
pub type ApiResult<T = ()> = Result<T, Problem>;

/// Attach instance and `trace_id` to a Problem.
pub fn finalize(mut p: Problem, instance: &str, trace_id: Option<String>) -> Problem {
    p = p.with_instance(instance);
    if let Some(tid) = trace_id {
        p = p.with_trace_id(tid);
    }
    p
}
