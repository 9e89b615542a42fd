use axum::extract::rejection::JsonRejection;
use calculator_sdk::CalculatorError;
use hello_errors::{ErrDef, Problem, ValidationViolation};
use http::Uri;

pub const DIVISION_BY_ZERO: ErrDef = ErrDef {
    status: 400,
    title: "Division by zero",
    code: "calculator.division_by_zero",
    type_url: "https://errors.hello-calc.dev/calculator.division_by_zero",
};

pub const INVALID_ARGUMENT: ErrDef = ErrDef {
    status: 422,
    title: "Invalid argument",
    code: "calculator.invalid_argument",
    type_url: "https://errors.hello-calc.dev/calculator.invalid_argument",
};

/// Status is replaced by the one axum assigned to the rejection.
pub const MALFORMED_BODY: ErrDef = ErrDef {
    status: 400,
    title: "Malformed request body",
    code: "calculator.malformed_body",
    type_url: "https://errors.hello-calc.dev/calculator.malformed_body",
};

fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

/// Map a calculator error to an RFC 9457 Problem.
///
/// `field` names the request property the precondition applies to.
pub fn calculator_error_to_problem(e: &CalculatorError, field: &str, instance: &str) -> Problem {
    let trace_id = current_trace_id();

    match e {
        CalculatorError::DivisionByZero => {
            DIVISION_BY_ZERO.with_context(e.to_string(), instance, trace_id)
        }
        CalculatorError::InvalidArgument(message) => INVALID_ARGUMENT
            .with_context(e.to_string(), instance, trace_id)
            .with_errors(vec![ValidationViolation {
                field: field.to_owned(),
                message: message.clone(),
                code: Some(e.code().to_owned()),
            }]),
    }
}

/// Map a rejected JSON body to a Problem, keeping axum's status
/// (400 syntax, 415 content type, 422 data, 413 size).
pub fn json_rejection_to_problem(rejection: &JsonRejection, instance: &str) -> Problem {
    tracing::debug!(status = %rejection.status(), "request body rejected");
    let mut problem =
        MALFORMED_BODY.with_context(rejection.body_text(), instance, current_trace_id());
    problem.status = rejection.status();
    problem
}

/// Build a `map_err` adapter bound to the request URI.
#[must_use]
pub fn problem_at(field: &'static str, uri: Uri) -> impl FnOnce(CalculatorError) -> Problem {
    move |e| calculator_error_to_problem(&e, field, uri.path())
}
