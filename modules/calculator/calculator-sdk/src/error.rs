//! Error type for calculator operations

/// Message carried by the square root domain check.
pub const NEGATIVE_SQUARE_ROOT: &str = "Cannot calculate square root of negative number";

/// Message carried by the circle area domain check.
pub const NEGATIVE_RADIUS: &str = "Radius cannot be negative";

/// Error type for calculator operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    /// The divisor of a division was zero
    #[error("attempted to divide by zero")]
    DivisionByZero,

    /// A domain precondition was violated
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl CalculatorError {
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Stable machine-readable code for this error kind.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "calculator.division_by_zero",
            Self::InvalidArgument(_) => "calculator.invalid_argument",
        }
    }
}
