//! `calc` subcommand: run one calculator operation from the command line

use std::fmt;

use calculator_sdk::{CalculatorClientV1, CalculatorError};
use clap::Subcommand;

#[derive(Debug, Clone, Copy, Subcommand)]
pub enum CalcOp {
    /// a + b
    Add {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// a - b
    Subtract {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// a * b
    Multiply {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// a / b as floating point
    Divide {
        #[arg(allow_negative_numbers = true)]
        a: i32,
        #[arg(allow_negative_numbers = true)]
        b: i32,
    },
    /// base raised to exponent
    Power {
        #[arg(allow_negative_numbers = true)]
        base: f64,
        #[arg(allow_negative_numbers = true)]
        exponent: f64,
    },
    /// Square root of a non-negative value
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Area of a circle with the given radius
    CircleArea {
        #[arg(allow_negative_numbers = true)]
        radius: f64,
    },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalcOutput {
    Int(i32),
    Float(f64),
}

impl fmt::Display for CalcOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
        }
    }
}

/// Dispatch `op` through the client trait.
///
/// # Errors
/// Propagates the calculator's `DivisionByZero` and `InvalidArgument` errors.
pub fn execute(client: &dyn CalculatorClientV1, op: CalcOp) -> Result<CalcOutput, CalculatorError> {
    tracing::debug!(?op, "executing calculator command");
    let output = match op {
        CalcOp::Add { a, b } => CalcOutput::Int(client.add(a, b)),
        CalcOp::Subtract { a, b } => CalcOutput::Int(client.subtract(a, b)),
        CalcOp::Multiply { a, b } => CalcOutput::Int(client.multiply(a, b)),
        CalcOp::Divide { a, b } => CalcOutput::Float(client.divide(a, b)?),
        CalcOp::Power { base, exponent } => CalcOutput::Float(client.power(base, exponent)),
        CalcOp::Sqrt { value } => CalcOutput::Float(client.square_root(value)?),
        CalcOp::CircleArea { radius } => CalcOutput::Float(client.circle_area(radius)?),
    };
    Ok(output)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    #![allow(clippy::unwrap_used)]

    use std::sync::Arc;

    use super::*;

    fn client() -> Arc<dyn CalculatorClientV1> {
        calculator::local_client(Arc::new(calculator::Service::new()))
    }

    #[test]
    fn integer_ops_print_as_integers() {
        let out = execute(client().as_ref(), CalcOp::Add { a: 10, b: -5 }).unwrap();
        assert_eq!(out, CalcOutput::Int(5));
        assert_eq!(out.to_string(), "5");
    }

    #[test]
    fn divide_prints_floating_result() {
        let out = execute(client().as_ref(), CalcOp::Divide { a: 7, b: 2 }).unwrap();
        assert_eq!(out.to_string(), "3.5");
    }

    #[test]
    fn errors_propagate() {
        assert_eq!(
            execute(client().as_ref(), CalcOp::Divide { a: 1, b: 0 }),
            Err(CalculatorError::DivisionByZero)
        );
        assert!(matches!(
            execute(client().as_ref(), CalcOp::Sqrt { value: -16.0 }),
            Err(CalculatorError::InvalidArgument(_))
        ));
    }
}
