//! REST DTOs for calculator module

use serde::{Deserialize, Serialize};

/// Two integer operands for add, subtract, multiply and divide.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct BinaryIntRequest {
    pub a: i32,
    pub b: i32,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PowerRequest {
    pub base: f64,
    pub exponent: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SquareRootRequest {
    pub value: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CircleAreaRequest {
    pub radius: f64,
}

/// Integer result of add, subtract or multiply.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct IntResultResponse {
    pub result: i32,
}

/// Floating point result. NaN and infinities serialize as `null`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FloatResultResponse {
    pub result: f64,
}
