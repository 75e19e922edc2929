//! Arithmetic core of the calculator
//!
//! Validates an incoming request payload into a [`CalculationRequest`] and
//! evaluates it. Nothing here knows about HTTP; the server layer maps
//! [`CalcError`] onto status codes.

use serde_json::Value;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Errors produced while validating or evaluating a calculation.
///
/// The `Display` strings are the exact messages sent back to the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CalcError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Invalid operation")]
    InvalidOperation,

    #[error("Cannot divide by zero!")]
    DivisionByZero,

    /// The operands were finite but the result overflowed f64
    #[error("Result is out of range")]
    OutOfRange,
}

/// The four operations exposed by the service
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply the operation to two operands.
    ///
    /// Division by zero (either sign) is an error, never an infinity or NaN.
    /// A non-finite result from finite operands is reported as [`CalcError::OutOfRange`].
    pub fn apply(self, a: f64, b: f64) -> Result<f64, CalcError> {
        let value = match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => {
                if b == 0.0 {
                    return Err(CalcError::DivisionByZero);
                }
                a / b
            }
        };

        if value.is_finite() {
            Ok(value)
        } else {
            Err(CalcError::OutOfRange)
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Operation::Add),
            "subtract" => Ok(Operation::Subtract),
            "multiply" => Ok(Operation::Multiply),
            "divide" => Ok(Operation::Divide),
            _ => Err(CalcError::InvalidOperation),
        }
    }
}

/// A validated calculation: two finite operands and a known operation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalculationRequest {
    pub num1: f64,
    pub num2: f64,
    pub operation: Operation,
}

impl CalculationRequest {
    pub fn new(num1: f64, num2: f64, operation: Operation) -> Self {
        Self { num1, num2, operation }
    }

    /// Validate a raw JSON payload.
    ///
    /// Fields are checked in order: `num1`, `num2`, presence and type of
    /// `operation`, then the operation name. Anything wrong before the name
    /// check is `InvalidInput`.
    pub fn from_json(payload: &Value) -> Result<Self, CalcError> {
        let fields = payload.as_object().ok_or(CalcError::InvalidInput)?;

        let num1 = fields
            .get("num1")
            .and_then(coerce_number)
            .ok_or(CalcError::InvalidInput)?;
        let num2 = fields
            .get("num2")
            .and_then(coerce_number)
            .ok_or(CalcError::InvalidInput)?;
        let operation = fields
            .get("operation")
            .and_then(Value::as_str)
            .ok_or(CalcError::InvalidInput)?
            .parse::<Operation>()?;

        Ok(Self::new(num1, num2, operation))
    }

    /// Parse and validate a request body
    pub fn from_slice(body: &[u8]) -> Result<Self, CalcError> {
        let payload: Value = serde_json::from_slice(body).map_err(|_| CalcError::InvalidInput)?;
        Self::from_json(&payload)
    }

    pub fn evaluate(&self) -> Result<f64, CalcError> {
        let result = self.operation.apply(self.num1, self.num2);
        debug!(
            num1 = self.num1,
            num2 = self.num2,
            operation = %self.operation,
            ok = result.is_ok(),
            "evaluated calculation"
        );
        result
    }
}

/// Accept JSON numbers and numeric strings; reject everything else,
/// including values that are not finite. Strings use Rust float syntax,
/// so digit separators like "1_000" are rejected.
fn coerce_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    number.is_finite().then_some(number)
}
