use crate::Operation;
use serde::Serialize;
use std::fmt;

/// An immutable record of one performed calculation.
///
/// Records are only created by a `Calculator` after the calculation succeeded,
/// so `result` always matches `operation` applied to `a` and `b`.
#[derive(Debug, Copy, Clone, PartialEq, Serialize)]
pub struct CalculationRecord {
    operation: Operation,
    a: f64,
    b: f64,
    result: f64,
}

impl CalculationRecord {
    pub(crate) const fn new(operation: Operation, a: f64, b: f64, result: f64) -> Self {
        Self {
            operation,
            a,
            b,
            result,
        }
    }

    /// The operation that was performed.
    #[must_use]
    pub const fn operation(&self) -> Operation {
        self.operation
    }

    /// The first operand.
    #[must_use]
    pub const fn a(&self) -> f64 {
        self.a
    }

    /// The second operand.
    #[must_use]
    pub const fn b(&self) -> f64 {
        self.b
    }

    /// The result of the calculation.
    #[must_use]
    pub const fn result(&self) -> f64 {
        self.result
    }
}

impl fmt::Display for CalculationRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {} {} = {}", self.operation, self.a, self.b, self.result)
    }
}
