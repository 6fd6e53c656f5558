#![allow(clippy::pub_enum_variant_names)]

use err_derive::Error;

/// An error of the `abakus` crate.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The operation name is not part of the registry.
    #[error(display = "invalid operation: {}", 0)]
    InvalidOperation(String),

    /// The divisor of a division was zero.
    #[error(display = "cannot divide by zero")]
    DivisionByZero,

    /// An operand is not a usable number.
    #[error(display = "invalid argument: {}", 0)]
    InvalidArgument(String),
}

impl Error {
    pub(crate) fn invalid_argument(operand: &str, value: impl std::fmt::Display) -> Self {
        Self::InvalidArgument(format!("operand {} is not a finite number ({})", operand, value))
    }
}
