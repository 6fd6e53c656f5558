//! The registry of arithmetic operations.
//!
//! ```
//! use abakus::{Error, Operation};
//!
//! let operation: Operation = "multiply".parse().unwrap();
//! assert_eq!(operation.apply(3.0, 5.0), Ok(15.0));
//!
//! assert_eq!(
//!     "modulo".parse::<Operation>(),
//!     Err(Error::InvalidOperation("modulo".to_string())),
//! );
//! ```

use crate::Error;
use serde::Serialize;

define_operations! {
    /// One of the operations a `Calculator` can perform.
    #[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize)]
    #[serde(rename_all = "lowercase")]
    pub enum Operation {
        /// `a + b`
        Add = "add" => |a, b| Ok(a + b),

        /// `a - b`
        Subtract = "subtract" => |a, b| Ok(a - b),

        /// `a * b`
        Multiply = "multiply" => |a, b| Ok(a * b),

        /// `a / b`, fails for a zero divisor.
        Divide = "divide" => |a, b| {
            if b == 0.0 {
                Err(Error::DivisionByZero)
            } else {
                Ok(a / b)
            }
        },
    }
}
