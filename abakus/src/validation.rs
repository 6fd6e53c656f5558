//! Operand checks applied before an operation is dispatched.

use crate::Error;
use serde::Deserialize;

/// How strictly a `Calculator` checks its operands.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strictness {
    /// Every `f64` is accepted, including `NaN` and infinities.
    Lenient,
    /// Only finite numbers are accepted.
    ///
    /// This is stricter than merely requiring a number: `NaN` and infinities
    /// are numbers too, but are rejected. Text that is no number at all is
    /// rejected by `parse_operand` regardless of strictness.
    Strict,
}

impl Default for Strictness {
    fn default() -> Self {
        Self::Lenient
    }
}

impl Strictness {
    /// Check both operands, naming the first one that is rejected.
    pub fn check(self, a: f64, b: f64) -> Result<(), Error> {
        if self == Self::Lenient {
            return Ok(());
        }
        if !a.is_finite() {
            return Err(Error::invalid_argument("a", a));
        }
        if !b.is_finite() {
            return Err(Error::invalid_argument("b", b));
        }
        Ok(())
    }
}

/// Parse an operand given as text.
///
/// ```
/// use abakus::{parse_operand, Error};
///
/// assert_eq!(parse_operand(" 2.5 "), Ok(2.5));
/// assert!(matches!(parse_operand("two"), Err(Error::InvalidArgument(_))));
/// ```
pub fn parse_operand(text: &str) -> Result<f64, Error> {
    text.trim()
        .parse()
        .map_err(|_| Error::InvalidArgument(format!("not a number: {:?}", text)))
}
