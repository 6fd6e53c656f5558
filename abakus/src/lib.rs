#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! A four function calculator that remembers what it calculated.
//!
//! ```
//! use abakus::{Calculator, Error};
//!
//! // create a calculator with its own history
//! let calculator = Calculator::new();
//!
//! // perform some calculations
//! assert_eq!(calculator.perform("add", 2.0, 3.0), Ok(5.0));
//! assert_eq!(calculator.perform("multiply", 4.0, 5.0), Ok(20.0));
//!
//! // failed calculations are not recorded
//! assert_eq!(calculator.perform("divide", 5.0, 0.0), Err(Error::DivisionByZero));
//!
//! // look at the history
//! let last = calculator.last().unwrap();
//! assert_eq!(last.operation().name(), "multiply");
//! assert_eq!(last.result(), 20.0);
//!
//! calculator.clear_history();
//! assert!(calculator.last().is_none());
//! ```

#[macro_use]
mod macros;

pub mod history;

mod calculator;
mod config;
mod error;
mod operation;
mod record;
mod validation;

pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use error::Error;
pub use operation::Operation;
pub use record::CalculationRecord;
pub use validation::{parse_operand, Strictness};
