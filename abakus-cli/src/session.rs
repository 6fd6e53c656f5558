//! An interactive session sharing one history.
//!
//! Every input line is one command:
//!
//! - `<operation> <a> <b>` performs a calculation and prints the result
//! - `last` prints the most recent calculation
//! - `history` prints all calculations as YAML
//! - `clear` drops the history
//!
//! Empty lines and lines starting with `#` are skipped.
//!
//! ```
//! use abakus::Calculator;
//! use abakus_cli::session;
//!
//! let calculator = Calculator::new();
//! let input = "add 2 3\nmultiply 4 5\nlast\n";
//! let mut output = Vec::new();
//!
//! session::run(&calculator, input.as_bytes(), &mut output).unwrap();
//! assert_eq!(String::from_utf8(output).unwrap(), "5\n20\nmultiply 4 5 = 20\n");
//! ```

use crate::Error;
use abakus::{parse_operand, Calculator};
use std::{
    io::{BufRead, Write},
    str::FromStr,
};

/// One line of a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Perform a calculation.
    Calculate {
        /// The operation name, resolved by the calculator.
        operation: String,
        /// The first operand.
        a: f64,
        /// The second operand.
        b: f64,
    },
    /// Print the most recent calculation.
    Last,
    /// Print all calculations.
    History,
    /// Drop the history.
    Clear,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words: Vec<_> = s.split_whitespace().collect();
        match words.as_slice() {
            ["last"] => Ok(Self::Last),
            ["history"] => Ok(Self::History),
            ["clear"] => Ok(Self::Clear),
            [operation, a, b] => Ok(Self::Calculate {
                operation: (*operation).to_string(),
                a: parse_operand(a)?,
                b: parse_operand(b)?,
            }),
            _ => Err(Error::UnknownCommand(s.to_string())),
        }
    }
}

impl Command {
    /// Execute this command on `calculator`, writing its output to `output`.
    pub fn execute(self, calculator: &Calculator, mut output: impl Write) -> Result<(), Error> {
        match self {
            Self::Calculate { operation, a, b } => {
                let result = calculator.perform(&operation, a, b)?;
                writeln!(output, "{}", result)?;
            }
            Self::Last => match calculator.last() {
                Some(record) => writeln!(output, "{}", record)?,
                None => writeln!(output, "history is empty")?,
            },
            Self::History => {
                let records = calculator.history().records();
                serde_yaml::to_writer(&mut output, &records)?;
                writeln!(output)?;
            }
            Self::Clear => {
                calculator.clear_history();
                log::info!("History cleared.");
            }
        }
        Ok(())
    }
}

/// Run all commands from `input` until it ends.
///
/// A failing command is logged and the session continues, as is a line that
/// is not valid UTF-8. Only IO errors end the session early.
pub fn run(calculator: &Calculator, input: impl BufRead, mut output: impl Write) -> Result<(), Error> {
    for line in input.split(b'\n') {
        let line = match String::from_utf8(line?) {
            Ok(line) => line,
            Err(err) => {
                log::error!("Skipping line: {}", err);
                continue;
            }
        };
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        match line
            .parse::<Command>()
            .and_then(|command| command.execute(calculator, &mut output))
        {
            Ok(()) => {}
            Err(Error::IO(err)) => return Err(Error::IO(err)),
            Err(err) => log::error!("{}: {}", line, err),
        }
    }
    output.flush()?;
    Ok(())
}
