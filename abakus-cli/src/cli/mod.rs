//! Command line arguments and the one-shot subcommands.
//!
//! ```
//! use abakus::Calculator;
//! use abakus_cli::cli::{self, prelude::*};
//! use structopt::StructOpt;
//!
//! let opt = Opt::from_iter(&["abakus", "calc", "add", "2", "3"]);
//! if let Cmd::Calc(cmd) = opt.cmd {
//!     let mut output = Vec::new();
//!     cli::calc(&Calculator::new(), cmd, &mut output).unwrap();
//!     assert_eq!(output, b"5\n");
//! }
//! ```

mod options;

/// Everything needed to parse and dispatch the arguments.
pub mod prelude {
    pub use super::options::{cmd, Cmd, Opt};
}

use crate::Error;
use abakus::{Calculator, Operation};
use options::cmd;
use std::io::Write;

/// Perform the calculation of `cmd` and write its result to `output`.
pub fn calc(calculator: &Calculator, cmd: cmd::Calc, mut output: impl Write) -> Result<(), Error> {
    let cmd::Calc { operation, a, b } = cmd;
    let result = calculator.perform(&operation, a, b)?;
    writeln!(output, "{}", result)?;
    Ok(())
}

/// Write the registry names, one per line, to `output`.
pub fn ops(mut output: impl Write) -> Result<(), Error> {
    for operation in Operation::ALL {
        writeln!(output, "{}", operation)?;
    }
    Ok(())
}
