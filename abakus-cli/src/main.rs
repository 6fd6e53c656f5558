#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! A command line calculator that remembers what it calculated.

use abakus::{Calculator, Strictness};
use abakus_cli::{
    cli::{self, prelude::*},
    session, Config, Error,
};
use std::{io, process};
use structopt::StructOpt;

fn main() {
    pretty_env_logger::init();

    let opt = Opt::from_args();
    log::debug!("Command line arguments: {:#?}", opt);

    if let Err(err) = run(opt) {
        log::error!("{}", err);
        process::exit(1);
    }
}

fn run(opt: Opt) -> Result<(), Error> {
    let mut config = Config::load(&opt.config)?;
    if opt.strict {
        config.calculator.strictness = Strictness::Strict;
    }
    log::debug!("Using config: {:?}", config);

    let calculator = Calculator::with_config(&config.calculator);
    match opt.cmd {
        Cmd::Calc(cmd) => main_calc(&calculator, cmd),
        Cmd::Ops => main_ops(),
        Cmd::Session => main_session(&calculator),
    }
}

fn main_calc(calculator: &Calculator, cmd: cmd::Calc) -> Result<(), Error> {
    let stdout = io::stdout();
    cli::calc(calculator, cmd, stdout.lock())
}

fn main_ops() -> Result<(), Error> {
    let stdout = io::stdout();
    cli::ops(stdout.lock())
}

fn main_session(calculator: &Calculator) -> Result<(), Error> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    session::run(calculator, stdin.lock(), stdout.lock())?;
    log::info!(
        "Session ended with {} calculations in history.",
        calculator.history().len()
    );
    Ok(())
}
