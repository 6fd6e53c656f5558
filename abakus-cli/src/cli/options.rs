use std::path::PathBuf;
use structopt::StructOpt;

/// The command line arguments.
#[derive(StructOpt, Debug)]
pub struct Opt {
    /// The config file to load.
    #[structopt(
        short,
        long,
        default_value = "./config/abakus.toml",
        parse(from_os_str)
    )]
    pub config: PathBuf,
    /// Reject operands that are not finite numbers, regardless of the config.
    #[structopt(long)]
    pub strict: bool,
    /// What to do.
    #[structopt(subcommand)]
    pub cmd: Cmd,
}

/// A subcommand.
#[derive(StructOpt, Debug)]
pub enum Cmd {
    /// Perform a single calculation.
    Calc(cmd::Calc),
    /// List the available operations.
    Ops,
    /// Read commands from stdin, one per line.
    Session,
}

/// Arguments of the subcommands.
pub mod cmd {
    use abakus::parse_operand;
    use structopt::{clap::AppSettings, StructOpt};

    /// Calculate `a <operation> b`.
    #[derive(StructOpt, Debug)]
    #[structopt(setting = AppSettings::AllowNegativeNumbers)]
    pub struct Calc {
        /// One of `add`, `subtract`, `multiply` or `divide`.
        pub operation: String,
        /// The first operand.
        #[structopt(parse(try_from_str = parse_operand))]
        pub a: f64,
        /// The second operand.
        #[structopt(parse(try_from_str = parse_operand))]
        pub b: f64,
    }
}
