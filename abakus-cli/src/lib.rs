#![warn(missing_docs, clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::similar_names)]

//! The pieces of the `abakus` command line that are worth testing.

pub mod cli;
pub mod session;

mod config;
mod error;

pub use config::Config;
pub use error::Error;
