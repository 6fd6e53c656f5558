#![allow(clippy::pub_enum_variant_names)]

use err_derive::Error;

/// An error of the `abakus` command line.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// An IO error.
    #[error(display = "{}", 0)]
    IO(#[error(from)] std::io::Error),

    /// The config file could not be parsed.
    #[error(display = "invalid config: {}", 0)]
    Config(#[error(from)] toml::de::Error),

    /// The history could not be encoded.
    #[error(display = "{}", 0)]
    Encoding(#[error(from)] serde_yaml::Error),

    /// A calculation failed.
    #[error(display = "{}", 0)]
    Calculation(#[error(from)] abakus::Error),

    /// A session line could not be understood.
    #[error(display = "unknown command: {:?}", 0)]
    UnknownCommand(String),
}
