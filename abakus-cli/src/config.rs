use crate::Error;
use abakus::CalculatorConfig;
use serde::Deserialize;
use std::{fs, io, path::Path};

/// The contents of the config file.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// The `[calculator]` table.
    pub calculator: CalculatorConfig,
}

impl Config {
    /// Load the config from `path`. A missing file yields the default config.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(config_data) => Ok(toml::from_str(&config_data)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                log::debug!("No config at {}, using defaults.", path.display());
                Ok(Self::default())
            }
            Err(err) => Err(err.into()),
        }
    }
}
