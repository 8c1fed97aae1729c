// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Root Level Config
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    env::config::{databases::Databases, general::General, ingest::IngestConfig},
    util::{Error, ErrorKind}
};
use failure::{Fail, ResultExt};
use std::{
    fs::File,
    io::{self, prelude::*},
    path::Path
};

/// The default config location
pub const CONFIG_LOCATION: &str = "/etc/pihole/ingest.toml";

/// The ingester config options
#[derive(Deserialize, Default, Clone, Debug)]
pub struct Config {
    #[serde(default)]
    pub general: General,
    #[serde(default)]
    pub databases: Databases,
    #[serde(default)]
    pub ingest: IngestConfig
}

impl Config {
    /// Load the config from the default location. If it does not exist, return
    /// the default config.
    pub fn load() -> Result<Config, Error> {
        Self::parse(Path::new(CONFIG_LOCATION))
    }

    /// Parse the config from the file located at `config_location`. If it does
    /// not exist, return the default config.
    pub fn parse(config_location: &Path) -> Result<Config, Error> {
        let location_str = config_location.to_string_lossy().into_owned();
        let mut buffer = String::new();

        // Read the file to a string, but return the default config if the file doesn't
        // exist
        let mut file = match File::open(config_location) {
            Ok(f) => f,
            Err(e) => match e.kind() {
                io::ErrorKind::NotFound => return Ok(Self::default()),
                _ => return Err(Error::from(e.context(ErrorKind::FileRead(location_str))))
            }
        };

        file.read_to_string(&mut buffer)
            .map_err(|e| Error::from(e.context(ErrorKind::FileRead(location_str))))?;

        Self::from_toml(&buffer)
    }

    /// Parse the config from a TOML string and validate it
    pub fn from_toml(toml_str: &str) -> Result<Config, Error> {
        let config = toml::from_str::<Config>(toml_str).context(ErrorKind::ConfigParsingError)?;

        if config.is_valid() {
            Ok(config)
        } else {
            Err(Error::from(ErrorKind::ConfigParsingError))
        }
    }

    /// Check if the config settings are valid
    pub fn is_valid(&self) -> bool {
        self.general.is_valid() && self.databases.is_valid() && self.ingest.is_valid()
    }
}
