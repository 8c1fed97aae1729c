// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// General Config
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use log::LevelFilter;
use serde::{Deserialize, Deserializer};
use std::str::FromStr;

/// General config settings
#[derive(Deserialize, Clone, Debug)]
pub struct General {
    /// The default log level. `RUST_LOG` takes precedence over this.
    #[serde(
        default = "default_log_level",
        deserialize_with = "deserialize_log_level"
    )]
    pub log_level: LevelFilter
}

impl Default for General {
    fn default() -> Self {
        General {
            log_level: default_log_level()
        }
    }
}

impl General {
    pub fn is_valid(&self) -> bool {
        true
    }
}

/// Deserialize a log level. This lets the config use the same names as
/// `RUST_LOG` ("off", "error", "warn", "info", "debug", "trace").
fn deserialize_log_level<'de, D>(deserializer: D) -> Result<LevelFilter, D::Error>
where
    D: Deserializer<'de>
{
    let level_str = String::deserialize(deserializer)?;
    LevelFilter::from_str(&level_str).map_err(serde::de::Error::custom)
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Warn
}
