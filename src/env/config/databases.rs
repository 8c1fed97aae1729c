// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Database Locations Config
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::env::DatabaseFile;
use std::path::PathBuf;

/// Where the databases live and how they are opened
#[derive(Deserialize, Clone, Debug)]
pub struct Databases {
    /// The query log database (queries, forwards, replies, summaries)
    #[serde(default = "default_pihole")]
    pub pihole: PathBuf,

    /// The blocklist database
    #[serde(default = "default_gravity")]
    pub gravity: PathBuf,

    /// If the databases should be switched to write-ahead logging
    #[serde(default = "default_wal")]
    pub wal: bool
}

impl Default for Databases {
    fn default() -> Self {
        Databases {
            pihole: default_pihole(),
            gravity: default_gravity(),
            wal: default_wal()
        }
    }
}

impl Databases {
    pub fn is_valid(&self) -> bool {
        !self.pihole.as_os_str().is_empty() && !self.gravity.as_os_str().is_empty()
    }
}

fn default_pihole() -> PathBuf {
    PathBuf::from(DatabaseFile::Pihole.default_location())
}

fn default_gravity() -> PathBuf {
    PathBuf::from(DatabaseFile::Gravity.default_location())
}

fn default_wal() -> bool {
    true
}
