// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Config File Structure
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

mod databases;
mod general;
mod ingest;
mod root_config;

pub use self::{
    databases::Databases,
    general::General,
    ingest::IngestConfig,
    root_config::{Config, CONFIG_LOCATION}
};
