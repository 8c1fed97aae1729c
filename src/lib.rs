// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Root Library File
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

#[macro_use]
extern crate diesel;
#[macro_use]
extern crate serde_derive;

pub mod cli;
pub mod databases;
pub mod env;
pub mod ingest;
pub mod parser;
pub mod services;
pub mod util;

pub use crate::cli::handle_cli;
