// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Databases
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    env::{DatabaseFile, Env},
    util::Error
};
use diesel::SqliteConnection;

mod connection;
pub mod gravity;
pub mod pihole;

pub use self::connection::connect;

/// Connect to one of the Pi-hole databases using the locations and settings
/// from the environment
pub fn connect_to(env: &Env, file: DatabaseFile) -> Result<SqliteConnection, Error> {
    connect(env.database_location(file), env.config().databases.wal)
}
