// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Gravity Database Support
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

mod model;
mod schema;

pub use self::{model::*, schema::*};

/// Recreates the gravity table from scratch. The drop makes sure no domain
/// from an earlier list survives a reload.
pub const GRAVITY_TABLE_RESET: &str = "
DROP TABLE IF EXISTS gravity;
CREATE TABLE gravity (
    idx INTEGER PRIMARY KEY ASC,
    domain TEXT NOT NULL
);
";
