// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Gravity Database Models
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

/// A row of the gravity table. Sequence IDs follow the order of the list file
/// and start over at 1 on every reload.
#[derive(Queryable, Clone, Debug, PartialEq, Eq)]
pub struct GravityDomain {
    pub sequence_id: i32,
    pub domain: String
}
