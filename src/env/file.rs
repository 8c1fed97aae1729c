// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Pi-hole Databases
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

/// Pi-hole databases written by the ingesters
#[derive(Eq, PartialEq, Hash, Copy, Clone, Debug)]
pub enum DatabaseFile {
    /// Query log and summary history
    Pihole,
    /// The aggregated blocklist
    Gravity
}

impl DatabaseFile {
    /// Get the default location of the database
    pub fn default_location(self) -> &'static str {
        match self {
            DatabaseFile::Pihole => "/etc/pihole/pihole.db",
            DatabaseFile::Gravity => "/etc/pihole/gravity.db"
        }
    }
}
