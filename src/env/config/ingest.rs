// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Log Ingestion Config
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

/// Settings for the log ingestion pipeline
#[derive(Deserialize, Clone, Debug)]
pub struct IngestConfig {
    /// How many rows are written before each commit
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// The daemon name which prefixes each log entry, as in `dnsmasq[1234]:`
    #[serde(default = "default_daemon")]
    pub daemon: String,

    /// The year to stamp on log entries. Log timestamps have no year, so the
    /// current year is used when this is not set.
    #[serde(default)]
    pub reference_year: Option<i32>
}

impl Default for IngestConfig {
    fn default() -> Self {
        IngestConfig {
            batch_size: default_batch_size(),
            daemon: default_daemon(),
            reference_year: None
        }
    }
}

impl IngestConfig {
    pub fn is_valid(&self) -> bool {
        self.batch_size > 0
            && !self.daemon.is_empty()
            && !self.daemon.contains(char::is_whitespace)
            && self
                .reference_year
                .map_or(true, |year| year >= 1 && year <= 9999)
    }
}

fn default_batch_size() -> usize {
    10_000
}

fn default_daemon() -> String {
    "dnsmasq".to_owned()
}
