// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Summary Snapshot Recording
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    databases::connect_to,
    env::{DatabaseFile, Env},
    parser::FullTimestamp,
    services::summary::{SummaryRepository, SummaryRepositoryImpl},
    util::{Error, ErrorKind}
};
use failure::ResultExt;
use log::info;
use std::{io::Read, path::Path};

/// The statistics of a `summaryRaw` document at one point in time
#[derive(Clone, Debug, PartialEq)]
pub struct SummarySnapshot {
    pub timestamp: FullTimestamp,
    pub domains_being_blocked: i64,
    pub dns_queries_today: i64,
    pub ads_blocked_today: i64,
    pub ads_percentage_today: f64
}

/// The fields of `summaryRaw` which are recorded. Everything else in the
/// document is ignored.
#[derive(Deserialize)]
struct SummaryRaw {
    domains_being_blocked: i64,
    dns_queries_today: i64,
    ads_blocked_today: i64,
    ads_percentage_today: f64
}

impl SummarySnapshot {
    /// Decode a `summaryRaw` JSON document and stamp it with `timestamp`
    pub fn from_json<R: Read>(reader: R, timestamp: FullTimestamp) -> Result<Self, Error> {
        let raw: SummaryRaw =
            serde_json::from_reader(reader).context(ErrorKind::InvalidSummary)?;

        Ok(SummarySnapshot {
            timestamp,
            domains_being_blocked: raw.domains_being_blocked,
            dns_queries_today: raw.dns_queries_today,
            ads_blocked_today: raw.ads_blocked_today,
            ads_percentage_today: raw.ads_percentage_today
        })
    }
}

/// Append the snapshot to the summary history, creating the table if needed
pub fn record_summary<R: SummaryRepository>(
    repo: &R,
    snapshot: &SummarySnapshot
) -> Result<(), Error> {
    repo.ensure_schema()?;
    repo.add(snapshot)
}

/// Record the `summaryRaw` document at `path`, stamped with the current time
pub fn record_summary_file(env: &Env, path: &Path) -> Result<SummarySnapshot, Error> {
    let snapshot = SummarySnapshot::from_json(env.read_file(path)?, FullTimestamp::now())?;
    let repo = SummaryRepositoryImpl::new(connect_to(env, DatabaseFile::Pihole)?);

    record_summary(&repo, &snapshot)?;
    info!(
        "Recorded summary of {} queries at {}",
        snapshot.dns_queries_today, snapshot.timestamp
    );

    Ok(snapshot)
}
