// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Summary History Database Repository
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    databases::pihole::SUMMARY_TABLE_SCHEMA,
    ingest::SummarySnapshot,
    util::{Error, ErrorKind}
};
use diesel::{connection::SimpleConnection, insert_into, prelude::*};
use failure::ResultExt;
#[cfg(test)]
use mock_it::Mock;

/// Describes interactions with the summary history data store. Snapshots are
/// only ever appended.
pub trait SummaryRepository {
    /// Create the summary table if it does not exist
    fn ensure_schema(&self) -> Result<(), Error>;

    /// Append a snapshot
    fn add(&self, snapshot: &SummarySnapshot) -> Result<(), Error>;
}

/// The implementation of `SummaryRepository`
pub struct SummaryRepositoryImpl {
    db: SqliteConnection
}

impl SummaryRepositoryImpl {
    pub fn new(db: SqliteConnection) -> Self {
        SummaryRepositoryImpl { db }
    }
}

impl SummaryRepository for SummaryRepositoryImpl {
    fn ensure_schema(&self) -> Result<(), Error> {
        self.db
            .batch_execute(SUMMARY_TABLE_SCHEMA)
            .context(ErrorKind::Database)?;

        Ok(())
    }

    fn add(&self, snapshot: &SummarySnapshot) -> Result<(), Error> {
        use crate::databases::pihole::summaries::dsl::*;

        insert_into(summaries)
            .values((
                ts.eq(snapshot.timestamp.to_string()),
                domains_being_blocked.eq(snapshot.domains_being_blocked),
                dns_queries_today.eq(snapshot.dns_queries_today),
                ads_blocked_today.eq(snapshot.ads_blocked_today),
                ads_percentage_today.eq(snapshot.ads_percentage_today)
            ))
            .execute(&self.db)
            .context(ErrorKind::Database)?;

        Ok(())
    }
}

#[cfg(test)]
#[derive(Clone)]
pub struct SummaryRepositoryMock {
    pub ensure_schema: Mock<(), Result<(), Error>>,
    pub add: Mock<SummarySnapshot, Result<(), Error>>
}

#[cfg(test)]
impl Default for SummaryRepositoryMock {
    fn default() -> Self {
        SummaryRepositoryMock {
            ensure_schema: Mock::new(Ok(())),
            add: Mock::new(Ok(()))
        }
    }
}

#[cfg(test)]
impl SummaryRepository for SummaryRepositoryMock {
    fn ensure_schema(&self) -> Result<(), Error> {
        self.ensure_schema.called(())
    }

    fn add(&self, snapshot: &SummarySnapshot) -> Result<(), Error> {
        self.add.called(snapshot.clone())
    }
}
