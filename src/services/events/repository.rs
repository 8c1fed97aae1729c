// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Resolver Event Database Repository
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    databases::pihole::EVENT_TABLES_SCHEMA,
    parser::{ForwardEvent, QueryEvent, ReplyEvent},
    util::{Error, ErrorKind}
};
use diesel::{
    connection::{SimpleConnection, TransactionManager},
    insert_into,
    prelude::*
};
use failure::ResultExt;
use log::debug;
#[cfg(test)]
use mock_it::Mock;

/// Describes interactions with the resolver event data store. Rows are only
/// durable once the batch they were added in has been committed.
pub trait EventRepository {
    /// Create the event tables if they do not exist
    fn ensure_schema(&self) -> Result<(), Error>;

    /// Start a batch. Rows added afterwards are committed together.
    fn begin_batch(&self) -> Result<(), Error>;

    /// Add a query to the current batch
    fn add_query(&self, query: &QueryEvent) -> Result<(), Error>;

    /// Add a forward to the current batch
    fn add_forward(&self, forward: &ForwardEvent) -> Result<(), Error>;

    /// Add a reply to the current batch
    fn add_reply(&self, reply: &ReplyEvent) -> Result<(), Error>;

    /// Commit the current batch
    fn commit_batch(&self) -> Result<(), Error>;
}

/// The implementation of `EventRepository`
pub struct EventRepositoryImpl {
    db: SqliteConnection
}

impl EventRepositoryImpl {
    pub fn new(db: SqliteConnection) -> Self {
        EventRepositoryImpl { db }
    }

    /// Get the underlying connection
    pub fn connection(&self) -> &SqliteConnection {
        &self.db
    }
}

impl EventRepository for EventRepositoryImpl {
    fn ensure_schema(&self) -> Result<(), Error> {
        debug!("Ensuring the event tables exist");

        self.db
            .batch_execute(EVENT_TABLES_SCHEMA)
            .context(ErrorKind::Database)?;

        Ok(())
    }

    fn begin_batch(&self) -> Result<(), Error> {
        self.db
            .transaction_manager()
            .begin_transaction(&self.db)
            .context(ErrorKind::Database)?;

        Ok(())
    }

    fn add_query(&self, query: &QueryEvent) -> Result<(), Error> {
        use crate::databases::pihole::queries::dsl::*;

        insert_into(queries)
            .values((
                source.eq(&query.source),
                query_type.eq(&query.query_type),
                name.eq(&query.domain_name),
                ts.eq(query.timestamp.to_string())
            ))
            .execute(&self.db)
            .context(ErrorKind::Database)?;

        Ok(())
    }

    fn add_forward(&self, forward: &ForwardEvent) -> Result<(), Error> {
        use crate::databases::pihole::forwards::dsl::*;

        insert_into(forwards)
            .values((
                resolver.eq(&forward.resolver),
                name.eq(&forward.domain_name),
                ts.eq(forward.timestamp.to_string())
            ))
            .execute(&self.db)
            .context(ErrorKind::Database)?;

        Ok(())
    }

    fn add_reply(&self, reply: &ReplyEvent) -> Result<(), Error> {
        use crate::databases::pihole::replies::dsl::*;

        insert_into(replies)
            .values((
                ip.eq(&reply.ip),
                reply_type.eq(reply.reply_type.as_str()),
                name.eq(&reply.domain_name),
                ts.eq(reply.timestamp.to_string())
            ))
            .execute(&self.db)
            .context(ErrorKind::Database)?;

        Ok(())
    }

    fn commit_batch(&self) -> Result<(), Error> {
        self.db
            .transaction_manager()
            .commit_transaction(&self.db)
            .context(ErrorKind::Database)?;

        Ok(())
    }
}

#[cfg(test)]
#[derive(Clone)]
pub struct EventRepositoryMock {
    pub ensure_schema: Mock<(), Result<(), Error>>,
    pub begin_batch: Mock<(), Result<(), Error>>,
    pub add_query: Mock<QueryEvent, Result<(), Error>>,
    pub add_forward: Mock<ForwardEvent, Result<(), Error>>,
    pub add_reply: Mock<ReplyEvent, Result<(), Error>>,
    pub commit_batch: Mock<(), Result<(), Error>>
}

#[cfg(test)]
impl Default for EventRepositoryMock {
    fn default() -> Self {
        EventRepositoryMock {
            ensure_schema: Mock::new(Ok(())),
            begin_batch: Mock::new(Ok(())),
            add_query: Mock::new(Ok(())),
            add_forward: Mock::new(Ok(())),
            add_reply: Mock::new(Ok(())),
            commit_batch: Mock::new(Ok(()))
        }
    }
}

#[cfg(test)]
impl EventRepository for EventRepositoryMock {
    fn ensure_schema(&self) -> Result<(), Error> {
        self.ensure_schema.called(())
    }

    fn begin_batch(&self) -> Result<(), Error> {
        self.begin_batch.called(())
    }

    fn add_query(&self, query: &QueryEvent) -> Result<(), Error> {
        self.add_query.called(query.clone())
    }

    fn add_forward(&self, forward: &ForwardEvent) -> Result<(), Error> {
        self.add_forward.called(forward.clone())
    }

    fn add_reply(&self, reply: &ReplyEvent) -> Result<(), Error> {
        self.add_reply.called(reply.clone())
    }

    fn commit_batch(&self) -> Result<(), Error> {
        self.commit_batch.called(())
    }
}
