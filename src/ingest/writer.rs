// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Batched Event Writer
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{parser::Event, services::events::EventRepository, util::Error};
use log::debug;

/// Writes events to the repository, committing every `batch_size` rows
/// instead of once per row.
///
/// [`finish`] must be called to commit the last batch. A writer which is
/// dropped without finishing loses the rows written since the last commit,
/// while earlier batches stay committed.
///
/// [`finish`]: #method.finish
pub struct BatchWriter<R: EventRepository> {
    repo: R,
    batch_size: usize,
    pending: usize,
    committed: usize,
    in_batch: bool
}

impl<R: EventRepository> BatchWriter<R> {
    /// Create a writer. A batch size of zero is treated as one.
    pub fn new(repo: R, batch_size: usize) -> Self {
        BatchWriter {
            repo,
            batch_size: batch_size.max(1),
            pending: 0,
            committed: 0,
            in_batch: false
        }
    }

    /// Add an event to the current batch, committing if the batch is full
    pub fn write(&mut self, event: &Event) -> Result<(), Error> {
        if !self.in_batch {
            self.repo.begin_batch()?;
            self.in_batch = true;
        }

        match event {
            Event::Query(query) => self.repo.add_query(query)?,
            Event::Forward(forward) => self.repo.add_forward(forward)?,
            Event::Reply(reply) => self.repo.add_reply(reply)?
        }

        self.pending += 1;

        if self.pending >= self.batch_size {
            self.commit()?;
        }

        Ok(())
    }

    /// Commit the rows written so far. Does nothing if no batch is open.
    pub fn commit(&mut self) -> Result<(), Error> {
        if !self.in_batch {
            return Ok(());
        }

        self.repo.commit_batch()?;
        self.in_batch = false;
        self.committed += self.pending;
        self.pending = 0;

        debug!("Committed batch, {} rows total", self.committed);

        Ok(())
    }

    /// Rows written but not committed yet
    pub fn pending(&self) -> usize {
        self.pending
    }

    /// Rows committed so far
    pub fn committed(&self) -> usize {
        self.committed
    }

    /// Commit the last batch and hand back the repository
    pub fn finish(mut self) -> Result<R, Error> {
        self.commit()?;

        Ok(self.repo)
    }
}

#[cfg(test)]
mod test {
    use super::BatchWriter;
    use crate::{
        parser::{normalize, Event, QueryEvent, ReplyEvent, ReplyType},
        services::events::EventRepositoryMock,
        util::{Error, ErrorKind}
    };
    use mock_it::{verify, Mock};

    fn query_event() -> QueryEvent {
        QueryEvent {
            timestamp: normalize("Jan 12 10:15:22", 2024).unwrap(),
            source: "192.168.1.5".to_owned(),
            query_type: "A".to_owned(),
            domain_name: "example.com".to_owned()
        }
    }

    fn reply_event() -> ReplyEvent {
        ReplyEvent {
            timestamp: normalize("Jan 12 10:15:24", 2024).unwrap(),
            ip: "93.184.216.34".to_owned(),
            reply_type: ReplyType::Reply,
            domain_name: "example.com".to_owned()
        }
    }

    /// A commit happens when the batch fills up, not before
    #[test]
    fn commits_per_batch() {
        let repo = EventRepositoryMock::default();
        let mut writer = BatchWriter::new(repo.clone(), 2);

        writer.write(&Event::Query(query_event())).unwrap();

        assert!(verify(repo.begin_batch.was_called_with(())));
        assert!(!verify(repo.commit_batch.was_called_with(())));
        assert_eq!(writer.pending(), 1);

        writer.write(&Event::Reply(reply_event())).unwrap();

        assert!(verify(repo.commit_batch.was_called_with(())));
        assert_eq!(writer.committed(), 2);
        assert_eq!(writer.pending(), 0);

        writer.write(&Event::Query(query_event())).unwrap();
        assert_eq!(writer.pending(), 1);

        writer.finish().unwrap();

        assert!(verify(repo.add_query.was_called_with(query_event())));
        assert!(verify(repo.add_reply.was_called_with(reply_event())));
    }

    /// The last, partial batch is committed by `finish`
    #[test]
    fn finish_commits_remainder() {
        let repo = EventRepositoryMock::default();
        let mut writer = BatchWriter::new(repo.clone(), 10);

        writer.write(&Event::Query(query_event())).unwrap();
        assert!(!verify(repo.commit_batch.was_called_with(())));

        writer.finish().unwrap();
        assert!(verify(repo.commit_batch.was_called_with(())));
    }

    /// Finishing without any rows does not open or commit a batch
    #[test]
    fn finish_empty() {
        let repo = EventRepositoryMock::default();

        BatchWriter::new(repo.clone(), 10).finish().unwrap();

        assert!(!verify(repo.begin_batch.was_called_with(())));
        assert!(!verify(repo.commit_batch.was_called_with(())));
    }

    /// An exactly full batch is committed once, not again by `finish`
    #[test]
    fn full_batch_at_end() {
        let repo = EventRepositoryMock::default();
        let mut writer = BatchWriter::new(repo.clone(), 1);

        writer.write(&Event::Query(query_event())).unwrap();
        assert_eq!(writer.committed(), 1);

        // Any further commit would fail
        repo.commit_batch
            .given(())
            .will_return(Err(Error::from(ErrorKind::Database)));

        writer.finish().unwrap();
    }

    /// Store failures are passed to the caller
    #[test]
    fn store_failure() {
        let repo = EventRepositoryMock {
            commit_batch: Mock::new(Err(Error::from(ErrorKind::Database))),
            ..EventRepositoryMock::default()
        };
        let mut writer = BatchWriter::new(repo, 1);

        let error = writer.write(&Event::Query(query_event())).unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Database);
    }
}
