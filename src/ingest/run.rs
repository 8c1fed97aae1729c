// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Resolver Log Ingestion Run
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    databases::connect_to,
    env::{DatabaseFile, Env, IngestConfig},
    ingest::BatchWriter,
    parser::{current_year, EventKind, LineParser, LineSource},
    services::events::{EventRepository, EventRepositoryImpl},
    util::Error
};
use log::{debug, info};
use std::{fmt, io::BufRead, path::Path};

/// Settings for a single ingestion run
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IngestOptions {
    pub batch_size: usize,
    pub daemon: String,
    pub reference_year: i32
}

impl IngestOptions {
    /// Take the options from the config. The current year is used if the
    /// config does not set a reference year.
    pub fn from_config(config: &IngestConfig) -> IngestOptions {
        IngestOptions {
            batch_size: config.batch_size,
            daemon: config.daemon.clone(),
            reference_year: config.reference_year.unwrap_or_else(current_year)
        }
    }
}

/// Line counts of a run
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct IngestCounts {
    /// Every line read
    pub lines: usize,
    pub queries: usize,
    pub forwards: usize,
    pub replies: usize,
    /// Lines which are not resolver events
    pub unrecognized: usize,
    /// Lines which looked like events but could not be parsed
    pub skipped: usize
}

impl IngestCounts {
    /// The number of rows written
    pub fn imported(&self) -> usize {
        self.queries + self.forwards + self.replies
    }
}

impl fmt::Display for IngestCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Imported {} log entries.", self.imported())?;
        writeln!(
            f,
            "{} queries, {} forwards, and {} replies.",
            self.queries, self.forwards, self.replies
        )?;
        write!(
            f,
            "{} unrecognized and {} skipped of {} lines.",
            self.unrecognized, self.skipped, self.lines
        )
    }
}

/// One pass over a resolver log. Owns the parser, the writer (and through it
/// the repository) and the counts, so nothing is shared between runs.
///
/// The schema is ensured when the run is created. Lines are then fed in with
/// [`ingest`] or [`ingest_line`], and [`finish`] makes the final commit.
///
/// [`ingest`]: #method.ingest
/// [`ingest_line`]: #method.ingest_line
/// [`finish`]: #method.finish
pub struct IngestRun<R: EventRepository> {
    parser: LineParser,
    writer: BatchWriter<R>,
    reference_year: i32,
    progress_interval: usize,
    counts: IngestCounts
}

impl<R: EventRepository> IngestRun<R> {
    pub fn new(repo: R, options: &IngestOptions) -> Result<Self, Error> {
        let parser = LineParser::new(&options.daemon)?;
        repo.ensure_schema()?;

        Ok(IngestRun {
            parser,
            writer: BatchWriter::new(repo, options.batch_size),
            reference_year: options.reference_year,
            progress_interval: options.batch_size.max(1),
            counts: IngestCounts::default()
        })
    }

    /// Process one line. Only store failures are returned as errors; lines
    /// which can not be parsed are counted and skipped.
    pub fn ingest_line(&mut self, line: &str) -> Result<(), Error> {
        self.counts.lines += 1;

        match self.parser.parse(line, self.reference_year) {
            Ok(Some(event)) => {
                self.writer.write(&event)?;

                match event.kind() {
                    EventKind::Query => self.counts.queries += 1,
                    EventKind::Forward => self.counts.forwards += 1,
                    EventKind::Reply => self.counts.replies += 1
                }
            }
            Ok(None) => self.counts.unrecognized += 1,
            Err(e) => {
                if !e.is_line_level() {
                    return Err(e);
                }

                debug!("Skipping line {}: {}", self.counts.lines, e);
                self.counts.skipped += 1;
            }
        }

        if self.counts.lines % self.progress_interval == 0 {
            info!("Processed {} lines.", self.counts.lines);
        }

        Ok(())
    }

    /// Process every line of the source, in order
    pub fn ingest<B: BufRead>(&mut self, lines: LineSource<B>) -> Result<(), Error> {
        for line in lines {
            self.ingest_line(&line?)?;
        }

        Ok(())
    }

    /// The counts so far
    pub fn counts(&self) -> IngestCounts {
        self.counts
    }

    /// Commit the remaining rows and return the final counts
    pub fn finish(self) -> Result<IngestCounts, Error> {
        self.writer.finish()?;

        info!(
            "Finished importing {} of {} lines",
            self.counts.imported(),
            self.counts.lines
        );

        Ok(self.counts)
    }
}

/// Import the resolver log at `path` into the Pi-hole database
pub fn ingest_log_file(env: &Env, path: &Path) -> Result<IngestCounts, Error> {
    let options = IngestOptions::from_config(&env.config().ingest);
    let reader = env.read_file(path)?;
    let db = connect_to(env, DatabaseFile::Pihole)?;

    info!(
        "Importing {} with {} as the year",
        path.display(),
        options.reference_year
    );

    let mut run = IngestRun::new(EventRepositoryImpl::new(db), &options)?;
    run.ingest(LineSource::new(reader, &path.to_string_lossy()))?;
    run.finish()
}

#[cfg(test)]
mod test {
    use super::{IngestCounts, IngestOptions, IngestRun};
    use crate::{
        env::IngestConfig,
        parser::{normalize, ForwardEvent, LineSource},
        services::events::EventRepositoryMock,
        util::{Error, ErrorKind}
    };
    use mock_it::{verify, Mock};
    use std::io::Cursor;

    fn options(batch_size: usize) -> IngestOptions {
        IngestOptions {
            batch_size,
            daemon: "dnsmasq".to_owned(),
            reference_year: 2024
        }
    }

    const LOG: &str = "\
Jan 12 10:15:22 dnsmasq[1234]: query[A] example.com from 192.168.1.5
Jan 12 10:15:23 dnsmasq[1234]: forwarded example.com to 8.8.8.8
Jan 12 10:15:23 dnsmasq[1234]: reply example.com is 93.184.216.34
garbage not a log line
Jan 12 10:15:24 dnsmasq[1234]: cached example.com is 93.184.216.34
Jan 12 10:15:25 dnsmasq[1234]: read /etc/hosts - 2 addresses
something: query[A] but not where it belongs
Jan 99 10:15:26 dnsmasq[1234]: query[AAAA] example.com from 192.168.1.5
";

    /// Every line is counted under exactly one outcome
    #[test]
    fn counts_each_outcome() {
        let mut run = IngestRun::new(EventRepositoryMock::default(), &options(100)).unwrap();

        run.ingest(LineSource::new(Cursor::new(LOG), "test")).unwrap();

        assert_eq!(
            run.finish().unwrap(),
            IngestCounts {
                lines: 8,
                queries: 1,
                forwards: 1,
                replies: 2,
                unrecognized: 2,
                skipped: 2
            }
        );
    }

    /// The schema is ensured when the run starts and events reach the store
    #[test]
    fn writes_parsed_events() {
        let repo = EventRepositoryMock::default();
        let mut run = IngestRun::new(repo.clone(), &options(100)).unwrap();

        assert!(verify(repo.ensure_schema.was_called_with(())));

        run.ingest_line("Jan 12 10:15:23 dnsmasq[1]: forwarded example.com to 8.8.8.8")
            .unwrap();
        run.ingest_line("garbage").unwrap();

        assert_eq!(
            run.counts(),
            IngestCounts {
                lines: 2,
                forwards: 1,
                unrecognized: 1,
                ..IngestCounts::default()
            }
        );

        run.finish().unwrap();

        assert!(verify(repo.add_forward.was_called_with(ForwardEvent {
            timestamp: normalize("Jan 12 10:15:23", 2024).unwrap(),
            resolver: "8.8.8.8".to_owned(),
            domain_name: "example.com".to_owned()
        })));
        assert!(verify(repo.commit_batch.was_called_with(())));
    }

    /// A store failure aborts the run
    #[test]
    fn store_failure_is_fatal() {
        let repo = EventRepositoryMock {
            add_query: Mock::new(Err(Error::from(ErrorKind::Database))),
            ..EventRepositoryMock::default()
        };
        let mut run = IngestRun::new(repo, &options(100)).unwrap();

        let error = run
            .ingest(LineSource::new(Cursor::new(LOG), "test"))
            .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::Database);
    }

    /// A schema failure stops the run before any line is read
    #[test]
    fn schema_failure_is_fatal() {
        let repo = EventRepositoryMock {
            ensure_schema: Mock::new(Err(Error::from(ErrorKind::Database))),
            ..EventRepositoryMock::default()
        };

        assert!(IngestRun::new(repo.clone(), &options(100)).is_err());
        assert!(!verify(repo.begin_batch.was_called_with(())));
    }

    /// The configured year is used instead of the current one
    #[test]
    fn options_from_config() {
        let config = IngestConfig {
            reference_year: Some(2019),
            ..IngestConfig::default()
        };

        assert_eq!(
            IngestOptions::from_config(&config),
            IngestOptions {
                batch_size: 10_000,
                daemon: "dnsmasq".to_owned(),
                reference_year: 2019
            }
        );
    }

    #[test]
    fn summary_text() {
        let counts = IngestCounts {
            lines: 10,
            queries: 4,
            forwards: 2,
            replies: 1,
            unrecognized: 2,
            skipped: 1
        };

        assert_eq!(
            counts.to_string(),
            "Imported 7 log entries.\n\
             4 queries, 2 forwards, and 1 replies.\n\
             2 unrecognized and 1 skipped of 10 lines."
        );
    }
}
