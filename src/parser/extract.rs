// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Log Field Extraction
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    parser::{classify, normalize, Event, EventKind, ForwardEvent, QueryEvent, ReplyEvent},
    util::{Error, ErrorKind}
};
use failure::ResultExt;
use regex::{Captures, Regex};

/// The fields captured from a classified log line, borrowed from the line.
/// The timestamp is still in its short, year-less form.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RawFields<'l> {
    Query {
        timestamp: &'l str,
        query_type: &'l str,
        domain: &'l str,
        source: &'l str
    },
    Forward {
        timestamp: &'l str,
        domain: &'l str,
        resolver: &'l str
    },
    Reply {
        timestamp: &'l str,
        reply_type: &'l str,
        domain: &'l str,
        ip: &'l str
    }
}

impl<'l> RawFields<'l> {
    /// Normalize the timestamp and build the event
    pub fn into_event(self, reference_year: i32) -> Result<Event, Error> {
        Ok(match self {
            RawFields::Query {
                timestamp,
                query_type,
                domain,
                source
            } => Event::Query(QueryEvent {
                timestamp: normalize(timestamp, reference_year)?,
                source: source.to_owned(),
                query_type: query_type.to_owned(),
                domain_name: domain.to_owned()
            }),
            RawFields::Forward {
                timestamp,
                domain,
                resolver
            } => Event::Forward(ForwardEvent {
                timestamp: normalize(timestamp, reference_year)?,
                resolver: resolver.to_owned(),
                domain_name: domain.to_owned()
            }),
            RawFields::Reply {
                timestamp,
                reply_type,
                domain,
                ip
            } => Event::Reply(ReplyEvent {
                timestamp: normalize(timestamp, reference_year)?,
                ip: ip.to_owned(),
                reply_type: reply_type.parse()?,
                domain_name: domain.to_owned()
            })
        })
    }
}

/// Extracts event fields from resolver log lines. Holds one compiled pattern
/// per event kind for a single daemon name:
///
/// ```text
/// <ts> <daemon>[<pid>]: query[<type>] <domain> from <source>
/// <ts> <daemon>[<pid>]: forwarded <domain> to <resolver>
/// <ts> <daemon>[<pid>]: reply <domain> is <ip>
/// <ts> <daemon>[<pid>]: cached <domain> is <ip>
/// ```
#[derive(Clone, Debug)]
pub struct LineParser {
    query: Regex,
    forward: Regex,
    reply: Regex
}

impl LineParser {
    /// Compile the patterns for log lines written by `daemon`
    pub fn new(daemon: &str) -> Result<LineParser, Error> {
        let daemon = regex::escape(daemon);
        let compile = |pattern: String| {
            Regex::new(&pattern)
                .context(ErrorKind::ConfigParsingError)
                .map_err(Error::from)
        };

        Ok(LineParser {
            query: compile(format!(
                r"^(.*) {}\[\d+\]: query\[(.*)\] (.*) from (.*)$",
                daemon
            ))?,
            forward: compile(format!(
                r"^(.*) {}\[\d+\]: forwarded (.*) to (.*)$",
                daemon
            ))?,
            reply: compile(format!(
                r"^(.*) {}\[\d+\]: (reply|cached) (.*) is (.*)$",
                daemon
            ))?
        })
    }

    /// Apply the pattern for `kind` to the line. It is an extraction error if
    /// the line does not match, or if a required field is empty.
    pub fn extract<'l>(&self, line: &'l str, kind: EventKind) -> Result<RawFields<'l>, Error> {
        let fields = match kind {
            EventKind::Query => {
                let captures = match_line(&self.query, line)?;
                RawFields::Query {
                    timestamp: group(&captures, 1)?,
                    query_type: group(&captures, 2)?,
                    domain: group(&captures, 3)?,
                    source: group(&captures, 4)?
                }
            }
            EventKind::Forward => {
                let captures = match_line(&self.forward, line)?;
                RawFields::Forward {
                    timestamp: group(&captures, 1)?,
                    domain: group(&captures, 2)?,
                    resolver: group(&captures, 3)?
                }
            }
            EventKind::Reply => {
                let captures = match_line(&self.reply, line)?;
                RawFields::Reply {
                    timestamp: group(&captures, 1)?,
                    reply_type: group(&captures, 2)?,
                    domain: group(&captures, 3)?,
                    ip: group(&captures, 4)?
                }
            }
        };

        Ok(fields)
    }

    /// Classify, extract and normalize a line. Lines which are not events
    /// return `Ok(None)`. Lines which look like events but can not be parsed
    /// return a line-level error (see [`Error::is_line_level`]).
    ///
    /// [`Error::is_line_level`]: ../util/struct.Error.html#method.is_line_level
    pub fn parse(&self, line: &str, reference_year: i32) -> Result<Option<Event>, Error> {
        match classify(line) {
            Some(kind) => self
                .extract(line, kind)?
                .into_event(reference_year)
                .map(Some),
            None => Ok(None)
        }
    }
}

fn match_line<'l>(pattern: &Regex, line: &'l str) -> Result<Captures<'l>, Error> {
    pattern
        .captures(line)
        .ok_or_else(|| Error::from(ErrorKind::Extraction))
}

/// Get a capture group, which must not be empty
fn group<'l>(captures: &Captures<'l>, index: usize) -> Result<&'l str, Error> {
    captures
        .get(index)
        .map(|m| m.as_str())
        .filter(|value| !value.is_empty())
        .ok_or_else(|| Error::from(ErrorKind::Extraction))
}
