// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Resolver Log Events
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    parser::FullTimestamp,
    util::{Error, ErrorKind}
};
use std::{fmt, str::FromStr};

/// The kinds of resolver log entries which are imported
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventKind {
    Query,
    Forward,
    Reply
}

/// How a reply was produced
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ReplyType {
    /// Answered by the upstream server
    Reply,
    /// Answered from the cache
    Cached
}

impl ReplyType {
    /// The name used in the log and in the database
    pub fn as_str(self) -> &'static str {
        match self {
            ReplyType::Reply => "reply",
            ReplyType::Cached => "cached"
        }
    }
}

impl FromStr for ReplyType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reply" => Ok(ReplyType::Reply),
            "cached" => Ok(ReplyType::Cached),
            _ => Err(Error::from(ErrorKind::Extraction))
        }
    }
}

impl fmt::Display for ReplyType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A client asked the resolver for a domain
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QueryEvent {
    pub timestamp: FullTimestamp,
    pub source: String,
    pub query_type: String,
    pub domain_name: String
}

/// The resolver sent a query upstream
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForwardEvent {
    pub timestamp: FullTimestamp,
    pub resolver: String,
    pub domain_name: String
}

/// The resolver answered a query
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReplyEvent {
    pub timestamp: FullTimestamp,
    /// The resolved address, or a reply code such as `NXDOMAIN`
    pub ip: String,
    pub reply_type: ReplyType,
    pub domain_name: String
}

/// A parsed resolver log entry
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    Query(QueryEvent),
    Forward(ForwardEvent),
    Reply(ReplyEvent)
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::Query(_) => EventKind::Query,
            Event::Forward(_) => EventKind::Forward,
            Event::Reply(_) => EventKind::Reply
        }
    }
}
