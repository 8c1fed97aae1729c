// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Resolver Log Parsing
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

mod classify;
mod event;
mod extract;
mod source;
mod timestamp;

pub use self::{
    classify::classify,
    event::{Event, EventKind, ForwardEvent, QueryEvent, ReplyEvent, ReplyType},
    extract::{LineParser, RawFields},
    source::LineSource,
    timestamp::{current_year, normalize, FullTimestamp}
};
