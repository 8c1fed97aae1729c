// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Log Timestamp Normalization
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::util::{Error, ErrorKind};
use chrono::{Datelike, Local, NaiveDateTime};
use failure::ResultExt;
use std::fmt;

/// The format timestamps are stored in
const FULL_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A log timestamp with the year filled in
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct FullTimestamp(pub NaiveDateTime);

impl FullTimestamp {
    /// The current time on the local clock
    pub fn now() -> FullTimestamp {
        FullTimestamp(Local::now().naive_local())
    }
}

impl fmt::Display for FullTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0.format(FULL_FORMAT))
    }
}

/// The current year on the local clock
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Turn a syslog style timestamp (`Jan 12 10:15:22`) into a full timestamp in
/// `reference_year`.
///
/// The log does not record the year, so every entry gets `reference_year`.
/// A log which crosses a new year is stamped entirely with one year.
///
/// Only malformed timestamps are errors: the wrong number of fields, an
/// unknown month, non-numeric time fields or a date which does not exist.
pub fn normalize(short: &str, reference_year: i32) -> Result<FullTimestamp, Error> {
    let fields: Vec<&str> = short.split_whitespace().collect();

    // Month, day and time. Syslog pads single digit days with a space, which
    // splitting on whitespace takes care of.
    if fields.len() != 3 {
        return Err(Error::from(ErrorKind::TimestampParse(short.to_owned())));
    }

    let text = format!(
        "{} {} {} {}",
        reference_year, fields[0], fields[1], fields[2]
    );

    let datetime = NaiveDateTime::parse_from_str(&text, "%Y %b %d %H:%M:%S")
        .context(ErrorKind::TimestampParse(short.to_owned()))?;

    Ok(FullTimestamp(datetime))
}
