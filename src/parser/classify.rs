// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Log Line Classifier
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::parser::EventKind;

const QUERY_MARKER: &str = ": query[";
const FORWARD_MARKER: &str = ": forwarded ";
const REPLY_MARKER: &str = ": reply ";
const CACHED_MARKER: &str = ": cached ";

/// Decide which kind of event a log line holds by looking for the marker of
/// each kind. Queries are checked first, then forwards, then replies. Lines
/// without any marker are not events and return `None`.
///
/// This only does substring checks, so it is cheap enough to run on every
/// line. The stricter patterns in [`LineParser`] are only applied to lines
/// which were classified.
///
/// [`LineParser`]: struct.LineParser.html
pub fn classify(line: &str) -> Option<EventKind> {
    if line.contains(QUERY_MARKER) {
        Some(EventKind::Query)
    } else if line.contains(FORWARD_MARKER) {
        Some(EventKind::Forward)
    } else if line.contains(REPLY_MARKER) || line.contains(CACHED_MARKER) {
        Some(EventKind::Reply)
    } else {
        None
    }
}
