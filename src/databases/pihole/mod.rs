// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Pi-hole Database Support
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

mod schema;

pub use self::schema::*;

/// Event tables of the query log. Only created if they are missing, so the
/// ingester can run against an existing database any number of times.
pub const EVENT_TABLES_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS queries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    source TEXT NOT NULL,
    query_type TEXT NOT NULL,
    name TEXT NOT NULL,
    ts DATETIME NOT NULL
);
CREATE TABLE IF NOT EXISTS forwards (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    resolver TEXT NOT NULL,
    name TEXT NOT NULL,
    ts DATETIME NOT NULL
);
CREATE TABLE IF NOT EXISTS replies (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ip TEXT NOT NULL,
    reply_type TEXT NOT NULL,
    name TEXT NOT NULL,
    ts DATETIME NOT NULL
);
";

/// Summary history table, appended to on every snapshot
pub const SUMMARY_TABLE_SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS summaries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    ts DATETIME NOT NULL,
    domains_being_blocked INTEGER NOT NULL,
    dns_queries_today INTEGER NOT NULL,
    ads_blocked_today INTEGER NOT NULL,
    ads_percentage_today REAL NOT NULL
);
";
