// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Ingestion Pipelines
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

mod gravity;
mod run;
mod summary;
mod writer;

pub use self::{
    gravity::{ingest_gravity_file, load_gravity, read_domains},
    run::{ingest_log_file, IngestCounts, IngestOptions, IngestRun},
    summary::{record_summary, record_summary_file, SummarySnapshot},
    writer::BatchWriter
};
