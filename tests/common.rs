// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Integration Test Helpers
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

#![allow(dead_code)]

use diesel::SqliteConnection;
use pihole_ingest::{
    databases::connect,
    env::{Config, DatabaseFile, Env}
};
use std::{fs, path::PathBuf};
use tempfile::{tempdir, TempDir};

/// An environment whose databases and input files live in a temporary
/// directory. Log entries are stamped with 2024.
pub struct TestEnv {
    pub dir: TempDir,
    pub env: Env
}

impl TestEnv {
    pub fn new(batch_size: usize) -> TestEnv {
        let dir = tempdir().unwrap();
        let mut config = Config::default();

        config.databases.pihole = dir.path().join("pihole.db");
        config.databases.gravity = dir.path().join("gravity.db");
        config.ingest.batch_size = batch_size;
        config.ingest.reference_year = Some(2024);

        TestEnv {
            dir,
            env: Env::new(config)
        }
    }

    /// Write an input file and return its path
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();

        path
    }

    pub fn location(&self, file: DatabaseFile) -> PathBuf {
        self.env.database_location(file).to_owned()
    }

    /// Open a separate connection to one of the databases
    pub fn connect(&self, file: DatabaseFile) -> SqliteConnection {
        connect(&self.location(file), true).unwrap()
    }
}

/// The dnsmasq log used by most tests: 2 queries, 1 forward, 2 replies and
/// 2 lines which are not events
pub const LOG: &str = "\
Jan 12 10:15:22 dnsmasq[1234]: query[A] example.com from 192.168.1.5
Jan 12 10:15:23 dnsmasq[1234]: forwarded example.com to 8.8.8.8
Jan 12 10:15:23 dnsmasq[1234]: reply example.com is 93.184.216.34
garbage not a log line
Jan 12 10:15:30 dnsmasq[1234]: query[AAAA] example.com from 192.168.1.5
Jan 12 10:15:30 dnsmasq[1234]: cached example.com is 2606:2800:220:1:248:1893:25c8:1946
Jan 12 10:15:31 dnsmasq[1234]: read /etc/hosts - 2 addresses
";
