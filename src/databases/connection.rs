// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// SQLite Connection Setup
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::util::{Error, ErrorKind};
use diesel::{connection::SimpleConnection, Connection, SqliteConnection};
use failure::ResultExt;
use log::debug;
use std::path::Path;

/// Open the database at `location`, creating it if it does not exist yet.
/// A busy timeout is added so a reader holding the database briefly does not
/// fail the import, and write-ahead logging is turned on if `wal` is set.
pub fn connect(location: &Path, wal: bool) -> Result<SqliteConnection, Error> {
    let url = location.to_string_lossy().into_owned();
    let conn = SqliteConnection::establish(&url).context(ErrorKind::DatabaseOpen(url.clone()))?;

    // Add a busy timeout of one second
    conn.batch_execute("PRAGMA busy_timeout = 1000")
        .context(ErrorKind::DatabaseOpen(url.clone()))?;

    if wal {
        conn.batch_execute("PRAGMA journal_mode = WAL")
            .context(ErrorKind::DatabaseOpen(url.clone()))?;
    }

    debug!("Opened database {}", url);

    Ok(conn)
}

#[cfg(test)]
mod test {
    use super::connect;
    use crate::util::ErrorKind;
    use std::path::Path;
    use tempfile::tempdir;

    /// A missing database file is created
    #[test]
    fn creates_database() {
        let dir = tempdir().unwrap();
        let location = dir.path().join("new.db");

        connect(&location, true).unwrap();

        assert!(location.is_file());
    }

    /// A database in a missing directory can not be created
    #[test]
    fn missing_directory() {
        match connect(Path::new("/nonexistent/dir/pihole.db"), false) {
            Err(error) => assert_eq!(
                error.kind(),
                ErrorKind::DatabaseOpen("/nonexistent/dir/pihole.db".to_owned())
            ),
            Ok(_) => panic!("Opened a database in a missing directory")
        }
    }
}
