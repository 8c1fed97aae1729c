// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Environment Structure
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    env::{Config, DatabaseFile},
    util::{Error, ErrorKind}
};
use failure::ResultExt;
use std::{
    collections::HashMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf}
};

/// Environment of the ingesters. Stores the config and any locations which
/// were overridden on the command line.
#[derive(Clone, Debug)]
pub struct Env {
    config: Config,
    overrides: HashMap<DatabaseFile, PathBuf>
}

impl Env {
    pub fn new(config: Config) -> Env {
        Env {
            config,
            overrides: HashMap::new()
        }
    }

    /// Use `location` for the database instead of the configured one
    pub fn with_database(mut self, file: DatabaseFile, location: PathBuf) -> Env {
        self.overrides.insert(file, location);
        self
    }

    /// Get the config that was loaded
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the location of a database
    pub fn database_location(&self, file: DatabaseFile) -> &Path {
        if let Some(location) = self.overrides.get(&file) {
            return location;
        }

        match file {
            DatabaseFile::Pihole => &self.config.databases.pihole,
            DatabaseFile::Gravity => &self.config.databases.gravity
        }
    }

    /// Open an input file for buffered reading
    pub fn read_file(&self, path: &Path) -> Result<BufReader<File>, Error> {
        let file = File::open(path).context(ErrorKind::FileRead(path.to_string_lossy().into_owned()))?;

        Ok(BufReader::new(file))
    }
}

#[cfg(test)]
mod test {
    use super::Env;
    use crate::{
        env::{Config, DatabaseFile},
        util::ErrorKind
    };
    use std::path::{Path, PathBuf};

    /// Without overrides the configured locations are used
    #[test]
    fn configured_locations() {
        let env = Env::new(Config::default());

        assert_eq!(
            env.database_location(DatabaseFile::Pihole),
            Path::new("/etc/pihole/pihole.db")
        );
        assert_eq!(
            env.database_location(DatabaseFile::Gravity),
            Path::new("/etc/pihole/gravity.db")
        );
    }

    /// An override only replaces the location of its own database
    #[test]
    fn overridden_location() {
        let env = Env::new(Config::default())
            .with_database(DatabaseFile::Gravity, PathBuf::from("/tmp/gravity.db"));

        assert_eq!(
            env.database_location(DatabaseFile::Gravity),
            Path::new("/tmp/gravity.db")
        );
        assert_eq!(
            env.database_location(DatabaseFile::Pihole),
            Path::new("/etc/pihole/pihole.db")
        );
    }

    /// Missing input files are reported with their path
    #[test]
    fn read_missing_file() {
        let env = Env::new(Config::default());
        let error = env
            .read_file(Path::new("/nonexistent/pihole.log"))
            .unwrap_err();

        assert_eq!(
            error.kind(),
            ErrorKind::FileRead("/nonexistent/pihole.log".to_owned())
        );
    }
}
