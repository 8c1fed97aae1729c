// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Gravity Database Repository
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    databases::gravity::{GravityDomain, GRAVITY_TABLE_RESET},
    util::{Error, ErrorKind}
};
use diesel::{connection::SimpleConnection, insert_into, prelude::*};
use failure::ResultExt;
#[cfg(test)]
use mock_it::Mock;

/// Describes interactions with the gravity (blocklist) data store
pub trait GravityRepository {
    /// Replace the whole list with `domains`, keeping their order. Either all
    /// of the new domains are stored or the old list is left untouched.
    fn reload(&self, domains: &[String]) -> Result<usize, Error>;

    /// Get the number of domains in the list
    fn count(&self) -> Result<usize, Error>;

    /// Get all domains in the list, in list order
    fn get_all(&self) -> Result<Vec<GravityDomain>, Error>;
}

/// The implementation of `GravityRepository`
pub struct GravityRepositoryImpl {
    db: SqliteConnection
}

impl GravityRepositoryImpl {
    pub fn new(db: SqliteConnection) -> Self {
        GravityRepositoryImpl { db }
    }
}

impl GravityRepository for GravityRepositoryImpl {
    fn reload(&self, domains: &[String]) -> Result<usize, Error> {
        use crate::databases::gravity::gravity::dsl::*;
        let db = &self.db;

        // The drop, create and inserts happen in one transaction
        db.transaction::<_, diesel::result::Error, _>(|| {
            db.batch_execute(GRAVITY_TABLE_RESET)?;

            for new_domain in domains {
                insert_into(gravity)
                    .values(domain.eq(new_domain))
                    .execute(db)?;
            }

            Ok(domains.len())
        })
        .context(ErrorKind::Database)
        .map_err(Error::from)
    }

    fn count(&self) -> Result<usize, Error> {
        use crate::databases::gravity::gravity::dsl::*;

        let count = gravity
            .count()
            .get_result::<i64>(&self.db)
            .context(ErrorKind::Database)?;

        Ok(count as usize)
    }

    fn get_all(&self) -> Result<Vec<GravityDomain>, Error> {
        use crate::databases::gravity::gravity::dsl::*;

        gravity
            .order(idx.asc())
            .load::<GravityDomain>(&self.db)
            .context(ErrorKind::Database)
            .map_err(Error::from)
    }
}

#[cfg(test)]
#[derive(Clone)]
pub struct GravityRepositoryMock {
    pub reload: Mock<Vec<String>, Result<usize, Error>>,
    pub count: Mock<(), Result<usize, Error>>,
    pub get_all: Mock<(), Result<Vec<GravityDomain>, Error>>
}

#[cfg(test)]
impl Default for GravityRepositoryMock {
    fn default() -> Self {
        GravityRepositoryMock {
            reload: Mock::new(Ok(0)),
            count: Mock::new(Ok(0)),
            get_all: Mock::new(Ok(Vec::new()))
        }
    }
}

#[cfg(test)]
impl GravityRepository for GravityRepositoryMock {
    fn reload(&self, domains: &[String]) -> Result<usize, Error> {
        self.reload.called(domains.to_vec())
    }

    fn count(&self) -> Result<usize, Error> {
        self.count.called(())
    }

    fn get_all(&self) -> Result<Vec<GravityDomain>, Error> {
        self.get_all.called(())
    }
}
