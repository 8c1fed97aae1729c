// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Gravity List Ingestion
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    databases::connect_to,
    env::{DatabaseFile, Env},
    parser::LineSource,
    services::gravity::{GravityRepository, GravityRepositoryImpl},
    util::Error
};
use log::info;
use std::{io::BufRead, path::Path};

/// Read a domain list, one domain per line. Lines are trimmed and blank lines
/// are dropped. The order of the file is kept.
pub fn read_domains<B: BufRead>(lines: LineSource<B>) -> Result<Vec<String>, Error> {
    let mut domains = Vec::new();

    for line in lines {
        let line = line?;
        let domain = line.trim();

        if !domain.is_empty() {
            domains.push(domain.to_owned());
        }
    }

    Ok(domains)
}

/// Replace the gravity list in the repository with the domains read from
/// `lines`. The whole list is read before the repository is touched.
pub fn load_gravity<B: BufRead, R: GravityRepository>(
    repo: &R,
    lines: LineSource<B>
) -> Result<usize, Error> {
    let domains = read_domains(lines)?;

    repo.reload(&domains)
}

/// Load the domain list at `path` into the gravity database
pub fn ingest_gravity_file(env: &Env, path: &Path) -> Result<usize, Error> {
    let reader = env.read_file(path)?;
    let lines = LineSource::new(reader, &path.to_string_lossy());
    let repo = GravityRepositoryImpl::new(connect_to(env, DatabaseFile::Gravity)?);

    let count = load_gravity(&repo, lines)?;
    info!("Loaded {} domains into gravity from {}", count, path.display());

    Ok(count)
}
