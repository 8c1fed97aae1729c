// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Handle the CLI Arguments
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use crate::{
    cli::args::{CliArgs, CliCommand},
    env::{Config, DatabaseFile, Env},
    ingest::{ingest_gravity_file, ingest_log_file, record_summary_file},
    util::{Error, ErrorKind}
};
use log::{debug, LevelFilter};
use structopt::StructOpt;

/// Parse the CLI arguments and execute the command
pub fn handle_cli() -> Result<(), Error> {
    // Parse the command line arguments. Usage errors exit here, before any
    // file is touched.
    let args: CliArgs = CliArgs::from_args();

    run_command(args)
}

/// Execute the command given on the command line
pub fn run_command(args: CliArgs) -> Result<(), Error> {
    match args.command {
        CliCommand::Version => println!("{}", get_version()),
        CliCommand::Branch => println!("{}", get_branch()),
        CliCommand::Hash => println!("{}", get_hash()),
        CliCommand::Queries { ref logfile, year } => {
            let mut config = load_config(&args)?;

            if year.is_some() {
                config.ingest.reference_year = year;

                if !config.is_valid() {
                    return Err(Error::from(ErrorKind::ConfigParsingError));
                }
            }

            let env = create_env(config, &args, DatabaseFile::Pihole);
            let counts = ingest_log_file(&env, logfile)?;

            println!("{}", counts);
        }
        CliCommand::Gravity { ref listfile } => {
            let env = create_env(load_config(&args)?, &args, DatabaseFile::Gravity);
            let count = ingest_gravity_file(&env, listfile)?;

            println!("Imported {} gravity domains.", count);
        }
        CliCommand::Summary { ref jsonfile } => {
            let env = create_env(load_config(&args)?, &args, DatabaseFile::Pihole);
            let snapshot = record_summary_file(&env, jsonfile)?;

            println!("Recorded summary at {}.", snapshot.timestamp);
        }
    }

    Ok(())
}

/// Load the config and start logging at its level. `RUST_LOG` takes
/// precedence over the config.
fn load_config(args: &CliArgs) -> Result<Config, Error> {
    let config = match args.config {
        Some(ref location) => Config::parse(location)?,
        None => Config::load()?
    };

    init_logging(config.general.log_level);

    Ok(config)
}

fn init_logging(level: LevelFilter) {
    let env = env_logger::Env::new().default_filter_or(level.to_string());

    if env_logger::Builder::from_env(env).try_init().is_err() {
        debug!("Logging was already initialized");
    }
}

/// Create the environment, pointing `file` at the database given on the
/// command line, if any
fn create_env(config: Config, args: &CliArgs, file: DatabaseFile) -> Env {
    let env = Env::new(config);

    match args.database {
        Some(ref location) => env.with_database(file, location.clone()),
        None => env
    }
}

/// The release tag, or the crate version for untagged builds
pub fn get_version() -> &'static str {
    match env!("GIT_TAG") {
        "" => env!("CARGO_PKG_VERSION"),
        tag => tag
    }
}

fn get_branch() -> &'static str {
    env!("GIT_BRANCH")
}

fn get_hash() -> &'static str {
    env!("GIT_HASH").get(0..7).unwrap_or_default()
}

#[cfg(test)]
mod test {
    use super::run_command;
    use crate::{
        cli::args::CliArgs,
        databases::{connect, gravity::GravityDomain},
        services::gravity::{GravityRepository, GravityRepositoryImpl},
        util::ErrorKind
    };
    use diesel::prelude::*;
    use std::{fs, path::Path};
    use structopt::StructOpt;
    use tempfile::tempdir;

    fn args(dir: &Path, database: &str, command: &[&str]) -> CliArgs {
        let config = dir.join("missing.toml");
        let database = dir.join(database);
        let mut args = vec![
            "pihole-ingest".to_owned(),
            "--config".to_owned(),
            config.to_string_lossy().into_owned(),
            "--database".to_owned(),
            database.to_string_lossy().into_owned(),
        ];
        args.extend(command.iter().map(|arg| (*arg).to_owned()));

        CliArgs::from_iter_safe(args).unwrap()
    }

    /// Each ingester command writes to the database given on the command line
    #[test]
    fn runs_each_ingester() {
        use crate::databases::pihole::{queries, summaries};
        let dir = tempdir().unwrap();
        let log = dir.path().join("pihole.log");
        let list = dir.path().join("gravity.list");
        let json = dir.path().join("summary.json");

        fs::write(
            &log,
            "Jan 12 10:15:22 dnsmasq[1]: query[A] example.com from 10.0.0.1\n"
        )
        .unwrap();
        fs::write(&list, "ads.example\n").unwrap();
        fs::write(
            &json,
            r#"{"domains_being_blocked": 1, "dns_queries_today": 2,
                "ads_blocked_today": 1, "ads_percentage_today": 50.0}"#
        )
        .unwrap();

        run_command(args(
            dir.path(),
            "pihole.db",
            &["queries", "--year", "2019", &log.to_string_lossy()]
        ))
        .unwrap();
        run_command(args(
            dir.path(),
            "gravity.db",
            &["gravity", &list.to_string_lossy()]
        ))
        .unwrap();
        run_command(args(
            dir.path(),
            "pihole.db",
            &["summary", &json.to_string_lossy()]
        ))
        .unwrap();

        let db = connect(&dir.path().join("pihole.db"), true).unwrap();
        let stored = queries::table
            .select((queries::name, queries::ts))
            .load::<(String, String)>(&db)
            .unwrap();
        let summary_count: i64 = summaries::table.count().get_result(&db).unwrap();

        assert_eq!(
            stored,
            vec![("example.com".to_owned(), "2019-01-12 10:15:22".to_owned())]
        );
        assert_eq!(summary_count, 1);

        let gravity =
            GravityRepositoryImpl::new(connect(&dir.path().join("gravity.db"), true).unwrap());
        assert_eq!(
            gravity.get_all().unwrap(),
            vec![GravityDomain {
                sequence_id: 1,
                domain: "ads.example".to_owned()
            }]
        );
    }

    /// An invalid year is rejected before the log or database is opened
    #[test]
    fn invalid_year() {
        let dir = tempdir().unwrap();
        let error = run_command(args(
            dir.path(),
            "pihole.db",
            &["queries", "--year", "0", "missing.log"]
        ))
        .unwrap_err();

        assert_eq!(error.kind(), ErrorKind::ConfigParsingError);
        assert!(!dir.path().join("pihole.db").exists());
    }
}
