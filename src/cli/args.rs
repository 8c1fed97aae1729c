// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// CLI Arguments and Options
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use std::path::PathBuf;
use structopt::{clap::AppSettings, StructOpt};

/// This defines the arguments that the CLI can be given
///
/// `AppSettings::VersionlessSubcommands` will remove the `-V` version flag from
/// sub-commands. All sub-commands in this project have the same version.
#[derive(StructOpt, Debug)]
#[structopt(
    name = "pihole-ingest",
    about = "Imports Pi-hole logs and lists into its databases.",
    global_settings = &[AppSettings::VersionlessSubcommands],
    setting = AppSettings::SubcommandRequiredElseHelp
)]
pub struct CliArgs {
    /// Config file to use instead of /etc/pihole/ingest.toml
    #[structopt(short, long, parse(from_os_str))]
    pub config: Option<PathBuf>,
    /// Database to write to instead of the configured one
    #[structopt(short, long, parse(from_os_str))]
    pub database: Option<PathBuf>,
    #[structopt(subcommand)]
    pub command: CliCommand
}

/// The commands that the CLI handles
#[derive(StructOpt, Debug)]
pub enum CliCommand {
    /// Imports a dnsmasq log into the queries, forwards and replies tables
    #[structopt(name = "queries")]
    Queries {
        /// The log file to import
        #[structopt(parse(from_os_str))]
        logfile: PathBuf,
        /// Year to stamp the log entries with, instead of the current year
        #[structopt(short, long)]
        year: Option<i32>
    },
    /// Replaces the gravity list with the domains in a file
    #[structopt(name = "gravity")]
    Gravity {
        /// The list file, one domain per line
        #[structopt(parse(from_os_str))]
        listfile: PathBuf
    },
    /// Records a summaryRaw JSON document in the summary history
    #[structopt(name = "summary")]
    Summary {
        /// The saved summaryRaw document
        #[structopt(parse(from_os_str))]
        jsonfile: PathBuf
    },
    /// Prints version information
    #[structopt(name = "version")]
    Version,
    /// Prints branch
    #[structopt(name = "branch")]
    Branch,
    /// Prints git hash
    #[structopt(name = "hash")]
    Hash
}
