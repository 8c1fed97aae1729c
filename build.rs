// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// Build Script For Retrieving VCS Data
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use std::process::Command;

/// Run a git command and return its trimmed output, or an empty string if git
/// is not available (e.g. building from a source tarball)
fn git(args: &[&str]) -> String {
    let raw = Command::new("git")
        .args(args)
        .output()
        .map(|output| output.stdout)
        .unwrap_or_default();

    String::from_utf8_lossy(&raw).trim().to_owned()
}

fn main() {
    let tag = git(&["describe", "--tags", "--abbrev=0", "--exact-match"]);
    let branch = git(&["rev-parse", "--abbrev-ref", "HEAD"]);
    let hash = git(&["rev-parse", "HEAD"]);

    // This lets us use the `env!()` macro to read these variables at compile time
    println!("cargo:rustc-env=GIT_TAG={}", tag);
    println!("cargo:rustc-env=GIT_BRANCH={}", branch);
    println!("cargo:rustc-env=GIT_HASH={}", hash);
}
