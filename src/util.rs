// Pi-hole: A black hole for Internet advertisements
// (c) 2019 Pi-hole, LLC (https://pi-hole.net)
// Network-wide ad blocking via your own hardware.
//
// Ingest
// General Ingest Utilities
//
// This file is copyright under the latest version of the EUPL.
// Please see LICENSE file for your rights under this license.

use failure::{Backtrace, Context, Fail};
use std::{
    env,
    fmt::{self, Display}
};

/// Wraps `ErrorKind` to provide context via `Context`.
///
/// See https://boats.gitlab.io/failure/error-errorkind.html
#[derive(Debug)]
pub struct Error {
    inner: Context<ErrorKind>
}

/// The `ErrorKind` enum represents all the possible errors that the ingesters
/// can run into.
#[derive(Clone, Eq, PartialEq, Debug, Fail)]
pub enum ErrorKind {
    #[fail(display = "Error reading from {}", _0)]
    FileRead(String),
    #[fail(display = "Error parsing the config")]
    ConfigParsingError,
    #[fail(display = "Failed to open the database at {}", _0)]
    DatabaseOpen(String),
    #[fail(display = "Error accessing the database")]
    Database,
    #[fail(display = "Invalid log timestamp: {:?}", _0)]
    TimestampParse(String),
    #[fail(display = "Log line does not match the expected format")]
    Extraction,
    #[fail(display = "Invalid summary data")]
    InvalidSummary
}

impl Error {
    pub fn print_stacktrace(&self) {
        eprintln!("Error ({}): {}", self.key(), self);

        // Only print the backtrace if requested, to avoid a gap between error and
        // causes
        let backtrace_enabled = env::var("RUST_BACKTRACE").is_ok();
        if backtrace_enabled {
            if let Some(backtrace) = self.backtrace() {
                eprintln!("{}", backtrace);
            }
        }

        // Print out each cause
        for (i, cause) in (self as &dyn Fail).iter_chain().skip(1).enumerate() {
            eprintln!("Cause #{}: {}", i + 1, cause);

            if backtrace_enabled {
                if let Some(backtrace) = cause.backtrace() {
                    eprintln!("{}", backtrace);
                }
            }
        }
    }

    /// Get the wrapped [`ErrorKind`]
    ///
    /// [`ErrorKind`]: enum.ErrorKind.html
    pub fn kind(&self) -> ErrorKind {
        self.inner.get_context().clone()
    }

    /// See [`ErrorKind::key`]
    ///
    /// [`ErrorKind::key`]: enum.ErrorKind.html#method.key
    pub fn key(&self) -> &'static str {
        self.kind().key()
    }

    /// Check if the error only affects a single log line. These errors are
    /// counted and skipped instead of aborting the run.
    pub fn is_line_level(&self) -> bool {
        self.kind().is_line_level()
    }
}

impl ErrorKind {
    /// Get the error key. This is stable and can be used by scripts to
    /// determine the error type instead of using the message.
    pub fn key(&self) -> &'static str {
        match *self {
            ErrorKind::FileRead(_) => "file_read",
            ErrorKind::ConfigParsingError => "config_parsing_error",
            ErrorKind::DatabaseOpen(_) => "database_open",
            ErrorKind::Database => "database",
            ErrorKind::TimestampParse(_) => "timestamp_parse",
            ErrorKind::Extraction => "extraction",
            ErrorKind::InvalidSummary => "invalid_summary"
        }
    }

    /// See [`Error::is_line_level`]
    ///
    /// [`Error::is_line_level`]: struct.Error.html#method.is_line_level
    pub fn is_line_level(&self) -> bool {
        match *self {
            ErrorKind::TimestampParse(_) | ErrorKind::Extraction => true,
            _ => false
        }
    }
}

/// Clones keep the kind, but not the cause
impl Clone for Error {
    fn clone(&self) -> Self {
        Error::from(self.kind())
    }
}

impl Fail for Error {
    fn cause(&self) -> Option<&dyn Fail> {
        self.inner.cause()
    }

    fn backtrace(&self) -> Option<&Backtrace> {
        self.inner.backtrace()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        Display::fmt(&self.inner, f)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Error {
        Error {
            inner: Context::new(kind)
        }
    }
}

impl From<Context<ErrorKind>> for Error {
    fn from(inner: Context<ErrorKind>) -> Error {
        Error { inner }
    }
}

#[cfg(test)]
mod test {
    use super::{Error, ErrorKind};
    use failure::{Fail, ResultExt};
    use std::io;

    /// The kind survives being wrapped around another error
    #[test]
    fn kind_from_context() {
        let result: Result<(), io::Error> = Err(io::Error::from(io::ErrorKind::NotFound));
        let error = Error::from(
            result
                .context(ErrorKind::FileRead("/tmp/missing".to_owned()))
                .unwrap_err()
        );

        assert_eq!(error.kind(), ErrorKind::FileRead("/tmp/missing".to_owned()));
        assert_eq!(error.key(), "file_read");
        assert!(error.cause().is_some());
    }

    /// Only extraction and timestamp errors are recoverable per line
    #[test]
    fn line_level_kinds() {
        assert!(Error::from(ErrorKind::Extraction).is_line_level());
        assert!(Error::from(ErrorKind::TimestampParse("Jan".to_owned())).is_line_level());
        assert!(!Error::from(ErrorKind::Database).is_line_level());
        assert!(!Error::from(ErrorKind::FileRead("x".to_owned())).is_line_level());
    }
}
