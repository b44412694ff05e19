//! Error handling for templatizr.
//! Defines the error kinds raised while resolving replacements, selecting
//! files and writing the templatized output.

use std::io;
use thiserror::Error;

/// Custom error types for templatizr operations.
///
/// Every variant is fatal to the run: the first error aborts processing and
/// files already written are left in place.
#[derive(Error, Debug)]
pub enum Error {
    /// Neither `--replace` nor `--config-file` produced any replacement
    #[error("{}", required_flags_message(.flags))]
    RequiredFlags { flags: Vec<&'static str> },

    /// The config file could not be read or does not have the expected shape
    #[error("Configuration error: failed to load '{path}': {reason}")]
    ConfigParseError { path: String, reason: String },

    /// An inline `--replace` token is not of the `/search/replace/` form
    #[error("Invalid replacement '{token}': {reason}")]
    InvalidReplacementSyntax { token: String, reason: String },

    /// An `--input` or `--exclude` pattern failed to compile
    #[error("Invalid glob pattern '{pattern}': {reason}")]
    GlobError { pattern: String, reason: String },

    /// Reading inputs, creating directories or writing outputs failed
    #[error("Filesystem error on '{path}': {source}")]
    FilesystemError {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Represents I/O failures that are not tied to a particular path
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Convenience type alias for Results with templatizr's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

fn required_flags_message(flags: &[&'static str]) -> String {
    match flags {
        [flag] => format!("Required flag {:?} not set", flag),
        _ => format!("Required flags {:?} not set", flags.join(", ")),
    }
}

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{}", err);
    std::process::exit(1);
}
