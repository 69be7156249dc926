//! Error types for sshpick.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via
//! `?` and `From` conversions into [`AppError`] at the binary boundary.
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level application error wrapping all startup and runtime failures
//!   - [`StoreError`] - Record store location, reading, and YAML decoding failures
//!   - [`ConfigError`] - Configuration file failures
//!   - [`LoggingError`] - Tracing subscriber setup failures
//!   - [`TuiError`] - Terminal and connection launch failures
//!
//! # Recovery Strategy
//!
//! The browsing engine itself never fails: navigation clamps, empty filter
//! results are a valid state, and an invalid direct connection number is
//! rejected silently. Everything here is fatal and surfaces before the
//! browser starts or after it has restored the terminal.

use crate::config::ConfigError;
use crate::logging::LoggingError;
use crate::view::TuiError;
use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error encompassing all failure modes.
#[derive(Debug, Error)]
pub enum AppError {
    /// The record store could not be located or decoded.
    #[error("Failed to load connections: {0}")]
    Store(#[from] StoreError),

    /// The configuration file exists but could not be used.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Logging could not be initialized.
    #[error("Logging error: {0}")]
    Logging(#[from] LoggingError),

    /// Terminal or launch failure while the browser was running.
    #[error("{0}")]
    Tui(#[from] TuiError),
}

/// Errors encountered when locating or decoding the record store.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
/// use sshpick::model::error::StoreError;
///
/// let err = StoreError::NotFound {
///     searched: vec![PathBuf::from("/etc/sshpick.yml")],
/// };
/// assert!(err.to_string().contains("/etc/sshpick.yml"));
/// ```
#[derive(Debug, Error)]
pub enum StoreError {
    /// None of the candidate paths exist.
    ///
    /// **Recovery**: create a store, for example with `--write-example`.
    #[error("No connections file found, searched: {}", display_paths(.searched))]
    NotFound {
        /// Every path that was tried, in search order.
        searched: Vec<PathBuf>,
    },

    /// The file exists but could not be read.
    #[error("Failed to read {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid YAML, or its top level is not a mapping.
    #[error("Invalid YAML in {path}: {reason}")]
    Parse {
        /// Path with invalid content.
        path: PathBuf,
        /// Decoder message.
        reason: String,
    },

    /// An entry body is neither a mapping nor empty.
    #[error("Entry {name:?} in {path} must be a mapping of user/address/comment")]
    MalformedEntry {
        /// Path containing the entry.
        path: PathBuf,
        /// Friendly name of the offending entry.
        name: String,
    },

    /// The store decodes but defines no connections.
    #[error("No connections defined in {path}")]
    Empty {
        /// Path of the empty store.
        path: PathBuf,
    },

    /// Refused to overwrite an existing file with the example store.
    #[error("Refusing to overwrite existing file {path}")]
    AlreadyExists {
        /// Path that already exists.
        path: PathBuf,
    },

    /// Writing the example store failed.
    #[error("Failed to write {path}: {source}")]
    Write {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

fn display_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_lists_every_searched_path() {
        let err = StoreError::NotFound {
            searched: vec![PathBuf::from("/a/one.yml"), PathBuf::from("/b/two.yml")],
        };
        let message = err.to_string();
        assert!(message.contains("/a/one.yml, /b/two.yml"), "got: {message}");
    }

    #[test]
    fn store_error_converts_into_app_error() {
        fn load() -> Result<(), StoreError> {
            Err(StoreError::Empty {
                path: PathBuf::from("x.yml"),
            })
        }
        fn run() -> Result<(), AppError> {
            load()?;
            Ok(())
        }
        let err = run().unwrap_err();
        assert!(matches!(err, AppError::Store(StoreError::Empty { .. })));
        assert!(err.to_string().contains("x.yml"));
    }

    #[test]
    fn malformed_entry_names_the_entry() {
        let err = StoreError::MalformedEntry {
            path: PathBuf::from("s.yml"),
            name: "router".to_string(),
        };
        assert!(err.to_string().contains("\"router\""));
    }
}
