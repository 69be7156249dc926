//! Record store input.
//!
//! This module turns the on-disk connections file into records:
//! - Locating the file (explicit path or the standard search list)
//! - Decoding the YAML mapping into [`ConnectionEntry`] values
//! - Assigning connection numbers by case-insensitive name order
//! - Writing a commented example store for first-time setup

use crate::model::error::StoreError;
use crate::model::{Record, RecordId};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub mod example;
pub mod yaml;

pub use example::write_example;
pub use yaml::parse_entries;

/// File name used by every entry of the search list.
pub const STORE_FILE_NAME: &str = "sshpick.yml";

/// One connection as written in the store, before normalization.
///
/// Every field is independently optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConnectionEntry {
    /// Login name.
    pub user: Option<String>,
    /// Hostname or IP address.
    pub address: Option<String>,
    /// Free-text comment.
    pub comment: Option<String>,
}

/// Standard locations for the record store, in search order.
///
/// 1. `<config_dir>/sshpick/sshpick.yml`
/// 2. `~/.sshpick.yml`
/// 3. `~/sshpick.yml`
/// 4. `/etc/sshpick.yml`
pub fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = Vec::with_capacity(4);
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("sshpick").join(STORE_FILE_NAME));
    }
    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(format!(".{STORE_FILE_NAME}")));
        paths.push(home.join(STORE_FILE_NAME));
    }
    paths.push(Path::new("/etc").join(STORE_FILE_NAME));
    paths
}

/// Resolve the record store path.
///
/// # Logic:
/// 1. If an explicit path is given, it must exist
/// 2. Otherwise the first existing path of `candidates` wins
///
/// # Errors
///
/// Returns `StoreError::NotFound` listing every path tried.
pub fn locate(explicit: Option<&Path>, candidates: &[PathBuf]) -> Result<PathBuf, StoreError> {
    if let Some(path) = explicit {
        return if path.exists() {
            Ok(path.to_path_buf())
        } else {
            Err(StoreError::NotFound {
                searched: vec![path.to_path_buf()],
            })
        };
    }

    candidates
        .iter()
        .find(|path| path.exists())
        .cloned()
        .ok_or_else(|| StoreError::NotFound {
            searched: candidates.to_vec(),
        })
}

/// Read and decode the record store at `path`.
///
/// # Errors
///
/// Returns `StoreError::Read` for I/O failures, `StoreError::Parse` or
/// `StoreError::MalformedEntry` for bad content, and `StoreError::Empty`
/// when no connections are defined.
pub fn load_records(path: &Path) -> Result<Vec<Record>, StoreError> {
    let contents = std::fs::read_to_string(path).map_err(|source| StoreError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let entries = parse_entries(path, &contents)?;
    if entries.is_empty() {
        return Err(StoreError::Empty {
            path: path.to_path_buf(),
        });
    }

    let records = records_from_entries(entries);
    info!(path = %path.display(), count = records.len(), "Loaded connections");
    Ok(records)
}

/// Normalize decoded entries into records.
///
/// IDs follow case-insensitive name order. Names equal ignoring case keep
/// their file order. Missing fields fall back to the empty string, so an
/// entry with neither user nor address gets the command `"@"`.
pub fn records_from_entries(mut entries: Vec<(String, ConnectionEntry)>) -> Vec<Record> {
    entries.sort_by_cached_key(|(name, _)| name.to_lowercase());

    entries
        .into_iter()
        .enumerate()
        .map(|(index, (name, entry))| {
            let command = format!(
                "{}@{}",
                entry.user.as_deref().unwrap_or(""),
                entry.address.as_deref().unwrap_or("")
            );
            debug!(id = index, name = %name, command = %command, "Record");
            Record::new(
                RecordId::new(index),
                name,
                command,
                entry.comment.unwrap_or_default(),
            )
        })
        .collect()
}
