//! Example record store for first-time setup.

use crate::model::error::StoreError;
use std::path::Path;
use tracing::info;

/// Commented header describing the store format.
pub const EXAMPLE_HEADER: &str = "\
# Connections file in YAML format.
# Use the following format:
#   FRIENDLY_NAME:
#     address: SERVER_ADDRESS
#     comment: FREETEXT_COMMENT
#     user: USER_NAME
#
#   Details:
#       FRIENDLY_NAME - Any descriptive name, used for display and sorting
#       SERVER_ADDRESS - Hostname or IP address
#       FREETEXT_COMMENT - Optional free text shown next to the connection
#       USER_NAME - Your login name
";

/// Example connections written after the header.
pub const EXAMPLE_ENTRIES: &str = "\
Another server:
  address: 10.2.2.2
  comment: this is another comment
  user: foo
border router:
  address: 192.168.1.1
  comment: My border router
  user: admin
test server:
  address: test.example.com
  user: root
";

/// Write the example store to `path`.
///
/// # Errors
///
/// Returns `StoreError::AlreadyExists` rather than overwriting a file, and
/// `StoreError::Write` for I/O failures.
pub fn write_example(path: &Path) -> Result<(), StoreError> {
    if path.exists() {
        return Err(StoreError::AlreadyExists {
            path: path.to_path_buf(),
        });
    }

    let contents = format!("{EXAMPLE_HEADER}\n{EXAMPLE_ENTRIES}");
    std::fs::write(path, contents).map_err(|source| StoreError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    info!(path = %path.display(), "Wrote example connections file");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::load_records;
    use std::fs;

    #[test]
    fn example_store_loads_back_as_three_records() {
        let path = std::env::temp_dir().join("sshpick_test_example_roundtrip.yml");
        fs::remove_file(&path).ok();

        write_example(&path).unwrap();
        let records = load_records(&path).unwrap();

        let names: Vec<_> = records.iter().map(|r| r.name()).collect();
        assert_eq!(names, vec!["Another server", "border router", "test server"]);
        assert_eq!(records[1].command(), "admin@192.168.1.1");
        assert_eq!(records[2].comment(), "");

        fs::remove_file(path).ok();
    }

    #[test]
    fn write_example_refuses_to_overwrite() {
        let path = std::env::temp_dir().join("sshpick_test_example_exists.yml");
        fs::write(&path, "keep: {}\n").unwrap();

        let result = write_example(&path);
        assert!(matches!(result, Err(StoreError::AlreadyExists { .. })));
        assert_eq!(fs::read_to_string(&path).unwrap(), "keep: {}\n");

        fs::remove_file(path).ok();
    }
}
