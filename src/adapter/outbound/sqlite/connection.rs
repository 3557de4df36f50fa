//! Read-only SQLite connection management.

use std::path::Path;

use rusqlite::{Connection, OpenFlags};
use tracing::debug;

use crate::error::Result;

/// Open an existing SQLite database file without write access.
///
/// The file must already exist: read-only mode never creates it.
///
/// # Errors
/// Returns an error if the file cannot be opened as a SQLite database.
pub fn open_read_only(path: &Path) -> Result<Connection> {
    let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
    let conn = Connection::open_with_flags(path, flags)?;
    debug!(path = %path.display(), "opened sqlite database read-only");
    Ok(conn)
}

/// Quote `name` as an SQL identifier.
///
/// Grave accents are used because SQLite never reinterprets them as string
/// literals, unlike double quotes around an unknown name.
#[must_use]
pub fn quote_identifier(name: &str) -> String {
    format!("`{}`", name.replace('`', "``"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_identifier_wraps_plain_names() {
        assert_eq!(quote_identifier("ClinicalTrial"), "`ClinicalTrial`");
    }

    #[test]
    fn quote_identifier_escapes_grave_accents() {
        assert_eq!(quote_identifier("odd`name"), "`odd``name`");
    }

    #[test]
    fn open_read_only_rejects_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.db");

        assert!(open_read_only(&path).is_err());
        assert!(!path.exists(), "read-only open must not create the file");
    }

    #[test]
    fn open_read_only_refuses_writes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ro.db");
        Connection::open(&path)
            .unwrap()
            .execute_batch("CREATE TABLE t (id INTEGER);")
            .unwrap();

        let conn = open_read_only(&path).unwrap();
        let result = conn.execute("INSERT INTO t (id) VALUES (1)", []);
        assert!(result.is_err());
    }
}
