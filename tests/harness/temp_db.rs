use std::path::{Path, PathBuf};

use rusqlite::Connection;
use tempfile::TempDir;

/// Schema of the four entities the summary tracks by default.
pub const ENTITY_SCHEMA: &str = "
    CREATE TABLE ClinicalTrial (
        id INTEGER PRIMARY KEY,
        title TEXT,
        phase TEXT,
        country TEXT
    );
    CREATE TABLE Patent (
        id INTEGER PRIMARY KEY,
        number TEXT,
        status TEXT,
        ftoFlag INTEGER
    );
    CREATE TABLE Job (
        id INTEGER PRIMARY KEY,
        status TEXT,
        trace TEXT
    );
    CREATE TABLE Report (
        id INTEGER PRIMARY KEY,
        data TEXT
    );
";

/// Temporary SQLite database file for integration tests.
///
/// The file lives in its own temporary directory, removed on drop.
pub struct TempDb {
    dir: TempDir,
    path: PathBuf,
}

impl TempDb {
    /// Create a database file and run `sql` against it.
    pub fn create(sql: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("dev.db");
        let conn = Connection::open(&path).expect("open sqlite file");
        conn.execute_batch(sql).expect("seed database");
        conn.close().expect("close seed connection");
        Self { dir, path }
    }

    /// Database with the tracked entity tables and no rows.
    pub fn with_entities() -> Self {
        Self::create(ENTITY_SCHEMA)
    }

    /// Database with the tracked entity tables plus `extra` statements.
    pub fn with_entities_and(extra: &str) -> Self {
        Self::create(&format!("{ENTITY_SCHEMA}\n{extra}"))
    }

    /// A path inside the temp dir that does not exist.
    pub fn missing_path(&self) -> PathBuf {
        self.dir.path().join("absent.db")
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
