// src/database/connection.rs

use super::error::DbResult;
use rusqlite::Connection;
use std::path::Path;
use tracing::{debug, warn};

pub struct DbConnection;

impl DbConnection {
    /// Opens (or creates) the database file and configures the connection.
    /// Always go through this instead of `Connection::open()` so foreign keys
    /// are enforced.
    pub fn open(path: &Path) -> DbResult<Connection> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;

        // PRAGMA settings are per connection, so this runs on every open.
        let journal_mode: String =
            conn.query_row("PRAGMA journal_mode=WAL", [], |row| row.get(0))?;

        if !journal_mode.eq_ignore_ascii_case("wal") {
            warn!(
                "Failed to set WAL mode on database {:?}. Current mode: {}. Another connection may hold the file.",
                path.file_name(),
                journal_mode
            );
        } else {
            debug!("WAL mode activated for database {:?}", path.file_name());
        }

        conn.execute_batch(
            "PRAGMA synchronous=NORMAL;
             PRAGMA foreign_keys=ON;
             PRAGMA busy_timeout=5000;",
        )?;

        Ok(conn)
    }

    /// In-memory database with the same pragmas, minus the journal mode.
    pub fn open_in_memory() -> DbResult<Connection> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(conn)
    }

    pub fn foreign_keys_enabled(conn: &Connection) -> DbResult<bool> {
        let enabled: i64 = conn.query_row("PRAGMA foreign_keys", [], |row| row.get(0))?;
        Ok(enabled == 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_creates_file_with_wal_and_foreign_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("stock.db");

        let conn = DbConnection::open(&path).unwrap();
        assert!(path.exists());

        let mode: String = conn
            .query_row("PRAGMA journal_mode", [], |row| row.get(0))
            .unwrap();
        assert_eq!(mode.to_lowercase(), "wal");
        assert!(DbConnection::foreign_keys_enabled(&conn).unwrap());
    }

    #[test]
    fn test_in_memory_enforces_foreign_keys() {
        let conn = DbConnection::open_in_memory().unwrap();
        assert!(DbConnection::foreign_keys_enabled(&conn).unwrap());
    }
}
