// src/database/mod.rs

pub mod connection;
pub mod error;
pub mod migration;
pub mod schema;
pub mod table_info;

#[cfg(test)]
pub mod test_fixtures;

pub use connection::DbConnection;
pub use error::{DbError, DbResult};
pub use migration::{run_migrations, MigrationOutcome, MigrationReport};

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use tracing::info;

/// Database storage configuration
pub struct DbConfig;

impl DbConfig {
    pub const DEFAULT_FILE_NAME: &'static str = "stockroom.db";

    pub fn default_path() -> PathBuf {
        let documents = directories_next::UserDirs::new()
            .and_then(|dirs| dirs.document_dir().map(|p| p.to_path_buf()))
            .unwrap_or_else(|| PathBuf::from("."));
        documents.join("Stockroom").join(Self::DEFAULT_FILE_NAME)
    }
}

/// Opens the database, creates missing base tables and runs every schema
/// step. Any failure is returned before the connection is handed out, so
/// nothing ever queries a half-migrated schema.
pub fn bootstrap(path: &Path) -> DbResult<(Connection, MigrationReport)> {
    info!("Opening database at {}", path.display());
    let mut conn = DbConnection::open(path)?;
    let report = prepare(&mut conn)?;
    Ok((conn, report))
}

/// Base schema followed by migrations, on an already open connection.
pub fn prepare(conn: &mut Connection) -> DbResult<MigrationReport> {
    // Missing tables are created in their current shape; existing legacy
    // tables are left for the steps to rebuild.
    schema::ensure_base_schema(conn)?;
    let report = run_migrations(conn)?;
    info!(
        "Database ready ({} migration steps applied)",
        report.applied_count()
    );
    Ok(report)
}
