// src/database/migration/mod.rs

pub mod column_removal;
pub mod remove_item_codigo_interno;
pub mod runner;

pub use column_removal::ColumnRemoval;
pub use remove_item_codigo_interno::REMOVE_ITEM_CODIGO_INTERNO;
pub use runner::{MigrationOutcome, MigrationReport, MigrationRunner, SchemaStep};

use rusqlite::Connection;

use super::error::DbResult;

/// Runner with every schema step the application knows about, oldest first.
pub fn default_runner() -> MigrationRunner {
    let mut runner = MigrationRunner::new();
    runner.register_step(Box::new(REMOVE_ITEM_CODIGO_INTERNO));
    runner
}

pub fn run_migrations(conn: &mut Connection) -> DbResult<MigrationReport> {
    default_runner().run_all(conn)
}
