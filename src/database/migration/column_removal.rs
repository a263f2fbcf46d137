// src/database/migration/column_removal.rs
//! Drops a column from a table by rebuilding it.
//!
//! SQLite can't drop a column that carries constraints, so the table is
//! rebuilt inside one transaction:
//! 1. rename the table to a temporary name
//! 2. create the new table under the original name from a fixed schema
//! 3. copy the retained columns across
//! 4. drop the temporary table and recreate its explicit indexes and triggers
//! 5. verify row count and foreign keys, then commit
//!
//! Foreign key enforcement is switched off and `legacy_alter_table` on for the
//! duration, so the rename doesn't rewrite references held by other tables.
//! Those references keep naming the original table and resolve to the rebuilt
//! one after commit. Both pragmas go back to their previous values afterwards.

use rusqlite::{Connection, Transaction};
use tracing::{error, info, warn};

use super::super::connection::DbConnection;
use super::super::error::{DbError, DbResult};
use super::super::table_info;
use super::runner::{MigrationOutcome, SchemaStep};

/// Static description of a single column drop.
#[derive(Debug, Clone, Copy)]
pub struct ColumnRemoval {
    pub id: &'static str,
    pub description: &'static str,
    pub table: &'static str,
    pub column: &'static str,
    pub temp_table: &'static str,
    /// Full `CREATE TABLE` statement for the table without `column`.
    pub create_sql: &'static str,
    /// Columns copied from the old table, in the new table's order.
    pub retained_columns: &'static [&'static str],
}

impl ColumnRemoval {
    pub fn apply(&self, conn: &mut Connection) -> DbResult<MigrationOutcome> {
        let existing = table_info::column_names(conn, self.table).map_err(|e| {
            DbError::IntrospectionFailed {
                table: self.table.to_string(),
                reason: e.to_string(),
            }
        })?;

        if existing.is_empty() {
            return Err(DbError::IntrospectionFailed {
                table: self.table.to_string(),
                reason: "table does not exist".to_string(),
            });
        }

        if !contains_column(&existing, self.column) {
            info!(
                "Column '{}' is already absent from table '{}'",
                self.column, self.table
            );
            return Ok(MigrationOutcome::AlreadySatisfied);
        }

        let missing: Vec<&str> = self
            .retained_columns
            .iter()
            .copied()
            .filter(|c| !contains_column(&existing, c))
            .collect();
        if !missing.is_empty() {
            return Err(DbError::IntrospectionFailed {
                table: self.table.to_string(),
                reason: format!("expected columns not found: {:?}", missing),
            });
        }

        info!(
            "Removing column '{}' from table '{}' (keeping {:?})",
            self.column, self.table, self.retained_columns
        );

        let foreign_keys = DbConnection::foreign_keys_enabled(conn)?;
        let legacy_alter: i64 = conn.query_row("PRAGMA legacy_alter_table", [], |row| row.get(0))?;
        conn.execute_batch("PRAGMA foreign_keys=OFF; PRAGMA legacy_alter_table=ON;")?;

        let result = self.rebuild(conn);

        // Restore even when the rebuild failed; the rollback already happened.
        let restored = conn.execute_batch(&format!(
            "PRAGMA legacy_alter_table={}; PRAGMA foreign_keys={};",
            legacy_alter,
            if foreign_keys { "ON" } else { "OFF" }
        ));

        match result {
            Ok(rows_copied) => {
                restored?;
                info!(
                    "Column '{}' removed from table '{}' ({} rows preserved)",
                    self.column, self.table, rows_copied
                );
                Ok(MigrationOutcome::Applied { rows_copied })
            }
            Err(e) => {
                error!(
                    "Failed to remove column '{}' from table '{}': {}",
                    self.column, self.table, e
                );
                if let Err(restore_err) = restored {
                    error!("Could not restore connection pragmas: {}", restore_err);
                }
                Err(e)
            }
        }
    }

    /// Runs the rebuild in a transaction. Any early return drops `tx`, which
    /// rolls everything back.
    fn rebuild(&self, conn: &mut Connection) -> DbResult<usize> {
        let tx = conn.transaction().map_err(|e| self.tx_failed(e))?;

        let rows_before = count_rows(&tx, self.table).map_err(|e| self.tx_failed(e))?;
        let violations_before =
            foreign_key_violations(&tx, self.table).map_err(|e| self.tx_failed(e))?;
        // Read before the rename, which rewrites these to the temporary name.
        let dependents = self
            .dependent_objects(&tx)
            .map_err(|e| self.tx_failed(e))?;

        tx.execute(
            &format!(
                "ALTER TABLE \"{}\" RENAME TO \"{}\"",
                self.table, self.temp_table
            ),
            [],
        )
        .map_err(|e| self.tx_failed(e))?;

        tx.execute(self.create_sql, [])
            .map_err(|e| self.tx_failed(e))?;

        let columns_list = self
            .retained_columns
            .iter()
            .map(|c| format!("\"{}\"", c))
            .collect::<Vec<_>>()
            .join(", ");
        let rows_copied = tx
            .execute(
                &format!(
                    "INSERT INTO \"{}\" ({}) SELECT {} FROM \"{}\"",
                    self.table, columns_list, columns_list, self.temp_table
                ),
                [],
            )
            .map_err(|e| self.tx_failed(e))?;
        info!("  Copied {} rows into the rebuilt table", rows_copied);

        tx.execute(&format!("DROP TABLE \"{}\"", self.temp_table), [])
            .map_err(|e| self.tx_failed(e))?;

        for (name, sql) in &dependents {
            tx.execute(sql, []).map_err(|e| self.tx_failed(e))?;
            info!("  Recreated '{}'", name);
        }

        let rows_after = count_rows(&tx, self.table).map_err(|e| self.tx_failed(e))?;
        if rows_after != rows_before {
            return Err(DbError::MigrationFailed(format!(
                "Row count mismatch while rebuilding '{}': before={}, after={}",
                self.table, rows_before, rows_after
            )));
        }

        let violations_after =
            foreign_key_violations(&tx, self.table).map_err(|e| self.tx_failed(e))?;
        if violations_after > violations_before {
            return Err(DbError::MigrationFailed(format!(
                "Rebuilding '{}' introduced {} foreign key violations",
                self.table,
                violations_after - violations_before
            )));
        }

        tx.commit().map_err(|e| self.tx_failed(e))?;
        Ok(rows_copied)
    }

    /// Explicit indexes and triggers on the table, as (name, sql). Objects
    /// that mention the dropped column can't be recreated and are skipped.
    fn dependent_objects(&self, tx: &Transaction<'_>) -> rusqlite::Result<Vec<(String, String)>> {
        let mut stmt = tx.prepare(
            "SELECT name, sql FROM sqlite_master
             WHERE tbl_name = ?1 COLLATE NOCASE AND type IN ('index', 'trigger') AND sql IS NOT NULL
             ORDER BY type, name",
        )?;
        let objects = stmt
            .query_map([self.table], |row| Ok((row.get::<_, String>(0)?, row.get::<_, String>(1)?)))?
            .collect::<Result<Vec<_>, _>>()?;

        let dropped = self.column.to_lowercase();
        Ok(objects
            .into_iter()
            .filter(|(name, sql)| {
                let keep = !sql.to_lowercase().contains(&dropped);
                if !keep {
                    warn!(
                        "  '{}' uses column '{}' and will not be recreated",
                        name, self.column
                    );
                }
                keep
            })
            .collect())
    }

    fn tx_failed(&self, source: rusqlite::Error) -> DbError {
        DbError::TransactionFailed {
            step: self.id.to_string(),
            source,
        }
    }
}

impl SchemaStep for ColumnRemoval {
    fn id(&self) -> &str {
        self.id
    }

    fn description(&self) -> &str {
        self.description
    }

    fn apply(&self, conn: &mut Connection) -> DbResult<MigrationOutcome> {
        ColumnRemoval::apply(self, conn)
    }
}

fn contains_column(columns: &[String], name: &str) -> bool {
    columns.iter().any(|c| c.eq_ignore_ascii_case(name))
}

fn count_rows(tx: &Transaction<'_>, table: &str) -> rusqlite::Result<i64> {
    tx.query_row(&format!("SELECT COUNT(*) FROM \"{}\"", table), [], |row| {
        row.get(0)
    })
}

/// Violations where `table` is either the child or the parent side.
fn foreign_key_violations(tx: &Transaction<'_>, table: &str) -> rusqlite::Result<i64> {
    tx.query_row(
        "SELECT COUNT(*) FROM pragma_foreign_key_check
         WHERE \"table\" = ?1 COLLATE NOCASE OR parent = ?1 COLLATE NOCASE",
        [table],
        |row| row.get(0),
    )
}
