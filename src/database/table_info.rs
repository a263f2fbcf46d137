// src/database/table_info.rs
//! Column introspection through `PRAGMA table_info`.

use super::error::DbResult;
use rusqlite::Connection;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: String,
    pub decl_type: String,
    pub not_null: bool,
    pub default_value: Option<String>,
    /// 1-based position within the primary key, 0 when not part of it.
    pub primary_key: i32,
}

/// Columns of `table_name` in declaration order. An unknown table yields an
/// empty list rather than an error.
pub fn columns(conn: &Connection, table_name: &str) -> DbResult<Vec<ColumnInfo>> {
    let mut stmt = conn.prepare("SELECT name, type, \"notnull\", dflt_value, pk FROM pragma_table_info(?1)")?;

    let columns = stmt
        .query_map([table_name], |row| {
            let not_null: i32 = row.get(2)?;
            Ok(ColumnInfo {
                name: row.get(0)?,
                decl_type: row.get(1)?,
                not_null: not_null == 1,
                default_value: row.get(3)?,
                primary_key: row.get(4)?,
            })
        })?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(columns)
}

pub fn column_names(conn: &Connection, table_name: &str) -> DbResult<Vec<String>> {
    Ok(columns(conn, table_name)?
        .into_iter()
        .map(|c| c.name)
        .collect())
}

/// Tables whose foreign keys point at `table_name`, as (table, from column).
pub fn referencing_tables(conn: &Connection, table_name: &str) -> DbResult<Vec<(String, String)>> {
    let mut stmt = conn.prepare(
        "SELECT m.name, fk.\"from\"
         FROM sqlite_master m, pragma_foreign_key_list(m.name) fk
         WHERE m.type = 'table' AND fk.\"table\" = ?1 COLLATE NOCASE
         ORDER BY m.name",
    )?;

    let refs = stmt
        .query_map([table_name], |row| Ok((row.get(0)?, row.get(1)?)))?
        .collect::<Result<Vec<_>, _>>()?;

    Ok(refs)
}
