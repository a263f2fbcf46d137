// src/cli/list_columns.rs
use std::path::Path;

use crate::database::{schema, table_info, DbConnection, DbError, DbResult};

pub fn run(db_path: &Path, table: &str) -> DbResult<()> {
    println!("Opening: {}\n", db_path.display());

    let conn = DbConnection::open(db_path)?;
    if !schema::table_exists(&conn, table)? {
        return Err(DbError::IntrospectionFailed {
            table: table.to_string(),
            reason: "table does not exist".to_string(),
        });
    }
    let columns = table_info::columns(&conn, table)?;

    println!("=== {} Physical Columns ===\n", table);
    println!("{:<24} {:<10} {:<9} {:<10} {}", "Column", "Type", "Not Null", "Default", "PK");
    println!("{}", "-".repeat(64));

    for col in columns {
        println!(
            "{:<24} {:<10} {:<9} {:<10} {}",
            col.name,
            col.decl_type,
            if col.not_null { "yes" } else { "" },
            col.default_value.as_deref().unwrap_or("NULL"),
            if col.primary_key > 0 { "yes" } else { "" }
        );
    }

    let refs = table_info::referencing_tables(&conn, table)?;
    if !refs.is_empty() {
        println!("\nReferenced by:");
        for (child, column) in refs {
            println!("  {}.{}", child, column);
        }
    }

    Ok(())
}
