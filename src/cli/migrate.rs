// src/cli/migrate.rs
use std::path::Path;

use crate::database::{self, migration, DbResult};

pub fn run(db_path: &Path) -> DbResult<()> {
    println!("=== Schema Migration ===\n");

    let (_conn, report) = database::bootstrap(db_path)?;

    for (id, outcome) in &report.outcomes {
        println!("  {:<40} {}", id, outcome);
    }
    println!(
        "\n{} of {} steps applied",
        report.applied_count(),
        report.outcomes.len()
    );

    Ok(())
}

pub fn list_steps() {
    for (id, description) in migration::default_runner().list_steps() {
        println!("{:<40} {}", id, description);
    }
}
