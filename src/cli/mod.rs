// src/cli/mod.rs
// Command line front end for database maintenance and supplier records

pub mod list_columns;
pub mod migrate;
pub mod supplier;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stockroom")]
#[command(about = "Stockroom - inventory database with maintenance tools", long_about = None)]
pub struct Cli {
    /// Path to the database file (overrides STOCKROOM_DB and the settings file)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the database, create missing tables and run pending schema steps
    Migrate,

    /// List the registered schema steps
    ListSteps,

    /// List the physical columns of a table
    ListColumns {
        /// Table name, e.g. ITEM
        table: String,
    },

    /// Remember a database path in the settings file
    SetDbPath {
        path: PathBuf,
    },

    /// Manage supplier records
    #[command(subcommand)]
    Supplier(SupplierCommand),
}

#[derive(Subcommand)]
pub enum SupplierCommand {
    /// List all suppliers ordered by name
    List,

    /// Show a single supplier
    Show { id: i64 },

    /// Register a new supplier
    Add(SupplierArgs),

    /// Replace a supplier's data
    Update {
        id: i64,
        #[command(flatten)]
        fields: SupplierArgs,
    },

    /// Delete a supplier
    Delete { id: i64 },
}

#[derive(Args, Debug, Clone)]
pub struct SupplierArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub cnpj: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
}

impl From<SupplierArgs> for crate::supplier::SupplierFields {
    fn from(args: SupplierArgs) -> Self {
        Self {
            name: args.name,
            cnpj: args.cnpj,
            phone: args.phone,
            email: args.email,
        }
    }
}
