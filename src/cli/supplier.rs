// src/cli/supplier.rs
use std::path::Path;

use super::SupplierCommand;
use crate::database::{self, DbError, DbResult};
use crate::supplier::{Supplier, SupplierRepository};

pub fn run(db_path: &Path, command: SupplierCommand) -> DbResult<()> {
    let (conn, _) = database::bootstrap(db_path)?;

    match command {
        SupplierCommand::List => {
            let suppliers = SupplierRepository::get_all(&conn)?;
            println!(
                "{:<6} {:<30} {:<20} {:<16} {}",
                "ID", "Name", "CNPJ", "Phone", "Email"
            );
            println!("{}", "-".repeat(96));
            for s in &suppliers {
                print_row(s);
            }
            println!("\n{} suppliers", suppliers.len());
        }
        SupplierCommand::Show { id } => match SupplierRepository::get_by_id(&conn, id)? {
            Some(supplier) => println!("{}", serde_json::to_string_pretty(&supplier)?),
            None => return Err(not_found(id)),
        },
        SupplierCommand::Add(args) => {
            let id = SupplierRepository::add(&conn, &args.into())?;
            println!("Supplier registered with id {}", id);
        }
        SupplierCommand::Update { id, fields } => {
            if !SupplierRepository::update(&conn, id, &fields.into())? {
                return Err(not_found(id));
            }
            println!("Supplier {} updated", id);
        }
        SupplierCommand::Delete { id } => {
            if !SupplierRepository::delete(&conn, id)? {
                return Err(not_found(id));
            }
            println!("Supplier {} deleted", id);
        }
    }

    Ok(())
}

fn print_row(s: &Supplier) {
    println!(
        "{:<6} {:<30} {:<20} {:<16} {}",
        s.id,
        s.name,
        s.cnpj.as_deref().unwrap_or(""),
        s.phone.as_deref().unwrap_or(""),
        s.email.as_deref().unwrap_or("")
    );
}

fn not_found(id: i64) -> DbError {
    DbError::NotFound(format!("supplier {}", id))
}
