// src/supplier/repository.rs

use rusqlite::{params, Connection, OptionalExtension, Row};
use tracing::{debug, warn};

use super::{blank_to_none, Supplier, SupplierFields};
use crate::database::error::{DbError, DbResult};

/// CRUD over `TFORNECEDOR`. Every call takes the connection it should use.
pub struct SupplierRepository;

impl SupplierRepository {
    /// Inserts a supplier and returns its new id.
    pub fn add(conn: &Connection, fields: &SupplierFields) -> DbResult<i64> {
        conn.execute(
            "INSERT INTO TFORNECEDOR (NOME, CNPJ, TELEFONE, EMAIL) VALUES (?, ?, ?, ?)",
            params![
                fields.name.trim(),
                blank_to_none(fields.cnpj.as_deref()),
                blank_to_none(fields.phone.as_deref()),
                blank_to_none(fields.email.as_deref()),
            ],
        )
        .map_err(|e| {
            warn!("Rejected supplier '{}': {}", fields.name, e);
            DbError::from_write(e)
        })?;

        let id = conn.last_insert_rowid();
        debug!("Inserted supplier {} ('{}')", id, fields.name);
        Ok(id)
    }

    /// All suppliers ordered by name
    pub fn get_all(conn: &Connection) -> DbResult<Vec<Supplier>> {
        let mut stmt = conn.prepare(
            "SELECT ID, NOME, CNPJ, TELEFONE, EMAIL FROM TFORNECEDOR ORDER BY NOME",
        )?;

        let suppliers = stmt
            .query_map([], supplier_from_row)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(suppliers)
    }

    pub fn get_by_id(conn: &Connection, supplier_id: i64) -> DbResult<Option<Supplier>> {
        let supplier = conn
            .query_row(
                "SELECT ID, NOME, CNPJ, TELEFONE, EMAIL FROM TFORNECEDOR WHERE ID = ?",
                params![supplier_id],
                supplier_from_row,
            )
            .optional()?;
        Ok(supplier)
    }

    /// Returns `false` when no supplier has `supplier_id`.
    pub fn update(conn: &Connection, supplier_id: i64, fields: &SupplierFields) -> DbResult<bool> {
        let updated = conn
            .execute(
                "UPDATE TFORNECEDOR SET NOME = ?, CNPJ = ?, TELEFONE = ?, EMAIL = ? WHERE ID = ?",
                params![
                    fields.name.trim(),
                    blank_to_none(fields.cnpj.as_deref()),
                    blank_to_none(fields.phone.as_deref()),
                    blank_to_none(fields.email.as_deref()),
                    supplier_id,
                ],
            )
            .map_err(|e| {
                warn!("Rejected update of supplier {}: {}", supplier_id, e);
                DbError::from_write(e)
            })?;

        Ok(updated > 0)
    }

    /// Returns `false` when no supplier has `supplier_id`. Fails with
    /// [`DbError::Constraint`] while items still name it as default supplier.
    pub fn delete(conn: &Connection, supplier_id: i64) -> DbResult<bool> {
        let deleted = conn
            .execute("DELETE FROM TFORNECEDOR WHERE ID = ?", params![supplier_id])
            .map_err(|e| {
                warn!("Could not delete supplier {}: {}", supplier_id, e);
                DbError::from_write(e)
            })?;

        Ok(deleted > 0)
    }
}

fn supplier_from_row(row: &Row<'_>) -> rusqlite::Result<Supplier> {
    Ok(Supplier {
        id: row.get(0)?,
        name: row.get(1)?,
        cnpj: row.get(2)?,
        phone: row.get(3)?,
        email: row.get(4)?,
    })
}
