// src/database/schema.rs

use super::error::DbResult;
use rusqlite::{params, Connection};
use tracing::debug;

pub const ITEM_TABLE: &str = "ITEM";

/// Current shape of every base table. Existing tables are left alone; schema
/// changes to them go through the migration runner.
const BASE_SCHEMA: &str = "
    CREATE TABLE IF NOT EXISTS UNIDADE (
        ID INTEGER PRIMARY KEY AUTOINCREMENT,
        SIGLA TEXT NOT NULL UNIQUE,
        DESCRICAO TEXT
    );

    CREATE TABLE IF NOT EXISTS TFORNECEDOR (
        ID INTEGER PRIMARY KEY AUTOINCREMENT,
        NOME TEXT NOT NULL CHECK (length(trim(NOME)) > 0),
        CNPJ TEXT UNIQUE,
        TELEFONE TEXT,
        EMAIL TEXT
    );

    CREATE TABLE IF NOT EXISTS ITEM (
        ID INTEGER PRIMARY KEY AUTOINCREMENT,
        DESCRICAO TEXT NOT NULL UNIQUE,
        TIPO_ITEM TEXT NOT NULL,
        ID_UNIDADE INTEGER NOT NULL,
        ID_FORNECEDOR_PADRAO INTEGER,
        SALDO_ESTOQUE REAL DEFAULT 0,
        CUSTO_MEDIO REAL DEFAULT 0,
        FOREIGN KEY (ID_UNIDADE) REFERENCES UNIDADE(ID),
        FOREIGN KEY (ID_FORNECEDOR_PADRAO) REFERENCES TFORNECEDOR(ID)
    );
";

pub fn ensure_base_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(BASE_SCHEMA)?;
    debug!("Base schema ensured");
    Ok(())
}

pub fn table_exists(conn: &Connection, table_name: &str) -> DbResult<bool> {
    let count: i64 = conn.query_row(
        "SELECT COUNT(*) FROM sqlite_master WHERE type='table' AND name=?",
        params![table_name],
        |row| row.get(0),
    )?;
    Ok(count > 0)
}
