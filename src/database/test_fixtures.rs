// src/database/test_fixtures.rs
// Shared setup for database tests

#![cfg(test)]

use rusqlite::{params, Connection};

/// Creates the schema as it looked before `CODIGO_INTERNO` was dropped, plus
/// a `MOVIMENTO` table that references `ITEM`.
///
/// Seeds units 1 and 2 and supplier 1. `DESCRICAO` is deliberately not
/// unique here, so tests can put rows in that the rebuilt table rejects.
pub fn create_legacy_schema(conn: &Connection) {
    conn.execute_batch(
        "CREATE TABLE UNIDADE (
            ID INTEGER PRIMARY KEY AUTOINCREMENT,
            SIGLA TEXT NOT NULL UNIQUE,
            DESCRICAO TEXT
        );
        CREATE TABLE TFORNECEDOR (
            ID INTEGER PRIMARY KEY AUTOINCREMENT,
            NOME TEXT NOT NULL,
            CNPJ TEXT UNIQUE,
            TELEFONE TEXT,
            EMAIL TEXT
        );
        CREATE TABLE ITEM (
            ID INTEGER PRIMARY KEY AUTOINCREMENT,
            DESCRICAO TEXT NOT NULL,
            TIPO_ITEM TEXT NOT NULL,
            ID_UNIDADE INTEGER NOT NULL,
            ID_FORNECEDOR_PADRAO INTEGER,
            SALDO_ESTOQUE REAL DEFAULT 0,
            CUSTO_MEDIO REAL DEFAULT 0,
            CODIGO_INTERNO TEXT,
            FOREIGN KEY (ID_UNIDADE) REFERENCES UNIDADE(ID),
            FOREIGN KEY (ID_FORNECEDOR_PADRAO) REFERENCES TFORNECEDOR(ID)
        );
        CREATE TABLE MOVIMENTO (
            ID INTEGER PRIMARY KEY AUTOINCREMENT,
            ID_ITEM INTEGER NOT NULL REFERENCES ITEM(ID),
            QUANTIDADE REAL NOT NULL
        );
        INSERT INTO UNIDADE (ID, SIGLA, DESCRICAO) VALUES (1, 'UN', 'Unidade'), (2, 'KG', 'Quilograma');
        INSERT INTO TFORNECEDOR (ID, NOME, CNPJ) VALUES (1, 'Acme', '00.000.000/0001-00');",
    )
    .unwrap();
}

/// Inserts an item into the legacy `ITEM` table with stock 10.0 and average
/// cost 3.5.
pub fn insert_legacy_item(
    conn: &Connection,
    id: i64,
    description: &str,
    unit_id: i64,
    supplier_id: Option<i64>,
    internal_code: &str,
) {
    conn.execute(
        "INSERT INTO ITEM (ID, DESCRICAO, TIPO_ITEM, ID_UNIDADE, ID_FORNECEDOR_PADRAO, SALDO_ESTOQUE, CUSTO_MEDIO, CODIGO_INTERNO)
         VALUES (?, ?, 'PRODUTO', ?, ?, 10.0, 3.5, ?)",
        params![id, description, unit_id, supplier_id, internal_code],
    )
    .unwrap();
}
