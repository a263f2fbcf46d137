// src/database/migration/remove_item_codigo_interno.rs
//! `ITEM.CODIGO_INTERNO` is no longer used; items are identified by `ID` and
//! `DESCRICAO`. Older databases still carry the column.

use super::column_removal::ColumnRemoval;
use crate::database::schema::ITEM_TABLE;

pub const REMOVE_ITEM_CODIGO_INTERNO: ColumnRemoval = ColumnRemoval {
    id: "remove_item_codigo_interno_v1",
    description: "Drop the obsolete CODIGO_INTERNO column from ITEM",
    table: ITEM_TABLE,
    column: "CODIGO_INTERNO",
    temp_table: "ITEM_old",
    create_sql: "CREATE TABLE ITEM (
        ID INTEGER PRIMARY KEY AUTOINCREMENT,
        DESCRICAO TEXT NOT NULL UNIQUE,
        TIPO_ITEM TEXT NOT NULL,
        ID_UNIDADE INTEGER NOT NULL,
        ID_FORNECEDOR_PADRAO INTEGER,
        SALDO_ESTOQUE REAL DEFAULT 0,
        CUSTO_MEDIO REAL DEFAULT 0,
        FOREIGN KEY (ID_UNIDADE) REFERENCES UNIDADE(ID),
        FOREIGN KEY (ID_FORNECEDOR_PADRAO) REFERENCES TFORNECEDOR(ID)
    )",
    retained_columns: &[
        "ID",
        "DESCRICAO",
        "TIPO_ITEM",
        "ID_UNIDADE",
        "ID_FORNECEDOR_PADRAO",
        "SALDO_ESTOQUE",
        "CUSTO_MEDIO",
    ],
};
