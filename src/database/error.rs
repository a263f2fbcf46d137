// src/database/error.rs

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    /// The store could not describe the table a step works on.
    #[error("Cannot introspect table '{table}': {reason}")]
    IntrospectionFailed { table: String, reason: String },
    /// A rebuild statement failed; the transaction has been rolled back.
    #[error("Migration step '{step}' rolled back: {source}")]
    TransactionFailed {
        step: String,
        #[source]
        source: rusqlite::Error,
    },
    #[error("Migration failed: {0}")]
    MigrationFailed(String),
    #[error("Constraint violated: {0}")]
    Constraint(String),
    #[error("Not found: {0}")]
    NotFound(String),
}

pub type DbResult<T> = Result<T, DbError>;

impl DbError {
    /// Maps SQLite constraint failures to [`DbError::Constraint`], passing
    /// every other error through unchanged.
    pub fn from_write(e: rusqlite::Error) -> Self {
        match e {
            rusqlite::Error::SqliteFailure(err, msg)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                DbError::Constraint(msg.unwrap_or_else(|| err.to_string()))
            }
            other => DbError::Sqlite(other),
        }
    }
}
