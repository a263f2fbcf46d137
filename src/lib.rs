// src/lib.rs
//! Storage core of the Stockroom inventory application: SQLite connection
//! setup, base schema, startup schema steps and the supplier repository.

pub mod cli;
pub mod database;
pub mod settings;
pub mod supplier;

pub use database::{bootstrap, DbError, DbResult};
