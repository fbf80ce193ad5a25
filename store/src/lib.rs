// store/src/lib.rs
//! SQLite persistence layer: database location, idempotent schema and
//! per-entity repositories. All repository functions are free functions
//! over `&rusqlite::Connection` so callers control connection scope and
//! transactions.

pub mod connection;
pub mod repository;
pub mod schema;

pub use connection::Database;
