//! Persistence layer - SQLite storage for settings and recent datasets

mod database;

pub use database::Database;
