// src/db/mod.rs
//
// Database module
//
// Provides:
// - Store configuration
// - Connection pooling
// - Schema initialization
// - The owned Store handle (init / execute)

pub mod config;
pub mod connection;
pub mod migrations;
pub mod store;

pub use config::StoreConfig;
pub use connection::{create_connection_pool, create_memory_pool, get_connection, ConnectionPool, PooledConn};
pub use migrations::{get_database_stats, initialize_database, verify_database_integrity, DatabaseStats};
pub use store::{SqlRow, SqlValue, Store};
