// src/db/migrations.rs
//
// Schema setup for the product store.
//
// Only one schema version exists. A fresh database gets it; a database
// already on it is left alone; anything else is refused rather than
// guessed at.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{AppError, AppResult};

const CURRENT_SCHEMA_VERSION: i32 = 1;

const SCHEMA_V1: &str = include_str!("../../schema.sql");

/// Bring `conn` to the current schema. Idempotent.
pub fn initialize_database(conn: &Connection) -> AppResult<()> {
    match get_schema_version(conn)? {
        0 => {
            conn.execute_batch(SCHEMA_V1)
                .map_err(|e| AppError::Other(format!("Failed to apply product schema: {}", e)))?;
            set_schema_version(conn, CURRENT_SCHEMA_VERSION)?;
            log::info!("Initialized product schema v{}", CURRENT_SCHEMA_VERSION);
            Ok(())
        }
        CURRENT_SCHEMA_VERSION => Ok(()),
        found => Err(AppError::Other(format!(
            "Unsupported schema version {} (this build understands {})",
            found, CURRENT_SCHEMA_VERSION
        ))),
    }
}

/// 0 when the database has never been initialized
fn get_schema_version(conn: &Connection) -> AppResult<i32> {
    let tracked = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name = 'schema_version'",
            [],
            |row| row.get::<_, String>(0),
        )
        .optional()?
        .is_some();

    if !tracked {
        return Ok(0);
    }

    let version: Option<i32> =
        conn.query_row("SELECT MAX(version) FROM schema_version", [], |row| row.get(0))?;
    Ok(version.unwrap_or(0))
}

fn set_schema_version(conn: &Connection, version: i32) -> AppResult<()> {
    conn.execute(
        "INSERT OR IGNORE INTO schema_version (version, applied_at) VALUES (?1, ?2)",
        params![version, chrono::Utc::now().to_rfc3339()],
    )?;
    Ok(())
}

/// Fails unless SQLite's integrity check reports "ok"
pub fn verify_database_integrity(conn: &Connection) -> AppResult<()> {
    let verdict: String = conn.query_row("PRAGMA integrity_check", [], |row| row.get(0))?;
    if verdict != "ok" {
        return Err(AppError::Other(format!("Integrity check failed: {}", verdict)));
    }
    Ok(())
}

/// Size of the store and number of stored products
#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseStats {
    pub size_bytes: i64,
    pub page_count: i64,
    pub page_size: i64,
    pub product_count: i64,
}

pub fn get_database_stats(conn: &Connection) -> AppResult<DatabaseStats> {
    let (page_count, page_size, product_count) = conn.query_row(
        "SELECT pc.page_count, ps.page_size, (SELECT COUNT(*) FROM products)
         FROM pragma_page_count() AS pc, pragma_page_size() AS ps",
        [],
        |row| Ok((row.get::<_, i64>(0)?, row.get::<_, i64>(1)?, row.get::<_, i64>(2)?)),
    )?;

    Ok(DatabaseStats {
        size_bytes: page_count * page_size,
        page_count,
        page_size,
        product_count,
    })
}
