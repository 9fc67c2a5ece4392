// src/db/store.rs
//
// Owned handle to the SQLite store.
//
// The handle is created explicitly and passed to whoever needs it;
// there is no process-wide connection.

use std::sync::Arc;

use rusqlite::params_from_iter;
pub use rusqlite::types::Value as SqlValue;

use super::config::StoreConfig;
use super::connection::{create_connection_pool, create_memory_pool, get_connection, ConnectionPool, PooledConn};
use super::migrations::{get_database_stats, initialize_database, verify_database_integrity, DatabaseStats};
use crate::error::AppResult;

/// A result row, one value per selected column
pub type SqlRow = Vec<SqlValue>;

#[derive(Clone)]
pub struct Store {
    pool: Arc<ConnectionPool>,
}

impl Store {
    /// Open (or create) the file-backed store described by `config`
    pub fn open(config: &StoreConfig) -> AppResult<Self> {
        log::info!("Opening product store at {}", config.path.display());
        Ok(Self {
            pool: Arc::new(create_connection_pool(config)?),
        })
    }

    pub fn in_memory() -> AppResult<Self> {
        Ok(Self {
            pool: Arc::new(create_memory_pool()?),
        })
    }

    pub fn connection(&self) -> AppResult<PooledConn> {
        get_connection(&self.pool)
    }

    /// Create the schema if missing. Repeated calls give the same outcome.
    pub fn init(&self) -> AppResult<()> {
        let conn = self.connection()?;
        initialize_database(&conn)
    }

    /// Run one statement with positional parameters
    ///
    /// Statements that select nothing return an empty row set.
    pub fn execute(&self, sql: &str, params: &[SqlValue]) -> AppResult<Vec<SqlRow>> {
        let conn = self.connection()?;
        let mut stmt = conn.prepare(sql)?;
        let column_count = stmt.column_count();

        if column_count == 0 {
            let changed = stmt.execute(params_from_iter(params.iter()))?;
            log::debug!("execute: {} row(s) changed", changed);
            return Ok(Vec::new());
        }

        let mut rows = stmt.query(params_from_iter(params.iter()))?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let values = (0..column_count)
                .map(|i| row.get::<_, SqlValue>(i))
                .collect::<Result<SqlRow, _>>()?;
            out.push(values);
        }
        Ok(out)
    }

    pub fn verify_integrity(&self) -> AppResult<()> {
        let conn = self.connection()?;
        verify_database_integrity(&conn)
    }

    pub fn stats(&self) -> AppResult<DatabaseStats> {
        let conn = self.connection()?;
        get_database_stats(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;

    fn store() -> Store {
        let store = Store::in_memory().unwrap();
        store.init().unwrap();
        store
    }

    #[test]
    fn test_init_is_idempotent() {
        let store = store();
        assert!(store.init().is_ok());
        assert!(store.init().is_ok());
    }

    #[test]
    fn test_stats_and_integrity_on_fresh_store() {
        let store = store();
        store.verify_integrity().unwrap();

        let stats = store.stats().unwrap();
        assert_eq!(stats.product_count, 0);
        assert!(stats.size_bytes > 0);
    }

    #[test]
    fn test_execute_insert_and_select() {
        let store = store();

        let inserted = store
            .execute(
                "INSERT INTO products (id, name, price) VALUES (?1, ?2, ?3)",
                &[
                    SqlValue::Text("sku-1".into()),
                    SqlValue::Text("Cable".into()),
                    SqlValue::Real(12.99),
                ],
            )
            .unwrap();
        assert!(inserted.is_empty());

        let rows = store
            .execute("SELECT id, name, price FROM products WHERE id = ?1", &[SqlValue::Text("sku-1".into())])
            .unwrap();
        assert_eq!(
            rows,
            vec![vec![
                SqlValue::Text("sku-1".into()),
                SqlValue::Text("Cable".into()),
                SqlValue::Real(12.99),
            ]]
        );
    }

    #[test]
    fn test_constraint_violation_is_storage_error() {
        let store = store();
        let params = [SqlValue::Text("a".into()), SqlValue::Text("A".into()), SqlValue::Real(1.0)];
        let sql = "INSERT INTO products (id, name, price) VALUES (?1, ?2, ?3)";

        store.execute(sql, &params).unwrap();
        let err = store.execute(sql, &params).unwrap_err();
        assert!(matches!(err, AppError::Database(_)));
        assert!(err.is_storage());
    }

    #[test]
    fn test_file_store_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let config = StoreConfig::at(dir.path().join("catalog.db"));

        {
            let store = Store::open(&config).unwrap();
            store.init().unwrap();
            store
                .execute(
                    "INSERT INTO products (id, name, price) VALUES ('a', 'A', 1.5)",
                    &[],
                )
                .unwrap();
        }

        let store = Store::open(&config).unwrap();
        store.init().unwrap();
        assert_eq!(store.stats().unwrap().product_count, 1);
        store.verify_integrity().unwrap();
    }
}
