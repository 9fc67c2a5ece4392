// src/repositories/product_repository.rs

use rusqlite::{params, OptionalExtension};

use crate::db::Store;
use crate::domain::{create_product, Product};
use crate::error::{AppError, AppResult};

#[cfg_attr(test, mockall::automock)]
pub trait ProductRepository: Send + Sync {
    /// Insert or overwrite by id; an overwrite keeps the original list position
    fn save(&self, product: &Product) -> AppResult<()>;
    fn get_by_id(&self, id: &str) -> AppResult<Option<Product>>;
    /// Newest first
    fn list_all(&self) -> AppResult<Vec<Product>>;
    fn delete(&self, id: &str) -> AppResult<()>;
    fn exists(&self, id: &str) -> AppResult<bool>;
    fn count(&self) -> AppResult<usize>;
}

pub struct SqliteProductRepository {
    store: Store,
}

type RawProduct = (String, String, f64);

impl SqliteProductRepository {
    pub fn new(store: Store) -> Self {
        Self { store }
    }

    fn row_to_raw(row: &rusqlite::Row) -> Result<RawProduct, rusqlite::Error> {
        Ok((row.get("id")?, row.get("name")?, row.get("price")?))
    }

    // Rows go back through the factory; a record that fails validation
    // surfaces as a domain error instead of entering memory.
    fn raw_to_product((id, name, price): RawProduct) -> AppResult<Product> {
        Ok(create_product(&id, &name, price)?)
    }
}

fn row_count(count: i64) -> AppResult<usize> {
    usize::try_from(count).map_err(|e| AppError::Other(format!("Invalid row count {}: {}", count, e)))
}

impl ProductRepository for SqliteProductRepository {
    fn save(&self, product: &Product) -> AppResult<()> {
        let conn = self.store.connection()?;

        conn.execute(
            "INSERT INTO products (id, name, price) VALUES (?1, ?2, ?3)
             ON CONFLICT(id) DO UPDATE SET name = excluded.name, price = excluded.price",
            params![product.id(), product.name(), product.price()],
        )?;

        Ok(())
    }

    fn get_by_id(&self, id: &str) -> AppResult<Option<Product>> {
        let conn = self.store.connection()?;

        let raw = conn
            .query_row(
                "SELECT id, name, price FROM products WHERE id = ?1",
                params![id],
                Self::row_to_raw,
            )
            .optional()?;

        raw.map(Self::raw_to_product).transpose()
    }

    fn list_all(&self) -> AppResult<Vec<Product>> {
        let conn = self.store.connection()?;

        let mut stmt = conn.prepare("SELECT id, name, price FROM products ORDER BY rowid DESC")?;
        let raws = stmt
            .query_map([], Self::row_to_raw)?
            .collect::<Result<Vec<_>, _>>()?;

        raws.into_iter().map(Self::raw_to_product).collect()
    }

    fn delete(&self, id: &str) -> AppResult<()> {
        let conn = self.store.connection()?;
        conn.execute("DELETE FROM products WHERE id = ?1", params![id])?;
        Ok(())
    }

    fn exists(&self, id: &str) -> AppResult<bool> {
        let conn = self.store.connection()?;
        let exists: bool = conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM products WHERE id = ?1)",
            params![id],
            |row| row.get(0),
        )?;
        Ok(exists)
    }

    fn count(&self) -> AppResult<usize> {
        let conn = self.store.connection()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM products", [], |row| row.get(0))?;
        row_count(count)
    }
}
