// src/db/config.rs
//
// Store configuration

use std::path::{Path, PathBuf};

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "product-catalog";
const DB_FILE: &str = "catalog.db";

/// Where and how to open the SQLite store
#[derive(Debug, Clone, PartialEq)]
pub struct StoreConfig {
    pub path: PathBuf,
    pub max_connections: u32,
    pub busy_timeout_ms: u32,
}

impl StoreConfig {
    /// Store at an explicit file path
    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Self::default()
        }
    }

    /// Create the parent directory of the database file if needed
    pub fn ensure_parent_dir(&self) -> AppResult<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(AppError::Io)?;
        }
        Ok(())
    }
}

impl Default for StoreConfig {
    /// `{data_dir}/product-catalog/catalog.db`, or the working directory
    /// when the platform has no data dir
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self {
            path: default_path_in(&base),
            max_connections: 4,
            busy_timeout_ms: 5000,
        }
    }
}

fn default_path_in(base: &Path) -> PathBuf {
    base.join(APP_DIR).join(DB_FILE)
}
