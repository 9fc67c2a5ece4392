// src/repositories/mod.rs
//
// Repository layer
//
// CRITICAL RULES:
// - Repositories are DUMB data mappers
// - NO event emission
// - Explicit SQL only

pub mod product_repository;

pub use product_repository::{ProductRepository, SqliteProductRepository};

#[cfg(test)]
pub use product_repository::MockProductRepository;
