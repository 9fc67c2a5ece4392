// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

pub mod catalog;
pub mod product;

pub use catalog::ProductCollection;
pub use product::{create_product, validate_product, Product, ProductId};

use thiserror::Error;

/// Domain-level errors
/// These are the structured rejections surfaced to the caller
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("Product ID already exists: {0}")]
    DuplicateId(ProductId),

    #[error("Product ID must not be empty")]
    EmptyId,

    #[error("Product name must not be empty")]
    EmptyName,

    #[error("Product price must be a non-negative number, got {0}")]
    InvalidPrice(f64),

    #[error("No edit in progress")]
    NotEditing,

    #[error("Product not found: {0}")]
    NotFound(ProductId),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
