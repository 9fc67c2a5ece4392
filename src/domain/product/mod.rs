pub mod entity;
pub mod invariants;

pub use entity::{create_product, Product, ProductId};
pub use invariants::validate_product;
