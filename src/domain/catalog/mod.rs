//! Critical Catalog Invariants:
//!
//! 1. No two products share an identifier
//! 2. Every held product satisfies the Product invariants
//! 3. Order is newest-first; edits keep position
//! 4. Deleting an absent identifier is a no-op

pub mod collection;

pub use collection::ProductCollection;
