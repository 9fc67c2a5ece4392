// src/lib.rs
// Product Catalog - local-first product list with validated edits
//
// Architecture:
// - Domain-centric: validation and collection rules live in the domain
// - Event-driven: the controller publishes facts, listeners react
// - Explicit: storage is an owned handle, never ambient state
// - Local-first: SQLite store, optional write-through

pub mod application;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    create_product, validate_product, DomainError, DomainResult, Product, ProductCollection,
    ProductId,
};

// ============================================================================
// PUBLIC API - Errors
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{
    create_event_bus, register_persistence_handlers, DomainEvent, EditCancelled, EditStarted,
    EventBus, EventLogEntry, ProductCreated, ProductDeleted, ProductUpdated,
};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{SqlRow, SqlValue, Store, StoreConfig};
pub use repositories::{ProductRepository, SqliteProductRepository};

// ============================================================================
// PUBLIC API - Services & Application
// ============================================================================

pub use application::AppState;
pub use services::{EditDraft, ProductCollectionController};
