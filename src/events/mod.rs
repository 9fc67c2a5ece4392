// src/events/mod.rs
//
// Internal Event System - Public API
//
// EventHandler is internal to the bus and is not exported

pub mod bus;
pub mod handlers;
pub mod types;

pub use bus::{EventBus, EventLogEntry};
pub use handlers::register_persistence_handlers;
pub use types::{
    DomainEvent, EditCancelled, EditStarted, ProductCreated, ProductDeleted, ProductUpdated,
};

use std::sync::Arc;

/// Create a shared event bus
pub fn create_event_bus() -> Arc<EventBus> {
    Arc::new(EventBus::new())
}
