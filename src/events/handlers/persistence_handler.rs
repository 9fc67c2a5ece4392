// src/events/handlers/persistence_handler.rs
//
// Write-through from the in-memory collection to the product store.
//
// Opt-in: nothing registers this by default, so the session collection
// and the store stay independent unless the caller wires them.
//
// RULES:
// - Best effort: a storage failure is logged, never propagated
// - Never touches the in-memory collection

use std::sync::Arc;

use crate::events::{EventBus, ProductCreated, ProductDeleted, ProductUpdated};
use crate::repositories::ProductRepository;

/// Mirror product changes into `repository`
pub fn register_persistence_handlers(bus: &EventBus, repository: Arc<dyn ProductRepository>) {
    let repo = Arc::clone(&repository);
    bus.subscribe::<ProductCreated, _>(move |event| {
        if let Err(e) = repo.save(&event.product) {
            log::warn!("[PERSISTENCE] Failed to store created product {}: {}", event.product.id(), e);
        }
    });

    let repo = Arc::clone(&repository);
    bus.subscribe::<ProductUpdated, _>(move |event| {
        if let Err(e) = repo.save(&event.product) {
            log::warn!("[PERSISTENCE] Failed to store updated product {}: {}", event.product.id(), e);
        }
    });

    let repo = repository;
    bus.subscribe::<ProductDeleted, _>(move |event| {
        if let Err(e) = repo.delete(&event.product_id) {
            log::warn!("[PERSISTENCE] Failed to delete product {}: {}", event.product_id, e);
        }
    });

    log::info!("[PERSISTENCE] Handlers registered");
}
