// src/services/catalog_controller.rs
//
// Session owner of the product collection.
//
// RULES:
// - Products only enter through the validating factory
// - An operation either fully succeeds or leaves state untouched
// - Events are emitted after the state change, never before
// - Two states only: editing / not editing

use std::sync::Arc;

use crate::domain::{create_product, DomainError, DomainResult, Product, ProductCollection, ProductId};
use crate::events::{EditCancelled, EditStarted, EventBus, ProductCreated, ProductDeleted, ProductUpdated};

/// Field values of the product being edited, for pre-populating a form
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    pub id: ProductId,
    pub name: String,
    pub price: f64,
}

impl From<&Product> for EditDraft {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
        }
    }
}

pub struct ProductCollectionController {
    collection: ProductCollection,
    edit_target: Option<ProductId>,
    last_error: Option<DomainError>,
    event_bus: Arc<EventBus>,
}

impl ProductCollectionController {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self {
            collection: ProductCollection::new(),
            edit_target: None,
            last_error: None,
            event_bus,
        }
    }

    /// Start a session from an existing list, newest first
    pub fn from_products(
        products: impl IntoIterator<Item = Product>,
        event_bus: Arc<EventBus>,
    ) -> DomainResult<Self> {
        let collection = ProductCollection::from_products(products)?;
        log::info!("Catalog session seeded with {} products", collection.len());
        Ok(Self {
            collection,
            ..Self::new(event_bus)
        })
    }

    pub fn products(&self) -> &ProductCollection {
        &self.collection
    }

    pub fn edit_target(&self) -> Option<&str> {
        self.edit_target.as_deref()
    }

    pub fn is_editing(&self) -> bool {
        self.edit_target.is_some()
    }

    /// Most recent rejection, kept until the next success or reset
    pub fn last_error(&self) -> Option<&DomainError> {
        self.last_error.as_ref()
    }

    /// Add a new product at the front of the collection
    pub fn create(&mut self, id: &str, name: &str, price: f64) -> DomainResult<&ProductCollection> {
        let result = self.try_create(id, name, price);
        self.settle(result)?;
        Ok(&self.collection)
    }

    fn try_create(&mut self, id: &str, name: &str, price: f64) -> DomainResult<()> {
        let trimmed_id = id.trim();
        if trimmed_id.is_empty() {
            return Err(DomainError::EmptyId);
        }
        if self.collection.contains(trimmed_id) {
            return Err(DomainError::DuplicateId(trimmed_id.to_string()));
        }

        let product = create_product(id, name, price)?;
        self.collection.prepend(product.clone())?;

        log::debug!("Created product {}", product.id());
        self.event_bus.emit(ProductCreated::new(product));
        Ok(())
    }

    /// Replace the product under edit with freshly validated values
    ///
    /// Identity comes from the edit target; `id` is only the form's
    /// (read-only) copy of it.
    pub fn update(&mut self, id: &str, name: &str, price: f64) -> DomainResult<&ProductCollection> {
        let result = self.try_update(id, name, price);
        self.settle(result)?;
        Ok(&self.collection)
    }

    fn try_update(&mut self, id: &str, name: &str, price: f64) -> DomainResult<()> {
        let target = self.edit_target.clone().ok_or(DomainError::NotEditing)?;
        if id != target {
            log::warn!("Update for {} received id field {:?}; keeping target id", target, id);
        }

        let product = create_product(&target, name, price)?;
        let previous = self.collection.replace(product.clone())?;

        log::debug!("Updated product {}", product.id());
        self.event_bus.emit(ProductUpdated::new(previous, product));
        Ok(())
    }

    /// Create or update depending on the edit state, like a form's save button
    pub fn save(&mut self, id: &str, name: &str, price: f64) -> DomainResult<&ProductCollection> {
        if self.is_editing() {
            self.update(id, name, price)
        } else {
            self.create(id, name, price)
        }
    }

    /// Remove a product; absent ids are a no-op
    ///
    /// Deleting the product under edit also ends the edit and clears the
    /// error; any other delete leaves the edit state and error alone.
    pub fn delete(&mut self, id: &str) -> Option<Product> {
        let removed = self.collection.remove(id);

        if self.edit_target.as_deref() == Some(id) {
            self.cancel_edit();
        }

        if let Some(product) = &removed {
            log::debug!("Deleted product {}", product.id());
            self.event_bus.emit(ProductDeleted::new(product.id().to_string()));
        }
        removed
    }

    /// Select a product for editing; the collection is not touched
    pub fn begin_edit(&mut self, product: &Product) -> EditDraft {
        self.edit_target = Some(product.id().to_string());
        self.last_error = None;
        self.event_bus.emit(EditStarted::new(product.id().to_string()));
        EditDraft::from(product)
    }

    /// Discard any in-progress edit and error state. Idempotent.
    pub fn cancel_edit(&mut self) {
        self.last_error = None;
        if let Some(target) = self.edit_target.take() {
            self.event_bus.emit(EditCancelled::new(target));
        }
    }

    pub fn reset_form(&mut self) {
        self.cancel_edit();
    }

    // Success clears the form state; failure only records the error.
    fn settle(&mut self, result: DomainResult<()>) -> DomainResult<()> {
        match result {
            Ok(()) => {
                self.edit_target = None;
                self.last_error = None;
                Ok(())
            }
            Err(e) => {
                log::debug!("Rejected product change: {}", e);
                self.last_error = Some(e.clone());
                Err(e)
            }
        }
    }
}
