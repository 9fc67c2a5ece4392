// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are emitted only after the state change succeeded
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::domain::{Product, ProductId};

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

macro_rules! impl_domain_event {
    ($ty:ident) => {
        impl DomainEvent for $ty {
            fn event_id(&self) -> Uuid { self.event_id }
            fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
            fn event_type(&self) -> &'static str { stringify!($ty) }
        }
    };
}

// ============================================================================
// PRODUCT EVENTS
// ============================================================================

/// Emitted when a product is added to the collection
#[derive(Debug, Clone, Serialize)]
pub struct ProductCreated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product: Product,
}

impl ProductCreated {
    pub fn new(product: Product) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product,
        }
    }
}

impl_domain_event!(ProductCreated);

/// Emitted when an edited product replaces its previous value
#[derive(Debug, Clone, Serialize)]
pub struct ProductUpdated {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub previous: Product,
    pub product: Product,
}

impl ProductUpdated {
    pub fn new(previous: Product, product: Product) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            previous,
            product,
        }
    }
}

impl_domain_event!(ProductUpdated);

/// Emitted when a product is removed from the collection
#[derive(Debug, Clone, Serialize)]
pub struct ProductDeleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: ProductId,
}

impl ProductDeleted {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
        }
    }
}

impl_domain_event!(ProductDeleted);

// ============================================================================
// EDIT SESSION EVENTS
// ============================================================================

/// Emitted when an edit target is selected
#[derive(Debug, Clone, Serialize)]
pub struct EditStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: ProductId,
}

impl EditStarted {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
        }
    }
}

impl_domain_event!(EditStarted);

/// Emitted when an in-progress edit is discarded without saving
#[derive(Debug, Clone, Serialize)]
pub struct EditCancelled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub product_id: ProductId,
}

impl EditCancelled {
    pub fn new(product_id: ProductId) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            product_id,
        }
    }
}

impl_domain_event!(EditCancelled);
