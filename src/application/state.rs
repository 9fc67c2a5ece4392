// src/application/state.rs

use std::sync::{Arc, Mutex};

use crate::application::form::ProductForm;
use crate::events::EventBus;
use crate::services::ProductCollectionController;

/// The one interactive session: collection owner plus the editor form
pub struct CatalogSession {
    pub controller: ProductCollectionController,
    pub form: ProductForm,
}

/// Application state shared with the presentation layer.
/// The session is behind a single mutex so one user action runs to
/// completion before the next starts.
pub struct AppState {
    pub event_bus: Arc<EventBus>,
    pub session: Mutex<CatalogSession>,
}

impl AppState {
    pub fn new(event_bus: Arc<EventBus>) -> Self {
        Self::with_controller(ProductCollectionController::new(event_bus.clone()), event_bus)
    }

    pub fn with_controller(controller: ProductCollectionController, event_bus: Arc<EventBus>) -> Self {
        Self {
            event_bus,
            session: Mutex::new(CatalogSession {
                controller,
                form: ProductForm::default(),
            }),
        }
    }
}
