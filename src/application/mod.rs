// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - Boundary between the presentation layer and the controller
// - Translates raw text input into domain calls and results into DTOs

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod form;
pub mod interaction;
pub mod state;

pub use dto::*;
pub use error_handling::{ErrorResponse, ErrorType};
pub use form::{format_price, parse_price, ProductForm};
pub use interaction::{handle_card_press, InteractionEvent};
pub use state::{AppState, CatalogSession};
