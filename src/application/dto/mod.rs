// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are UI-friendly representations
// - DTOs are simple, serializable structs
// - Conversion FROM domain entities only (never TO)

use serde::{Deserialize, Serialize};

use crate::application::form::{format_price, ProductForm};
use crate::domain::Product;

// ============================================================================
// PRODUCT DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDto {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Display text, e.g. "$12.99"
    pub price_label: String,
}

impl From<&Product> for ProductDto {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id().to_string(),
            name: product.name().to_string(),
            price: product.price(),
            price_label: format_price(product.price()),
        }
    }
}

/// Raw form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductFormDto {
    pub id: String,
    pub name: String,
    pub price: String,
}

impl ProductFormDto {
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: price.into(),
        }
    }
}

// ============================================================================
// FORM DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FormStateDto {
    pub id: String,
    pub name: String,
    pub price: String,
    pub editing: bool,
    /// The id field is read-only while editing
    pub id_editable: bool,
    /// "Create" or "Update"
    pub submit_label: String,
    pub error: Option<String>,
}

impl From<&ProductForm> for FormStateDto {
    fn from(form: &ProductForm) -> Self {
        Self {
            id: form.id.clone(),
            name: form.name.clone(),
            price: form.price.clone(),
            editing: form.editing,
            id_editable: !form.editing,
            submit_label: if form.editing { "Update" } else { "Create" }.to_string(),
            error: form.error.clone(),
        }
    }
}

/// Result of a successful save: the new list and the cleared form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveOutcomeDto {
    pub products: Vec<ProductDto>,
    pub form: FormStateDto,
}
