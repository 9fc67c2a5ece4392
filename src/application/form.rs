// src/application/form.rs
//
// Form state and text conversions for the product editor

use crate::application::dto::ProductFormDto;
use crate::services::EditDraft;

/// What the editor currently shows
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductForm {
    pub id: String,
    pub name: String,
    pub price: String,
    pub editing: bool,
    pub error: Option<String>,
}

impl ProductForm {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Load the values of the product being edited
    pub fn prefill(&mut self, draft: &EditDraft) {
        self.id = draft.id.clone();
        self.name = draft.name.clone();
        self.price = draft.price.to_string();
        self.editing = true;
        self.error = None;
    }

    /// Keep what the user typed and show why it was refused
    ///
    /// The id stays fixed while editing.
    pub fn reject(&mut self, input: &ProductFormDto, message: String) {
        if !self.editing {
            self.id = input.id.clone();
        }
        self.name = input.name.clone();
        self.price = input.price.clone();
        self.error = Some(message);
    }
}

/// Parse price text. Blank text means 0; anything else that is not a
/// number becomes NaN so the product factory reports an invalid price.
pub fn parse_price(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

pub fn format_price(price: f64) -> String {
    format!("${:.2}", price)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("12.99"), 12.99);
        assert_eq!(parse_price("  5 "), 5.0);
        assert_eq!(parse_price("-1"), -1.0);
        assert_eq!(parse_price(""), 0.0);
        assert_eq!(parse_price("   "), 0.0);
        assert!(parse_price("abc").is_nan());
        assert!(parse_price("12,99").is_nan());
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(12.99), "$12.99");
        assert_eq!(format_price(20.0), "$20.00");
        assert_eq!(format_price(0.0), "$0.00");
    }

    #[test]
    fn test_prefill_and_clear() {
        let mut form = ProductForm::default();
        form.error = Some("old".to_string());
        form.prefill(&EditDraft {
            id: "sku-4".to_string(),
            name: "Widget".to_string(),
            price: 10.0,
        });

        assert_eq!(form.price, "10");
        assert!(form.editing);
        assert!(form.error.is_none());

        form.clear();
        assert_eq!(form, ProductForm::default());
    }

    #[test]
    fn test_reject_keeps_id_while_editing() {
        let mut form = ProductForm::default();
        form.prefill(&EditDraft {
            id: "sku-4".to_string(),
            name: "Widget".to_string(),
            price: 10.0,
        });

        form.reject(&ProductFormDto::new("other", "", "3"), "Product name must not be empty".to_string());

        assert_eq!(form.id, "sku-4");
        assert_eq!(form.name, "");
        assert_eq!(form.price, "3");
        assert!(form.error.is_some());
    }
}
