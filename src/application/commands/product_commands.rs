// src/application/commands/product_commands.rs
//
// Product Command Handlers
//
// RULES:
// - Accept DTOs
// - Call the collection controller
// - Return DTOs
// - Never contain business logic

use std::sync::MutexGuard;

use crate::application::{
    dto::*,
    error_handling::ErrorResponse,
    form::parse_price,
    state::{AppState, CatalogSession},
};
use crate::domain::ProductCollection;
use crate::error::AppError;

type CommandResult<T> = Result<T, ErrorResponse>;

fn lock(state: &AppState) -> CommandResult<MutexGuard<'_, CatalogSession>> {
    state
        .session
        .lock()
        .map_err(|e| ErrorResponse::from(AppError::from(e)))
}

fn to_dtos(products: &ProductCollection) -> Vec<ProductDto> {
    products.iter().map(ProductDto::from).collect()
}

/// List all products, newest first
pub fn list_products(state: &AppState) -> CommandResult<Vec<ProductDto>> {
    let session = lock(state)?;
    Ok(to_dtos(session.controller.products()))
}

/// Current editor state
pub fn current_form(state: &AppState) -> CommandResult<FormStateDto> {
    let session = lock(state)?;
    Ok(FormStateDto::from(&session.form))
}

/// Create, or update when an edit is in progress
///
/// On failure the form keeps the typed values and shows the error.
pub fn save_product(state: &AppState, dto: ProductFormDto) -> CommandResult<SaveOutcomeDto> {
    let mut guard = lock(state)?;
    let session = &mut *guard;
    let price = parse_price(&dto.price);

    match session.controller.save(&dto.id, &dto.name, price) {
        Ok(products) => {
            let products = to_dtos(products);
            session.form.clear();
            Ok(SaveOutcomeDto {
                products,
                form: FormStateDto::from(&session.form),
            })
        }
        Err(e) => {
            let response = ErrorResponse::from(e);
            session.form.reject(&dto, response.message.clone());
            Err(response)
        }
    }
}

/// Load a listed product into the form for editing
pub fn start_edit(state: &AppState, product_id: &str) -> CommandResult<FormStateDto> {
    let mut guard = lock(state)?;
    let session = &mut *guard;

    let product = session
        .controller
        .products()
        .get(product_id)
        .cloned()
        .ok_or_else(|| ErrorResponse::not_found("Product"))?;

    let draft = session.controller.begin_edit(&product);
    session.form.prefill(&draft);
    Ok(FormStateDto::from(&session.form))
}

/// Delete a product; deleting the one under edit also resets the form.
/// Other deletes leave the form, error included, as it was.
pub fn delete_product(state: &AppState, product_id: &str) -> CommandResult<Vec<ProductDto>> {
    let mut guard = lock(state)?;
    let session = &mut *guard;

    let was_editing = session.controller.is_editing();
    session.controller.delete(product_id);
    if was_editing && !session.controller.is_editing() {
        session.form.clear();
    }
    Ok(to_dtos(session.controller.products()))
}

/// Discard the in-progress edit and clear the form
pub fn cancel_edit(state: &AppState) -> CommandResult<FormStateDto> {
    let mut guard = lock(state)?;
    let session = &mut *guard;

    session.controller.cancel_edit();
    session.form.clear();
    Ok(FormStateDto::from(&session.form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::error_handling::ErrorType;
    use crate::events::EventBus;
    use std::sync::Arc;

    fn state() -> AppState {
        AppState::new(Arc::new(EventBus::new()))
    }

    #[test]
    fn test_create_clears_form() {
        let state = state();
        let outcome = save_product(&state, ProductFormDto::new("sku-1", "Cable", "12.99")).unwrap();

        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.products[0].price_label, "$12.99");
        assert_eq!(outcome.form.id, "");
        assert_eq!(outcome.form.submit_label, "Create");
        assert!(outcome.form.error.is_none());
    }

    #[test]
    fn test_rejected_save_keeps_input_and_error() {
        let state = state();
        let err = save_product(&state, ProductFormDto::new("sku-3", "Widget", "abc")).unwrap_err();
        assert_eq!(err.error_type, ErrorType::Validation);

        let form = current_form(&state).unwrap();
        assert_eq!(form.id, "sku-3");
        assert_eq!(form.price, "abc");
        assert_eq!(form.error.as_deref(), Some("Product price must be a non-negative number"));
        assert!(list_products(&state).unwrap().is_empty());
    }

    #[test]
    fn test_duplicate_reported_as_conflict() {
        let state = state();
        save_product(&state, ProductFormDto::new("sku-1", "Cable", "12.99")).unwrap();
        let err = save_product(&state, ProductFormDto::new("sku-1", "Other", "5")).unwrap_err();

        assert_eq!(err.error_type, ErrorType::Conflict);
        assert_eq!(err.message, "Product ID already exists");
        let products = list_products(&state).unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "Cable");
    }

    #[test]
    fn test_edit_flow() {
        let state = state();
        save_product(&state, ProductFormDto::new("sku-4", "Widget", "10")).unwrap();

        let form = start_edit(&state, "sku-4").unwrap();
        assert!(form.editing);
        assert!(!form.id_editable);
        assert_eq!(form.submit_label, "Update");
        assert_eq!(form.price, "10");

        let outcome = save_product(&state, ProductFormDto::new("sku-4", "Widget", "20")).unwrap();
        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.products[0].price, 20.0);
        assert!(!outcome.form.editing);
    }

    #[test]
    fn test_start_edit_unknown_product() {
        let state = state();
        let err = start_edit(&state, "ghost").unwrap_err();
        assert_eq!(err.error_type, ErrorType::NotFound);
    }

    #[test]
    fn test_delete_edit_target_resets_form() {
        let state = state();
        save_product(&state, ProductFormDto::new("sku-4", "Widget", "10")).unwrap();
        start_edit(&state, "sku-4").unwrap();

        let products = delete_product(&state, "sku-4").unwrap();
        assert!(products.is_empty());

        let form = current_form(&state).unwrap();
        assert!(!form.editing);
        assert_eq!(form.name, "");
    }

    #[test]
    fn test_delete_unknown_id_keeps_form_error() {
        let state = state();
        save_product(&state, ProductFormDto::new("sku-1", " ", "1")).unwrap_err();

        delete_product(&state, "does-not-exist").unwrap();

        let form = current_form(&state).unwrap();
        assert_eq!(form.error.as_deref(), Some("Product name must not be empty"));
        assert_eq!(form.id, "sku-1");
    }

    #[test]
    fn test_empty_price_saves_as_zero() {
        let state = state();
        let outcome = save_product(&state, ProductFormDto::new("sku-9", "Free", "")).unwrap();

        assert_eq!(outcome.products.len(), 1);
        assert_eq!(outcome.products[0].price, 0.0);
        assert_eq!(outcome.products[0].price_label, "$0.00");
    }

    #[test]
    fn test_cancel_edit_twice() {
        let state = state();
        save_product(&state, ProductFormDto::new("a", "A", "1")).unwrap();
        start_edit(&state, "a").unwrap();

        let once = cancel_edit(&state).unwrap();
        let twice = cancel_edit(&state).unwrap();
        assert_eq!(once, twice);
        assert!(!twice.editing);
    }
}
