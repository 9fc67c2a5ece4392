// demos/catalog_session.rs
//
// Walks one catalog session end to end against a throwaway database:
// create, duplicate, bad input, edit, delete-while-editing, reload.
//
// Usage: cargo run --example catalog_session [-- <db_path>]

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use product_catalog::application::commands::*;
use product_catalog::application::ProductFormDto;
use product_catalog::{
    create_event_bus, register_persistence_handlers, AppState, ProductCollectionController,
    ProductRepository, SqliteProductRepository, Store, StoreConfig,
};

fn main() -> anyhow::Result<()> {
    println!("=== CATALOG SESSION ===");

    // =========================================================================
    // 1. INFRASTRUCTURE
    // =========================================================================
    let db_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| std::env::temp_dir().join("product-catalog-demo.db"));

    let store = Store::open(&StoreConfig::at(&db_path)).context("opening store")?;
    store.init().context("initializing schema")?;
    println!("[SETUP] Store ready at {}", db_path.display());

    let repo = Arc::new(SqliteProductRepository::new(store.clone()));
    let event_bus = create_event_bus();
    register_persistence_handlers(&event_bus, repo.clone());

    // =========================================================================
    // 2. SESSION (seeded from whatever is already stored)
    // =========================================================================
    let existing = repo.list_all()?;
    println!("[SETUP] {} product(s) already stored", existing.len());
    let controller = ProductCollectionController::from_products(existing, event_bus.clone())?;
    let state = AppState::with_controller(controller, event_bus.clone());

    // =========================================================================
    // 3. SCENARIOS
    // =========================================================================
    let steps = [
        ("create sku-1", ProductFormDto::new("sku-1", "Cable", "12.99")),
        ("duplicate sku-1", ProductFormDto::new("sku-1", "Other", "5")),
        ("blank name", ProductFormDto::new("sku-2", "  ", "3")),
        ("negative price", ProductFormDto::new("sku-3", "Widget", "-1")),
        ("create sku-4", ProductFormDto::new("sku-4", "Widget", "10")),
    ];
    for (label, form) in steps {
        match save_product(&state, form) {
            Ok(outcome) => println!("[OK]   {}: {} product(s)", label, outcome.products.len()),
            Err(e) => println!("[FAIL] {}: {}", label, e),
        }
    }

    start_edit(&state, "sku-4")?;
    match save_product(&state, ProductFormDto::new("sku-4", "Widget", "20")) {
        Ok(_) => println!("[OK]   update sku-4 to 20"),
        Err(e) => println!("[FAIL] update sku-4: {}", e),
    }

    start_edit(&state, "sku-4")?;
    delete_product(&state, "sku-4")?;
    let form = current_form(&state)?;
    println!("[OK]   delete while editing: editing={}", form.editing);

    // =========================================================================
    // 4. RESULT
    // =========================================================================
    for product in list_products(&state)? {
        println!("  {} | {} | {}", product.id, product.name, product.price_label);
    }

    let stats = store.stats()?;
    println!("[STORE] {} product(s), {} bytes", stats.product_count, stats.size_bytes);
    println!("[EVENTS] {} emitted", event_bus.get_event_log().len());

    Ok(())
}
