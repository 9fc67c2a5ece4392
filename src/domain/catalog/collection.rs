use std::collections::HashSet;

use serde::Serialize;

use crate::domain::product::{validate_product, Product, ProductId};
use crate::domain::{DomainError, DomainResult};

/// Ordered, identifier-unique set of Products held for a session
///
/// Order is newest-first for display. A side index of identifiers keeps
/// the uniqueness check O(1); the sequence itself stays the single
/// source of order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ProductCollection {
    items: Vec<Product>,
    #[serde(skip)]
    ids: HashSet<ProductId>,
}

impl ProductCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a collection from products already in display order
    ///
    /// Every record is re-validated and identifiers must be unique.
    pub fn from_products(products: impl IntoIterator<Item = Product>) -> DomainResult<Self> {
        let mut collection = Self::new();
        for product in products {
            validate_product(&product)?;
            if !collection.ids.insert(product.id().to_string()) {
                return Err(DomainError::DuplicateId(product.id().to_string()));
            }
            collection.items.push(product);
        }
        Ok(collection)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        if !self.contains(id) {
            return None;
        }
        self.items.iter().find(|p| p.id() == id)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Product> {
        self.items.iter()
    }

    pub fn as_slice(&self) -> &[Product] {
        &self.items
    }

    pub fn first(&self) -> Option<&Product> {
        self.items.first()
    }

    /// Insert at the front (newest-first)
    pub fn prepend(&mut self, product: Product) -> DomainResult<()> {
        if self.contains(product.id()) {
            return Err(DomainError::DuplicateId(product.id().to_string()));
        }
        self.ids.insert(product.id().to_string());
        self.items.insert(0, product);
        Ok(())
    }

    /// Swap out the element with the same identifier, keeping its position
    ///
    /// Returns the previous value.
    pub fn replace(&mut self, product: Product) -> DomainResult<Product> {
        let slot = self
            .items
            .iter_mut()
            .find(|p| p.id() == product.id())
            .ok_or_else(|| DomainError::NotFound(product.id().to_string()))?;

        Ok(std::mem::replace(slot, product))
    }

    /// Remove by identifier; absent ids are not an error
    pub fn remove(&mut self, id: &str) -> Option<Product> {
        if !self.ids.remove(id) {
            return None;
        }
        let index = self.items.iter().position(|p| p.id() == id)?;
        Some(self.items.remove(index))
    }
}

impl PartialEq for ProductCollection {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<'a> IntoIterator for &'a ProductCollection {
    type Item = &'a Product;
    type IntoIter = std::slice::Iter<'a, Product>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::create_product;

    fn product(id: &str, name: &str, price: f64) -> Product {
        create_product(id, name, price).unwrap()
    }

    #[test]
    fn test_prepend_keeps_newest_first() {
        let mut collection = ProductCollection::new();
        collection.prepend(product("a", "First", 1.0)).unwrap();
        collection.prepend(product("b", "Second", 2.0)).unwrap();

        let ids: Vec<&str> = collection.iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_prepend_rejects_duplicate() {
        let mut collection = ProductCollection::new();
        collection.prepend(product("a", "First", 1.0)).unwrap();

        let result = collection.prepend(product("a", "Other", 5.0));
        assert!(matches!(result, Err(DomainError::DuplicateId(id)) if id == "a"));
        assert_eq!(collection.len(), 1);
        assert_eq!(collection.get("a").unwrap().name(), "First");
    }

    #[test]
    fn test_replace_keeps_position() {
        let mut collection = ProductCollection::new();
        collection.prepend(product("a", "A", 1.0)).unwrap();
        collection.prepend(product("b", "B", 2.0)).unwrap();
        collection.prepend(product("c", "C", 3.0)).unwrap();

        let previous = collection.replace(product("b", "B2", 20.0)).unwrap();
        assert_eq!(previous.name(), "B");

        let names: Vec<&str> = collection.iter().map(|p| p.name()).collect();
        assert_eq!(names, vec!["C", "B2", "A"]);
    }

    #[test]
    fn test_replace_missing_fails() {
        let mut collection = ProductCollection::new();
        let result = collection.replace(product("ghost", "Ghost", 1.0));
        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert!(collection.is_empty());
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut collection = ProductCollection::new();
        collection.prepend(product("a", "A", 1.0)).unwrap();

        assert!(collection.remove("zzz").is_none());
        assert_eq!(collection.len(), 1);

        assert!(collection.remove("a").is_some());
        assert!(collection.is_empty());
        assert!(!collection.contains("a"));
    }

    #[test]
    fn test_from_products_rejects_duplicates() {
        let result = ProductCollection::from_products(vec![
            product("a", "A", 1.0),
            product("a", "Again", 2.0),
        ]);
        assert!(matches!(result, Err(DomainError::DuplicateId(_))));
    }

    #[test]
    fn test_removed_id_can_be_reused() {
        let mut collection = ProductCollection::new();
        collection.prepend(product("a", "A", 1.0)).unwrap();
        collection.remove("a");
        assert!(collection.prepend(product("a", "A again", 1.5)).is_ok());
    }
}
