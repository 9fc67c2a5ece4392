use super::entity::Product;
use crate::domain::{DomainError, DomainResult};

/// Validates all Product invariants
/// Used to re-check records that did not come straight from the factory
pub fn validate_product(product: &Product) -> DomainResult<()> {
    validate_name(product.name())?;
    validate_price(product.price())?;
    Ok(())
}

/// Name must be non-empty after trimming; returns the trimmed slice
pub(super) fn validate_name(raw_name: &str) -> DomainResult<&str> {
    let trimmed = raw_name.trim();
    if trimmed.is_empty() {
        return Err(DomainError::EmptyName);
    }
    Ok(trimmed)
}

/// Price must be finite and non-negative (NaN and infinities rejected)
pub(super) fn validate_price(raw_price: f64) -> DomainResult<f64> {
    if !raw_price.is_finite() || raw_price < 0.0 {
        return Err(DomainError::InvalidPrice(raw_price));
    }
    Ok(raw_price)
}

/// Invariants that must hold true for the Product domain:
///
/// 1. Identity is supplied by the caller and never reassigned
/// 2. Name is stored trimmed and is never empty
/// 3. Price is finite and >= 0
/// 4. Name is checked before price
/// 5. Construction has no side effects

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::product::create_product;

    #[test]
    fn test_valid_product() {
        let product = create_product("sku-1", "Cable", 12.99).unwrap();
        assert_eq!(product.id(), "sku-1");
        assert_eq!(product.name(), "Cable");
        assert_eq!(product.price(), 12.99);
        assert!(validate_product(&product).is_ok());
    }

    #[test]
    fn test_name_is_trimmed() {
        let product = create_product("sku-1", "  Cable \t", 1.0).unwrap();
        assert_eq!(product.name(), "Cable");
    }

    #[test]
    fn test_id_is_kept_verbatim() {
        let product = create_product(" sku-1 ", "Cable", 1.0).unwrap();
        assert_eq!(product.id(), " sku-1 ");
    }

    #[test]
    fn test_blank_name_fails() {
        assert!(matches!(
            create_product("sku-2", "   ", 3.0),
            Err(DomainError::EmptyName)
        ));
        assert!(matches!(
            create_product("sku-2", "", 3.0),
            Err(DomainError::EmptyName)
        ));
    }

    #[test]
    fn test_negative_price_fails() {
        assert!(matches!(
            create_product("sku-3", "Widget", -1.0),
            Err(DomainError::InvalidPrice(p)) if p == -1.0
        ));
    }

    #[test]
    fn test_non_finite_price_fails() {
        for price in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            assert!(matches!(
                create_product("sku-3", "Widget", price),
                Err(DomainError::InvalidPrice(_))
            ));
        }
    }

    #[test]
    fn test_zero_price_is_valid() {
        assert!(create_product("sku-free", "Sticker", 0.0).is_ok());
    }

    #[test]
    fn test_name_checked_before_price() {
        assert!(matches!(
            create_product("sku-5", " ", f64::NAN),
            Err(DomainError::EmptyName)
        ));
    }
}
