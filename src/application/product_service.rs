use std::sync::Arc;

use bigdecimal::{BigDecimal, Zero};

use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product};

/// Column widths of the `products` table.
const MAX_NAME_LEN: usize = 255;
const PRICE_SCALE: i64 = 2;
const PRICE_INTEGER_DIGITS: i64 = 8;

#[derive(Clone)]
pub struct ProductService {
    products: Arc<dyn ProductRepository>,
}

impl ProductService {
    pub fn new(products: Arc<dyn ProductRepository>) -> Self {
        Self { products }
    }

    pub fn create_product(
        &self,
        name: String,
        price: BigDecimal,
        quantity: i32,
    ) -> Result<Product, DomainError> {
        if price < BigDecimal::zero() {
            return Err(DomainError::InvalidInput(format!(
                "price must not be negative, got {}",
                price
            )));
        }
        if price.normalized().as_bigint_and_exponent().1 > PRICE_SCALE {
            return Err(DomainError::InvalidInput(format!(
                "price must have at most {} decimal places, got {}",
                PRICE_SCALE, price
            )));
        }
        if price >= BigDecimal::new(1.into(), -PRICE_INTEGER_DIGITS) {
            return Err(DomainError::InvalidInput(format!(
                "price must be below 1e{}, got {}",
                PRICE_INTEGER_DIGITS, price
            )));
        }
        if name.trim().is_empty() || name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::InvalidInput(format!(
                "name must be between 1 and {} characters",
                MAX_NAME_LEN
            )));
        }
        if quantity < 0 {
            return Err(DomainError::InvalidInput(format!(
                "quantity must not be negative, got {}",
                quantity
            )));
        }
        if self.products.find_by_name(&name)?.is_some() {
            return Err(DomainError::ProductNameInUse);
        }
        self.products.create(NewProduct {
            name,
            price: price.with_scale(PRICE_SCALE),
            quantity,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;
    use crate::infrastructure::memory::InMemoryStore;

    fn price(s: &str) -> BigDecimal {
        BigDecimal::from_str(s).expect("valid decimal")
    }

    #[test]
    fn creates_product() {
        let service = ProductService::new(Arc::new(InMemoryStore::new()));

        let product = service
            .create_product("Keyboard".to_string(), price("49.90"), 12)
            .expect("create failed");

        assert_eq!(product.name, "Keyboard");
        assert_eq!(product.price, price("49.90"));
        assert_eq!(product.quantity, 12);
    }

    #[test]
    fn rejects_duplicate_name() {
        let service = ProductService::new(Arc::new(InMemoryStore::new()));
        service
            .create_product("Keyboard".to_string(), price("49.90"), 12)
            .expect("create failed");

        let result = service.create_product("Keyboard".to_string(), price("10.00"), 1);

        assert!(matches!(result, Err(DomainError::ProductNameInUse)));
    }

    #[test]
    fn rejects_negative_price_and_quantity() {
        let service = ProductService::new(Arc::new(InMemoryStore::new()));

        let negative_price = service.create_product("A".to_string(), price("-0.01"), 1);
        let negative_quantity = service.create_product("B".to_string(), price("1.00"), -1);

        assert!(matches!(negative_price, Err(DomainError::InvalidInput(_))));
        assert!(matches!(negative_quantity, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn rejects_prices_the_price_column_cannot_hold() {
        let service = ProductService::new(Arc::new(InMemoryStore::new()));

        let too_precise = service.create_product("A".to_string(), price("9.999"), 1);
        let too_large = service.create_product("B".to_string(), price("100000000"), 1);

        assert!(matches!(too_precise, Err(DomainError::InvalidInput(_))));
        assert!(matches!(too_large, Err(DomainError::InvalidInput(_))));
    }

    #[test]
    fn accepts_trailing_zeros_and_largest_price() {
        let service = ProductService::new(Arc::new(InMemoryStore::new()));

        let padded = service
            .create_product("A".to_string(), price("5.0000"), 1)
            .expect("trailing zeros should be accepted");
        service
            .create_product("B".to_string(), price("99999999.99"), 1)
            .expect("largest price should be accepted");

        assert_eq!(padded.price.to_string(), "5.00");
    }

    #[test]
    fn rejects_overlong_name() {
        let service = ProductService::new(Arc::new(InMemoryStore::new()));

        let result = service.create_product("x".repeat(256), price("1.00"), 1);

        assert!(matches!(result, Err(DomainError::InvalidInput(_))));
    }
}
