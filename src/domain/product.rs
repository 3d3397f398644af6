use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::DomainError;

#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: BigDecimal,
    /// Units currently in stock.
    pub quantity: i32,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub price: BigDecimal,
    pub quantity: i32,
}

/// A product id together with the number of units a caller asks for.
///
/// Used both as the order request entry and as the stock decrement passed to
/// [`ProductRepository::update_quantity`](super::ports::ProductRepository::update_quantity).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedProduct {
    pub product_id: Uuid,
    pub quantity: i32,
}

impl RequestedProduct {
    /// Stock left after taking this request out of `on_hand`.
    pub fn remaining_from(&self, on_hand: i32) -> Result<i32, DomainError> {
        on_hand.checked_sub(self.quantity).ok_or_else(|| {
            DomainError::InvalidInput(format!(
                "quantity {} for product {} overflows its stock of {}",
                self.quantity, self.product_id, on_hand
            ))
        })
    }
}
