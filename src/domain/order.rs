use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::customer::Customer;

/// Line item. `price` is the unit price captured when the order was placed.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderProduct {
    pub product_id: Uuid,
    pub price: BigDecimal,
    pub quantity: i32,
}

#[derive(Debug, Clone)]
pub struct Order {
    pub id: Uuid,
    pub customer: Customer,
    pub products: Vec<OrderProduct>,
    pub created_at: DateTime<Utc>,
}
