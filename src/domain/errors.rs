use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("The customer does not exist.")]
    CustomerNotFound,
    #[error("The product does not exist.")]
    ProductNotFound,
    #[error("The product does not have quantity on stock.")]
    InsufficientStock { product_id: Uuid },
    #[error("Order not found")]
    OrderNotFound,
    #[error("This e-mail is already in use.")]
    EmailInUse,
    #[error("A product with this name already exists.")]
    ProductNameInUse,
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Internal error: {0}")]
    Internal(String),
}
