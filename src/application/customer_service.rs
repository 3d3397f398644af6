use std::sync::Arc;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::ports::CustomerRepository;

/// Column width of `customers.name` and `customers.email`.
const MAX_FIELD_LEN: usize = 255;

#[derive(Clone)]
pub struct CustomerService {
    customers: Arc<dyn CustomerRepository>,
}

impl CustomerService {
    pub fn new(customers: Arc<dyn CustomerRepository>) -> Self {
        Self { customers }
    }

    pub fn create_customer(&self, name: String, email: String) -> Result<Customer, DomainError> {
        if name.trim().is_empty() {
            return Err(DomainError::InvalidInput("name must not be empty".to_string()));
        }
        if name.chars().count() > MAX_FIELD_LEN || email.chars().count() > MAX_FIELD_LEN {
            return Err(DomainError::InvalidInput(format!(
                "name and email must be at most {} characters",
                MAX_FIELD_LEN
            )));
        }
        if self.customers.find_by_email(&email)?.is_some() {
            return Err(DomainError::EmailInUse);
        }
        self.customers.create(NewCustomer { name, email })
    }
}
