use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard};

use chrono::Utc;
use uuid::Uuid;

use crate::domain::customer::{Customer, NewCustomer};
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderProduct};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::{NewProduct, Product, RequestedProduct};

#[derive(Default)]
struct Tables {
    customers: HashMap<Uuid, Customer>,
    products: HashMap<Uuid, Product>,
    orders: HashMap<Uuid, Order>,
}

/// Process-local storage backend implementing every repository port.
///
/// Each repository call takes the lock once, so a call is atomic on its own, but
/// nothing spans calls: `find_all_by_id` followed by `update_quantity` has the
/// same read-then-write window as the Postgres adapter.
#[derive(Default)]
pub struct InMemoryStore {
    tables: Mutex<Tables>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, DomainError> {
        self.tables
            .lock()
            .map_err(|e| DomainError::Internal(format!("store lock poisoned: {}", e)))
    }

    /// Current stock for `id`, if the product exists.
    pub fn stock_of(&self, id: Uuid) -> Option<i32> {
        self.lock().ok()?.products.get(&id).map(|p| p.quantity)
    }

    pub fn order_count(&self) -> usize {
        self.lock().map(|t| t.orders.len()).unwrap_or(0)
    }
}

impl CustomerRepository for InMemoryStore {
    fn create(&self, customer: NewCustomer) -> Result<Customer, DomainError> {
        let created = Customer {
            id: Uuid::new_v4(),
            name: customer.name,
            email: customer.email,
            created_at: Utc::now(),
        };
        self.lock()?.customers.insert(created.id, created.clone());
        Ok(created)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Customer>, DomainError> {
        Ok(self.lock()?.customers.get(&id).cloned())
    }

    fn find_by_email(&self, email: &str) -> Result<Option<Customer>, DomainError> {
        Ok(self
            .lock()?
            .customers
            .values()
            .find(|c| c.email == email)
            .cloned())
    }
}

impl ProductRepository for InMemoryStore {
    fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let created = Product {
            id: Uuid::new_v4(),
            name: product.name,
            price: product.price,
            quantity: product.quantity,
            created_at: Utc::now(),
        };
        self.lock()?.products.insert(created.id, created.clone());
        Ok(created)
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        Ok(self
            .lock()?
            .products
            .values()
            .find(|p| p.name == name)
            .cloned())
    }

    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        let tables = self.lock()?;
        let mut found: Vec<Product> = Vec::with_capacity(ids.len());
        for id in ids {
            if found.iter().any(|p| p.id == *id) {
                continue;
            }
            if let Some(product) = tables.products.get(id) {
                found.push(product.clone());
            }
        }
        Ok(found)
    }

    fn update_quantity(&self, items: &[RequestedProduct]) -> Result<Vec<Product>, DomainError> {
        let mut tables = self.lock()?;

        // Every new value is computed from the stock read up front, so a repeated
        // id is written twice from the same base and the last write wins.
        let mut on_hand: HashMap<Uuid, i32> = HashMap::with_capacity(items.len());
        for item in items {
            let product = tables
                .products
                .get(&item.product_id)
                .ok_or(DomainError::ProductNotFound)?;
            on_hand.insert(product.id, product.quantity);
        }

        let remaining = items
            .iter()
            .map(|item| item.remaining_from(on_hand[&item.product_id]))
            .collect::<Result<Vec<i32>, DomainError>>()?;

        let mut updated = Vec::with_capacity(items.len());
        for (item, remaining) in items.iter().zip(remaining) {
            let product = tables
                .products
                .get_mut(&item.product_id)
                .ok_or(DomainError::ProductNotFound)?;
            product.quantity = remaining;
            updated.push(product.clone());
        }
        Ok(updated)
    }
}

impl OrderRepository for InMemoryStore {
    fn create(&self, customer: &Customer, products: Vec<OrderProduct>) -> Result<Order, DomainError> {
        let order = Order {
            id: Uuid::new_v4(),
            customer: customer.clone(),
            products,
            created_at: Utc::now(),
        };
        self.lock()?.orders.insert(order.id, order.clone());
        Ok(order)
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        Ok(self.lock()?.orders.get(&id).cloned())
    }
}
