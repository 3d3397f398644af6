use std::sync::Arc;

use uuid::Uuid;

use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderProduct};
use crate::domain::ports::{CustomerRepository, OrderRepository, ProductRepository};
use crate::domain::product::RequestedProduct;

#[derive(Clone)]
pub struct OrderService {
    orders: Arc<dyn OrderRepository>,
    products: Arc<dyn ProductRepository>,
    customers: Arc<dyn CustomerRepository>,
}

impl OrderService {
    pub fn new(
        orders: Arc<dyn OrderRepository>,
        products: Arc<dyn ProductRepository>,
        customers: Arc<dyn CustomerRepository>,
    ) -> Self {
        Self {
            orders,
            products,
            customers,
        }
    }

    /// Validates the request against the customer and current stock, records the
    /// order and then decrements stock for every requested item.
    ///
    /// The stock read used for validation and the decrement are separate store
    /// calls with no lock between them, so two concurrent orders for the same
    /// product can both pass validation. If the decrement fails after the order
    /// was recorded, the order is not rolled back.
    pub fn create_order(
        &self,
        customer_id: Uuid,
        items: Vec<RequestedProduct>,
    ) -> Result<Order, DomainError> {
        if items.is_empty() {
            return Err(DomainError::InvalidInput(
                "an order must contain at least one product".to_string(),
            ));
        }
        flag_suspicious_items(&items);

        let customer = self
            .customers
            .find_by_id(customer_id)?
            .ok_or(DomainError::CustomerNotFound)?;

        let ids: Vec<Uuid> = items.iter().map(|i| i.product_id).collect();
        let stock = self.products.find_all_by_id(&ids)?;

        // Compares against the raw request length: a repeated id shrinks the found
        // set and can mask a missing product.
        if stock.len() != items.len() {
            return Err(DomainError::ProductNotFound);
        }

        let lines = stock
            .iter()
            .map(|product| {
                let requested = items
                    .iter()
                    .find(|i| i.product_id == product.id)
                    .ok_or(DomainError::InsufficientStock {
                        product_id: product.id,
                    })?;
                if requested.quantity > product.quantity {
                    return Err(DomainError::InsufficientStock {
                        product_id: product.id,
                    });
                }
                Ok(OrderProduct {
                    product_id: product.id,
                    price: product.price.clone(),
                    quantity: requested.quantity,
                })
            })
            .collect::<Result<Vec<_>, DomainError>>()?;

        let order = self.orders.create(&customer, lines)?;

        if let Err(e) = self.products.update_quantity(&items) {
            log::error!(
                "order {} was recorded but the stock update failed: {}",
                order.id,
                e
            );
            return Err(e);
        }

        log::info!(
            "created order {} for customer {} with {} line(s)",
            order.id,
            customer.id,
            order.products.len()
        );
        Ok(order)
    }

    pub fn find_order(&self, id: Uuid) -> Result<Order, DomainError> {
        self.orders
            .find_by_id(id)?
            .ok_or(DomainError::OrderNotFound)
    }
}

fn flag_suspicious_items(items: &[RequestedProduct]) {
    for (idx, item) in items.iter().enumerate() {
        if item.quantity <= 0 {
            log::warn!(
                "non-positive quantity {} requested for product {}",
                item.quantity,
                item.product_id
            );
        }
        if items[..idx].iter().any(|i| i.product_id == item.product_id) {
            log::warn!("product {} requested more than once", item.product_id);
        }
    }
}
