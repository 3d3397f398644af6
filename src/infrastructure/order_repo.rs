use diesel::prelude::*;
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::customer::Customer;
use crate::domain::errors::DomainError;
use crate::domain::order::{Order, OrderProduct};
use crate::domain::ports::OrderRepository;
use crate::schema::{customers, orders, orders_products};

use super::models::{CustomerRow, NewOrderProductRow, NewOrderRow, OrderProductRow, OrderRow};

pub struct DieselOrderRepository {
    pool: DbPool,
}

impl DieselOrderRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl OrderRepository for DieselOrderRepository {
    fn create(&self, customer: &Customer, products: Vec<OrderProduct>) -> Result<Order, DomainError> {
        let mut conn = self.pool.get()?;

        conn.transaction::<_, DomainError, _>(|conn| {
            // 1. Insert the order
            let order = diesel::insert_into(orders::table)
                .values(&NewOrderRow {
                    id: Uuid::new_v4(),
                    customer_id: customer.id,
                })
                .returning(OrderRow::as_returning())
                .get_result(conn)?;

            // 2. Insert its line items, numbered in the order they were built
            let new_lines: Vec<NewOrderProductRow> = products
                .iter()
                .enumerate()
                .map(|(idx, p)| NewOrderProductRow {
                    id: Uuid::new_v4(),
                    order_id: order.id,
                    product_id: p.product_id,
                    line_number: idx as i32,
                    price: p.price.clone(),
                    quantity: p.quantity,
                })
                .collect();
            diesel::insert_into(orders_products::table)
                .values(&new_lines)
                .execute(conn)?;

            Ok(Order {
                id: order.id,
                customer: customer.clone(),
                products,
                created_at: order.created_at,
            })
        })
    }

    fn find_by_id(&self, id: Uuid) -> Result<Option<Order>, DomainError> {
        let mut conn = self.pool.get()?;

        let found = orders::table
            .inner_join(customers::table)
            .filter(orders::id.eq(id))
            .select((OrderRow::as_select(), CustomerRow::as_select()))
            .first::<(OrderRow, CustomerRow)>(&mut conn)
            .optional()?;

        let Some((order, customer)) = found else {
            return Ok(None);
        };

        let lines = OrderProductRow::belonging_to(&order)
            .select(OrderProductRow::as_select())
            .order(orders_products::line_number.asc())
            .load(&mut conn)?;

        Ok(Some(Order {
            id: order.id,
            customer: customer.into(),
            products: lines.into_iter().map(OrderProduct::from).collect(),
            created_at: order.created_at,
        }))
    }
}
