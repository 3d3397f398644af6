use std::collections::HashMap;

use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use uuid::Uuid;

use crate::db::DbPool;
use crate::domain::errors::DomainError;
use crate::domain::ports::ProductRepository;
use crate::domain::product::{NewProduct, Product, RequestedProduct};
use crate::schema::products;

use super::models::{NewProductRow, ProductRow};

pub struct DieselProductRepository {
    pool: DbPool,
}

impl DieselProductRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

impl ProductRepository for DieselProductRepository {
    fn create(&self, product: NewProduct) -> Result<Product, DomainError> {
        let mut conn = self.pool.get()?;

        let row = diesel::insert_into(products::table)
            .values(&NewProductRow {
                id: Uuid::new_v4(),
                name: &product.name,
                price: product.price,
                quantity: product.quantity,
            })
            .returning(ProductRow::as_returning())
            .get_result(&mut conn)
            .map_err(|e| match e {
                DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                    DomainError::ProductNameInUse
                }
                other => other.into(),
            })?;

        Ok(row.into())
    }

    fn find_by_name(&self, name: &str) -> Result<Option<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let row = products::table
            .filter(products::name.eq(name))
            .select(ProductRow::as_select())
            .first(&mut conn)
            .optional()?;

        Ok(row.map(Product::from))
    }

    fn find_all_by_id(&self, ids: &[Uuid]) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        let rows = products::table
            .filter(products::id.eq_any(ids.to_vec()))
            .select(ProductRow::as_select())
            .load(&mut conn)?;

        Ok(rows.into_iter().map(Product::from).collect())
    }

    fn update_quantity(&self, items: &[RequestedProduct]) -> Result<Vec<Product>, DomainError> {
        let mut conn = self.pool.get()?;

        // Plain read-subtract-write: the rows are not locked between the SELECT
        // and the UPDATEs, so a concurrent writer can be overwritten.
        conn.transaction::<_, DomainError, _>(|conn| {
            let ids: Vec<Uuid> = items.iter().map(|i| i.product_id).collect();
            let on_hand: HashMap<Uuid, i32> = products::table
                .filter(products::id.eq_any(ids))
                .select((products::id, products::quantity))
                .load::<(Uuid, i32)>(conn)?
                .into_iter()
                .collect();

            let remaining = items
                .iter()
                .map(|item| {
                    let current = on_hand
                        .get(&item.product_id)
                        .copied()
                        .ok_or(DomainError::ProductNotFound)?;
                    item.remaining_from(current)
                })
                .collect::<Result<Vec<i32>, DomainError>>()?;

            let mut updated = Vec::with_capacity(items.len());
            for (item, remaining) in items.iter().zip(remaining) {
                let row = diesel::update(products::table.find(item.product_id))
                    .set(products::quantity.eq(remaining))
                    .returning(ProductRow::as_returning())
                    .get_result(conn)?;
                updated.push(Product::from(row));
            }
            Ok(updated)
        })
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use uuid::Uuid;

    use super::DieselProductRepository;
    use crate::domain::errors::DomainError;
    use crate::domain::ports::ProductRepository;
    use crate::domain::product::{NewProduct, Product, RequestedProduct};
    use crate::infrastructure::test_db::setup_db;

    fn create(repo: &DieselProductRepository, name: &str, price: &str, quantity: i32) -> Product {
        repo.create(NewProduct {
            name: name.to_string(),
            price: BigDecimal::from_str(price).expect("valid decimal"),
            quantity,
        })
        .expect("create failed")
    }

    #[tokio::test]
    async fn create_and_find_by_name() {
        let Some((_container, pool)) = setup_db().await else {
            return;
        };
        let repo = DieselProductRepository::new(pool);

        let created = create(&repo, "Keyboard", "49.90", 12);

        let found = repo
            .find_by_name("Keyboard")
            .expect("find failed")
            .expect("product should exist");
        assert_eq!(found.id, created.id);
        assert_eq!(found.price, BigDecimal::from_str("49.90").unwrap());
        assert_eq!(found.quantity, 12);
    }

    #[tokio::test]
    async fn find_all_by_id_returns_only_existing_products() {
        let Some((_container, pool)) = setup_db().await else {
            return;
        };
        let repo = DieselProductRepository::new(pool);
        let a = create(&repo, "A", "1.00", 1);
        let b = create(&repo, "B", "2.00", 2);

        let found = repo
            .find_all_by_id(&[a.id, b.id, Uuid::new_v4(), a.id])
            .expect("lookup failed");

        assert_eq!(found.len(), 2);
        assert!(found.iter().any(|p| p.id == a.id));
        assert!(found.iter().any(|p| p.id == b.id));
    }

    #[tokio::test]
    async fn update_quantity_decrements_stock() {
        let Some((_container, pool)) = setup_db().await else {
            return;
        };
        let repo = DieselProductRepository::new(pool);
        let a = create(&repo, "A", "5.00", 10);
        let b = create(&repo, "B", "20.00", 2);

        let updated = repo
            .update_quantity(&[
                RequestedProduct {
                    product_id: a.id,
                    quantity: 3,
                },
                RequestedProduct {
                    product_id: b.id,
                    quantity: 2,
                },
            ])
            .expect("update failed");

        assert_eq!(updated.len(), 2);
        let stock = repo.find_all_by_id(&[a.id, b.id]).expect("lookup failed");
        let quantity_of = |id| stock.iter().find(|p| p.id == id).map(|p| p.quantity);
        assert_eq!(quantity_of(a.id), Some(7));
        assert_eq!(quantity_of(b.id), Some(0));
    }

    #[tokio::test]
    async fn update_quantity_rolls_back_on_unknown_product() {
        let Some((_container, pool)) = setup_db().await else {
            return;
        };
        let repo = DieselProductRepository::new(pool);
        let a = create(&repo, "A", "5.00", 10);

        let result = repo.update_quantity(&[
            RequestedProduct {
                product_id: a.id,
                quantity: 3,
            },
            RequestedProduct {
                product_id: Uuid::new_v4(),
                quantity: 1,
            },
        ]);

        assert!(matches!(result, Err(DomainError::ProductNotFound)));
        let stock = repo.find_all_by_id(&[a.id]).expect("lookup failed");
        assert_eq!(stock[0].quantity, 10);
    }

    #[tokio::test]
    async fn duplicate_name_maps_to_product_name_in_use() {
        let Some((_container, pool)) = setup_db().await else {
            return;
        };
        let repo = DieselProductRepository::new(pool);
        create(&repo, "Keyboard", "49.90", 12);

        let result = repo.create(NewProduct {
            name: "Keyboard".to_string(),
            price: BigDecimal::from_str("10.00").expect("valid decimal"),
            quantity: 1,
        });

        assert!(matches!(result, Err(DomainError::ProductNameInUse)));
    }
}
