use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::order::{Order, OrderProduct};
use crate::domain::product::RequestedProduct;
use crate::errors::AppError;
use crate::handlers::customers::CustomerResponse;
use crate::state::AppState;

// ── Request / response DTOs ──────────────────────────────────────────────────

#[derive(Debug, Deserialize, ToSchema)]
pub struct OrderItemRequest {
    /// Product id
    pub id: Uuid,
    pub quantity: i32,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateOrderRequest {
    pub customer_id: Uuid,
    pub products: Vec<OrderItemRequest>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderProductResponse {
    pub product_id: Uuid,
    /// Unit price captured when the order was placed
    pub price: String,
    pub quantity: i32,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer: CustomerResponse,
    pub order_products: Vec<OrderProductResponse>,
    pub created_at: String,
}

impl From<OrderProduct> for OrderProductResponse {
    fn from(p: OrderProduct) -> Self {
        OrderProductResponse {
            product_id: p.product_id,
            price: p.price.to_string(),
            quantity: p.quantity,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(o: Order) -> Self {
        OrderResponse {
            id: o.id,
            customer: o.customer.into(),
            order_products: o.products.into_iter().map(Into::into).collect(),
            created_at: o.created_at.to_rfc3339(),
        }
    }
}

// ── Handlers ─────────────────────────────────────────────────────────────────

/// POST /orders
///
/// Validates the customer and the stock of every requested product, records
/// the order with the current unit prices and decrements stock.
#[utoipa::path(
    post,
    path = "/orders",
    request_body = CreateOrderRequest,
    responses(
        (status = 201, description = "Order created successfully", body = OrderResponse),
        (status = 400, description = "Unknown customer or product, or insufficient stock"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn create_order(
    state: web::Data<AppState>,
    body: web::Json<CreateOrderRequest>,
) -> Result<HttpResponse, AppError> {
    let body = body.into_inner();
    let items: Vec<RequestedProduct> = body
        .products
        .iter()
        .map(|p| RequestedProduct {
            product_id: p.id,
            quantity: p.quantity,
        })
        .collect();
    let service = state.orders.clone();

    let order = web::block(move || service.create_order(body.customer_id, items)).await??;

    Ok(HttpResponse::Created().json(OrderResponse::from(order)))
}

/// GET /orders/{id}
///
/// Returns the order together with its customer and line items.
#[utoipa::path(
    get,
    path = "/orders/{id}",
    params(
        ("id" = Uuid, Path, description = "Order UUID"),
    ),
    responses(
        (status = 200, description = "Order found", body = OrderResponse),
        (status = 404, description = "Order not found"),
        (status = 500, description = "Internal server error"),
    ),
    tag = "orders"
)]
pub async fn get_order(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, AppError> {
    let order_id = path.into_inner();
    let service = state.orders.clone();

    let order = web::block(move || service.find_order(order_id)).await??;

    Ok(HttpResponse::Ok().json(OrderResponse::from(order)))
}
