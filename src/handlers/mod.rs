pub mod customers;
pub mod orders;
pub mod products;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;

/// Registers every route of the service, plus Swagger UI under `/swagger-ui/`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::scope("/customers").route("", web::post().to(customers::create_customer)))
        .service(web::scope("/products").route("", web::post().to(products::create_product)))
        .service(
            web::scope("/orders")
                .route("", web::post().to(orders::create_order))
                .route("/{id}", web::get().to(orders::get_order)),
        )
        .service(
            SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
        );
}
