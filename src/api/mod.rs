//! API module - HTTP routes and handlers

pub mod handlers;
pub mod openapi;

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::openapi::ApiDoc;

/// Configure all API routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .service(
                web::scope("/shipping")
                    .route("/serviceability", web::get().to(handlers::shipping::check_serviceability))
                    .route("/orders", web::post().to(handlers::shipping::submit_orders))
                    .route("/pickup-locations", web::post().to(handlers::shipping::add_pickup_location))
                    .route("/invoices", web::post().to(handlers::shipping::fetch_invoice))
            )
    )
    .route("/health", web::get().to(handlers::health::health_check))
    // Swagger UI and OpenAPI spec
    .service(
        SwaggerUi::new("/swagger-ui/{_:.*}")
            .url("/api-docs/openapi.json", ApiDoc::openapi())
    );
}
