//! OpenAPI 3.0 specification definition

use utoipa::OpenApi;

use crate::api::handlers::{
    health::HealthResponse,
    shipping::{
        ServiceabilityResponse, SubmitOrdersRequest, InvoiceRequest,
        ErrorResponse, ApiError,
    },
};
use crate::domain::{ContactAddress, LineItem, PickupAddress, ProductLine};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Shiprocket Bridge API",
        version = "1.0.0",
        description = "Shipping backend proxying orders, serviceability, pickup locations and invoices to ShipRocket",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    ),
    servers(
        (url = "/", description = "Current server")
    ),
    tags(
        (name = "system", description = "System health and status endpoints"),
        (name = "shipping", description = "Carrier operations")
    ),
    paths(
        crate::api::handlers::health::health_check,
        crate::api::handlers::shipping::check_serviceability,
        crate::api::handlers::shipping::submit_orders,
        crate::api::handlers::shipping::add_pickup_location,
        crate::api::handlers::shipping::fetch_invoice,
    ),
    components(
        schemas(
            HealthResponse,
            ServiceabilityResponse,
            SubmitOrdersRequest,
            InvoiceRequest,
            ErrorResponse,
            ApiError,
            // Domain schemas
            LineItem,
            ContactAddress,
            ProductLine,
            PickupAddress,
        )
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_shipping_paths() {
        let doc = ApiDoc::openapi();

        for path in [
            "/health",
            "/api/v1/shipping/serviceability",
            "/api/v1/shipping/orders",
            "/api/v1/shipping/pickup-locations",
            "/api/v1/shipping/invoices",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
