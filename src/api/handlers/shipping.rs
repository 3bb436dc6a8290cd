//! Shipping endpoints
//!
//! Every handler obtains a fresh carrier token and then performs exactly
//! one carrier operation. Tokens are not reused across requests.

use actix_web::{http::header, web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};
use tracing::info;
use utoipa::ToSchema;

use crate::AppState;
use crate::carrier::CarrierError;
use crate::domain::{LineItem, PickupAddress};

/// Obtain a carrier token or bail out with the error response
macro_rules! carrier_token {
    ($state:expr) => {
        match $state.carrier.get_token().await {
            Ok(token) => token,
            Err(e) => return carrier_error_response(e),
        }
    };
}

/// Result of a serviceability check
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceabilityResponse {
    pub serviceable: bool,
}

/// Batch of line items to submit as adhoc orders
#[derive(Debug, Deserialize, ToSchema)]
pub struct SubmitOrdersRequest {
    /// Payment method label forwarded to the carrier (e.g. "Prepaid", "COD")
    pub payment_method: String,
    pub items: Vec<LineItem>,
}

/// Invoice lookup for one carrier order
#[derive(Debug, Deserialize, ToSchema)]
pub struct InvoiceRequest {
    /// Carrier order id (`order_id_shiprocket` of a submitted line item)
    pub order_id: u64,
}

/// Error response
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ApiError,
}

#[derive(Serialize, ToSchema)]
pub struct ApiError {
    pub code: String,
    pub message: String,
}

fn carrier_error_response(err: CarrierError) -> HttpResponse {
    let body = ErrorResponse {
        success: false,
        error: ApiError {
            code: err.code().to_string(),
            message: err.to_string(),
        },
    };

    match err {
        CarrierError::OrderBatch => HttpResponse::BadRequest().json(body),
        _ => HttpResponse::BadGateway().json(body),
    }
}

/// GET /api/v1/shipping/serviceability - Check courier availability for a route
///
/// The query string is forwarded to the carrier verbatim.
#[utoipa::path(
    get,
    path = "/api/v1/shipping/serviceability",
    tag = "shipping",
    params(
        ("pickup_postcode" = String, Query, description = "Origin pincode"),
        ("delivery_postcode" = String, Query, description = "Destination pincode"),
        ("weight" = f64, Query, description = "Package weight in kg"),
        ("cod" = u8, Query, description = "1 for cash on delivery, 0 for prepaid")
    ),
    responses(
        (status = 200, description = "Serviceability result", body = ServiceabilityResponse),
        (status = 502, description = "Carrier authentication or check failed", body = ErrorResponse)
    )
)]
pub async fn check_serviceability(
    state: web::Data<AppState>,
    req: HttpRequest,
) -> HttpResponse {
    let token = carrier_token!(state);

    match state.carrier.check_pincode(req.query_string(), &token).await {
        Ok(serviceable) => HttpResponse::Ok().json(ServiceabilityResponse { serviceable }),
        Err(e) => carrier_error_response(e),
    }
}

/// POST /api/v1/shipping/orders - Submit line items as adhoc orders
///
/// Responds with the same items, annotated with carrier ids. Items the
/// carrier rejected carry null ids.
#[utoipa::path(
    post,
    path = "/api/v1/shipping/orders",
    tag = "shipping",
    request_body = SubmitOrdersRequest,
    responses(
        (status = 200, description = "Items annotated with carrier ids", body = [LineItem]),
        (status = 400, description = "Batch rejected before submission", body = ErrorResponse),
        (status = 502, description = "Carrier authentication failed", body = ErrorResponse)
    )
)]
pub async fn submit_orders(
    state: web::Data<AppState>,
    body: web::Json<SubmitOrdersRequest>,
) -> HttpResponse {
    let SubmitOrdersRequest { payment_method, items } = body.into_inner();
    if payment_method.trim().is_empty() {
        return carrier_error_response(CarrierError::OrderBatch);
    }
    let token = carrier_token!(state);

    match state.carrier.submit_orders(&payment_method, items, &token).await {
        Ok(items) => {
            let submitted = items.iter().filter(|i| i.is_submitted()).count();
            info!(total = items.len(), submitted, "Order batch processed");
            HttpResponse::Ok().json(items)
        }
        Err(e) => carrier_error_response(e),
    }
}

/// POST /api/v1/shipping/pickup-locations - Register a vendor pickup location
#[utoipa::path(
    post,
    path = "/api/v1/shipping/pickup-locations",
    tag = "shipping",
    request_body = PickupAddress,
    responses(
        (status = 200, description = "Carrier response body"),
        (status = 502, description = "Carrier authentication or registration failed", body = ErrorResponse)
    )
)]
pub async fn add_pickup_location(
    state: web::Data<AppState>,
    body: web::Json<PickupAddress>,
) -> HttpResponse {
    let token = carrier_token!(state);

    match state.carrier.add_pickup_address(&body, &token).await {
        Ok(carrier_body) => HttpResponse::Ok().json(carrier_body),
        Err(e) => carrier_error_response(e),
    }
}

/// POST /api/v1/shipping/invoices - Fetch the printable invoice of an order
///
/// Relays the carrier's body and content type untouched.
#[utoipa::path(
    post,
    path = "/api/v1/shipping/invoices",
    tag = "shipping",
    request_body = InvoiceRequest,
    responses(
        (status = 200, description = "Carrier response body, byte for byte"),
        (status = 502, description = "Carrier authentication or invoice fetch failed", body = ErrorResponse)
    )
)]
pub async fn fetch_invoice(
    state: web::Data<AppState>,
    body: web::Json<InvoiceRequest>,
) -> HttpResponse {
    let token = carrier_token!(state);

    match state.carrier.fetch_invoice(body.order_id, &token).await {
        Ok(carrier_body) => {
            let mut response = HttpResponse::Ok();
            if let Some(content_type) = carrier_body.content_type.as_deref() {
                response.insert_header((header::CONTENT_TYPE, content_type));
            }
            response.body(carrier_body.bytes)
        }
        Err(e) => carrier_error_response(e),
    }
}
