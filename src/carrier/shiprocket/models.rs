//! ShipRocket API Request/Response Models
//!
//! Request bodies borrow from our domain types; the mapper module builds
//! them. Response models only declare the fields we read.

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Authentication
// ============================================================================

/// Body of `POST /v1/external/auth/login`
#[derive(Debug, Serialize)]
pub struct LoginRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}

// ============================================================================
// Serviceability
// ============================================================================

/// Response of `GET /v1/external/courier/serviceability/`
#[derive(Debug, Deserialize)]
pub struct ServiceabilityResponse {
    #[serde(default)]
    pub data: Option<ServiceabilityData>,
}

#[derive(Debug, Deserialize)]
pub struct ServiceabilityData {
    #[serde(default)]
    pub available_courier_companies: Vec<serde_json::Value>,
}

impl ServiceabilityResponse {
    /// Whether the carrier listed at least one courier for the route
    pub fn has_available_courier(&self) -> bool {
        self.data
            .as_ref()
            .map(|d| !d.available_courier_companies.is_empty())
            .unwrap_or(false)
    }
}

// ============================================================================
// Adhoc Orders
// ============================================================================

/// Body of `POST /v1/external/orders/create/adhoc`
#[derive(Debug, Serialize)]
pub struct AdhocOrderRequest<'a> {
    pub order_id: &'a str,
    pub order_date: &'a str,
    pub pickup_location: &'a str,
    pub billing_customer_name: &'a str,
    pub billing_last_name: &'a str,
    pub billing_address: &'a str,
    pub billing_address_2: &'a str,
    pub billing_city: &'a str,
    pub billing_pincode: &'a str,
    pub billing_state: &'a str,
    pub billing_country: &'a str,
    pub billing_email: &'a str,
    pub billing_phone: &'a str,
    pub shipping_is_billing: bool,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub shipping: Option<ShippingAddress<'a>>,
    pub order_items: Vec<AdhocOrderItem<'a>>,
    pub payment_method: &'a str,
    pub sub_total: f64,
    pub length: f64,
    pub breadth: f64,
    pub height: f64,
    pub weight: f64,
}

/// Delivery address fields, sent only when they differ from billing
#[derive(Debug, Serialize)]
pub struct ShippingAddress<'a> {
    pub shipping_customer_name: &'a str,
    pub shipping_last_name: &'a str,
    pub shipping_address: &'a str,
    pub shipping_address_2: &'a str,
    pub shipping_city: &'a str,
    pub shipping_pincode: &'a str,
    pub shipping_state: &'a str,
    pub shipping_country: &'a str,
    pub shipping_email: &'a str,
    pub shipping_phone: &'a str,
}

#[derive(Debug, Serialize)]
pub struct AdhocOrderItem<'a> {
    pub name: &'a str,
    pub sku: &'a str,
    pub units: u32,
    pub selling_price: f64,
    pub discount: f64,
}

/// Response of the adhoc order endpoint
#[derive(Debug, Deserialize)]
pub struct AdhocOrderResponse {
    #[serde(default, deserialize_with = "lenient_id")]
    pub order_id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_id")]
    pub shipment_id: Option<u64>,
    #[serde(default)]
    pub status: Option<String>,
}

// ============================================================================
// Pickup Locations
// ============================================================================

/// Body of `POST /v1/external/settings/company/addpickup`
#[derive(Debug, Serialize)]
pub struct PickupLocationRequest<'a> {
    pub pickup_location: &'a str,
    pub name: &'a str,
    pub email: &'a str,
    pub phone: &'a str,
    pub address: &'a str,
    pub address_2: &'a str,
    pub city: &'a str,
    pub state: &'a str,
    pub country: &'a str,
    pub pin_code: &'a str,
}

// ============================================================================
// Invoices
// ============================================================================

/// Body of `POST /v1/external/orders/print/invoice`
#[derive(Debug, Serialize)]
pub struct InvoiceRequest {
    pub ids: Vec<u64>,
}

/// Accepts ids sent either as JSON numbers or numeric strings
fn lenient_id<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::Number(n)) => n.as_u64(),
        Some(serde_json::Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serviceability_with_couriers() {
        let response: ServiceabilityResponse = serde_json::from_str(
            r#"{"status":200,"data":{"available_courier_companies":[{"courier_name":"Delhivery"}]}}"#,
        ).unwrap();

        assert!(response.has_available_courier());
    }

    #[test]
    fn test_serviceability_without_data() {
        let empty: ServiceabilityResponse =
            serde_json::from_str(r#"{"data":{"available_courier_companies":[]}}"#).unwrap();
        let missing: ServiceabilityResponse = serde_json::from_str(r#"{"status":404}"#).unwrap();

        assert!(!empty.has_available_courier());
        assert!(!missing.has_available_courier());
    }

    #[test]
    fn test_adhoc_response_accepts_string_ids() {
        let response: AdhocOrderResponse = serde_json::from_str(
            r#"{"order_id":"16161616","shipment_id":16090281,"status":"NEW"}"#,
        ).unwrap();

        assert_eq!(response.order_id, Some(16161616));
        assert_eq!(response.shipment_id, Some(16090281));
    }

    #[test]
    fn test_adhoc_response_missing_ids() {
        let response: AdhocOrderResponse = serde_json::from_str(r#"{"status":"NEW"}"#).unwrap();

        assert_eq!(response.order_id, None);
        assert_eq!(response.shipment_id, None);
    }
}
