//! Domain to ShipRocket Request Mapper
//!
//! Maps platform line items and pickup addresses to ShipRocket request bodies.

use crate::domain::{LineItem, PickupAddress};
use super::models::*;

/// Package length in cm, applied to every order
pub const PACKAGE_LENGTH_CM: f64 = 10.0;
/// Package breadth in cm, applied to every order
pub const PACKAGE_BREADTH_CM: f64 = 15.0;
/// Package height in cm, applied to every order
pub const PACKAGE_HEIGHT_CM: f64 = 20.0;
/// Package weight in kg, applied to every order
pub const PACKAGE_WEIGHT_KG: f64 = 2.5;

/// Format of `order_date` expected by ShipRocket
pub const ORDER_DATE_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Mapper for ShipRocket request bodies
pub struct ShipRocketMapper;

impl ShipRocketMapper {
    /// Map one line item to an adhoc order body
    ///
    /// `fallback_date` is used when the item carries no `order_date`.
    pub fn adhoc_order<'a>(
        item: &'a LineItem,
        payment_method: &'a str,
        fallback_date: &'a str,
    ) -> AdhocOrderRequest<'a> {
        let billing = &item.billing;
        let shipping = item.shipping.as_ref().map(|s| ShippingAddress {
            shipping_customer_name: &s.customer_name,
            shipping_last_name: &s.last_name,
            shipping_address: &s.address,
            shipping_address_2: &s.address_2,
            shipping_city: &s.city,
            shipping_pincode: &s.pincode,
            shipping_state: &s.state,
            shipping_country: &s.country,
            shipping_email: &s.email,
            shipping_phone: &s.phone,
        });

        AdhocOrderRequest {
            order_id: &item.secret_order_id,
            order_date: item.order_date.as_deref().unwrap_or(fallback_date),
            pickup_location: &item.pickup_location,
            billing_customer_name: &billing.customer_name,
            billing_last_name: &billing.last_name,
            billing_address: &billing.address,
            billing_address_2: &billing.address_2,
            billing_city: &billing.city,
            billing_pincode: &billing.pincode,
            billing_state: &billing.state,
            billing_country: &billing.country,
            billing_email: &billing.email,
            billing_phone: &billing.phone,
            shipping_is_billing: shipping.is_none(),
            shipping,
            order_items: vec![AdhocOrderItem {
                name: &item.product.name,
                sku: &item.product.sku,
                units: item.product.quantity,
                selling_price: item.product.price,
                discount: item.product.discount,
            }],
            payment_method,
            sub_total: item.product.sub_total(),
            length: PACKAGE_LENGTH_CM,
            breadth: PACKAGE_BREADTH_CM,
            height: PACKAGE_HEIGHT_CM,
            weight: PACKAGE_WEIGHT_KG,
        }
    }

    /// Map a vendor pickup address to an addpickup body
    pub fn pickup_location(address: &PickupAddress) -> PickupLocationRequest<'_> {
        PickupLocationRequest {
            pickup_location: &address.pickup_location,
            name: &address.name,
            email: &address.email,
            phone: &address.phone,
            address: &address.address,
            address_2: &address.address_2,
            city: &address.city,
            state: &address.state,
            country: &address.country,
            pin_code: &address.pin_code,
        }
    }
}
