//! Platform order line items submitted to the carrier
//!
//! A line item is what the platform's order-processing code hands us: one
//! product on one order, with its own billing/shipping details. After
//! submission it carries the carrier's identifiers, or nulls if the carrier
//! call for that item failed.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Customer contact and postal address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ContactAddress {
    pub customer_name: String,
    #[serde(default)]
    pub last_name: String,
    pub address: String,
    #[serde(default)]
    pub address_2: String,
    pub city: String,
    pub pincode: String,
    pub state: String,
    pub country: String,
    pub email: String,
    pub phone: String,
}

/// Product being shipped on a line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProductLine {
    pub name: String,
    pub sku: String,
    /// Unit selling price
    pub price: f64,
    pub quantity: u32,
    #[serde(default)]
    pub discount: f64,
}

impl ProductLine {
    /// Price of all units minus the line discount
    pub fn sub_total(&self) -> f64 {
        self.price * self.quantity as f64 - self.discount
    }
}

/// One platform order line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LineItem {
    /// Platform-internal order id, sent to the carrier as its order reference
    #[serde(rename = "secretOrderId")]
    pub secret_order_id: String,

    /// `YYYY-MM-DD HH:MM`; submission time is used when absent
    #[serde(default)]
    pub order_date: Option<String>,

    /// Registered pickup location nickname of the vendor
    pub pickup_location: String,

    pub billing: ContactAddress,

    /// Separate delivery address; billing address is used when absent
    #[serde(default)]
    pub shipping: Option<ContactAddress>,

    pub product: ProductLine,

    /// Carrier order id, set after submission (null on failure)
    #[serde(default)]
    pub order_id_shiprocket: Option<u64>,

    /// Carrier shipment id, set after submission (null on failure)
    #[serde(default)]
    pub shipment_id: Option<u64>,
}

impl LineItem {
    /// Attach the identifiers returned by the carrier
    pub fn mark_submitted(&mut self, order_id: Option<u64>, shipment_id: Option<u64>) {
        self.order_id_shiprocket = order_id;
        self.shipment_id = shipment_id;
    }

    /// Clear carrier identifiers after a failed submission
    pub fn mark_failed(&mut self) {
        self.order_id_shiprocket = None;
        self.shipment_id = None;
    }

    pub fn is_submitted(&self) -> bool {
        self.order_id_shiprocket.is_some() && self.shipment_id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item_json() -> serde_json::Value {
        serde_json::json!({
            "secretOrderId": "ORD-1",
            "pickup_location": "Vendor Warehouse",
            "billing": {
                "customer_name": "Asha",
                "address": "12 MG Road",
                "city": "Bengaluru",
                "pincode": "560001",
                "state": "Karnataka",
                "country": "India",
                "email": "asha@example.com",
                "phone": "9876543210"
            },
            "product": { "name": "Kurta", "sku": "KU-1", "price": 499.0, "quantity": 2 }
        })
    }

    #[test]
    fn test_deserialize_minimal_item() {
        let item: LineItem = serde_json::from_value(item_json()).unwrap();

        assert_eq!(item.secret_order_id, "ORD-1");
        assert!(item.shipping.is_none());
        assert!(item.order_date.is_none());
        assert_eq!(item.product.discount, 0.0);
        assert_eq!(item.billing.address_2, "");
        assert!(!item.is_submitted());
    }

    #[test]
    fn test_failed_item_serializes_null_ids() {
        let mut item: LineItem = serde_json::from_value(item_json()).unwrap();
        item.mark_submitted(Some(11), Some(22));
        item.mark_failed();

        let value = serde_json::to_value(&item).unwrap();
        assert!(value["order_id_shiprocket"].is_null());
        assert!(value["shipment_id"].is_null());
        assert_eq!(value["secretOrderId"], "ORD-1");
    }

    #[test]
    fn test_sub_total_applies_discount() {
        let product = ProductLine {
            name: "Kurta".to_string(),
            sku: "KU-1".to_string(),
            price: 499.0,
            quantity: 2,
            discount: 100.0,
        };

        assert_eq!(product.sub_total(), 898.0);
    }
}
