//! Vendor pickup location

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Shipment origin address registered for a vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PickupAddress {
    /// Nickname the vendor's orders refer to as `pickup_location`
    pub pickup_location: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    #[serde(default)]
    pub address_2: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub pin_code: String,
}
