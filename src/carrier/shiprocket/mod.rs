//! ShipRocket Carrier Module
//!
//! Wraps the ShipRocket REST API: authentication, courier serviceability,
//! adhoc order creation, pickup location registration and invoices.
//!
//! API Documentation: https://apidocs.shiprocket.in/

mod client;
mod models;
mod mapper;

pub use client::ShipRocketClient;

#[cfg(test)]
pub use client::{
    ADD_PICKUP_PATH, CREATE_ADHOC_ORDER_PATH, LOGIN_PATH, PRINT_INVOICE_PATH,
    SERVICEABILITY_PATH,
};
