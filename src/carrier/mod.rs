//! Carrier Integration Module
//!
//! Thin wrappers around the ShipRocket logistics API. Each operation is a
//! single stateless call; the caller obtains a bearer token first and passes
//! it to the other operations.
//!
//! ```text
//!   get_token ──► BearerToken ──┬──► check_pincode      (bool)
//!                               ├──► submit_orders      (annotated line items)
//!                               ├──► add_pickup_address (carrier body)
//!                               └──► fetch_invoice      (raw carrier body)
//! ```

pub mod credentials;
pub mod error;
pub mod http_client;
pub mod shiprocket;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use credentials::Credentials;
pub use error::CarrierError;
pub use shiprocket::ShipRocketClient;
