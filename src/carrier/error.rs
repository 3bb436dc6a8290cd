//! Carrier error types
//!
//! `RequestError` carries the detail of a failed HTTP exchange and never
//! leaves this module tree: operations log it and collapse it into the
//! single generic `CarrierError` variant for that operation.

use thiserror::Error;

/// Errors surfaced to callers, one per operation
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CarrierError {
    #[error("Carrier authentication failed")]
    Authentication,

    #[error("Pincode serviceability check failed")]
    Serviceability,

    #[error("Order batch could not be submitted")]
    OrderBatch,

    #[error("Pickup address registration failed")]
    PickupRegistration,

    #[error("Invoice fetch failed")]
    Invoice,
}

impl CarrierError {
    /// Stable machine-readable code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            CarrierError::Authentication => "CARRIER_AUTH_FAILED",
            CarrierError::Serviceability => "SERVICEABILITY_CHECK_FAILED",
            CarrierError::OrderBatch => "INVALID_ORDER_BATCH",
            CarrierError::PickupRegistration => "PICKUP_REGISTRATION_FAILED",
            CarrierError::Invoice => "INVOICE_FETCH_FAILED",
        }
    }
}

/// Result type for carrier operations
pub type CarrierResult<T> = Result<T, CarrierError>;

/// Detail of a single failed carrier request
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Status { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl RequestError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, RequestError::Http(e) if e.is_timeout())
    }
}
