//! ShipRocket API Client Implementation
//!
//! Each operation issues exactly one HTTP call (the order submitter one per
//! line item) and logs failure detail before collapsing it into the
//! operation's generic `CarrierError`.
//!
//! API Docs: https://apidocs.shiprocket.in/

use tracing::{debug, error, info, instrument, warn};

use crate::carrier::credentials::{BearerToken, Credentials};
use crate::carrier::error::{CarrierError, CarrierResult, RequestError};
use crate::carrier::http_client::{CarrierHttpClient, RawBody};
use crate::config::ShiprocketSettings;
use crate::domain::{LineItem, PickupAddress};
use super::mapper::{ShipRocketMapper, ORDER_DATE_FORMAT};
use super::models::*;

pub const LOGIN_PATH: &str = "/v1/external/auth/login";
pub const SERVICEABILITY_PATH: &str = "/v1/external/courier/serviceability/";
pub const CREATE_ADHOC_ORDER_PATH: &str = "/v1/external/orders/create/adhoc";
pub const ADD_PICKUP_PATH: &str = "/v1/external/settings/company/addpickup";
pub const PRINT_INVOICE_PATH: &str = "/v1/external/orders/print/invoice";

/// ShipRocket API client
///
/// Stateless apart from the pooled HTTP connection; cloning is cheap.
#[derive(Clone)]
pub struct ShipRocketClient {
    http: CarrierHttpClient,
}

impl ShipRocketClient {
    /// Create a client from configuration
    pub fn new(settings: &ShiprocketSettings) -> Result<Self, RequestError> {
        let http = CarrierHttpClient::new(&settings.base_url, &settings.user_agent, settings.timeout())?;
        Ok(Self::with_http(http))
    }

    /// Create a client over an existing HTTP client
    pub fn with_http(http: CarrierHttpClient) -> Self {
        ShipRocketClient { http }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Obtain a fresh bearer token using credentials from the environment
    ///
    /// `SHIPROCKET_EMAIL` and `SHIPROCKET_PASSWORD` are read on every call.
    pub async fn get_token(&self) -> CarrierResult<BearerToken> {
        self.token_with(|key| std::env::var(key).ok()).await
    }

    /// Obtain a fresh bearer token, resolving credentials through `lookup`
    ///
    /// Missing credentials fail like rejected ones, without a login call.
    pub async fn token_with<F>(&self, lookup: F) -> CarrierResult<BearerToken>
    where
        F: Fn(&str) -> Option<String>,
    {
        let credentials = Credentials::from_lookup(lookup).ok_or_else(|| {
            error!("ShipRocket credentials are not configured");
            CarrierError::Authentication
        })?;

        self.authenticate(&credentials).await
    }

    /// Exchange an email/password pair for a bearer token
    #[instrument(skip(self), fields(email = %credentials.email))]
    pub async fn authenticate(&self, credentials: &Credentials) -> CarrierResult<BearerToken> {
        let body = LoginRequest {
            email: &credentials.email,
            password: credentials.password(),
        };
        let request = self.http.post(LOGIN_PATH).json(&body);

        let response: LoginResponse = self.http.send_json(request).await.map_err(|e| {
            error!(error = %e, "ShipRocket authentication failed");
            CarrierError::Authentication
        })?;

        let token = BearerToken::from(response.token.unwrap_or_default());
        if token.is_empty() {
            error!("ShipRocket login response carried no token");
            return Err(CarrierError::Authentication);
        }

        debug!("ShipRocket authentication successful");
        Ok(token)
    }

    /// Check whether any courier serves the route described by `query`
    ///
    /// `query` is forwarded verbatim, e.g.
    /// `pickup_postcode=110030&delivery_postcode=560001&weight=2.5&cod=0`.
    /// A 2xx response without couriers, or one we cannot parse, means `false`.
    #[instrument(skip(self, token))]
    pub async fn check_pincode(&self, query: &str, token: &BearerToken) -> CarrierResult<bool> {
        let path = format!("{}?{}", SERVICEABILITY_PATH, query);
        let request = self.http.get(&path).bearer_auth(token.expose());

        let body = self.http.send_text(request).await.map_err(|e| {
            error!(error = %e, "ShipRocket serviceability check failed");
            CarrierError::Serviceability
        })?;

        match serde_json::from_str::<ServiceabilityResponse>(&body) {
            Ok(response) => Ok(response.has_available_courier()),
            Err(e) => {
                debug!(error = %e, "Unreadable serviceability response, treating as not serviceable");
                Ok(false)
            }
        }
    }

    /// Submit each line item as a ShipRocket adhoc order
    ///
    /// Items are sent one at a time, in order. A failed item gets null
    /// carrier ids and the batch moves on; only a blank payment method
    /// aborts the batch, before any call is made.
    #[instrument(skip(self, items, token), fields(item_count = items.len()))]
    pub async fn submit_orders(
        &self,
        payment_method: &str,
        mut items: Vec<LineItem>,
        token: &BearerToken,
    ) -> CarrierResult<Vec<LineItem>> {
        if payment_method.trim().is_empty() {
            error!("Order batch has no payment method");
            return Err(CarrierError::OrderBatch);
        }

        let fallback_date = chrono::Local::now().format(ORDER_DATE_FORMAT).to_string();

        for item in items.iter_mut() {
            let request = {
                let body = ShipRocketMapper::adhoc_order(item, payment_method, &fallback_date);
                self.http
                    .post(CREATE_ADHOC_ORDER_PATH)
                    .bearer_auth(token.expose())
                    .json(&body)
            };

            match self.http.send_json::<AdhocOrderResponse>(request).await {
                Ok(response) => {
                    item.mark_submitted(response.order_id, response.shipment_id);
                    info!(
                        secret_order_id = %item.secret_order_id,
                        order_id = ?item.order_id_shiprocket,
                        shipment_id = ?item.shipment_id,
                        status = ?response.status,
                        "ShipRocket order created"
                    );
                }
                Err(e) => {
                    warn!(
                        secret_order_id = %item.secret_order_id,
                        timeout = e.is_timeout(),
                        error = %e,
                        "ShipRocket order creation failed"
                    );
                    item.mark_failed();
                }
            }
        }

        Ok(items)
    }

    /// Register a vendor pickup location; returns the carrier's response body
    #[instrument(skip(self, address, token), fields(pickup_location = %address.pickup_location))]
    pub async fn add_pickup_address(
        &self,
        address: &PickupAddress,
        token: &BearerToken,
    ) -> CarrierResult<serde_json::Value> {
        let request = self.http
            .post(ADD_PICKUP_PATH)
            .bearer_auth(token.expose())
            .json(&ShipRocketMapper::pickup_location(address));

        self.http.send_json(request).await.map_err(|e| {
            error!(error = %e, "ShipRocket pickup registration failed");
            CarrierError::PickupRegistration
        })
    }

    /// Fetch the printable invoice for one carrier order
    ///
    /// The 2xx body is returned byte for byte with its content type; it is
    /// never parsed, so non-JSON and empty bodies pass through too.
    #[instrument(skip(self, token))]
    pub async fn fetch_invoice(&self, order_id: u64, token: &BearerToken) -> CarrierResult<RawBody> {
        let request = self.http
            .post(PRINT_INVOICE_PATH)
            .bearer_auth(token.expose())
            .json(&InvoiceRequest { ids: vec![order_id] });

        self.http.send_raw(request).await.map_err(|e| {
            error!(error = %e, "ShipRocket invoice fetch failed");
            CarrierError::Invoice
        })
    }
}
