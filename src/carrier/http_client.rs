//! HTTP client for carrier APIs
//!
//! Wraps a pooled reqwest client bound to one carrier base URL. Every call
//! is a single attempt: no retries, no rate limiting.

use bytes::Bytes;
use reqwest::{header, Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::carrier::error::RequestError;

/// Maximum number of body bytes kept in error messages
const ERROR_BODY_PREVIEW: usize = 500;

/// Body of a 2xx response, exactly as the carrier sent it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBody {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// HTTP client bound to a carrier base URL
#[derive(Clone)]
pub struct CarrierHttpClient {
    client: Client,
    base_url: String,
}

impl CarrierHttpClient {
    /// Create a new client
    ///
    /// # Arguments
    /// * `base_url` - Carrier API origin, e.g. `https://apiv2.shiprocket.in`
    /// * `user_agent` - Value of the `User-Agent` header
    /// * `timeout` - Whole-request timeout; `None` keeps reqwest's default
    pub fn new(base_url: &str, user_agent: &str, timeout: Option<Duration>) -> Result<Self, RequestError> {
        let mut builder = Client::builder()
            .pool_max_idle_per_host(10)
            .user_agent(user_agent);

        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }

        Ok(CarrierHttpClient {
            client: builder.build()?,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API path (path and query are kept verbatim)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Build a GET request
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(self.url(path))
    }

    /// Build a POST request
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.client.post(self.url(path))
    }

    /// Send a request, turning non-2xx statuses into `RequestError::Status`
    async fn send_checked(&self, builder: RequestBuilder) -> Result<Response, RequestError> {
        let response = builder.send().await?;

        let status = response.status();
        debug!(url = %response.url(), status = status.as_u16(), "Carrier API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RequestError::Status {
                status: status.as_u16(),
                message: preview(&body).to_string(),
            });
        }

        Ok(response)
    }

    /// Send a request and return the body of a 2xx response
    pub async fn send_text(&self, builder: RequestBuilder) -> Result<String, RequestError> {
        Ok(self.send_checked(builder).await?.text().await?)
    }

    /// Send a request and return the untouched bytes and content type of a 2xx response
    pub async fn send_raw(&self, builder: RequestBuilder) -> Result<RawBody, RequestError> {
        let response = self.send_checked(builder).await?;
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);

        Ok(RawBody {
            content_type,
            bytes: response.bytes().await?,
        })
    }

    /// Send a request and parse the body of a 2xx response as JSON
    pub async fn send_json<T: DeserializeOwned>(&self, builder: RequestBuilder) -> Result<T, RequestError> {
        let text = self.send_text(builder).await?;
        serde_json::from_str(&text)
            .map_err(|e| RequestError::Parse(format!("JSON parse error: {} - Body: {}", e, preview(&text))))
    }
}

fn preview(body: &str) -> &str {
    match body.char_indices().nth(ERROR_BODY_PREVIEW) {
        Some((idx, _)) => &body[..idx],
        None => body,
    }
}
