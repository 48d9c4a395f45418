//! # HTTP Client
//!
//! Shared reqwest wrapper for the remote pricing and maps adapters.
//!
//! Provides a configured timeout, JSON decoding and a mapping from HTTP
//! status codes to [`HttpError`].
//!
//! # Examples
//!
//! ```ignore
//! use vehicles_api::infrastructure::http::HttpClient;
//!
//! let client = HttpClient::new("http://localhost:8082", 5000)?;
//! let price: PriceResponse = client
//!     .get_with_params("/services/price", &[("vehicleId", "1")])
//!     .await?;
//! ```

use crate::infrastructure::http::error::{HttpError, HttpResult};
use reqwest::{Client, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;

/// HTTP client bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpClient {
    /// Inner reqwest client.
    client: Client,
    /// Base URL without trailing slash.
    base_url: String,
    /// Request timeout in milliseconds.
    timeout_ms: u64,
}

impl HttpClient {
    /// Creates a new HTTP client for `base_url` with the specified timeout.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Internal` if the client cannot be created.
    pub fn new(base_url: impl Into<String>, timeout_ms: u64) -> HttpResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_millis(timeout_ms))
            .build()
            .map_err(|e| HttpError::internal(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            timeout_ms,
        })
    }

    /// Returns the configured timeout in milliseconds.
    #[inline]
    #[must_use]
    pub fn timeout_ms(&self) -> u64 {
        self.timeout_ms
    }

    /// Returns the base URL.
    #[inline]
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Makes a GET request to `path` with query parameters and decodes the
    /// JSON response.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Timeout` or `HttpError::Connection` if the request
    /// fails, a status-specific error for non-2xx responses and
    /// `HttpError::Protocol` if the body cannot be decoded.
    pub async fn get_with_params<T: DeserializeOwned, P: Serialize + ?Sized>(
        &self,
        path: &str,
        params: &P,
    ) -> HttpResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = self
            .client
            .get(&url)
            .query(params)
            .send()
            .await
            .map_err(|e| self.map_reqwest_error(e))?;

        self.handle_response(response).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Handles the HTTP response, checking status and deserializing JSON.
    async fn handle_response<T: DeserializeOwned>(&self, response: Response) -> HttpResult<T> {
        let status = response.status();

        if status.is_success() {
            response
                .json::<T>()
                .await
                .map_err(|e| HttpError::protocol(format!("Failed to parse response: {}", e)))
        } else {
            let error_body = response.text().await.unwrap_or_default();
            Err(self.map_status_error(status, &error_body))
        }
    }

    /// Maps a reqwest error to an HttpError.
    fn map_reqwest_error(&self, error: reqwest::Error) -> HttpError {
        if error.is_timeout() {
            HttpError::timeout(format!("Request timed out after {}ms", self.timeout_ms))
        } else if error.is_connect() {
            HttpError::connection(format!("Connection failed: {}", error))
        } else {
            HttpError::connection(format!("HTTP request failed: {}", error))
        }
    }

    /// Maps an HTTP status code to an HttpError.
    fn map_status_error(&self, status: StatusCode, body: &str) -> HttpError {
        match status {
            StatusCode::BAD_REQUEST => HttpError::invalid_request(format!("Bad request: {}", body)),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                HttpError::authentication(format!("Authentication failed: {}", body))
            }
            StatusCode::NOT_FOUND => HttpError::not_found(format!("Resource not found: {}", body)),
            StatusCode::TOO_MANY_REQUESTS => HttpError::rate_limited("Rate limit exceeded"),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::BAD_GATEWAY
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::GATEWAY_TIMEOUT => {
                HttpError::connection(format!("Server error ({}): {}", status, body))
            }
            _ => HttpError::protocol(format!("HTTP error ({}): {}", status, body)),
        }
    }
}
