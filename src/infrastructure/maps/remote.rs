//! # Maps Client
//!
//! [`LocationResolver`] backed by a maps service reachable over HTTP.
//!
//! ```text
//! GET {endpoint}/maps?lat=40.73&lon=-73.93
//!
//! 200 {"address": "777 Brockton Avenue", "city": "Abington", "state": "MA", "zip": "2351"}
//! ```

use crate::domain::value_objects::{Address, Location};
use crate::infrastructure::http::{HttpClient, HttpError};
use crate::infrastructure::maps::traits::{LocationError, LocationResolver, LocationResult};
use async_trait::async_trait;

/// Path of the reverse geocoding endpoint.
pub const MAPS_PATH: &str = "/maps";

/// Client for a remote maps service.
#[derive(Debug, Clone)]
pub struct MapsClient {
    http: HttpClient,
}

impl MapsClient {
    /// Creates a client for the maps service at `endpoint`.
    ///
    /// # Errors
    ///
    /// Returns `HttpError::Internal` if the HTTP client cannot be built.
    pub fn new(endpoint: impl Into<String>, timeout_ms: u64) -> Result<Self, HttpError> {
        Ok(Self {
            http: HttpClient::new(endpoint, timeout_ms)?,
        })
    }

    /// Returns the configured endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        self.http.base_url()
    }
}

#[async_trait]
impl LocationResolver for MapsClient {
    async fn resolve(&self, location: &Location) -> LocationResult<Location> {
        let params = [("lat", location.lat()), ("lon", location.lon())];
        let address: Address = self
            .http
            .get_with_params(MAPS_PATH, &params)
            .await
            .inspect_err(|e| {
                tracing::warn!(
                    error = %e,
                    lat = location.lat(),
                    lon = location.lon(),
                    "maps service call failed"
                );
            })?;

        if address.address.trim().is_empty() {
            return Err(LocationError::InvalidResponse(
                "maps service returned an empty address".to_string(),
            ));
        }

        Ok(location.clone().with_address(address))
    }
}
