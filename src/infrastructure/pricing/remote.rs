//! # Remote Price Client
//!
//! [`PriceSource`] backed by a pricing service reachable over HTTP.
//!
//! ## Wire format
//!
//! ```text
//! GET {endpoint}/services/price?vehicleId=1
//!
//! 200 {"currency": "USD", "price": 12345.67, "vehicleId": 1}
//! 404 no price for the vehicle
//! ```

use crate::domain::value_objects::{Price, VehicleId};
use crate::infrastructure::http::{HttpClient, HttpError};
use crate::infrastructure::pricing::traits::{PriceSource, PricingError, PricingResult};
use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::Deserialize;

/// Path of the price lookup endpoint.
pub const PRICE_PATH: &str = "/services/price";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PriceResponse {
    currency: String,
    price: Decimal,
    vehicle_id: VehicleId,
}

/// Client for a remote pricing service.
#[derive(Debug, Clone)]
pub struct RemotePriceClient {
    http: HttpClient,
}

impl RemotePriceClient {
    /// Creates a client for the pricing service at `endpoint`.
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
impl PriceSource for RemotePriceClient {
    async fn get_price(&self, vehicle_id: VehicleId) -> PricingResult<Price> {
        let params = [("vehicleId", vehicle_id.get())];
        let response: PriceResponse = self
            .http
            .get_with_params(PRICE_PATH, &params)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    PricingError::NotFound(vehicle_id)
                } else {
                    tracing::warn!(error = %e, %vehicle_id, "pricing service call failed");
                    PricingError::Remote(e)
                }
            })?;

        if response.vehicle_id != vehicle_id {
            return Err(PricingError::invalid_response(format!(
                "requested vehicle {}, got price for {}",
                vehicle_id, response.vehicle_id
            )));
        }

        Price::new(response.currency, response.price, response.vehicle_id)
            .map_err(|e| PricingError::invalid_response(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_is_normalised() {
        let client = RemotePriceClient::new("http://localhost:8082/", 2000).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8082");
    }

    #[test]
    fn decodes_numeric_price() {
        let body: PriceResponse =
            serde_json::from_str(r#"{"currency":"USD","price":15000.5,"vehicleId":2}"#).unwrap();
        assert_eq!(body.vehicle_id, VehicleId::new(2));
        assert_eq!(body.price, Decimal::new(150005, 1));
    }
}
