//! # Price Source Port
//!
//! Resolves the market price of a vehicle. Satisfied in-process by the
//! [`PriceCatalog`](crate::domain::services::PriceCatalog) or remotely by
//! [`RemotePriceClient`](crate::infrastructure::pricing::RemotePriceClient).

use crate::domain::value_objects::{Price, VehicleId};
use crate::infrastructure::http::HttpError;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for price lookups.
#[derive(Debug, Clone, Error)]
pub enum PricingError {
    /// The source has no price for the vehicle.
    #[error("price not found for vehicle {0}")]
    NotFound(VehicleId),

    /// The remote pricing service could not be reached or failed.
    #[error("pricing service error: {0}")]
    Remote(#[from] HttpError),

    /// The pricing service answered with an unusable body.
    #[error("invalid pricing response: {0}")]
    InvalidResponse(String),
}

impl PricingError {
    /// Creates an invalid response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Returns true if the source has no price for the vehicle.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Returns true if a caller could reasonably retry the lookup.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Remote(e) => e.is_retryable(),
            _ => false,
        }
    }
}

/// Result type for price lookups.
pub type PricingResult<T> = Result<T, PricingError>;

/// Resolves a price for a vehicle identifier.
#[async_trait]
pub trait PriceSource: Send + Sync + fmt::Debug {
    /// Returns the price of `vehicle_id`.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NotFound` if the source has no price for the
    /// vehicle.
    async fn get_price(&self, vehicle_id: VehicleId) -> PricingResult<Price>;
}
