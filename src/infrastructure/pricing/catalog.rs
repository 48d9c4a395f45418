//! # In-Process Price Source
//!
//! Serves prices straight from a shared [`PriceCatalog`].

use crate::domain::errors::DomainError;
use crate::domain::services::PriceCatalog;
use crate::domain::value_objects::{Price, VehicleId};
use crate::infrastructure::pricing::traits::{PriceSource, PricingError, PricingResult};
use async_trait::async_trait;

#[async_trait]
impl PriceSource for PriceCatalog {
    async fn get_price(&self, vehicle_id: VehicleId) -> PricingResult<Price> {
        PriceCatalog::get_price(self, vehicle_id)
            .cloned()
            .map_err(|e| match e {
                DomainError::PriceNotFound(id) => PricingError::NotFound(id),
                other => PricingError::invalid_response(other.to_string()),
            })
    }
}
