//! # Bootstrap
//!
//! Builds the collaborators named by [`AppConfig`] and hands them to a
//! [`VehicleAggregationService`]. The vehicle store is supplied by the caller.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::VehicleAggregationService;
use crate::config::{AppConfig, MapsConfig, PriceSourceMode, PricingConfig};
use crate::domain::services::PriceCatalog;
use crate::infrastructure::maps::{LocationResolver, MapsClient};
use crate::infrastructure::persistence::VehicleRepository;
use crate::infrastructure::pricing::{PriceSource, RemotePriceClient};
use std::sync::Arc;

/// Builds the price source selected by `config.mode`.
///
/// In catalog mode the catalog is generated here, once, and shared by every
/// clone of the returned handle.
///
/// # Errors
///
/// Returns `ApplicationError::Domain` if catalog generation fails, or
/// `ApplicationError::Configuration` if the HTTP client cannot be built.
pub fn build_price_source(config: &PricingConfig) -> ApplicationResult<Arc<dyn PriceSource>> {
    match config.mode {
        PriceSourceMode::Catalog => {
            let catalog = PriceCatalog::generate()?;
            tracing::info!(entries = catalog.len(), "price catalog generated");
            Ok(Arc::new(catalog))
        }
        PriceSourceMode::Remote => {
            let client = RemotePriceClient::new(config.endpoint.as_str(), config.timeout_ms)
                .map_err(|e| ApplicationError::configuration(format!("pricing client: {e}")))?;
            tracing::info!(endpoint = client.endpoint(), "using remote pricing service");
            Ok(Arc::new(client))
        }
    }
}

/// Builds the maps client.
///
/// # Errors
///
/// Returns `ApplicationError::Configuration` if the HTTP client cannot be
/// built.
pub fn build_location_resolver(config: &MapsConfig) -> ApplicationResult<Arc<dyn LocationResolver>> {
    let client = MapsClient::new(config.endpoint.as_str(), config.timeout_ms)
        .map_err(|e| ApplicationError::configuration(format!("maps client: {e}")))?;
    Ok(Arc::new(client))
}

/// Wires a service from configuration and a vehicle store.
///
/// # Errors
///
/// Propagates failures from [`build_price_source`] and
/// [`build_location_resolver`].
pub fn build_service(
    config: &AppConfig,
    repository: Arc<dyn VehicleRepository>,
) -> ApplicationResult<VehicleAggregationService> {
    let prices = build_price_source(&config.pricing)?;
    let locations = build_location_resolver(&config.maps)?;
    Ok(VehicleAggregationService::new(repository, prices, locations))
}
