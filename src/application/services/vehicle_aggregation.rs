//! # Vehicle Aggregation Service
//!
//! Combines persisted vehicle records with a price lookup and a location
//! lookup, and owns the merge-on-update policy.
//!
//! ## Enrichment
//!
//! - `list`: every record gets its location resolved, one after another
//! - `find_by_id`: price and location are fetched concurrently; both must
//!   succeed
//!
//! ## Merge-on-update
//!
//! Saving a vehicle that carries an identifier copies exactly `details`,
//! `location`, `condition` and `modified_at` onto the stored record. Identity
//! and store bookkeeping (`created_at`) are never taken from the payload.
//!
//! No timeouts are imposed here. Wrap a call in `tokio::time::timeout` to
//! bound it; dropping the future cancels the in-flight collaborator calls.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::Vehicle;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::maps::LocationResolver;
use crate::infrastructure::persistence::VehicleRepository;
use crate::infrastructure::pricing::PriceSource;
use std::sync::Arc;

/// Orchestrates the vehicle store, the price source and the location resolver.
#[derive(Debug, Clone)]
pub struct VehicleAggregationService {
    repository: Arc<dyn VehicleRepository>,
    prices: Arc<dyn PriceSource>,
    locations: Arc<dyn LocationResolver>,
}

impl VehicleAggregationService {
    /// Creates a new service over the given collaborators.
    #[must_use]
    pub fn new(
        repository: Arc<dyn VehicleRepository>,
        prices: Arc<dyn PriceSource>,
        locations: Arc<dyn LocationResolver>,
    ) -> Self {
        Self {
            repository,
            prices,
            locations,
        }
    }

    /// Returns all vehicles in store order, each with its location resolved.
    ///
    /// # Errors
    ///
    /// Fails on the first store or resolver error.
    #[tracing::instrument(skip(self))]
    pub async fn list(&self) -> ApplicationResult<Vec<Vehicle>> {
        let vehicles = self.repository.find_all().await?;
        tracing::debug!(count = vehicles.len(), "resolving locations");

        let mut enriched = Vec::with_capacity(vehicles.len());
        for mut vehicle in vehicles {
            let location = self.locations.resolve(vehicle.location()).await?;
            vehicle.set_location(location);
            enriched.push(vehicle);
        }
        Ok(enriched)
    }

    /// Returns the vehicle with its price and location filled in.
    ///
    /// # Errors
    ///
    /// - `ApplicationError::CarNotFound` if the store has no such vehicle;
    ///   neither lookup is attempted
    /// - `ApplicationError::PriceNotFound` if the price source has no entry
    /// - any store, pricing or resolver failure
    #[tracing::instrument(skip(self), fields(vehicle_id = %id))]
    pub async fn find_by_id(&self, id: VehicleId) -> ApplicationResult<Vehicle> {
        tracing::debug!("fetching vehicle");
        let mut vehicle = self.fetch(id).await?;

        let (price, location) = tokio::try_join!(
            async {
                self.prices
                    .get_price(id)
                    .await
                    .map_err(ApplicationError::from)
            },
            async {
                self.locations
                    .resolve(vehicle.location())
                    .await
                    .map_err(ApplicationError::from)
            },
        )?;

        vehicle.set_price(price);
        vehicle.set_location(location);
        Ok(vehicle)
    }

    /// Creates or updates a vehicle and returns the stored record.
    ///
    /// Without an identifier the vehicle is persisted as-is and the store
    /// assigns one. With an identifier the stored record is updated through
    /// the merge-on-update whitelist.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::CarNotFound` when updating an identifier
    /// the store does not hold, or any store failure.
    #[tracing::instrument(skip(self, vehicle), fields(vehicle_id = ?vehicle.id()))]
    pub async fn save(&self, vehicle: Vehicle) -> ApplicationResult<Vehicle> {
        tracing::debug!("saving vehicle");
        match vehicle.id() {
            Some(id) => self.update(id, vehicle).await,
            None => {
                let stored = self.repository.save(vehicle).await?;
                tracing::info!(vehicle_id = ?stored.id(), "vehicle created");
                Ok(stored)
            }
        }
    }

    /// Deletes a vehicle.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::CarNotFound` without touching the store if
    /// the vehicle does not exist, or any store failure.
    #[tracing::instrument(skip(self), fields(vehicle_id = %id))]
    pub async fn delete(&self, id: VehicleId) -> ApplicationResult<()> {
        tracing::debug!("deleting vehicle");
        let vehicle = self.fetch(id).await?;
        self.repository.delete(&vehicle).await?;
        tracing::info!("vehicle deleted");
        Ok(())
    }

    async fn update(&self, id: VehicleId, incoming: Vehicle) -> ApplicationResult<Vehicle> {
        let mut existing = self.fetch(id).await?;
        merge_update(&mut existing, &incoming);

        let stored = self.repository.save(existing).await?;
        tracing::info!("vehicle updated");
        Ok(stored)
    }

    async fn fetch(&self, id: VehicleId) -> ApplicationResult<Vehicle> {
        self.repository.find_by_id(id).await?.ok_or_else(|| {
            tracing::warn!(vehicle_id = %id, "vehicle not found");
            ApplicationError::CarNotFound(id)
        })
    }
}

/// Copies the mutable fields of `incoming` onto `existing`.
///
/// Keep this list exact: identity and store bookkeeping must never come from
/// an update payload.
fn merge_update(existing: &mut Vehicle, incoming: &Vehicle) {
    existing.set_details(incoming.details().clone());
    existing.set_location(incoming.location().clone());
    existing.set_condition(incoming.condition());
    existing.set_modified_at(incoming.modified_at());
}
