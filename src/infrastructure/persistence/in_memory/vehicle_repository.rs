//! # In-Memory Vehicle Repository
//!
//! In-memory implementation of [`VehicleRepository`].
//!
//! Records live in a `BTreeMap` keyed by identifier, so `find_all` returns
//! vehicles in ascending id order. Identifiers come from an atomic sequence
//! starting at 1.

use crate::domain::entities::Vehicle;
use crate::domain::value_objects::{Timestamp, VehicleId};
use crate::infrastructure::persistence::traits::{
    RepositoryError, RepositoryResult, VehicleRepository,
};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::RwLock;

/// In-memory implementation of [`VehicleRepository`].
#[derive(Debug, Clone)]
pub struct InMemoryVehicleRepository {
    storage: Arc<RwLock<BTreeMap<VehicleId, Vehicle>>>,
    next_id: Arc<AtomicU64>,
}

impl InMemoryVehicleRepository {
    /// Creates a new empty in-memory vehicle repository.
    #[must_use]
    pub fn new() -> Self {
        Self {
            storage: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Returns the number of vehicles in the repository.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the repository is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clears all vehicles from the repository. The id sequence is kept.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }

    fn allocate_id(&self) -> VehicleId {
        VehicleId::new(self.next_id.fetch_add(1, Ordering::SeqCst))
    }

    /// Moves the sequence past an externally chosen id.
    fn reserve_id(&self, id: VehicleId) {
        self.next_id
            .fetch_max(id.get().saturating_add(1), Ordering::SeqCst);
    }
}

impl Default for InMemoryVehicleRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>> {
        let storage = self.storage.read().await;
        Ok(storage.values().cloned().collect())
    }

    async fn find_by_id(&self, id: VehicleId) -> RepositoryResult<Option<Vehicle>> {
        let storage = self.storage.read().await;
        Ok(storage.get(&id).cloned())
    }

    async fn save(&self, mut vehicle: Vehicle) -> RepositoryResult<Vehicle> {
        vehicle.clear_price();

        let mut storage = self.storage.write().await;
        let id = match vehicle.id() {
            Some(id) => {
                self.reserve_id(id);
                id
            }
            None => {
                let id = self.allocate_id();
                vehicle.assign_id(id)?;
                id
            }
        };

        if !storage.contains_key(&id) {
            vehicle.stamp_created(Timestamp::now());
        }
        storage.insert(id, vehicle.clone());
        Ok(vehicle)
    }

    async fn delete(&self, vehicle: &Vehicle) -> RepositoryResult<()> {
        let id = vehicle
            .id()
            .ok_or_else(|| RepositoryError::missing_id("Vehicle"))?;
        let mut storage = self.storage.write().await;
        storage.remove(&id);
        Ok(())
    }

    async fn count(&self) -> RepositoryResult<u64> {
        let storage = self.storage.read().await;
        Ok(storage.len() as u64)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::{Details, Manufacturer};
    use crate::domain::value_objects::{Condition, Location, Price};
    use rust_decimal::Decimal;

    fn vehicle(model: &str) -> Vehicle {
        Vehicle::new(
            Details::new(model, Manufacturer::new(101, "Chevrolet")),
            Location::new(40.73, -73.93).unwrap(),
            Condition::Used,
        )
    }

    #[tokio::test]
    async fn new_repository_is_empty() {
        let repo = InMemoryVehicleRepository::new();
        assert!(repo.is_empty());
        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn save_assigns_sequential_ids() {
        let repo = InMemoryVehicleRepository::new();
        let first = repo.save(vehicle("Impala")).await.unwrap();
        let second = repo.save(vehicle("Malibu")).await.unwrap();

        assert_eq!(first.id(), Some(VehicleId::new(1)));
        assert_eq!(second.id(), Some(VehicleId::new(2)));
        assert!(first.created_at().is_some());
        assert!(first.modified_at().is_some());
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn save_does_not_persist_price() {
        let repo = InMemoryVehicleRepository::new();
        let mut v = vehicle("Impala");
        v.set_price(Price::usd(Decimal::new(1_000_000, 2), VehicleId::new(1)).unwrap());

        let stored = repo.save(v).await.unwrap();
        assert!(stored.price().is_none());
        let fetched = repo.find_by_id(stored.id().unwrap()).await.unwrap().unwrap();
        assert!(fetched.price().is_none());
    }

    #[tokio::test]
    async fn save_with_id_replaces_and_keeps_created_at() {
        let repo = InMemoryVehicleRepository::new();
        let stored = repo.save(vehicle("Impala")).await.unwrap();
        let created = stored.created_at();

        let mut updated = stored.clone();
        updated.set_condition(Condition::New);
        let saved = repo.save(updated).await.unwrap();

        assert_eq!(saved.id(), stored.id());
        assert_eq!(saved.created_at(), created);
        assert_eq!(saved.condition(), Condition::New);
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn explicit_id_advances_sequence() {
        let repo = InMemoryVehicleRepository::new();
        repo.save(vehicle("Impala").with_id(VehicleId::new(10)))
            .await
            .unwrap();
        let next = repo.save(vehicle("Malibu")).await.unwrap();
        assert_eq!(next.id(), Some(VehicleId::new(11)));
    }

    #[tokio::test]
    async fn find_all_in_id_order() {
        let repo = InMemoryVehicleRepository::new();
        repo.save(vehicle("B").with_id(VehicleId::new(5)))
            .await
            .unwrap();
        repo.save(vehicle("A").with_id(VehicleId::new(2)))
            .await
            .unwrap();

        let all = repo.find_all().await.unwrap();
        let ids: Vec<_> = all.iter().filter_map(Vehicle::id).collect();
        assert_eq!(ids, vec![VehicleId::new(2), VehicleId::new(5)]);
    }

    #[tokio::test]
    async fn delete() {
        let repo = InMemoryVehicleRepository::new();
        let stored = repo.save(vehicle("Impala")).await.unwrap();

        repo.delete(&stored).await.unwrap();
        assert!(repo.find_by_id(stored.id().unwrap()).await.unwrap().is_none());
        // absent id is a no-op
        repo.delete(&stored).await.unwrap();
    }

    #[tokio::test]
    async fn delete_unpersisted_fails() {
        let repo = InMemoryVehicleRepository::new();
        let err = repo.delete(&vehicle("Impala")).await.unwrap_err();
        assert!(matches!(err, RepositoryError::MissingId { .. }));
    }

    #[tokio::test]
    async fn clear() {
        let repo = InMemoryVehicleRepository::new();
        repo.save(vehicle("Impala")).await.unwrap();
        repo.clear().await;
        assert_eq!(repo.count().await.unwrap(), 0);
    }
}
