//! End-to-end service tests over the in-memory store, a generated price
//! catalog and a stub resolver.

#![allow(clippy::unwrap_used)]

use async_trait::async_trait;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;
use tokio_test::{assert_err, assert_ok};
use vehicles_api::application::{ApplicationError, VehicleAggregationService};
use vehicles_api::domain::entities::{Details, Manufacturer, Vehicle};
use vehicles_api::domain::services::{CATALOG_SIZE, PriceCatalog};
use vehicles_api::domain::value_objects::{Address, Condition, Location, Timestamp, VehicleId};
use vehicles_api::infrastructure::maps::{LocationResolver, LocationResult};
use vehicles_api::infrastructure::persistence::VehicleRepository;
use vehicles_api::infrastructure::persistence::in_memory::InMemoryVehicleRepository;
use vehicles_api::infrastructure::pricing::PriceSource;

#[derive(Debug, Default)]
struct StubResolver {
    calls: AtomicUsize,
    delay: Option<Duration>,
}

#[async_trait]
impl LocationResolver for StubResolver {
    async fn resolve(&self, location: &Location) -> LocationResult<Location> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(location.clone().with_address(Address {
            address: "777 Brockton Avenue".to_string(),
            city: "Abington".to_string(),
            state: "MA".to_string(),
            zip: "2351".to_string(),
        }))
    }
}

struct Harness {
    service: VehicleAggregationService,
    catalog: Arc<PriceCatalog>,
    repo: Arc<InMemoryVehicleRepository>,
    resolver: Arc<StubResolver>,
}

fn harness_with(resolver: StubResolver) -> Harness {
    let catalog = Arc::new(PriceCatalog::generate().unwrap());
    let repo = Arc::new(InMemoryVehicleRepository::new());
    let resolver = Arc::new(resolver);
    let service = VehicleAggregationService::new(repo.clone(), catalog.clone(), resolver.clone());
    Harness {
        service,
        catalog,
        repo,
        resolver,
    }
}

fn harness() -> Harness {
    harness_with(StubResolver::default())
}

fn vehicle(model: &str) -> Vehicle {
    Vehicle::new(
        Details::new(model, Manufacturer::new(101, "Chevrolet"))
            .with_body("sedan")
            .with_mileage(32_280),
        Location::new(40.730610, -73.935242).unwrap(),
        Condition::Used,
    )
}

#[tokio::test]
async fn create_then_find_is_enriched() {
    let h = harness();
    let created = h.service.save(vehicle("Impala")).await.unwrap();
    let id = created.id().unwrap();
    assert!(created.price().is_none());

    let found = h.service.find_by_id(id).await.unwrap();

    let price = found.price().unwrap();
    assert_eq!(price, h.catalog.get_price(id).unwrap());
    assert_eq!(price.currency(), "USD");
    assert!(found.location().is_resolved());
    assert_eq!(found.details(), created.details());
}

#[tokio::test]
async fn repeated_reads_return_the_same_price() {
    let h = harness();
    let id = h.service.save(vehicle("Impala")).await.unwrap().id().unwrap();

    let first = h.service.find_by_id(id).await.unwrap();
    let second = h.service.find_by_id(id).await.unwrap();
    assert_eq!(first.price(), second.price());
}

#[tokio::test]
async fn price_is_never_persisted() {
    let h = harness();
    let id = h.service.save(vehicle("Impala")).await.unwrap().id().unwrap();
    h.service.find_by_id(id).await.unwrap();

    let stored = h.repo.find_by_id(id).await.unwrap().unwrap();
    assert!(stored.price().is_none());
    assert!(!stored.location().is_resolved());
}

#[tokio::test]
async fn vehicle_beyond_catalog_has_no_price() {
    let h = harness();
    for n in 0..CATALOG_SIZE {
        h.service.save(vehicle(&format!("Model {n}"))).await.unwrap();
    }
    let last = VehicleId::new(CATALOG_SIZE);
    assert!(h.repo.find_by_id(last).await.unwrap().is_some());

    let err = h.service.find_by_id(last).await.unwrap_err();
    assert!(matches!(err, ApplicationError::PriceNotFound(id) if id == last));
    assert!(err.is_not_found());
}

#[tokio::test]
async fn list_resolves_each_vehicle_without_pricing() {
    let h = harness();
    h.service.save(vehicle("Impala")).await.unwrap();
    h.service.save(vehicle("Malibu")).await.unwrap();
    h.service.save(vehicle("Tahoe")).await.unwrap();

    let all = h.service.list().await.unwrap();

    let models: Vec<_> = all.iter().map(|v| v.details().model.as_str()).collect();
    assert_eq!(models, ["Impala", "Malibu", "Tahoe"]);
    assert!(all.iter().all(|v| v.location().is_resolved() && v.price().is_none()));
    assert_eq!(h.resolver.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn update_merges_and_keeps_creation_time() {
    let h = harness();
    let created = h.service.save(vehicle("Impala")).await.unwrap();
    let id = created.id().unwrap();

    let modified = Timestamp::from_secs(1_900_000_000).unwrap();
    let mut update = vehicle("Impala LT").with_id(id).with_modified_at(modified);
    update.set_condition(Condition::New);
    update.set_location(Location::new(42.0, -71.0).unwrap());

    let updated = h.service.save(update).await.unwrap();

    assert_eq!(updated.id(), Some(id));
    assert_eq!(updated.details().model, "Impala LT");
    assert_eq!(updated.condition(), Condition::New);
    assert_eq!(updated.location().lat(), 42.0);
    assert_eq!(updated.modified_at(), Some(modified));
    assert_eq!(updated.created_at(), created.created_at());
    assert_eq!(h.repo.count().await.unwrap(), 1);
}

#[tokio::test]
async fn update_of_unknown_vehicle_fails() {
    let h = harness();
    let result = h.service.save(vehicle("Ghost").with_id(VehicleId::new(42))).await;
    let err = assert_err!(result);
    assert!(matches!(err, ApplicationError::CarNotFound(_)));
}

#[tokio::test]
async fn delete_then_find_fails() {
    let h = harness();
    let id = h.service.save(vehicle("Impala")).await.unwrap().id().unwrap();

    assert_ok!(h.service.delete(id).await);

    assert!(matches!(
        h.service.find_by_id(id).await,
        Err(ApplicationError::CarNotFound(_))
    ));
    assert!(matches!(
        h.service.delete(id).await,
        Err(ApplicationError::CarNotFound(_))
    ));
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let h = harness();
    let first = h.service.save(vehicle("A")).await.unwrap().id().unwrap();
    h.service.delete(first).await.unwrap();
    let second = h.service.save(vehicle("B")).await.unwrap().id().unwrap();
    assert!(second > first);
}

#[tokio::test]
async fn concurrent_reads_see_consistent_prices() {
    let h = harness();
    let id = h.service.save(vehicle("Impala")).await.unwrap().id().unwrap();
    let expected = h.catalog.get_price(id).unwrap().clone();

    let handles: Vec<_> = (0..16)
        .map(|_| {
            let service = h.service.clone();
            tokio::spawn(async move { service.find_by_id(id).await })
        })
        .collect();

    for handle in handles {
        let vehicle = handle.await.unwrap().unwrap();
        assert_eq!(vehicle.price(), Some(&expected));
    }
}

#[tokio::test]
async fn caller_timeout_cancels_a_slow_lookup() {
    let h = harness_with(StubResolver {
        delay: Some(Duration::from_secs(30)),
        ..StubResolver::default()
    });
    let id = h.service.save(vehicle("Impala")).await.unwrap().id().unwrap();

    let outcome = tokio::time::timeout(Duration::from_millis(50), h.service.find_by_id(id)).await;

    assert!(outcome.is_err());
    assert_eq!(h.resolver.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn catalog_serves_as_price_source_directly() {
    let h = harness();
    let price = h.catalog.get_price(VehicleId::new(1)).unwrap().clone();
    let via_port = PriceSource::get_price(h.catalog.as_ref(), VehicleId::new(1))
        .await
        .unwrap();
    assert_eq!(price, via_port);
}
