//! # Price Catalog
//!
//! Fixed, in-memory set of vehicle prices.
//!
//! The catalog holds one [`Price`] per vehicle identifier in
//! `1..CATALOG_SIZE`. Amounts are drawn uniformly from `[1, 5)`, scaled by
//! 5000 and rounded half-up to two decimals, so every amount lies in
//! `[5000.00, 25000.00]`.
//!
//! # Lifecycle
//!
//! The map is fully populated by the constructor and never mutated
//! afterwards. Build it once at start-up and share it behind an `Arc`;
//! concurrent readers need no synchronization.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::domain::services::price_catalog::PriceCatalog;
//! use vehicles_api::domain::value_objects::VehicleId;
//!
//! let catalog = PriceCatalog::generate().unwrap();
//! assert_eq!(catalog.len(), 19);
//!
//! let price = catalog.get_price(VehicleId::new(1)).unwrap();
//! assert_eq!(price.currency(), "USD");
//! assert!(catalog.get_price(VehicleId::new(20)).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Price, VehicleId};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::ops::Range;

/// Exclusive upper bound of catalog identifiers.
pub const CATALOG_SIZE: u64 = 20;

/// Range samples must fall in before scaling.
pub const SAMPLE_RANGE: Range<f64> = 1.0..5.0;

/// Factor applied to every sample.
pub const PRICE_MULTIPLIER: u64 = 5000;

/// Immutable vehicle price catalog.
#[derive(Debug, Clone)]
pub struct PriceCatalog {
    prices: HashMap<VehicleId, Price>,
}

impl PriceCatalog {
    /// Generates a catalog from the thread-local random source.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::DuplicatePrice` if an identifier is inserted
    /// twice. Callers should treat this as fatal.
    pub fn generate() -> DomainResult<Self> {
        Self::from_sampler(draw_sample)
    }

    /// Generates a catalog drawing one sample per identifier from `sample`.
    ///
    /// Each sample must lie in [`SAMPLE_RANGE`].
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidPrice` for a sample outside the range and
    /// `DomainError::DuplicatePrice` if an identifier is inserted twice.
    ///
    /// # Examples
    ///
    /// ```
    /// use vehicles_api::domain::services::price_catalog::PriceCatalog;
    /// use vehicles_api::domain::value_objects::VehicleId;
    ///
    /// let catalog = PriceCatalog::from_sampler(|| 2.5).unwrap();
    /// let price = catalog.get_price(VehicleId::new(7)).unwrap();
    /// assert_eq!(price.amount().to_string(), "12500.00");
    /// ```
    pub fn from_sampler<F>(mut sample: F) -> DomainResult<Self>
    where
        F: FnMut() -> f64,
    {
        let mut prices = HashMap::with_capacity((CATALOG_SIZE - 1) as usize);
        for raw in 1..CATALOG_SIZE {
            let vehicle_id = VehicleId::new(raw);
            let price = Price::usd(scaled_amount(sample())?, vehicle_id)?;
            if prices.insert(vehicle_id, price).is_some() {
                return Err(DomainError::DuplicatePrice(vehicle_id));
            }
        }

        Ok(Self { prices })
    }

    /// Returns the price for `vehicle_id`.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::PriceNotFound` if the catalog has no entry.
    pub fn get_price(&self, vehicle_id: VehicleId) -> DomainResult<&Price> {
        self.prices
            .get(&vehicle_id)
            .ok_or(DomainError::PriceNotFound(vehicle_id))
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.prices.len()
    }

    /// Returns true if the catalog holds no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    /// Returns the catalog identifiers in ascending order.
    #[must_use]
    pub fn vehicle_ids(&self) -> Vec<VehicleId> {
        let mut ids: Vec<VehicleId> = self.prices.keys().copied().collect();
        ids.sort_unstable();
        ids
    }
}

/// Uniform draw from [`SAMPLE_RANGE`], never equal to its end.
fn draw_sample() -> f64 {
    rand::random_range(SAMPLE_RANGE)
}

/// Scales a sample by [`PRICE_MULTIPLIER`]. Rounding happens in [`Price::new`].
fn scaled_amount(sample: f64) -> DomainResult<Decimal> {
    if !sample.is_finite() || !SAMPLE_RANGE.contains(&sample) {
        return Err(DomainError::invalid_price(format!(
            "sample {sample} outside [{}, {})",
            SAMPLE_RANGE.start, SAMPLE_RANGE.end
        )));
    }

    Decimal::from_f64_retain(sample)
        .and_then(|d| d.checked_mul(Decimal::from(PRICE_MULTIPLIER)))
        .ok_or_else(|| DomainError::invalid_price(format!("sample {sample} not representable")))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn lower() -> Decimal {
        Decimal::new(500_000, 2)
    }

    fn upper() -> Decimal {
        Decimal::new(2_500_000, 2)
    }

    #[test]
    fn affine_draw_can_land_on_the_excluded_end() {
        let unit = 1.0 - f64::EPSILON / 2.0;
        let mapped = SAMPLE_RANGE.start + unit * (SAMPLE_RANGE.end - SAMPLE_RANGE.start);
        assert_eq!(mapped, SAMPLE_RANGE.end);
        assert!(matches!(
            PriceCatalog::from_sampler(|| mapped),
            Err(DomainError::InvalidPrice(_))
        ));
    }

    #[test]
    fn drawn_samples_stay_inside_range() {
        for _ in 0..100_000 {
            let sample = draw_sample();
            assert!(SAMPLE_RANGE.contains(&sample), "sample {sample} escaped");
        }
        assert!(PriceCatalog::generate().is_ok());
    }

    #[test]
    fn covers_ids_one_through_nineteen() {
        let catalog = PriceCatalog::generate().unwrap();
        assert_eq!(catalog.len(), 19);
        assert!(!catalog.is_empty());

        let ids = catalog.vehicle_ids();
        assert_eq!(ids.first(), Some(&VehicleId::new(1)));
        assert_eq!(ids.last(), Some(&VehicleId::new(19)));
    }

    #[test]
    fn every_price_is_shaped() {
        let catalog = PriceCatalog::generate().unwrap();
        for id in 1..CATALOG_SIZE {
            let price = catalog.get_price(VehicleId::new(id)).unwrap();
            assert_eq!(price.currency(), "USD");
            assert_eq!(price.vehicle_id(), VehicleId::new(id));
            assert_eq!(price.amount().scale(), 2);
            assert!(price.amount() >= lower());
            assert!(price.amount() <= upper());
        }
    }

    #[test]
    fn ids_outside_range_miss() {
        let catalog = PriceCatalog::generate().unwrap();
        for id in [0, CATALOG_SIZE, CATALOG_SIZE + 1, u64::MAX] {
            let err = catalog.get_price(VehicleId::new(id)).unwrap_err();
            assert_eq!(err, DomainError::PriceNotFound(VehicleId::new(id)));
        }
    }

    #[test]
    fn repeated_lookups_are_equal() {
        let catalog = PriceCatalog::generate().unwrap();
        let first = catalog.get_price(VehicleId::new(4)).unwrap().clone();
        let second = catalog.get_price(VehicleId::new(4)).unwrap().clone();
        assert_eq!(first, second);
    }

    #[test]
    fn deterministic_sampler() {
        let mut samples = [1.0, 5.0 - 2f64.powi(-20)].into_iter().cycle();
        let catalog = PriceCatalog::from_sampler(|| samples.next().unwrap()).unwrap();
        assert_eq!(
            catalog.get_price(VehicleId::new(1)).unwrap().amount(),
            lower()
        );
        // 24999.9952... rounds half-up to the upper bound
        assert_eq!(
            catalog.get_price(VehicleId::new(2)).unwrap().amount(),
            upper()
        );
    }

    #[test]
    fn rejects_out_of_range_samples() {
        assert!(matches!(
            PriceCatalog::from_sampler(|| 5.0),
            Err(DomainError::InvalidPrice(_))
        ));
        assert!(PriceCatalog::from_sampler(|| 0.5).is_err());
        assert!(PriceCatalog::from_sampler(|| f64::NAN).is_err());
    }

    #[test]
    fn concurrent_readers() {
        let catalog = std::sync::Arc::new(PriceCatalog::generate().unwrap());
        let handles: Vec<_> = (1..CATALOG_SIZE)
            .map(|id| {
                let catalog = std::sync::Arc::clone(&catalog);
                std::thread::spawn(move || catalog.get_price(VehicleId::new(id)).unwrap().clone())
            })
            .collect();
        for handle in handles {
            let price = handle.join().unwrap();
            assert_eq!(catalog.get_price(price.vehicle_id()).unwrap(), &price);
        }
    }

    proptest! {
        #[test]
        fn any_sample_yields_bounded_two_decimal_amount(sample in 1.0f64..5.0) {
            let catalog = PriceCatalog::from_sampler(|| sample).unwrap();
            let amount = catalog.get_price(VehicleId::new(1)).unwrap().amount();
            prop_assert_eq!(amount.scale(), 2);
            prop_assert!(amount >= lower());
            prop_assert!(amount <= upper());
        }
    }
}
