//! # Vehicle Entity
//!
//! A vehicle record as persisted by a store, plus the derived price that is
//! filled in on read.
//!
//! # Identity
//!
//! A vehicle has no identifier until a store persists it for the first time.
//! The identifier is assigned exactly once; see [`Vehicle::assign_id`].
//!
//! # Examples
//!
//! ```
//! use vehicles_api::domain::entities::vehicle::{Details, Manufacturer, Vehicle};
//! use vehicles_api::domain::value_objects::{Condition, Location, VehicleId};
//!
//! let details = Details::new("Impala", Manufacturer::new(101, "Chevrolet"));
//! let mut vehicle = Vehicle::new(details, Location::new(40.73, -73.93).unwrap(), Condition::Used);
//! assert!(vehicle.id().is_none());
//!
//! vehicle.assign_id(VehicleId::new(1)).unwrap();
//! assert!(vehicle.assign_id(VehicleId::new(2)).is_err());
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::{Condition, Location, Price, Timestamp, VehicleId};
use serde::{Deserialize, Serialize};

/// Maker of a vehicle.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Manufacturer {
    /// Manufacturer code.
    pub code: u32,
    /// Display name.
    pub name: String,
}

impl Manufacturer {
    /// Creates a manufacturer.
    #[must_use]
    pub fn new(code: u32, name: impl Into<String>) -> Self {
        Self {
            code,
            name: name.into(),
        }
    }
}

/// Descriptive attributes of a vehicle.
///
/// Opaque to the aggregation logic; replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Details {
    /// Body style, e.g. "sedan".
    #[serde(default)]
    pub body: Option<String>,
    /// Model name.
    pub model: String,
    /// Manufacturer.
    pub manufacturer: Manufacturer,
    /// Number of doors.
    #[serde(default)]
    pub number_of_doors: Option<u8>,
    /// Fuel type.
    #[serde(default)]
    pub fuel_type: Option<String>,
    /// Engine description.
    #[serde(default)]
    pub engine: Option<String>,
    /// Mileage.
    #[serde(default)]
    pub mileage: Option<u32>,
    /// Model year.
    #[serde(default)]
    pub model_year: Option<u16>,
    /// Production year.
    #[serde(default)]
    pub production_year: Option<u16>,
    /// External colour.
    #[serde(default)]
    pub external_color: Option<String>,
}

impl Details {
    /// Creates details with only model and manufacturer set.
    #[must_use]
    pub fn new(model: impl Into<String>, manufacturer: Manufacturer) -> Self {
        Self {
            body: None,
            model: model.into(),
            manufacturer,
            number_of_doors: None,
            fuel_type: None,
            engine: None,
            mileage: None,
            model_year: None,
            production_year: None,
            external_color: None,
        }
    }

    /// Sets the body style.
    #[must_use]
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Sets the mileage.
    #[must_use]
    pub fn with_mileage(mut self, mileage: u32) -> Self {
        self.mileage = Some(mileage);
        self
    }

    /// Sets the external colour.
    #[must_use]
    pub fn with_external_color(mut self, color: impl Into<String>) -> Self {
        self.external_color = Some(color.into());
        self
    }
}

/// A vehicle record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    #[serde(default)]
    id: Option<VehicleId>,
    details: Details,
    location: Location,
    condition: Condition,
    #[serde(default)]
    price: Option<Price>,
    #[serde(default)]
    created_at: Option<Timestamp>,
    #[serde(default)]
    modified_at: Option<Timestamp>,
}

impl Vehicle {
    /// Creates an unpersisted vehicle.
    #[must_use]
    pub fn new(details: Details, location: Location, condition: Condition) -> Self {
        Self {
            id: None,
            details,
            location,
            condition,
            price: None,
            created_at: None,
            modified_at: None,
        }
    }

    /// Sets the identifier on an unpersisted value (builder style).
    ///
    /// Used by callers that address an existing record, e.g. an update payload.
    #[must_use]
    pub fn with_id(mut self, id: VehicleId) -> Self {
        self.id = Some(id);
        self
    }

    /// Sets the modification timestamp (builder style).
    #[must_use]
    pub fn with_modified_at(mut self, modified_at: Timestamp) -> Self {
        self.modified_at = Some(modified_at);
        self
    }

    /// Assigns the store identifier.
    ///
    /// Idempotent for the identifier already held.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IdentityReassignment` if a different identifier
    /// is already set.
    pub fn assign_id(&mut self, id: VehicleId) -> DomainResult<()> {
        match self.id {
            Some(current) if current != id => Err(DomainError::IdentityReassignment {
                current,
                requested: id,
            }),
            _ => {
                self.id = Some(id);
                Ok(())
            }
        }
    }

    /// Returns the identifier, if persisted.
    #[inline]
    #[must_use]
    pub fn id(&self) -> Option<VehicleId> {
        self.id
    }

    /// Returns the descriptive details.
    #[inline]
    #[must_use]
    pub fn details(&self) -> &Details {
        &self.details
    }

    /// Returns the location.
    #[inline]
    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Returns the condition.
    #[inline]
    #[must_use]
    pub fn condition(&self) -> Condition {
        self.condition
    }

    /// Returns the derived price, if enriched.
    #[inline]
    #[must_use]
    pub fn price(&self) -> Option<&Price> {
        self.price.as_ref()
    }

    /// Returns when the store first persisted the vehicle.
    #[inline]
    #[must_use]
    pub fn created_at(&self) -> Option<Timestamp> {
        self.created_at
    }

    /// Returns the last modification timestamp.
    #[inline]
    #[must_use]
    pub fn modified_at(&self) -> Option<Timestamp> {
        self.modified_at
    }

    /// Replaces the details.
    pub fn set_details(&mut self, details: Details) {
        self.details = details;
    }

    /// Replaces the location.
    pub fn set_location(&mut self, location: Location) {
        self.location = location;
    }

    /// Replaces the condition.
    pub fn set_condition(&mut self, condition: Condition) {
        self.condition = condition;
    }

    /// Replaces the modification timestamp.
    pub fn set_modified_at(&mut self, modified_at: Option<Timestamp>) {
        self.modified_at = modified_at;
    }

    /// Sets the derived price.
    pub fn set_price(&mut self, price: Price) {
        self.price = Some(price);
    }

    /// Drops the derived price.
    pub fn clear_price(&mut self) {
        self.price = None;
    }

    /// Records store bookkeeping for a first persist.
    ///
    /// Sets `created_at` if unset and defaults `modified_at` to the same
    /// instant.
    pub fn stamp_created(&mut self, now: Timestamp) {
        self.created_at.get_or_insert(now);
        self.modified_at.get_or_insert(now);
    }
}
