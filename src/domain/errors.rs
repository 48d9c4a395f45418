//! # Domain Errors
//!
//! Invariant violations and lookup failures raised by domain types.

use crate::domain::value_objects::VehicleId;
use thiserror::Error;

/// Error raised by domain types and the price catalog.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// The catalog holds no price for the vehicle.
    #[error("cannot find price for vehicle {0}")]
    PriceNotFound(VehicleId),

    /// A catalog entry was inserted twice for the same vehicle.
    #[error("duplicate price for vehicle {0}")]
    DuplicatePrice(VehicleId),

    /// Price amount or sample violates the price invariants.
    #[error("invalid price: {0}")]
    InvalidPrice(String),

    /// Vehicle identifier could not be parsed.
    #[error("invalid vehicle id: {0}")]
    InvalidVehicleId(String),

    /// Coordinates are out of range or not finite.
    #[error("invalid location: {0}")]
    InvalidLocation(String),

    /// Unknown vehicle condition.
    #[error("invalid condition: {0}")]
    InvalidCondition(String),

    /// A persisted vehicle was handed a different identifier.
    #[error("vehicle {current} cannot be reassigned id {requested}")]
    IdentityReassignment {
        /// Identifier already held by the vehicle.
        current: VehicleId,
        /// Identifier that was offered.
        requested: VehicleId,
    },
}

impl DomainError {
    /// Creates an invalid price error.
    #[must_use]
    pub fn invalid_price(message: impl Into<String>) -> Self {
        Self::InvalidPrice(message.into())
    }

    /// Creates an invalid location error.
    #[must_use]
    pub fn invalid_location(message: impl Into<String>) -> Self {
        Self::InvalidLocation(message.into())
    }

    /// Returns true if this is a lookup miss rather than an invariant violation.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::PriceNotFound(_))
    }
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
