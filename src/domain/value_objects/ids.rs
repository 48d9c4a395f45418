//! # Identifiers
//!
//! Numeric vehicle identifier.

use crate::domain::errors::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of a vehicle record.
///
/// Stores assign identifiers starting at 1. Any value may be used for a
/// lookup; unknown values simply miss.
///
/// # Examples
///
/// ```
/// use vehicles_api::domain::value_objects::VehicleId;
///
/// let id: VehicleId = "7".parse().unwrap();
/// assert_eq!(id.get(), 7);
/// assert!("seven".parse::<VehicleId>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VehicleId(u64);

impl VehicleId {
    /// Creates a vehicle identifier.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for VehicleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for VehicleId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl TryFrom<i64> for VehicleId {
    type Error = DomainError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u64::try_from(value)
            .map(Self)
            .map_err(|_| DomainError::InvalidVehicleId(value.to_string()))
    }
}

impl FromStr for VehicleId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<u64>()
            .map(Self)
            .map_err(|_| DomainError::InvalidVehicleId(s.to_string()))
    }
}
