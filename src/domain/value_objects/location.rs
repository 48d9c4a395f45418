//! # Location Value Object
//!
//! Raw coordinates of a vehicle, optionally decorated with the street
//! address a maps service resolved for them.

use crate::domain::errors::{DomainError, DomainResult};
use serde::{Deserialize, Serialize};

/// Human-readable address resolved for a pair of coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Address {
    /// Street line.
    pub address: String,
    /// City name.
    pub city: String,
    /// State or region.
    pub state: String,
    /// Postal code.
    pub zip: String,
}

/// Location of a vehicle.
///
/// # Invariants
///
/// - `lat` within `[-90, 90]`, `lon` within `[-180, 180]`, both finite
///
/// # Examples
///
/// ```
/// use vehicles_api::domain::value_objects::Location;
///
/// let location = Location::new(40.730610, -73.935242).unwrap();
/// assert!(!location.is_resolved());
/// assert!(Location::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLocation", into = "RawLocation")]
pub struct Location {
    lat: f64,
    lon: f64,
    address: Option<Address>,
}

impl Location {
    /// Creates an unresolved location.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidLocation` if a coordinate is out of range.
    pub fn new(lat: f64, lon: f64) -> DomainResult<Self> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(DomainError::invalid_location(format!("latitude {lat}")));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(DomainError::invalid_location(format!("longitude {lon}")));
        }
        Ok(Self {
            lat,
            lon,
            address: None,
        })
    }

    /// Returns a copy carrying the resolved address.
    #[must_use]
    pub fn with_address(mut self, address: Address) -> Self {
        self.address = Some(address);
        self
    }

    /// Latitude in degrees.
    #[inline]
    #[must_use]
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees.
    #[inline]
    #[must_use]
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// Resolved address, if any.
    #[inline]
    #[must_use]
    pub fn address(&self) -> Option<&Address> {
        self.address.as_ref()
    }

    /// Returns true once an address has been attached.
    #[inline]
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        self.address.is_some()
    }
}

#[derive(Serialize, Deserialize)]
struct RawLocation {
    lat: f64,
    lon: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    address: Option<Address>,
}

impl TryFrom<RawLocation> for Location {
    type Error = DomainError;

    fn try_from(raw: RawLocation) -> Result<Self, Self::Error> {
        let location = Self::new(raw.lat, raw.lon)?;
        Ok(match raw.address {
            Some(address) => location.with_address(address),
            None => location,
        })
    }
}

impl From<Location> for RawLocation {
    fn from(location: Location) -> Self {
        Self {
            lat: location.lat,
            lon: location.lon,
            address: location.address,
        }
    }
}
