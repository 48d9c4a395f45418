//! # Repository Traits
//!
//! Port definition for vehicle persistence.
//!
//! The store is the sole owner of persisted vehicle state and the only
//! component that assigns identifiers.
//!
//! # Examples
//!
//! ```ignore
//! use vehicles_api::infrastructure::persistence::traits::VehicleRepository;
//!
//! async fn count_vehicles(repo: &impl VehicleRepository) {
//!     let all = repo.find_all().await.unwrap();
//!     println!("Found {} vehicles", all.len());
//! }
//! ```

use crate::domain::entities::Vehicle;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::VehicleId;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for repository operations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// Operation requires a persisted entity.
    #[error("Missing id: {entity_type} has not been persisted")]
    MissingId {
        /// Type of entity.
        entity_type: &'static str,
    },

    /// Entity violated a domain invariant while being stored.
    #[error("Invariant violation: {0}")]
    Invariant(#[from] DomainError),

    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),
}

impl RepositoryError {
    /// Creates a missing id error.
    #[must_use]
    pub fn missing_id(entity_type: &'static str) -> Self {
        Self::MissingId { entity_type }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(msg: impl Into<String>) -> Self {
        Self::Connection(msg.into())
    }

    /// Returns true if the store was unreachable.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Connection(_))
    }
}

/// Result type for repository operations.
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Repository for vehicle records.
///
/// Every call is independently safe to issue concurrently. No isolation is
/// provided across calls; the last write wins.
#[async_trait]
pub trait VehicleRepository: Send + Sync + fmt::Debug {
    /// Returns all vehicles in store order.
    async fn find_all(&self) -> RepositoryResult<Vec<Vehicle>>;

    /// Gets a vehicle by ID.
    ///
    /// Returns `None` if the vehicle does not exist.
    async fn find_by_id(&self, id: VehicleId) -> RepositoryResult<Option<Vehicle>>;

    /// Saves a vehicle and returns the stored record.
    ///
    /// Assigns a new identifier if the vehicle has none; otherwise inserts or
    /// replaces the record under its identifier. The derived price is never
    /// persisted.
    async fn save(&self, vehicle: Vehicle) -> RepositoryResult<Vehicle>;

    /// Deletes a vehicle.
    ///
    /// Deleting an identifier that is not stored is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::MissingId` if the vehicle was never persisted.
    async fn delete(&self, vehicle: &Vehicle) -> RepositoryResult<()>;

    /// Counts all vehicles.
    async fn count(&self) -> RepositoryResult<u64>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_id_error() {
        let err = RepositoryError::missing_id("Vehicle");
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("not been persisted"));
    }

    #[test]
    fn connection_error() {
        let err = RepositoryError::connection("Connection refused");
        assert!(err.is_retryable());
        assert!(err.to_string().contains("refused"));
    }

    #[test]
    fn invariant_from_domain() {
        let err: RepositoryError = DomainError::InvalidVehicleId("x".to_string()).into();
        assert!(err.to_string().contains("Invariant"));
    }
}
