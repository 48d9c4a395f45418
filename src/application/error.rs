//! # Application Errors
//!
//! Error types returned by the vehicle aggregation service.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── CarNotFound(VehicleId)       - Vehicle absent from the store
//! ├── PriceNotFound(VehicleId)     - Price source has no entry
//! ├── Domain(DomainError)          - Invariant violations
//! ├── Repository(RepositoryError)  - Store failures
//! ├── Pricing(PricingError)        - Pricing service failures
//! ├── Location(LocationError)      - Maps service failures
//! └── Configuration(String)        - Invalid wiring configuration
//! ```
//!
//! Collaborator failures are wrapped, never swallowed or retried.
//!
//! # Examples
//!
//! ```
//! use vehicles_api::application::error::ApplicationError;
//! use vehicles_api::domain::value_objects::VehicleId;
//! use vehicles_api::infrastructure::pricing::PricingError;
//!
//! let err: ApplicationError = PricingError::NotFound(VehicleId::new(3)).into();
//! assert!(matches!(err, ApplicationError::PriceNotFound(_)));
//! assert!(err.is_not_found());
//! ```

use crate::domain::errors::DomainError;
use crate::domain::value_objects::VehicleId;
use crate::infrastructure::maps::LocationError;
use crate::infrastructure::persistence::RepositoryError;
use crate::infrastructure::pricing::PricingError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Vehicle does not exist in the store.
    #[error("car not found: {0}")]
    CarNotFound(VehicleId),

    /// Price source has no price for the vehicle.
    #[error("price not found for vehicle {0}")]
    PriceNotFound(VehicleId),

    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Vehicle store failure.
    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Pricing service failure other than a missing price.
    #[error("pricing error: {0}")]
    Pricing(PricingError),

    /// Location resolution failure.
    #[error("location error: {0}")]
    Location(#[from] LocationError),

    /// Invalid configuration while wiring the service.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Creates a configuration error.
    #[must_use]
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Returns true if a vehicle or its price was not found.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::CarNotFound(_) | Self::PriceNotFound(_))
    }

    /// Returns true if the underlying collaborator failure is transient.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Repository(e) => e.is_retryable(),
            Self::Pricing(e) => e.is_retryable(),
            Self::Location(e) => e.is_retryable(),
            _ => false,
        }
    }
}

impl From<PricingError> for ApplicationError {
    fn from(error: PricingError) -> Self {
        match error {
            PricingError::NotFound(id) => Self::PriceNotFound(id),
            other => Self::Pricing(other),
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
