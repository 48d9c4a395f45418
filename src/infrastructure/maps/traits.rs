//! # Location Resolver Port
//!
//! Turns raw coordinates into a human-readable address.

use crate::domain::value_objects::Location;
use crate::infrastructure::http::HttpError;
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for location resolution.
#[derive(Debug, Clone, Error)]
pub enum LocationError {
    /// The maps service could not be reached or failed.
    #[error("maps service error: {0}")]
    Remote(#[from] HttpError),

    /// The maps service answered with an unusable body.
    #[error("invalid maps response: {0}")]
    InvalidResponse(String),
}

impl LocationError {
    /// Returns true if a caller could reasonably retry the lookup.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Remote(e) => e.is_retryable(),
            Self::InvalidResponse(_) => false,
        }
    }
}

/// Result type for location resolution.
pub type LocationResult<T> = Result<T, LocationError>;

/// Resolves a human-readable address for a raw location.
#[async_trait]
pub trait LocationResolver: Send + Sync + fmt::Debug {
    /// Returns `location` with its address attached.
    async fn resolve(&self, location: &Location) -> LocationResult<Location>;
}
