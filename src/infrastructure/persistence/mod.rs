//! # Persistence Layer
//!
//! ## Repository Traits (Ports)
//!
//! - [`VehicleRepository`]: persistence for vehicle records
//!
//! ## Implementations
//!
//! - `in_memory`: in-memory store

pub mod in_memory;
pub mod traits;

pub use traits::{RepositoryError, RepositoryResult, VehicleRepository};
