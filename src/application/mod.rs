//! # Application Layer
//!
//! Orchestration over the domain and the infrastructure ports.
//!
//! - [`services`]: the vehicle aggregation service
//! - [`bootstrap`]: wiring from configuration
//! - [`error`]: application error taxonomy

pub mod bootstrap;
pub mod error;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use services::VehicleAggregationService;
