//! # Application Services
//!
//! - [`VehicleAggregationService`]: vehicle CRUD with price and location
//!   enrichment

pub mod vehicle_aggregation;

pub use vehicle_aggregation::VehicleAggregationService;
