//! # Domain Entities
//!
//! - [`Vehicle`]: persisted vehicle record with derived price

pub mod vehicle;

pub use vehicle::{Details, Manufacturer, Vehicle};
