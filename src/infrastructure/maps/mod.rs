//! # Maps
//!
//! - [`LocationResolver`]: address lookup port
//! - [`MapsClient`]: HTTP maps service

pub mod remote;
pub mod traits;

pub use remote::MapsClient;
pub use traits::{LocationError, LocationResolver, LocationResult};
