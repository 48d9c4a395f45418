//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! - [`VehicleId`]: numeric vehicle identifier
//! - [`Price`]: two-decimal, strictly positive vehicle price
//! - [`Location`], [`Address`]: coordinates and their resolved address
//! - [`Condition`]: new or used
//! - [`Timestamp`]: UTC point in time

pub mod enums;
pub mod ids;
pub mod location;
pub mod price;
pub mod timestamp;

pub use enums::Condition;
pub use ids::VehicleId;
pub use location::{Address, Location};
pub use price::{DEFAULT_CURRENCY, PRICE_SCALE, Price};
pub use timestamp::Timestamp;
