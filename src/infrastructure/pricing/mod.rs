//! # Pricing
//!
//! - [`PriceSource`]: price lookup port
//! - `catalog`: in-process source over [`PriceCatalog`](crate::domain::services::PriceCatalog)
//! - [`RemotePriceClient`]: HTTP pricing service

pub mod catalog;
pub mod remote;
pub mod traits;

pub use remote::RemotePriceClient;
pub use traits::{PriceSource, PricingError, PricingResult};
