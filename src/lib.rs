//! # Vehicles API
//!
//! Vehicle records enriched on read with a market price and a resolved
//! location.
//!
//! ## Layers
//!
//! - [`domain`]: value objects, the [`Vehicle`](domain::entities::Vehicle)
//!   entity and the in-memory [`PriceCatalog`](domain::services::PriceCatalog)
//! - [`application`]: the [`VehicleAggregationService`](application::VehicleAggregationService)
//!   and its error taxonomy
//! - [`infrastructure`]: persistence, pricing and maps adapters
//! - [`config`] and [`telemetry`]: configuration loading and tracing setup
//!
//! # Examples
//!
//! ```ignore
//! use std::sync::Arc;
//! use vehicles_api::application::bootstrap::build_service;
//! use vehicles_api::config::AppConfig;
//! use vehicles_api::infrastructure::persistence::in_memory::InMemoryVehicleRepository;
//!
//! let config = AppConfig::load(None)?;
//! vehicles_api::telemetry::init_tracing(&config.logging)?;
//! let service = build_service(&config, Arc::new(InMemoryVehicleRepository::new()))?;
//! let vehicles = service.list().await?;
//! ```

#![warn(missing_docs)]
#![deny(clippy::unwrap_used, clippy::expect_used)]

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
