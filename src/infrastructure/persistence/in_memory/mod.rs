//! # In-Memory Repositories
//!
//! In-memory implementations for tests and single-process deployments.
//!
//! ## Thread Safety
//!
//! Storage sits behind `Arc<tokio::sync::RwLock<_>>`; clones share state.

pub mod vehicle_repository;

pub use vehicle_repository::InMemoryVehicleRepository;
