//! # Domain Layer
//!
//! Vehicle entities, value objects and the price catalog.
//!
//! Nothing in this layer performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
