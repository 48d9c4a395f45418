//! # Infrastructure Layer
//!
//! Adapters for the collaborators the aggregation service depends on.
//!
//! - [`persistence`]: vehicle store
//! - [`pricing`]: price sources
//! - [`maps`]: location resolution
//! - [`http`]: shared HTTP transport

pub mod http;
pub mod maps;
pub mod persistence;
pub mod pricing;
