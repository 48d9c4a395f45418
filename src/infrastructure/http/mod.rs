//! # HTTP Transport
//!
//! Shared client and error type for remote collaborator services.

pub mod client;
pub mod error;

pub use client::HttpClient;
pub use error::{HttpError, HttpResult};
