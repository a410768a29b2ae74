//! # QIWI Infrastructure
//!
//! I/O side of the QIWI wallet client.
//!
//! This crate contains:
//! - The HTTP transport (reqwest)
//! - The authenticated API client and its operations
//! - Configuration loading from environment and files
//! - Conversions from transport errors into `QiwiError`
//!
//! ## Architecture
//! - Depends on `qiwi-domain` for types, validation and errors
//! - Contains all "impure" code (network, filesystem, environment)

pub mod api;
pub mod config;
pub mod errors;
pub mod http;

// Re-export commonly used items
pub use api::{BearerToken, HttpVerb, QiwiClient, QiwiClientBuilder};
pub use errors::InfraError;
pub use http::{HttpClient, HttpClientBuilder};
pub use qiwi_domain::{QiwiError, Result};
