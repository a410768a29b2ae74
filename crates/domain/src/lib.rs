//! # QIWI Domain
//!
//! Domain types for the QIWI wallet client.
//!
//! This crate contains:
//! - The error taxonomy and `Result` alias
//! - Closed vocabularies (operations, sources, providers, ...)
//! - Request payloads and response shapes
//! - Configuration structures
//! - Pure helpers (date normalization, payment form links)
//!
//! ## Architecture
//! - No I/O; every HTTP concern lives in `qiwi-infra`
//! - Only external dependencies allowed

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;
pub mod utils;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
pub use utils::{normalize_date, payment_form_url, PaymentForm};
