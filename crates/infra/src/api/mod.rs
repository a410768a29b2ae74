//! QIWI wallet API client
//!
//! [`QiwiClient`] owns one authenticated HTTP session. Operations are grouped
//! by area:
//!
//! - `profile`: account profile and identification
//! - `history`: payment history, statistics and transaction lookup
//! - `payments`: transfers, mobile top-ups, commission, balance and payment
//!   form links
//!
//! Every operation performs a single request; there is no retry layer.

pub mod auth;
pub mod client;
pub mod history;
pub mod payments;
pub mod profile;

pub use auth::BearerToken;
pub use client::{HttpVerb, QiwiClient, QiwiClientBuilder};
