//! Error types used throughout the wallet client

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for wallet operations
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum QiwiError {
    /// The access token was rejected (HTTP 401)
    #[error("Wrong token")]
    InvalidCredentials,

    /// The token lacks the scope required by the method (HTTP 403)
    #[error("Not enough permissions to access this method")]
    InsufficientPermission,

    /// A parameter failed local validation; nothing was sent
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The service answered with an application-level error message
    #[error("API error: {0}")]
    RemoteApi(String),

    /// Carrier detection could not resolve the phone number
    #[error("Can't detect phone operator: {0}")]
    OperatorNotFound(String),

    /// Non-success status without an error message in the body
    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    /// The response body did not have the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for wallet operations
pub type Result<T> = std::result::Result<T, QiwiError>;
