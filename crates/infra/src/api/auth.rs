//! API authentication with a static bearer token
//!
//! Wallet tokens are issued once on the provider's site and do not expire
//! on a schedule, so the client only has to attach them to each API call.

use std::fmt;

use qiwi_domain::QiwiError;
use reqwest::header::HeaderValue;

/// Access token for the wallet API
///
/// `Debug` never prints the secret.
#[derive(Clone, PartialEq, Eq)]
pub struct BearerToken(String);

impl BearerToken {
    /// Wrap a token, rejecting values that cannot be sent in a header.
    ///
    /// # Errors
    ///
    /// Returns [`QiwiError::InvalidArgument`] for an empty token or one
    /// containing characters not allowed in an HTTP header.
    pub fn new(token: impl Into<String>) -> Result<Self, QiwiError> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            return Err(QiwiError::InvalidArgument("access token is empty".into()));
        }
        HeaderValue::from_str(trimmed).map_err(|_| {
            QiwiError::InvalidArgument("access token contains invalid characters".into())
        })?;
        Ok(Self(trimmed.to_string()))
    }

    /// `Authorization` header value.
    pub fn header_value(&self) -> String {
        format!("Bearer {}", self.0)
    }
}

impl fmt::Debug for BearerToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BearerToken(***)")
    }
}
