//! Payment payloads and response outcomes

use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::enums::ProviderCode;
use crate::constants::{OPERATOR_NOT_FOUND_CODE, PAYMENT_METHOD_ACCOUNT, RUB_CURRENCY_CODE};
use crate::{QiwiError, Result};

/// Body of `POST sinap/api/v2/terms/{provider}/payments`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Client-side transaction ID, used by the service to drop duplicates
    pub id: String,
    pub sum: PaymentSum,
    pub payment_method: PaymentMethod,
    pub fields: PaymentFields,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentSum {
    pub amount: f64,
    pub currency: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethod {
    #[serde(rename = "type")]
    pub kind: String,
    pub account_id: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentFields {
    pub account: String,
}

impl PaymentRequest {
    /// Rouble payment from the wallet balance to `account`.
    ///
    /// # Errors
    /// [`QiwiError::InvalidArgument`] if the amount is not a positive
    /// finite number.
    pub fn new(account: impl Into<String>, amount: f64, comment: Option<String>) -> Result<Self> {
        if !amount.is_finite() || amount <= 0.0 {
            return Err(QiwiError::InvalidArgument(format!("Unexpected amount: {amount}")));
        }

        Ok(Self {
            id: transaction_id(),
            sum: PaymentSum { amount, currency: RUB_CURRENCY_CODE.to_string() },
            payment_method: PaymentMethod {
                kind: PAYMENT_METHOD_ACCOUNT.to_string(),
                account_id: RUB_CURRENCY_CODE.to_string(),
            },
            fields: PaymentFields { account: account.into() },
            comment,
        })
    }
}

/// Transaction ID derived from the current UTC time in milliseconds.
///
/// Unique enough for the service's duplicate window, not globally unique.
pub fn transaction_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

/// Application-level error reported inside a response body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorPayload {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<Value>,
}

/// Decoded payment response: either an error payload or the accepted body
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ApiOutcome {
    Rejected(ErrorPayload),
    Accepted(Value),
}

impl ApiOutcome {
    /// Decode a response body.
    ///
    /// # Errors
    /// [`QiwiError::InvalidResponse`] if the body cannot be decoded at all.
    pub fn decode(body: Value) -> Result<Self> {
        serde_json::from_value(body).map_err(|e| QiwiError::InvalidResponse(e.to_string()))
    }

    /// # Errors
    /// [`QiwiError::RemoteApi`] carrying the service message on rejection.
    pub fn into_result(self) -> Result<Value> {
        match self {
            Self::Accepted(body) => Ok(body),
            Self::Rejected(error) => Err(QiwiError::RemoteApi(error.message)),
        }
    }
}

/// Response of the mobile carrier detection endpoint
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OperatorDetection {
    pub code: DetectionCode,
    /// Provider ID of the carrier when detection succeeded
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DetectionCode {
    /// Sent as a string by the service; numbers are tolerated
    pub value: Value,
    #[serde(rename = "_name", default)]
    pub name: Option<String>,
}

impl OperatorDetection {
    fn not_found(&self) -> bool {
        match &self.code.value {
            Value::String(value) => value == OPERATOR_NOT_FOUND_CODE,
            Value::Number(value) => value.to_string() == OPERATOR_NOT_FOUND_CODE,
            _ => false,
        }
    }

    /// Provider serving `phone`.
    ///
    /// # Errors
    /// [`QiwiError::OperatorNotFound`] on the not-found code,
    /// [`QiwiError::InvalidResponse`] if the provider ID is missing or not
    /// numeric.
    pub fn into_provider(self, phone: &str) -> Result<ProviderCode> {
        if self.not_found() {
            return Err(QiwiError::OperatorNotFound(phone.to_string()));
        }

        self.message
            .as_deref()
            .and_then(|id| id.trim().parse::<u32>().ok())
            .map(ProviderCode)
            .ok_or_else(|| {
                QiwiError::InvalidResponse(format!(
                    "carrier detection returned no provider for {phone}: {:?}",
                    self.message
                ))
            })
    }
}
