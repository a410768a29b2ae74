//! Closed vocabularies of the wallet API
//!
//! Filters and form options are validated against these sets before any
//! request is built. Parsing a value outside a set fails with
//! [`QiwiError::InvalidArgument`](crate::QiwiError::InvalidArgument).

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::impl_closed_set;

/// Transaction direction accepted by history and statistics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operation {
    All,
    In,
    Out,
    QiwiCard,
}

impl_closed_set!(Operation {
    All => "ALL",
    In => "IN",
    Out => "OUT",
    QiwiCard => "QIWI_CARD",
});

/// Funding origin accepted by history and statistics queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Source {
    QwRub,
    QwUsd,
    QwEur,
    Card,
    Mk,
}

impl_closed_set!(Source {
    QwRub => "QW_RUB",
    QwUsd => "QW_USD",
    QwEur => "QW_EUR",
    Card => "CARD",
    Mk => "MK",
});

/// Wallet identification level reported by the identification endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IdentificationLevel {
    Simple,
    Verified,
    Full,
}

impl_closed_set!(IdentificationLevel {
    Simple => "SIMPLE",
    Verified => "VERIFIED",
    Full => "FULL",
});

/// Status of a transaction in the payment history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Waiting,
    Success,
    Error,
}

impl_closed_set!(PaymentStatus {
    Waiting => "WAITING",
    Success => "SUCCESS",
    Error => "ERROR",
});

/// Payment-form fields that can be locked against editing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockedField {
    Sum,
    Account,
    Comment,
}

impl_closed_set!(BlockedField {
    Sum => "sum",
    Account => "account",
    Comment => "comment",
});

/// Well-known payment providers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum Provider {
    Qiwi = 99,
    AlfaBank = 464,
    TinkoffBank = 466,
    RsBank = 815,
    PsBank = 821,
    VisaCis = 1960,
    VisaRussia = 1963,
    MastercardCis = 21012,
    MastercardRussia = 21013,
    Mir = 31652,
}

impl Provider {
    pub const fn code(self) -> u32 {
        self as u32
    }
}

/// Provider identifier as sent on the wire
///
/// Built from a [`Provider`] or from any raw integer code the service knows
/// about (mobile operators, utilities, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProviderCode(pub u32);

impl From<Provider> for ProviderCode {
    fn from(provider: Provider) -> Self {
        Self(provider.code())
    }
}

impl From<u32> for ProviderCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

impl fmt::Display for ProviderCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
