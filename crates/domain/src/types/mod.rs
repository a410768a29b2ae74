//! Domain types and models

pub mod balance;
pub mod enums;
pub mod history;
pub mod payments;
pub mod profile;

pub use balance::{project_balances, AccountBalance, FundingAccount};
pub use enums::{
    BlockedField, IdentificationLevel, Operation, PaymentStatus, Provider, ProviderCode, Source,
};
pub use history::{FilterValue, HistoryCursor, HistoryFilter, QueryPairs};
pub use payments::{
    transaction_id, ApiOutcome, DetectionCode, ErrorPayload, OperatorDetection, PaymentFields,
    PaymentMethod, PaymentRequest, PaymentSum,
};
pub use profile::{AuthInfo, Identification, ProfileIdentity, ProfileSections};
