//! Wallet API constants
//!
//! Centralized location for endpoint paths, fixed identifiers and limits of
//! the remote service.

// Origins
pub const DEFAULT_API_BASE_URL: &str = "https://edge.qiwi.com/";
pub const DEFAULT_DETECT_URL: &str = "https://qiwi.com/mobile/detect.action";
pub const PAYMENT_FORM_URL: &str = "https://qiwi.com/payment/form/";

// Endpoint paths, relative to the API origin
pub const PROFILE_PATH: &str = "person-profile/v1/profile/current";
pub const PAYMENTS_PATH: &str = "sinap/api/v2/terms/{provider}/payments";
pub const COMMISSION_PATH: &str = "sinap/providers/{provider}/form";
pub const HISTORY_PATH: &str = "payment-history/v2/persons/{wallet}/payments";
pub const STATISTICS_PATH: &str = "payment-history/v2/persons/{wallet}/payments/total";
pub const TRANSACTION_PATH: &str = "payment-history/v2/transactions/{txn}";
pub const ACCOUNTS_PATH: &str = "funding-sources/v2/persons/{wallet}/accounts";
pub const IDENTIFICATION_PATH: &str = "identification/v1/persons/{wallet}/identification";

// Payments
/// ISO 4217 numeric code for the rouble, used for sums and payment methods.
pub const RUB_CURRENCY_CODE: &str = "643";
pub const PAYMENT_METHOD_ACCOUNT: &str = "Account";

/// Detection `code.value` meaning the number could not be matched.
pub const OPERATOR_NOT_FOUND_CODE: &str = "2";

// Limits
pub const DEFAULT_HISTORY_ROWS: u8 = 10;
pub const MAX_HISTORY_ROWS: u8 = 50;
pub const MAX_FORM_AMOUNT: f64 = 99_999.0;

// Transport
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
