//! Pure helpers that need no network access

pub mod dates;
pub mod payment_form;

pub use dates::normalize_date;
pub use payment_form::{payment_form_url, PaymentForm};
