//! Pre-filled payment form links
//!
//! Builds a link to the hosted payment form with the amount, recipient and
//! comment filled in and, optionally, some of those fields locked. No
//! request is made; the result is a plain URL string.

use url::form_urlencoded;

use crate::constants::{MAX_FORM_AMOUNT, PAYMENT_FORM_URL, RUB_CURRENCY_CODE};
use crate::types::{BlockedField, ProviderCode};
use crate::{QiwiError, Result};

/// Float noise allowed when scaling roubles to kopecks
const KOPECK_TOLERANCE: f64 = 1e-6;

/// Parameters of a payment form link
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentForm {
    pub provider: ProviderCode,
    /// Amount in roubles; at most 99 999
    pub amount: f64,
    pub recipient: Option<String>,
    pub comment: Option<String>,
    /// Names of fields the payer cannot edit (`sum`, `account`, `comment`)
    pub blocked: Vec<String>,
}

impl PaymentForm {
    pub fn new(provider: impl Into<ProviderCode>, amount: f64) -> Self {
        Self { provider: provider.into(), amount, recipient: None, comment: None, blocked: Vec::new() }
    }

    pub fn recipient(mut self, recipient: impl Into<String>) -> Self {
        self.recipient = Some(recipient.into());
        self
    }

    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Lock a field against editing. Accepts a [`BlockedField`] or its name.
    pub fn block(mut self, field: impl Into<String>) -> Self {
        self.blocked.push(field.into());
        self
    }
}

/// Build the payment form URL.
///
/// Query fields are emitted in a fixed order: `amountInteger`,
/// `amountFraction` (only when the amount has kopecks), `currency`,
/// `extra['account']`, `extra['comment']`, then `blocked[i]` in input order.
///
/// # Errors
/// Returns [`QiwiError::InvalidArgument`] if the amount is negative, not
/// finite, above 99 999 or has digits below a kopeck, or if a blocked field
/// name is not one of `sum`, `account`, `comment` (the first offending name
/// is reported).
pub fn payment_form_url(form: &PaymentForm) -> Result<String> {
    if !form.amount.is_finite() || form.amount < 0.0 {
        return Err(QiwiError::InvalidArgument(format!("Unexpected amount: {}", form.amount)));
    }
    if form.amount > MAX_FORM_AMOUNT {
        return Err(QiwiError::InvalidArgument(format!(
            "Amount {} exceeds the form limit of {MAX_FORM_AMOUNT}",
            form.amount
        )));
    }

    let blocked = form
        .blocked
        .iter()
        .map(|name| name.parse::<BlockedField>())
        .collect::<Result<Vec<_>>>()?;

    let (integer, fraction) = split_amount(form.amount)?;

    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("amountInteger", &integer.to_string());
    if fraction != 0 {
        query.append_pair("amountFraction", &format!("{fraction:02}"));
    }
    query.append_pair("currency", RUB_CURRENCY_CODE);
    if let Some(recipient) = &form.recipient {
        query.append_pair("extra['account']", recipient);
    }
    if let Some(comment) = &form.comment {
        query.append_pair("extra['comment']", comment);
    }
    for (index, field) in blocked.iter().enumerate() {
        query.append_pair(&format!("blocked[{index}]"), field.as_str());
    }

    Ok(format!("{PAYMENT_FORM_URL}{}?{}", form.provider, query.finish()))
}

/// Split a validated amount into roubles and kopecks.
///
/// # Errors
/// [`QiwiError::InvalidArgument`] if the amount has digits below a kopeck.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_amount(amount: f64) -> Result<(u64, u64)> {
    let scaled = amount * 100.0;
    let rounded = scaled.round();
    if (scaled - rounded).abs() > KOPECK_TOLERANCE {
        return Err(QiwiError::InvalidArgument(format!(
            "Unexpected amount: {amount} (more precise than a kopeck)"
        )));
    }
    // amount is within 0..=99_999, so the kopeck count fits comfortably
    let kopecks = rounded as u64;
    Ok((kopecks / 100, kopecks % 100))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Provider;

    #[test]
    fn builds_comment_only_form() {
        let form = PaymentForm::new(99_u32, 12.74).comment("test comment");
        assert_eq!(
            payment_form_url(&form).unwrap(),
            "https://qiwi.com/payment/form/99?amountInteger=12&amountFraction=74&currency=643&extra%5B%27comment%27%5D=test+comment"
        );
    }

    #[test]
    fn whole_amount_omits_fraction() {
        let form = PaymentForm::new(Provider::Qiwi, 500.0);
        assert_eq!(
            payment_form_url(&form).unwrap(),
            "https://qiwi.com/payment/form/99?amountInteger=500&currency=643"
        );
    }

    #[test]
    fn single_digit_kopecks_are_padded() {
        let form = PaymentForm::new(Provider::Qiwi, 10.5);
        let url = payment_form_url(&form).unwrap();
        assert!(url.contains("amountInteger=10&amountFraction=50&"), "{url}");
    }

    #[test]
    fn fields_follow_fixed_order() {
        let form = PaymentForm::new(Provider::Qiwi, 1.01)
            .block(BlockedField::Comment)
            .comment("c")
            .block("sum")
            .recipient("79991234567");
        assert_eq!(
            payment_form_url(&form).unwrap(),
            "https://qiwi.com/payment/form/99?amountInteger=1&amountFraction=01&currency=643\
             &extra%5B%27account%27%5D=79991234567&extra%5B%27comment%27%5D=c\
             &blocked%5B0%5D=comment&blocked%5B1%5D=sum"
        );
    }

    #[test]
    fn sub_kopeck_amounts_are_rejected() {
        for amount in [12.001, 12.999, 0.005] {
            let form = PaymentForm::new(99_u32, amount);
            assert!(
                matches!(payment_form_url(&form), Err(QiwiError::InvalidArgument(_))),
                "{amount}"
            );
        }
    }

    #[test]
    fn kopeck_amounts_survive_float_noise() {
        for (amount, fraction) in [(0.29, "29"), (19.99, "99"), (1.15, "15")] {
            let url = payment_form_url(&PaymentForm::new(99_u32, amount)).unwrap();
            assert!(url.contains(&format!("amountFraction={fraction}&")), "{url}");
        }
    }

    #[test]
    fn maximum_amount_is_accepted() {
        let form = PaymentForm::new(Provider::Qiwi, 99_999.0);
        assert!(payment_form_url(&form).is_ok());
    }

    #[test]
    fn rejects_amount_over_limit() {
        for amount in [100_000.0, 99_999.5, 1e9] {
            let form = PaymentForm::new(Provider::Qiwi, amount);
            assert!(matches!(payment_form_url(&form), Err(QiwiError::InvalidArgument(_))));
        }
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        for amount in [-1.0, f64::NAN, f64::INFINITY] {
            let form = PaymentForm::new(Provider::Qiwi, amount);
            assert!(matches!(payment_form_url(&form), Err(QiwiError::InvalidArgument(_))));
        }
    }

    #[test]
    fn first_invalid_blocked_field_is_reported() {
        let form = PaymentForm::new(Provider::Qiwi, 1.0).block("sum").block("amount").block("id");
        let err = payment_form_url(&form).unwrap_err();
        assert_eq!(err, QiwiError::InvalidArgument("Unexpected BlockedField: amount".into()));
    }
}
