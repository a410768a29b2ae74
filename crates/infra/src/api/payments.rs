//! Payments, balance and provider lookups

use qiwi_domain::constants::{ACCOUNTS_PATH, COMMISSION_PATH, PAYMENTS_PATH};
use qiwi_domain::{
    payment_form_url, project_balances, ApiOutcome, FundingAccount, OperatorDetection,
    PaymentForm, PaymentRequest, Provider, ProviderCode, QiwiError, QueryPairs, Result,
};
use reqwest::Method;
use serde_json::Value;
use tracing::{debug, info, instrument};

use super::client::QiwiClient;

impl QiwiClient {
    /// Transfer roubles to another wallet.
    ///
    /// # Arguments
    ///
    /// * `recipient` - Wallet number, e.g. `79991234567`
    /// * `amount` - Amount in roubles
    /// * `comment` - Optional payment comment
    ///
    /// # Errors
    ///
    /// [`QiwiError::InvalidArgument`] for a non-positive amount,
    /// [`QiwiError::RemoteApi`] if the service declines the payment.
    #[instrument(skip(self, comment))]
    pub async fn send_qiwi(
        &self,
        recipient: &str,
        amount: f64,
        comment: Option<&str>,
    ) -> Result<Value> {
        let payment = PaymentRequest::new(recipient, amount, comment.map(str::to_string))?;
        self.submit_payment(Provider::Qiwi.into(), &payment).await
    }

    /// Top up a mobile phone balance.
    ///
    /// The carrier is detected first; the payment goes to that carrier's
    /// provider with the number stripped of its leading country digit.
    ///
    /// # Arguments
    ///
    /// * `phone` - Phone number in the form `71234567890`
    /// * `amount` - Amount in roubles
    ///
    /// # Errors
    ///
    /// [`QiwiError::OperatorNotFound`] if the carrier cannot be detected (no
    /// payment is sent), [`QiwiError::RemoteApi`] if the payment is declined.
    #[instrument(skip(self))]
    pub async fn send_mobile(&self, phone: &str, amount: f64) -> Result<Value> {
        let mut digits = phone.chars();
        if digits.next().is_none() || digits.as_str().is_empty() {
            return Err(QiwiError::InvalidArgument(format!("Unexpected phone number: {phone}")));
        }
        let payment = PaymentRequest::new(digits.as_str(), amount, None)?;

        let provider = self.detect_operator(phone).await?;
        self.submit_payment(provider, &payment).await
    }

    /// Provider ID of the mobile carrier serving `phone`.
    ///
    /// Sent as a form body to the detection endpoint, without the bearer
    /// header.
    ///
    /// # Errors
    ///
    /// [`QiwiError::OperatorNotFound`] when the service cannot match the
    /// number.
    #[instrument(skip(self))]
    pub async fn detect_operator(&self, phone: &str) -> Result<ProviderCode> {
        let request = self
            .session
            .http
            .request(Method::POST, &self.session.config.detect_url)
            .form(&[("phone", phone)]);

        let body = self.session.dispatch(request).await?;
        let detection: OperatorDetection = serde_json::from_value(body)
            .map_err(|err| QiwiError::InvalidResponse(format!("carrier detection: {err}")))?;

        let provider = detection.into_provider(phone)?;
        debug!(%provider, "carrier detected");
        Ok(provider)
    }

    /// Commission terms of a provider.
    #[instrument(skip(self, provider))]
    pub async fn commission(&self, provider: impl Into<ProviderCode>) -> Result<Value> {
        let provider = provider.into();
        let path = COMMISSION_PATH.replace("{provider}", &provider.to_string());
        self.session.get(&path, &QueryPairs::new()).await
    }

    /// Balances of the wallet's funding-source accounts.
    ///
    /// With `only_balance`, each account is reduced to `{alias: amount}` and
    /// accounts without a balance are skipped.
    ///
    /// # Errors
    ///
    /// [`QiwiError::InvalidResponse`] if the body has no `accounts` list.
    #[instrument(skip(self), fields(wallet_id = self.wallet_id()))]
    pub async fn balance(&self, only_balance: bool) -> Result<Vec<Value>> {
        let body = self.session.get(&self.wallet_path(ACCOUNTS_PATH), &QueryPairs::new()).await?;

        let accounts = match body {
            Value::Object(mut fields) => match fields.remove("accounts") {
                Some(Value::Array(accounts)) => accounts,
                _ => return Err(QiwiError::InvalidResponse("missing accounts list".into())),
            },
            _ => return Err(QiwiError::InvalidResponse("accounts body is not an object".into())),
        };

        if !only_balance {
            return Ok(accounts);
        }

        let typed: Vec<FundingAccount> = serde_json::from_value(Value::Array(accounts))
            .map_err(|err| QiwiError::InvalidResponse(format!("funding accounts: {err}")))?;
        Ok(project_balances(&typed))
    }

    /// Link to the hosted payment form; no request is made.
    ///
    /// # Errors
    ///
    /// See [`payment_form_url`].
    pub fn payment_form_url(&self, form: &PaymentForm) -> Result<String> {
        payment_form_url(form)
    }

    async fn submit_payment(
        &self,
        provider: ProviderCode,
        payment: &PaymentRequest,
    ) -> Result<Value> {
        let path = PAYMENTS_PATH.replace("{provider}", &provider.to_string());
        let body = self.session.post(&path, payment).await?;

        let accepted = ApiOutcome::decode(body)?.into_result()?;
        info!(%provider, transaction_id = %payment.id, "payment accepted");
        Ok(accepted)
    }
}
