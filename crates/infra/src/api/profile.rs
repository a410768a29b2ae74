//! Profile and identification methods

use qiwi_domain::constants::{IDENTIFICATION_PATH, PROFILE_PATH};
use qiwi_domain::{Identification, ProfileSections, QueryPairs, Result};
use serde_json::Value;
use tracing::{info, instrument};

use super::client::QiwiClient;

impl QiwiClient {
    /// Fetch the account profile with the requested sections.
    #[instrument(skip(self))]
    pub async fn profile(&self, sections: ProfileSections) -> Result<Value> {
        self.session.get(PROFILE_PATH, &sections.query()).await
    }

    /// Current identification data and level of the wallet.
    #[instrument(skip(self), fields(wallet_id = self.wallet_id()))]
    pub async fn identification(&self) -> Result<Value> {
        self.session.get(&self.wallet_path(IDENTIFICATION_PATH), &QueryPairs::new()).await
    }

    /// Submit personal data for simplified identification.
    ///
    /// Validation of the fields is left to the service.
    #[instrument(skip(self, data), fields(wallet_id = self.wallet_id()))]
    pub async fn identify(&self, data: &Identification) -> Result<Value> {
        let response = self.session.post(&self.wallet_path(IDENTIFICATION_PATH), data).await?;
        info!("identification data submitted");
        Ok(response)
    }
}
