//! Payment history, statistics and single transaction lookup

use qiwi_domain::constants::{HISTORY_PATH, STATISTICS_PATH, TRANSACTION_PATH};
use qiwi_domain::{HistoryFilter, QueryPairs, Result};
use serde_json::Value;
use tracing::{debug, instrument};

use super::client::QiwiClient;

impl QiwiClient {
    /// List transactions matching `filter`.
    ///
    /// The service allows about 100 history requests per minute.
    ///
    /// # Errors
    ///
    /// [`QiwiError::InvalidArgument`](qiwi_domain::QiwiError::InvalidArgument)
    /// for an unknown operation or source, rows outside 1..=50 or a malformed
    /// date; no request is sent in that case.
    #[instrument(skip(self), fields(wallet_id = self.wallet_id()))]
    pub async fn history(&self, filter: &HistoryFilter) -> Result<Value> {
        let query = filter.history_query()?;
        debug!(params = query.len(), "history query built");
        self.session.get(&self.wallet_path(HISTORY_PATH), &query).await
    }

    /// Aggregate incoming and outgoing totals for `filter`'s period.
    ///
    /// Rows and cursor of the filter are not used.
    ///
    /// # Errors
    ///
    /// Same local validation as [`QiwiClient::history`], minus rows.
    #[instrument(skip(self), fields(wallet_id = self.wallet_id()))]
    pub async fn statistics(&self, filter: &HistoryFilter) -> Result<Value> {
        let query = filter.statistics_query()?;
        self.session.get(&self.wallet_path(STATISTICS_PATH), &query).await
    }

    /// Details of a single transaction.
    #[instrument(skip(self))]
    pub async fn transaction_info(&self, txn_id: u64) -> Result<Value> {
        let path = TRANSACTION_PATH.replace("{txn}", &txn_id.to_string());
        self.session.get(&path, &QueryPairs::new()).await
    }
}

#[cfg(test)]
mod tests {
    use qiwi_domain::{HistoryCursor, Operation, QiwiError, Source};
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::api::client::test_support::{connected_client, WALLET};

    #[tokio::test]
    async fn history_sends_normalized_filter() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("GET"))
            .and(path(format!("/payment-history/v2/persons/{WALLET}/payments")))
            .and(query_param("rows", "20"))
            .and(query_param("operation", "IN"))
            .and(query_param("startDate", "2018-07-01T00:00:00+03:00"))
            .and(query_param("endDate", "2018-07-28T00:00:00+03:00"))
            .and(query_param("sources[0]", "QW_RUB"))
            .and(query_param("sources[1]", "CARD"))
            .and(query_param_is_missing("nextTxnId"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{ "txnId": 1, "status": "SUCCESS" }],
                "nextTxnId": 1,
                "nextTxnDate": "2018-07-02T10:00:00+03:00"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let filter = HistoryFilter::new()
            .rows(20)
            .operation(Operation::In)
            .sources([Source::QwRub, Source::Card])
            .period("2018-07-01-+0300", "2018-07-28-+0300");
        let history = client.history(&filter).await.unwrap();

        assert_eq!(history["data"][0]["status"], "SUCCESS");
    }

    #[tokio::test]
    async fn history_sends_cursor_pair() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("GET"))
            .and(path(format!("/payment-history/v2/persons/{WALLET}/payments")))
            .and(query_param("nextTxnDate", "2018-07-02T10:00:00+03:00"))
            .and(query_param("nextTxnId", "9"))
            .and(query_param_is_missing("startDate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let filter = HistoryFilter::new()
            .after(HistoryCursor { txn_date: "2018-07-02T10:00:00+03:00".into(), txn_id: 9 });
        client.history(&filter).await.unwrap();
    }

    #[tokio::test]
    async fn invalid_filters_never_reach_the_network() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        let bad_operation = HistoryFilter::new().operation("TRANSFER");
        let bad_source = HistoryFilter::new().sources(["QW_RUB", "BTC", "ETH"]);

        assert_eq!(
            client.history(&bad_operation).await,
            Err(QiwiError::InvalidArgument("Unexpected Operation: TRANSFER".into()))
        );
        assert_eq!(
            client.statistics(&bad_operation).await,
            Err(QiwiError::InvalidArgument("Unexpected Operation: TRANSFER".into()))
        );
        assert_eq!(
            client.history(&bad_source).await,
            Err(QiwiError::InvalidArgument("Unexpected Source: BTC".into()))
        );
        assert_eq!(
            client.statistics(&bad_source).await,
            Err(QiwiError::InvalidArgument("Unexpected Source: BTC".into()))
        );

        // only the profile lookup from construction
        assert_eq!(server.received_requests().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn statistics_targets_wallet_totals() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("GET"))
            .and(path(format!("/payment-history/v2/persons/{WALLET}/payments/total")))
            .and(query_param("operation", "ALL"))
            .and(query_param("startDate", "2018-07-01T00:00:00+00:00"))
            .and(query_param("endDate", "2018-08-01T00:00:00+00:00"))
            .and(query_param_is_missing("rows"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "incomingTotal": [{ "amount": 100.0, "currency": 643 }],
                "outgoingTotal": []
            })))
            .expect(1)
            .mount(&server)
            .await;

        let filter = HistoryFilter::new().period("2018-07-01-+0000", "2018-08-01-+0000");
        let totals = client.statistics(&filter).await.unwrap();

        assert_eq!(totals["incomingTotal"][0]["amount"], 100.0);
    }

    #[tokio::test]
    async fn transaction_info_by_id() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("GET"))
            .and(path("/payment-history/v2/transactions/11181101"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "txnId": 11181101, "status": "WAITING" })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let txn = client.transaction_info(11_181_101).await.unwrap();
        assert_eq!(txn["status"], "WAITING");
    }

    #[tokio::test]
    async fn history_forbidden_maps_to_permission_error() {
        let server = MockServer::start().await;
        let client = connected_client(&server).await;

        Mock::given(method("GET"))
            .and(path(format!("/payment-history/v2/persons/{WALLET}/payments")))
            .respond_with(ResponseTemplate::new(403))
            .mount(&server)
            .await;

        assert_eq!(
            client.history(&HistoryFilter::new()).await,
            Err(QiwiError::InsufficientPermission)
        );
    }
}
