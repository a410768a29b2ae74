//! Integration tests for the wallet client
//!
//! Drives the public API against a WireMock server standing in for both the
//! API origin and the carrier detection endpoint.

use qiwi_domain::{
    HistoryFilter, Operation, PaymentForm, Provider, QiwiClientConfig, QiwiError, Source,
};
use qiwi_infra::QiwiClient;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const WALLET: u64 = 79_001_112_233;

fn config_for(server: &MockServer) -> QiwiClientConfig {
    QiwiClientConfig {
        api_base_url: format!("{}/", server.uri()),
        detect_url: format!("{}/mobile/detect.action", server.uri()),
        timeout_secs: 5,
        user_agent: Some("qiwi-integration".into()),
    }
}

async fn connect(server: &MockServer) -> QiwiClient {
    Mock::given(method("GET"))
        .and(path("/person-profile/v1/profile/current"))
        .and(header("Authorization", "Bearer integration-token"))
        .and(header("User-Agent", "qiwi-integration"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "authInfo": { "personId": WALLET } })),
        )
        .expect(1)
        .mount(server)
        .await;

    QiwiClient::builder()
        .token("integration-token")
        .config(config_for(server))
        .connect()
        .await
        .expect("client should connect")
}

#[tokio::test]
async fn wallet_session_end_to_end() {
    let server = MockServer::start().await;
    let client = connect(&server).await;
    assert_eq!(client.to_string(), format!("<Wallet {WALLET}>"));

    Mock::given(method("GET"))
        .and(path(format!("/funding-sources/v2/persons/{WALLET}/accounts")))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "accounts": [{ "alias": "qw_wallet_rub", "balance": { "amount": 500.0, "currency": 643 } }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("/payment-history/v2/persons/{WALLET}/payments")))
        .and(query_param("operation", "OUT"))
        .and(query_param("sources[0]", "QW_RUB"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [] })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sinap/api/v2/terms/99/payments"))
        .and(body_partial_json(json!({ "sum": { "amount": 25.5 }, "fields": { "account": "79005556677" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "transaction": { "id": "77", "state": { "code": "Accepted" } }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let balances = client.balance(true).await.unwrap();
    assert_eq!(balances, vec![json!({ "qw_wallet_rub": 500.0 })]);

    let filter = HistoryFilter::new().operation(Operation::Out).source(Source::QwRub);
    client.history(&filter).await.unwrap();

    let payment = client.send_qiwi("79005556677", 25.5, None).await.unwrap();
    assert_eq!(payment["transaction"]["id"], "77");
}

#[tokio::test]
async fn mobile_top_up_routes_to_detected_carrier() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("POST"))
        .and(path("/mobile/detect.action"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "code": { "value": "0", "_name": "NORMAL" },
            "message": "2"
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/sinap/api/v2/terms/2/payments"))
        .and(body_partial_json(json!({ "fields": { "account": "9161234567" } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "transaction": { "id": "5" } })))
        .expect(1)
        .mount(&server)
        .await;

    let response = client.send_mobile("79161234567", 50.0).await.unwrap();
    assert_eq!(response["transaction"]["id"], "5");
}

#[tokio::test]
async fn revoked_token_surfaces_on_later_calls() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    Mock::given(method("GET"))
        .and(path(format!("/payment-history/v2/persons/{WALLET}/payments/total")))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    assert_eq!(
        client.statistics(&HistoryFilter::new()).await,
        Err(QiwiError::InvalidCredentials)
    );
}

#[tokio::test]
async fn payment_form_link_matches_hosted_form_format() {
    let server = MockServer::start().await;
    let client = connect(&server).await;

    let form = PaymentForm::new(Provider::Qiwi, 100.0).recipient("79005556677").block("sum");
    let url = client.payment_form_url(&form).unwrap();

    assert_eq!(
        url,
        "https://qiwi.com/payment/form/99?amountInteger=100&currency=643&extra%5B%27account%27%5D=79005556677&blocked%5B0%5D=sum"
    );
}
