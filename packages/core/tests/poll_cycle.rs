//! End-to-end poll cycle tests.
//!
//! Each test wires the real `CrvStoreClient` and `BarkNotifier` to wiremock
//! servers standing in for the store locator and the Bark push service, then
//! drives one `poll_once` cycle through the library API.

use serde_json::Value;
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

use vanguard_store::{
    alerts::BarkNotifier,
    config::Config,
    scheduler::{poll_once, PollOutcome, MATCH_TITLE},
    services::{Coordinate, CrvStoreClient},
};

// ---- Helpers ----------------------------------------------------------------

const LOCATOR_PATH: &str = "/app_api/v1/dc-app-api/mobile/api/store/selectByAddress";

/// Locator payload with one store matching "Downtown" and one that does not.
const TWO_STORES: &str = r#"{
    "code": 0,
    "data": {
        "stores": [
            {
                "areaCode": "0755", "buid": 3, "cityId": 440300, "cityName": "Shenzhen",
                "hq_id": "HQ1", "retailFormatId": "V", "storeId": 101,
                "storeName": "Downtown Mart", "storesAddress": "8 Shennan Road"
            },
            {
                "areaCode": "0755", "buid": 3, "cityId": 440300, "cityName": "Shenzhen",
                "hq_id": "HQ1", "retailFormatId": "V", "storeId": 102,
                "storeName": "Uptown Mart", "storesAddress": "12 Hill Avenue"
            }
        ]
    }
}"#;

const BARK_OK: &str = r#"{"code":200,"message":"success","timestamp":1700000000}"#;

async fn start_locator(body: &str) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(LOCATOR_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .mount(&server)
        .await;
    server
}

async fn start_bark() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/push"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(BARK_OK, "application/json"))
        .mount(&server)
        .await;
    server
}

fn config_for(locator: &MockServer, bark: &MockServer, name_filter: Option<&str>) -> Config {
    Config {
        coordinate: Coordinate::new("114.05", "22.54"),
        name_filter: name_filter.map(str::to_string),
        bark_key: Some("device-key".to_string()),
        poll_interval_seconds: 60,
        store_api_url: format!("{}{}", locator.uri(), LOCATOR_PATH),
        bark_server_url: bark.uri(),
    }
}

/// Decode every push the Bark mock received as JSON bodies.
async fn pushes(bark: &MockServer) -> Vec<Value> {
    bark.received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|req| serde_json::from_slice(&req.body).unwrap())
        .collect()
}

// ---- Tests ------------------------------------------------------------------

#[tokio::test]
async fn filtered_match_is_logged_and_pushed() {
    let locator = start_locator(TWO_STORES).await;
    let bark = start_bark().await;
    let config = config_for(&locator, &bark, Some("Downtown"));

    let client = CrvStoreClient::new(config.store_api_url.clone());
    let notifier = BarkNotifier::new(config.bark_server_url.clone(), "device-key".into()).unwrap();

    let outcome = poll_once(&client, Some(&notifier), &config).await;

    match outcome {
        PollOutcome::Reported { stores, notified } => {
            assert_eq!(stores.len(), 1);
            assert_eq!(stores[0].store_name, "Downtown Mart");
            assert!(notified);
        }
        other => panic!("unexpected outcome: {:?}", other),
    }

    let pushes = pushes(&bark).await;
    assert_eq!(pushes.len(), 1);
    assert_eq!(pushes[0]["device_key"], "device-key");
    assert_eq!(pushes[0]["title"], MATCH_TITLE);

    let body: Vec<Value> = serde_json::from_str(pushes[0]["body"].as_str().unwrap()).unwrap();
    assert_eq!(body.len(), 1);
    assert_eq!(body[0]["storeName"], "Downtown Mart");
    assert_eq!(body[0]["storeId"], 101);
}

#[tokio::test]
async fn unfiltered_cycle_never_pushes() {
    let locator = start_locator(TWO_STORES).await;
    let bark = start_bark().await;
    let config = config_for(&locator, &bark, None);

    let client = CrvStoreClient::new(config.store_api_url.clone());
    let notifier = BarkNotifier::new(config.bark_server_url.clone(), "device-key".into()).unwrap();

    let outcome = poll_once(&client, Some(&notifier), &config).await;

    assert!(matches!(
        outcome,
        PollOutcome::Reported { ref stores, notified: false } if stores.len() == 2
    ));
    assert!(pushes(&bark).await.is_empty());
}

#[tokio::test]
async fn api_error_code_skips_reporting() {
    let locator = start_locator(r#"{"code": 1, "data": {"stores": []}}"#).await;
    let bark = start_bark().await;
    let config = config_for(&locator, &bark, Some("Downtown"));

    let client = CrvStoreClient::new(config.store_api_url.clone());
    let notifier = BarkNotifier::new(config.bark_server_url.clone(), "device-key".into()).unwrap();

    let outcome = poll_once(&client, Some(&notifier), &config).await;

    assert_eq!(outcome, PollOutcome::FetchFailed);
    assert!(pushes(&bark).await.is_empty());
}

#[tokio::test]
async fn push_outage_does_not_fail_the_cycle() {
    let locator = start_locator(TWO_STORES).await;
    let bark = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/push"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&bark)
        .await;
    let config = config_for(&locator, &bark, Some("Mart"));

    let client = CrvStoreClient::new(config.store_api_url.clone());
    let notifier = BarkNotifier::new(config.bark_server_url.clone(), "device-key".into()).unwrap();

    let outcome = poll_once(&client, Some(&notifier), &config).await;

    assert!(matches!(
        outcome,
        PollOutcome::Reported { ref stores, notified: false } if stores.len() == 2
    ));
}
