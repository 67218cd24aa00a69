//! HTTP contract tests for ZenSendClient.
//!
//! These run the default `reqwest` transport against a local mock server and
//! check what goes over the wire (method, path, API key header, form body,
//! query) and how status codes and content types are mapped.

use std::collections::BTreeMap;

use wiremock::matchers::{body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use zensend::{
    ApiKey, CreateKeyword, Encoding, Message, MessageOptions, OriginatorType, TtlMinutes,
    ZenSendClient, ZenSendError,
};

fn create_test_client(mock_server: &MockServer) -> ZenSendClient {
    ZenSendClient::builder(ApiKey::new("API KEY").unwrap())
        .base_url(mock_server.uri())
        .build()
        .unwrap()
}

fn valid_message() -> Message {
    Message::new("This is a test", "Originator", ["447877878787"]).unwrap()
}

fn send_sms_success() -> serde_json::Value {
    serde_json::json!({
        "success": {
            "txguid": "some-guid-123",
            "numbers": 1,
            "smsparts": 1,
            "encoding": "alpha",
            "cost_in_pence": 12.34,
            "new_balance_in_pence": 10.2
        }
    })
}

#[tokio::test]
async fn send_sms_posts_exact_form_body_with_api_key() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/sendsms"))
        .and(header("X-API-KEY", "API KEY"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "BODY=This+is+a+test&NUMBERS=447877878787&ORIGINATOR=Originator",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(send_sms_success()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let response = client.send_sms(&valid_message()).await.unwrap();

    assert_eq!(response.tx_guid, "some-guid-123");
    assert_eq!(response.numbers, 1);
    assert_eq!(response.sms_parts, 1);
    assert_eq!(response.encoding, "alpha");
    assert_eq!(response.cost_in_pence, 12.34);
    assert_eq!(response.new_balance_in_pence, 10.2);
}

#[tokio::test]
async fn send_sms_with_all_options() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/sendsms"))
        .and(body_string(
            "BODY=This+is+a+test&ENCODING=ucs2&NUMBERS=447877878787&ORIGINATOR=Originator&ORIGINATOR_TYPE=msisdn&TIMETOLIVE=100",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(send_sms_success()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let message = Message::with_options(
        "This is a test",
        "Originator",
        ["447877878787"],
        MessageOptions {
            originator_type: Some(OriginatorType::Msisdn),
            encoding: Some(Encoding::Ucs2),
            time_to_live: Some(TtlMinutes::new(100).unwrap()),
        },
    )
    .unwrap();

    let client = create_test_client(&mock_server);
    client.send_sms(&message).await.unwrap();
}

#[tokio::test]
async fn send_sms_known_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/sendsms"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "failure": {"failcode": "invalid numbers", "parameter": "numbers"}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let message = Message::new("This is a test", "Originator", ["4444"]).unwrap();
    let err = client.send_sms(&message).await.unwrap_err();

    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.status, 400);
    assert_eq!(api.fail_code.as_deref(), Some("invalid numbers"));
    assert_eq!(api.parameter.as_deref(), Some("numbers"));
    assert_eq!(
        err.to_string(),
        "API error: status 400, fail code: invalid numbers, parameter: numbers"
    );
}

#[tokio::test]
async fn send_sms_unknown_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/sendsms"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({})))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.send_sms(&valid_message()).await.unwrap_err();

    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.status, 500);
    assert_eq!(api.fail_code, None);
    assert_eq!(api.parameter, None);
}

#[tokio::test]
async fn json_content_type_with_empty_body_is_status_only() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/checkbalance"))
        .respond_with(ResponseTemplate::new(503).set_body_raw("", "application/json"))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.check_balance().await.unwrap_err();

    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.status, 503);
    assert_eq!(api.fail_code, None);
}

#[tokio::test]
async fn non_json_response_is_status_only_even_with_json_looking_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/checkbalance"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"success": {"balance": 10.2}}"#),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.check_balance().await.unwrap_err();

    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.status, 200);
    assert_eq!(api.fail_code, None);
    assert_eq!(api.parameter, None);
}

#[tokio::test]
async fn malformed_json_is_a_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/prices"))
        .respond_with(
            ResponseTemplate::new(200).set_body_raw("{ not json }", "application/json"),
        )
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.get_prices().await.unwrap_err();
    assert!(matches!(err, ZenSendError::Parse(_)), "got: {err:?}");
}

#[tokio::test]
async fn check_balance_success_and_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/checkbalance"))
        .and(header("X-API-KEY", "API KEY"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"success": {"balance": 10.2}})),
        )
        .up_to_n_times(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v3/checkbalance"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "failure": {"failcode": "failcode", "parameter": "param"}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    assert_eq!(client.check_balance().await.unwrap(), 10.2);

    let err = client.check_balance().await.unwrap_err();
    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.status, 400);
    assert_eq!(api.fail_code.as_deref(), Some("failcode"));
    assert_eq!(api.parameter.as_deref(), Some("param"));
}

#[tokio::test]
async fn get_prices_returns_table() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/prices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": {"prices_in_pence": {"GB": 1.23, "US": 1.24}}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let prices = client.get_prices().await.unwrap();
    assert_eq!(
        prices,
        BTreeMap::from([("GB".to_owned(), 1.23), ("US".to_owned(), 1.24)])
    );
}

#[tokio::test]
async fn lookup_operator_sends_number_query() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/operator_lookup"))
        .and(query_param("NUMBER", "441234567890"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": {
                "mcc": "123",
                "mnc": "456",
                "operator": "o2-uk",
                "cost_in_pence": 2.5,
                "new_balance_in_pence": 10.2
            }
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let response = client.lookup_operator("441234567890").await.unwrap();
    assert_eq!(response.mcc, "123");
    assert_eq!(response.mnc, "456");
    assert_eq!(response.operator, "o2-uk");
    assert_eq!(response.cost_in_pence, 2.5);
    assert_eq!(response.new_balance_in_pence, 10.2);
}

#[tokio::test]
async fn lookup_operator_charged_failure() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v3/operator_lookup"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "failure": {"failcode": "DATA_MISSING", "cost_in_pence": 2.5, "new_balance_in_pence": 10.2}
        })))
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let err = client.lookup_operator("441234567890").await.unwrap_err();

    let api = err.api_error().expect("expected an API error");
    assert_eq!(api.status, 503);
    assert_eq!(api.fail_code.as_deref(), Some("DATA_MISSING"));
    assert_eq!(api.cost_in_pence, Some(2.5));
    assert_eq!(api.new_balance_in_pence, Some(10.2));
}

#[tokio::test]
async fn create_sub_account_posts_name() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/sub_accounts"))
        .and(body_string("NAME=reporting+team"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": {"name": "reporting team", "api_key": "sub-key", "guid": "sub-guid"}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let account = client.create_sub_account("reporting team").await.unwrap();
    assert_eq!(account.name, "reporting team");
    assert_eq!(account.api_key, "sub-key");
    assert_eq!(account.guid, "sub-guid");
}

#[tokio::test]
async fn create_keyword_posts_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v3/keywords"))
        .and(body_string(
            "IS_STICKY=false&KEYWORD=HELLO&MOURL=https%3A%2F%2Fexample.invalid%2Fmo&SHORTCODE=12345",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "success": {"cost_in_pence": 100.0, "new_balance_in_pence": 900.0}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let request = CreateKeyword::new("12345", "HELLO").with_mo_url("https://example.invalid/mo");
    let response = client.create_keyword(&request).await.unwrap();
    assert_eq!(response.cost_in_pence, Some(100.0));
    assert_eq!(response.new_balance_in_pence, Some(900.0));
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let client = ZenSendClient::builder(ApiKey::new("API KEY").unwrap())
        .base_url("http://127.0.0.1:1")
        .build()
        .unwrap();
    let err = client.check_balance().await.unwrap_err();
    assert!(matches!(err, ZenSendError::Transport(_)), "got: {err:?}");
}
