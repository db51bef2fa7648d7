#![allow(clippy::unwrap_used)]
// Integration tests for `NucleoClient` using wiremock.

use secrecy::SecretString;
use serde_json::json;
use url::Url;
use wiremock::matchers::{body_partial_json, header, header_regex, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use botvac_api::{CleaningParams, Error, NucleoClient};

// ── Helpers ─────────────────────────────────────────────────────────

const SERIAL: &str = "OPS12416-A0F6FD28DE6D";

async fn setup() -> (MockServer, NucleoClient) {
    let server = MockServer::start().await;
    let base_url = Url::parse(&server.uri()).unwrap();
    let secret: SecretString = "test-secret".to_string().into();
    let client = NucleoClient::with_client(reqwest::Client::new(), base_url, SERIAL, secret);
    (server, client)
}

fn message_path() -> String {
    format!("/vendors/neato/robots/{SERIAL}/messages")
}

// ── Envelope & header tests ─────────────────────────────────────────

#[tokio::test]
async fn test_request_shape_and_headers() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(message_path()))
        .and(header("Accept", "application/vnd.neato.nucleo.v1"))
        .and(header_regex("Authorization", "^NEATOAPP [0-9a-f]{64}$"))
        .and(header_regex(
            "Date",
            r"^[A-Z][a-z]{2}, \d{2} [A-Z][a-z]{2} \d{4} \d{2}:\d{2}:\d{2} GMT$",
        ))
        .and(header_regex("X-Agent", r"^botvac-rs\|"))
        .and(body_partial_json(json!({"reqId": 1, "cmd": "getRobotState"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"result": "ok"})))
        .expect(1)
        .mount(&server)
        .await;

    let body = client.get_robot_state().await.unwrap();
    assert_eq!(body, json!({"result": "ok"}));
}

#[tokio::test]
async fn test_params_key_omitted_when_absent() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(message_path()))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client.stop_cleaning().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    let body: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    let envelope = body.as_object().unwrap();
    assert_eq!(envelope.get("cmd"), Some(&json!("stopCleaning")));
    assert!(
        !envelope.contains_key("params"),
        "params must be omitted entirely, got: {body}"
    );
}

#[tokio::test]
async fn test_start_cleaning_sends_params() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(message_path()))
        .and(body_partial_json(json!({
            "cmd": "startCleaning",
            "params": {"category": 2, "mode": 2, "modifier": 1}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let params = CleaningParams {
        category: 2,
        mode: Some(2),
        modifier: Some(1),
        navigation_mode: None,
        spot_width: None,
        spot_height: None,
    };
    client.start_cleaning(&params).await.unwrap();
}

#[tokio::test]
async fn test_send_to_base_reuses_resume_command() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path(message_path()))
        .and(body_partial_json(json!({"cmd": "resumeCleaning"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    client.send_to_base().await.unwrap();
}

#[tokio::test]
async fn test_signature_matches_date_and_body() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    client.get_robot_state().await.unwrap();

    let requests = server.received_requests().await.unwrap();
    let req = &requests[0];
    let date = req.headers.get("Date").unwrap().to_str().unwrap();
    let auth = req.headers.get("Authorization").unwrap().to_str().unwrap();
    let body = std::str::from_utf8(&req.body).unwrap();

    let expected = botvac_api::auth::sign_request(SERIAL, "test-secret", date, body);
    assert_eq!(auth, expected);
}

// ── Error tests ─────────────────────────────────────────────────────

#[tokio::test]
async fn test_http_error_propagated_uninterpreted() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(404).set_body_string("robot not found"))
        .mount(&server)
        .await;

    let result = client.get_robot_state().await;

    match result {
        Err(Error::Http { status, ref body }) => {
            assert_eq!(status, 404);
            assert!(body.contains("robot not found"), "got: {body}");
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_http_error_body_truncated_on_char_boundary() {
    let (server, client) = setup().await;

    // 199 ASCII bytes followed by multi-byte chars, so a naive byte-200
    // cut of the preview would land inside a character.
    let body = format!("{}ééééé", "x".repeat(199));
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string(body))
        .mount(&server)
        .await;

    let result = client.get_robot_state().await;

    match result {
        Err(Error::Http { status, ref body }) => {
            assert_eq!(status, 500);
            assert!(body.len() <= 200);
            assert!(body.starts_with("xxx"));
        }
        other => panic!("expected Http error, got: {other:?}"),
    }
}

#[tokio::test]
async fn test_undecodable_body_is_a_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let result = client.get_robot_state().await;

    match result {
        Err(Error::Deserialization { ref body, .. }) => {
            assert_eq!(body, "not json");
        }
        other => panic!("expected Deserialization error, got: {other:?}"),
    }
}
