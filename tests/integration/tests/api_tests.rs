//! API Integration Tests
//!
//! Each test spawns the real Axum application on an ephemeral port with an
//! in-memory store; no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use here_core::KeyValueStore;
use integration_tests::{assert_message, fixtures::*, TestServer};
use reqwest::{header, Method, StatusCode};
use serde_json::{json, Value};

const ARRIVED_AT: &str = "2024-01-15T10:00:00Z";
const LEFT_AT: &str = "2024-01-15T12:00:00Z";

// ============================================================================
// Record Event Tests
// ============================================================================

#[tokio::test]
async fn test_record_arrival() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/", &EventRequest::arrival("taimoor", "gym", ARRIVED_AT))
        .await
        .unwrap();
    let message = assert_message(response, StatusCode::OK).await.unwrap();

    assert_eq!(message, "taimoor arrived gym at 2024-01-15T10:00:00Z");
    assert_eq!(
        server.store.get("taimoor-gym-arrive").await.unwrap().as_deref(),
        Some(ARRIVED_AT)
    );
}

#[tokio::test]
async fn test_record_departure_creates_history() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store.put("taimoor-gym-arrive", ARRIVED_AT).await.unwrap();

    let response = server
        .post("/", &EventRequest::departure("taimoor", "gym", LEFT_AT))
        .await
        .unwrap();
    let message = assert_message(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        message,
        "taimoor left gym at 2024-01-15T12:00:00Z (arrived at 2024-01-15T10:00:00Z)"
    );

    let history = server.store.get("taimoor-gym-history").await.unwrap().unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&history).unwrap(),
        json!([[ARRIVED_AT, LEFT_AT]])
    );
    assert_eq!(server.store.get("taimoor-gym-arrive").await.unwrap(), None);
}

#[tokio::test]
async fn test_multiple_visits_append() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store.put("taimoor-gym-arrive", ARRIVED_AT).await.unwrap();
    server
        .store
        .put(
            "taimoor-gym-history",
            r#"[["2024-01-14T09:00:00Z","2024-01-14T11:00:00Z"]]"#,
        )
        .await
        .unwrap();

    let response = server
        .post("/", &EventRequest::departure("taimoor", "gym", LEFT_AT))
        .await
        .unwrap();
    assert_message(response, StatusCode::OK).await.unwrap();

    let history = server.store.get("taimoor-gym-history").await.unwrap().unwrap();
    assert_eq!(
        serde_json::from_str::<Value>(&history).unwrap(),
        json!([
            ["2024-01-14T09:00:00Z", "2024-01-14T11:00:00Z"],
            [ARRIVED_AT, LEFT_AT]
        ])
    );
    assert_eq!(server.store.get("taimoor-gym-arrive").await.unwrap(), None);
}

#[tokio::test]
async fn test_departure_without_arrival() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/", &EventRequest::departure("taimoor", "gym", LEFT_AT))
        .await
        .unwrap();
    let message = assert_message(response, StatusCode::OK).await.unwrap();

    assert_eq!(
        message,
        "taimoor left gym at 2024-01-15T12:00:00Z (has no arrival)"
    );
    assert_eq!(server.store.get("taimoor-gym-history").await.unwrap(), None);
}

#[tokio::test]
async fn test_full_round_trip_over_http() {
    let server = TestServer::start().await.expect("Failed to start server");

    for (arrive, leave) in [
        ("2024-01-14T09:00:00Z", "2024-01-14T11:00:00Z"),
        (ARRIVED_AT, LEFT_AT),
    ] {
        let response = server
            .post("/", &EventRequest::arrival("taimoor", "gym", arrive))
            .await
            .unwrap();
        assert_message(response, StatusCode::OK).await.unwrap();

        let response = server
            .post("/", &EventRequest::departure("taimoor", "gym", leave))
            .await
            .unwrap();
        assert_message(response, StatusCode::OK).await.unwrap();
    }

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let dump: Value = response.json().await.unwrap();
    assert_eq!(
        dump,
        json!({
            "taimoor-gym-history": [
                ["2024-01-14T09:00:00Z", "2024-01-14T11:00:00Z"],
                [ARRIVED_AT, LEFT_AT]
            ]
        })
    );
}

// ============================================================================
// Dump Tests
// ============================================================================

#[tokio::test]
async fn test_get_returns_all_store_data() {
    let server = TestServer::start().await.expect("Failed to start server");
    server.store.put("taimoor-gym-arrive", ARRIVED_AT).await.unwrap();
    server
        .store
        .put(
            "taimoor-gym-history",
            r#"[["2024-01-14T09:00:00Z","2024-01-14T11:00:00Z"]]"#,
        )
        .await
        .unwrap();

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        "application/json"
    );

    let text = response.text().await.unwrap();
    assert!(text.contains("\n  \"taimoor-gym-arrive\""));
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({
            "taimoor-gym-arrive": ARRIVED_AT,
            "taimoor-gym-history": [["2024-01-14T09:00:00Z", "2024-01-14T11:00:00Z"]]
        })
    );
}

#[tokio::test]
async fn test_get_empty_store() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/").await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.json::<Value>().await.unwrap(), json!({}));
}

// ============================================================================
// Validation Tests
// ============================================================================

#[tokio::test]
async fn test_invalid_fields_are_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let bodies = [
        json!({ "location": "gym", "datetime": ARRIVED_AT, "arrived": true }),
        json!({ "location": "gym", "datetime": ARRIVED_AT, "arrived": "yes", "person": "taimoor" }),
        json!({ "location": "", "datetime": ARRIVED_AT, "arrived": true, "person": "taimoor" }),
        json!({ "location": "gym", "datetime": ARRIVED_AT, "arrived": true, "person": "tai-moor" }),
        json!({ "location": "gym", "datetime": "15/01/2024", "arrived": true, "person": "taimoor" }),
        json!({ "location": "gym", "datetime": "2024-01-15T10:00:00+01:00", "arrived": true, "person": "taimoor" }),
        json!(["gym", ARRIVED_AT, true, "taimoor"]),
    ];

    for body in bodies {
        let response = server.post("/", &body).await.unwrap();
        let message = assert_message(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Invalid request", "body: {body}");
    }

    assert!(server.store.is_empty());
}

#[tokio::test]
async fn test_malformed_body_is_invalid_json() {
    let server = TestServer::start().await.expect("Failed to start server");

    for body in ["{\"location\": \"gym\",", "", "not json"] {
        let response = server.send_raw(Method::POST, "/", body).await.unwrap();
        let message = assert_message(response, StatusCode::BAD_REQUEST).await.unwrap();
        assert_eq!(message, "Invalid JSON", "body: {body:?}");
    }
}

#[tokio::test]
async fn test_body_without_content_type_is_accepted() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = r#"{"location":"gym","datetime":"2024-01-15T10:00:00Z","arrived":true,"person":"taimoor"}"#;
    let response = server.send_raw(Method::POST, "/", body).await.unwrap();
    let message = assert_message(response, StatusCode::OK).await.unwrap();

    assert_eq!(message, "taimoor arrived gym at 2024-01-15T10:00:00Z");
}

#[tokio::test]
async fn test_repeated_field_uses_last_value() {
    let server = TestServer::start().await.expect("Failed to start server");

    let body = r#"{"location":"gym","datetime":"2024-01-15T10:00:00Z","arrived":true,"person":"someone","person":"taimoor"}"#;
    let response = server.send_raw(Method::POST, "/", body).await.unwrap();
    let message = assert_message(response, StatusCode::OK).await.unwrap();

    assert_eq!(message, "taimoor arrived gym at 2024-01-15T10:00:00Z");
}

#[tokio::test]
async fn test_leap_second_is_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server
        .post("/", &EventRequest::arrival("taimoor", "gym", "2024-01-15T10:00:60Z"))
        .await
        .unwrap();
    let message = assert_message(response, StatusCode::BAD_REQUEST).await.unwrap();

    assert_eq!(message, "Invalid request");
    assert!(server.store.is_empty());
}

#[tokio::test]
async fn test_other_methods_are_rejected() {
    let server = TestServer::start().await.expect("Failed to start server");
    let body = serde_json::to_string(&EventRequest::arrival("taimoor", "gym", ARRIVED_AT)).unwrap();

    let response = server.send_raw(Method::PUT, "/", &body).await.unwrap();
    let message = assert_message(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Invalid request");

    let response = server.send_raw(Method::DELETE, "/", "{").await.unwrap();
    let message = assert_message(response, StatusCode::BAD_REQUEST).await.unwrap();
    assert_eq!(message, "Invalid JSON");

    assert!(server.store.is_empty());
}

#[tokio::test]
async fn test_request_id_is_returned() {
    let server = TestServer::start().await.expect("Failed to start server");

    let response = server.get("/").await.unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
