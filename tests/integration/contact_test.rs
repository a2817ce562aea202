// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{bare_server, server_with_store};

#[tokio::test]
async fn test_valid_submission_is_inserted() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_submissions"))
        .and(header("apikey", "test-service-key"))
        .and(body_partial_json(json!({
            "name": "Jamie Fox",
            "email": "jamie@example.com",
            "message": "We would like a quote for a dashboard."
        })))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&store)
        .await;

    let server = server_with_store(&store);
    let response = server
        .post("/contact")
        .json(&json!({
            "name": "Jamie Fox",
            "email": "jamie@example.com",
            "message": "We would like a quote for a dashboard."
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], json!(true));
    assert_eq!(body["message"], json!("Form submitted successfully"));
}

#[tokio::test]
async fn test_message_length_boundary() {
    let store = MockServer::start().await;
    let server = server_with_store(&store);

    // 9 characters: rejected, naming the message field
    let response = server
        .post("/contact")
        .json(&json!({
            "name": "Jamie",
            "email": "jamie@example.com",
            "message": "123456789"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], json!("Validation failed"));
    assert!(body["details"].get("message").is_some());
    assert!(store.received_requests().await.unwrap().is_empty());

    // 10 characters: accepted
    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_submissions"))
        .respond_with(ResponseTemplate::new(201))
        .expect(1)
        .mount(&store)
        .await;
    let response = server
        .post("/contact")
        .json(&json!({
            "name": "Jamie",
            "email": "jamie@example.com",
            "message": "1234567890"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn test_invalid_email_and_short_name_are_rejected() {
    let store = MockServer::start().await;
    let server = server_with_store(&store);

    let response = server
        .post("/contact")
        .json(&json!({
            "name": "J",
            "email": "not-an-email",
            "message": "long enough message"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["details"].get("name").is_some());
    assert!(body["details"].get("email").is_some());
}

#[tokio::test]
async fn test_submission_without_store_returns_unavailable() {
    let server = bare_server();
    let response = server
        .post("/contact")
        .json(&json!({
            "name": "Jamie",
            "email": "jamie@example.com",
            "message": "long enough message"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_store_failure_surfaces_as_server_error() {
    let store = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/rest/v1/contact_submissions"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({ "message": "disk full" })),
        )
        .mount(&store)
        .await;

    let server = server_with_store(&store);
    let response = server
        .post("/contact")
        .json(&json!({
            "name": "Jamie",
            "email": "jamie@example.com",
            "message": "long enough message"
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
}
