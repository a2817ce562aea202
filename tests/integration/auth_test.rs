// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use serde_json::json;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{
    bare_server, doc_fetcher_for, make_server, server_with_store, test_settings,
    unconfigured_probe, AUTH_COOKIE, TEST_PIN,
};

#[tokio::test]
async fn test_auth_check_reports_session_state() {
    let server = bare_server();

    let response = server.get("/auth/check").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["authenticated"], json!(false));

    let response = server
        .get("/auth/check")
        .add_header("Cookie", AUTH_COOKIE)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["authenticated"], json!(true));
}

#[tokio::test]
async fn test_pin_login_issues_session_cookie() {
    let server = bare_server();

    let response = server.post("/auth/pin").json(&json!({ "pin": TEST_PIN })).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], json!(true));

    let set_cookie = response
        .headers()
        .get("set-cookie")
        .expect("session cookie must be set")
        .to_str()
        .unwrap()
        .to_string();
    assert!(set_cookie.starts_with("dashboard_session=authenticated"));
    assert!(set_cookie.contains("Max-Age=86400"));
    assert!(set_cookie.contains("HttpOnly"));
    assert!(set_cookie.contains("SameSite=Strict"));
    // Not production mode, so no Secure attribute
    assert!(!set_cookie.contains("Secure"));
}

#[tokio::test]
async fn test_wrong_pin_is_rejected() {
    let server = bare_server();

    let response = server.post("/auth/pin").json(&json!({ "pin": "0000" })).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["success"], json!(false));
    assert_eq!(body["error"], json!("Invalid PIN"));
    assert!(response.headers().get("set-cookie").is_none());
}

#[tokio::test]
async fn test_missing_pin_configuration_fails_closed() {
    let mut settings = test_settings();
    settings.auth.pin = String::new();
    let server = make_server(
        settings,
        fleetrs::infrastructure::store::Stores::unconfigured(),
        doc_fetcher_for(Vec::new()),
        unconfigured_probe(),
    );

    // Even the "right" guess cannot get in when no PIN is configured
    let response = server.post("/auth/pin").json(&json!({ "pin": "" })).await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], json!("Dashboard PIN not configured"));
}

#[tokio::test]
async fn test_logout_clears_session_cookie() {
    let server = bare_server();

    let response = server.post("/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get("set-cookie")
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("dashboard_session=;"));
    assert!(set_cookie.contains("Max-Age=0"));
}

#[tokio::test]
async fn test_protected_routes_require_session() {
    let server = bare_server();

    for path in [
        "/config/doc",
        "/fleet",
        "/fleet/activity",
        "/workers/health",
        "/workers/activity",
        "/tasks",
    ] {
        let response = server.get(path).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "{} must be gated",
            path
        );
        let body: serde_json::Value = response.json();
        assert_eq!(body["error"], json!("Unauthorized"));
    }
}

#[tokio::test]
async fn test_tampered_cookie_values_are_rejected() {
    let server = bare_server();

    for cookie in [
        "dashboard_session=",
        "dashboard_session=Authenticated",
        "dashboard_session=AUTHENTICATED",
        "dashboard_session=authenticated2",
        "other_cookie=authenticated",
    ] {
        let response = server.get("/tasks").add_header("Cookie", cookie).await;
        assert_eq!(
            response.status_code(),
            StatusCode::UNAUTHORIZED,
            "cookie {:?} must not authenticate",
            cookie
        );
    }
}

#[tokio::test]
async fn test_unauthenticated_request_never_reaches_store() {
    let store = MockServer::start().await;
    // The guard must fire before any store traffic
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&store)
        .await;
    let server = server_with_store(&store);

    let response = server.get("/tasks").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    let response = server.get("/fleet").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);

    assert!(store.received_requests().await.unwrap().is_empty());

    // With a valid session the same route does reach the store
    let response = server.get("/fleet").add_header("Cookie", AUTH_COOKIE).await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(!store.received_requests().await.unwrap().is_empty());
}
