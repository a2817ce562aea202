// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::http::StatusCode;
use fleetrs::infrastructure::external::doc_fetcher::FALLBACK_DOC;
use fleetrs::infrastructure::store::Stores;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{
    doc_fetcher_for, make_server, test_settings, unconfigured_probe, AUTH_COOKIE,
};

#[tokio::test]
async fn test_second_call_within_ttl_is_served_from_cache() {
    let source = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/playbook.md"))
        .and(header("User-Agent", "fleetrs-dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Playbook v1"))
        .expect(1)
        .mount(&source)
        .await;

    let server = make_server(
        test_settings(),
        Stores::unconfigured(),
        doc_fetcher_for(vec![format!("{}/playbook.md", source.uri())]),
        unconfigured_probe(),
    );

    let first = server
        .get("/config/doc")
        .add_header("Cookie", AUTH_COOKIE)
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);
    let first: serde_json::Value = first.json();
    assert_eq!(first["content"], json!("# Playbook v1"));
    assert_eq!(first["cached"], json!(false));

    // Identical content, no second upstream hit (the expect(1) above verifies)
    let second = server
        .get("/config/doc")
        .add_header("Cookie", AUTH_COOKIE)
        .await;
    let second: serde_json::Value = second.json();
    assert_eq!(second["content"], json!("# Playbook v1"));
    assert_eq!(second["cached"], json!(true));
}

#[tokio::test]
async fn test_sources_are_tried_in_order() {
    let primary = MockServer::start().await;
    let secondary = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/playbook.md"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&primary)
        .await;
    Mock::given(method("GET"))
        .and(path("/playbook.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Mirror copy"))
        .expect(1)
        .mount(&secondary)
        .await;

    let server = make_server(
        test_settings(),
        Stores::unconfigured(),
        doc_fetcher_for(vec![
            format!("{}/playbook.md", primary.uri()),
            format!("{}/playbook.md", secondary.uri()),
        ]),
        unconfigured_probe(),
    );

    let response = server
        .get("/config/doc")
        .add_header("Cookie", AUTH_COOKIE)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["content"], json!("# Mirror copy"));
    assert_eq!(body["cached"], json!(false));
}

#[tokio::test]
async fn test_total_failure_falls_back_without_poisoning_cache() {
    let source = MockServer::start().await;
    // No mock mounted yet: the source answers 404 and the fetch fails

    let server = make_server(
        test_settings(),
        Stores::unconfigured(),
        doc_fetcher_for(vec![format!("{}/playbook.md", source.uri())]),
        unconfigured_probe(),
    );

    let response = server
        .get("/config/doc")
        .add_header("Cookie", AUTH_COOKIE)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: serde_json::Value = response.json();
    assert_eq!(body["content"], json!(FALLBACK_DOC));
    assert_eq!(body["cached"], json!(false));

    // Source recovers; the fallback must not have been cached
    Mock::given(method("GET"))
        .and(path("/playbook.md"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Recovered"))
        .mount(&source)
        .await;

    let response = server
        .get("/config/doc")
        .add_header("Cookie", AUTH_COOKIE)
        .await;
    let body: serde_json::Value = response.json();
    assert_eq!(body["content"], json!("# Recovered"));
    assert_eq!(body["cached"], json!(false));
}

#[tokio::test]
async fn test_doc_route_is_session_gated_before_any_fetch() {
    let source = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("# Playbook"))
        .mount(&source)
        .await;

    let server = make_server(
        test_settings(),
        Stores::unconfigured(),
        doc_fetcher_for(vec![format!("{}/playbook.md", source.uri())]),
        unconfigured_probe(),
    );

    let response = server.get("/config/doc").await;
    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    assert!(source.received_requests().await.unwrap().is_empty());
}
