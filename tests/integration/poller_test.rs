// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use fleetrs::client::api_client::DashboardClient;
use fleetrs::client::poller::{FleetPoller, PipelinePoller};
use fleetrs::client::view::{fleet_counts, group_by_brand};
use fleetrs::domain::models::worker::REGISTRY;
use fleetrs::infrastructure::store::Stores;
use fleetrs::presentation::routes::{routes, AppContext};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use uuid::Uuid;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{
    activity_json, doc_fetcher_for, stores_for, task_json, test_settings, test_timeout,
    unconfigured_probe, TEST_PIN,
};

/// 在随机端口上启动仪表盘服务
async fn spawn_dashboard(stores: Stores) -> (String, JoinHandle<()>) {
    let app = routes(AppContext {
        settings: Arc::new(test_settings()),
        stores,
        doc_fetcher: doc_fetcher_for(Vec::new()),
        probe: unconfigured_probe(),
    });
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{}", addr), handle)
}

async fn logged_in_client(base_url: &str) -> Arc<DashboardClient> {
    let client = DashboardClient::new(base_url, test_timeout()).unwrap();
    client.login(TEST_PIN).await.unwrap();
    Arc::new(client)
}

#[tokio::test]
async fn test_fleet_refresh_replaces_snapshot_wholesale() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/worker_activity_logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            activity_json("uptime-sentinel", "Health sweep completed"),
        ])))
        .mount(&store)
        .await;

    let (base_url, server) = spawn_dashboard(stores_for(&store)).await;
    let client = logged_in_client(&base_url).await;

    let poller = FleetPoller::new(client);
    assert!(poller.snapshot().workers.is_empty());

    poller.refresh_once().await;
    let snapshot = poller.snapshot();
    assert_eq!(snapshot.workers.len(), REGISTRY.len());
    assert_eq!(snapshot.logs.len(), 1);

    // Client-side aggregation without touching server state
    let counts = fleet_counts(&snapshot.workers);
    assert_eq!(counts.total, REGISTRY.len());
    assert_eq!(counts.unknown, REGISTRY.len());

    server.abort();
}

#[tokio::test]
async fn test_failed_refresh_keeps_previous_snapshot() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/worker_activity_logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            activity_json("uptime-sentinel", "Alert sent"),
        ])))
        .mount(&store)
        .await;

    let (base_url, server) = spawn_dashboard(stores_for(&store)).await;
    let client = logged_in_client(&base_url).await;

    let poller = FleetPoller::new(client);
    poller.refresh_once().await;
    let populated = poller.snapshot();
    assert!(!populated.workers.is_empty());

    // Dashboard goes away; stale-but-present beats wiped
    server.abort();
    tokio::time::sleep(Duration::from_millis(50)).await;
    poller.refresh_once().await;

    let after_failure = poller.snapshot();
    assert_eq!(after_failure.workers.len(), populated.workers.len());
    assert_eq!(after_failure.logs.len(), populated.logs.len());
}

#[tokio::test]
async fn test_unauthenticated_poll_leaves_state_empty() {
    let store = MockServer::start().await;
    let (base_url, server) = spawn_dashboard(stores_for(&store)).await;

    // No login; every fetch is rejected with 401
    let client = Arc::new(DashboardClient::new(&base_url, test_timeout()).unwrap());
    let poller = FleetPoller::new(client);
    poller.refresh_once().await;

    assert!(poller.snapshot().workers.is_empty());
    assert!(poller.snapshot().logs.is_empty());
    server.abort();
}

#[tokio::test]
async fn test_pipeline_refresh_and_grouping() {
    let store = MockServer::start().await;
    let brand_a = Uuid::new_v4();
    let brand_b = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path("/rest/v1/build_queue"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            task_json(Uuid::new_v4(), brand_a, "Ship onboarding", "in_progress"),
            task_json(Uuid::new_v4(), brand_b, "Refresh pricing page", "queued"),
            task_json(Uuid::new_v4(), brand_a, "Fix crash on launch", "queued"),
        ])))
        .mount(&store)
        .await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/brands"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": brand_a, "name": "Rabbit Golf", "slug": "rabbit-golf" },
            { "id": brand_b, "name": "Orbit CRM", "slug": "orbit-crm" },
        ])))
        .mount(&store)
        .await;

    let (base_url, server) = spawn_dashboard(stores_for(&store)).await;
    let client = logged_in_client(&base_url).await;

    let poller = PipelinePoller::new(client);
    poller.refresh_once().await;

    let snapshot = poller.snapshot();
    assert_eq!(snapshot.tasks.len(), 3);
    assert_eq!(snapshot.brands.len(), 2);

    let groups = group_by_brand(&snapshot.tasks);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].tasks.len(), 2);
    assert_eq!(groups[1].tasks.len(), 1);

    server.abort();
}

#[tokio::test]
async fn test_started_poller_ticks_and_stops() {
    let store = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/rest/v1/worker_activity_logs"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&store)
        .await;

    let (base_url, server) = spawn_dashboard(stores_for(&store)).await;
    let client = logged_in_client(&base_url).await;

    let mut poller = FleetPoller::with_interval(client, Duration::from_millis(50));
    poller.start();

    // The first tick fires immediately; give it a moment to land
    tokio::time::sleep(Duration::from_millis(300)).await;
    assert_eq!(poller.snapshot().workers.len(), REGISTRY.len());

    // Teardown clears the loop; dropping is also sufficient
    poller.stop();
    server.abort();
}
