// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use fleetrs::config::settings::Settings;
use fleetrs::infrastructure::external::doc_fetcher::DocFetcher;
use fleetrs::infrastructure::external::worker_probe::WorkerProbe;
use fleetrs::infrastructure::store::Stores;
use fleetrs::presentation::routes::{self, AppContext};
use fleetrs::utils::telemetry;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting fleetrs...");

    // Initialize Prometheus Metrics
    fleetrs::infrastructure::observability::metrics::init_metrics();

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    let timeout = Duration::from_secs(settings.http.timeout_secs);

    // 3. Initialize store clients (both tiers may be absent; routes degrade)
    let stores = Stores::connect(&settings.store, timeout);

    // 4. Initialize external fetch components
    let doc_fetcher = Arc::new(DocFetcher::new(settings.doc.sources.clone(), timeout)?);
    let probe = Arc::new(WorkerProbe::new(&settings.probe, timeout)?);
    info!("External fetch components initialized");

    // 5. Start HTTP server
    let app = routes::routes(AppContext {
        settings: settings.clone(),
        stores,
        doc_fetcher,
        probe,
    });

    let addr = format!("{}:{}", settings.server.host, settings.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
