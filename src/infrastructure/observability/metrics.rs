// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use metrics::describe_counter;
use metrics_exporter_prometheus::PrometheusBuilder;
use tracing::warn;

/// 初始化指标系统
///
/// 安装Prometheus记录器并注册应用所需的各类监控指标
pub fn init_metrics() {
    let builder = PrometheusBuilder::new();
    if let Err(e) = builder.install() {
        // Metrics are best-effort; the dashboard keeps serving without them
        warn!("Failed to install Prometheus recorder: {}", e);
        return;
    }

    describe_counter!("doc_cache_hits_total", "Doc requests served from the cache");
    describe_counter!(
        "doc_cache_misses_total",
        "Doc requests that had to consult the sources"
    );
    describe_counter!(
        "doc_source_failures_total",
        "Individual doc source fetches that failed"
    );
    describe_counter!(
        "worker_probe_total",
        "Fleet probe attempts, labeled by outcome"
    );
    describe_counter!(
        "store_errors_total",
        "Backing store requests that returned an error"
    );
}
