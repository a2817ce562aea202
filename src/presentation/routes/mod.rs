// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::Settings;
use crate::infrastructure::external::doc_fetcher::DocFetcher;
use crate::infrastructure::external::worker_probe::WorkerProbe;
use crate::infrastructure::store::Stores;
use crate::presentation::handlers::{
    auth_handler, contact_handler, doc_handler, fleet_handler, task_handler, worker_handler,
};
use crate::presentation::middleware::session_middleware::session_middleware;
use axum::{
    routing::{get, patch, post},
    Extension, Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// 应用上下文
///
/// 路由处理器的全部显式依赖，测试可以逐个替换
#[derive(Clone)]
pub struct AppContext {
    pub settings: Arc<Settings>,
    pub stores: Stores,
    pub doc_fetcher: Arc<DocFetcher>,
    pub probe: Arc<WorkerProbe>,
}

/// 创建应用路由
///
/// 受保护路由统一挂载会话中间件，公开路由只有认证、
/// 联系表单和存活探针
///
/// # 返回值
///
/// 返回配置好的路由
pub fn routes(ctx: AppContext) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/auth/check", get(auth_handler::check))
        .route("/auth/pin", post(auth_handler::submit_pin))
        .route("/auth/logout", post(auth_handler::logout))
        .route("/contact", post(contact_handler::submit_contact));

    let protected_routes = Router::new()
        .route("/config/doc", get(doc_handler::config_doc))
        .route("/fleet", get(fleet_handler::fleet_status))
        .route("/fleet/activity", get(fleet_handler::fleet_activity))
        .route("/workers/health", get(worker_handler::workers_health))
        .route("/workers/activity", get(worker_handler::workers_activity))
        .route(
            "/tasks",
            get(task_handler::list_tasks).post(task_handler::create_task),
        )
        .route(
            "/tasks/{id}",
            patch(task_handler::update_task).delete(task_handler::delete_task),
        )
        .layer(axum::middleware::from_fn(session_middleware));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(Extension(ctx.settings))
        .layer(Extension(ctx.stores))
        .layer(Extension(ctx.doc_fetcher))
        .layer(Extension(ctx.probe))
        .layer(TraceLayer::new_for_http())
}

/// 健康检查端点
///
/// # 返回值
///
/// 返回"OK"字符串
pub async fn health_check() -> &'static str {
    "OK"
}

/// 版本信息端点
///
/// # 返回值
///
/// 返回应用版本号
pub async fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
