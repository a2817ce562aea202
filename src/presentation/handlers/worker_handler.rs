// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::Extension,
    http::header,
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::error;

use crate::domain::models::worker::REGISTRY;
use crate::infrastructure::external::worker_probe::WorkerProbe;
use crate::infrastructure::store::Stores;

/// 工作器活动视图的日志条数上限
const WORKER_ACTIVITY_LIMIT: u32 = 50;

/// 工作器健康处理器
///
/// 实时探测舰队健康状态。探测本身永不失败，响应总是200
/// 并带短期客户端缓存标注；降级结果（unknown/error）对
/// 轮询端是合法状态。
pub async fn workers_health(
    Extension(probe): Extension<Arc<WorkerProbe>>,
) -> impl IntoResponse {
    let workers = probe.probe(REGISTRY).await;
    (
        [(header::CACHE_CONTROL, "max-age=60")],
        Json(json!({ "workers": workers })),
    )
}

/// 工作器活动日志处理器
///
/// 尽力而为的读取端点：存储未配置或查询失败都降级为
/// 空列表，轮询仪表盘宁可显示空白也不能整页报错
pub async fn workers_activity(Extension(stores): Extension<Stores>) -> Json<serde_json::Value> {
    let Some(store) = stores.privileged() else {
        return Json(json!({ "logs": [] }));
    };

    match store.list_activity_unrestricted(WORKER_ACTIVITY_LIMIT).await {
        Ok(logs) => Json(json!({ "logs": logs })),
        Err(e) => {
            error!("Worker activity query failed: {}", e);
            Json(json!({ "logs": [] }))
        }
    }
}
