// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{extract::Extension, Json};
use serde_json::json;

use crate::infrastructure::store::Stores;
use crate::presentation::errors::ApiError;

/// 舰队状态视图的活动日志条数上限
const FLEET_ACTIVITY_LIMIT: u32 = 20;

/// 舰队状态处理器
///
/// 返回持久化的系统健康记录，按服务名排序；
/// 存储未配置时降级为空列表
pub async fn fleet_status(
    Extension(stores): Extension<Stores>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(store) = stores.restricted() else {
        return Ok(Json(json!({ "workers": [] })));
    };

    let rows = store.list_system_health().await?;
    Ok(Json(json!({ "workers": rows })))
}

/// 舰队活动日志处理器
pub async fn fleet_activity(
    Extension(stores): Extension<Stores>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(store) = stores.restricted() else {
        return Ok(Json(json!({ "logs": [] })));
    };

    let logs = store.list_recent_activity(FLEET_ACTIVITY_LIMIT).await?;
    Ok(Json(json!({ "logs": logs })))
}
