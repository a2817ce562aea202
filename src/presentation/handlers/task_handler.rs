// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use axum::{
    extract::{Extension, Path, Query},
    http::StatusCode,
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::application::dto::task_request::{CreateTaskDto, TaskListQuery, UpdateTaskDto};
use crate::domain::models::task::TaskPatch;
use crate::domain::repositories::restricted_store::TaskFilter;
use crate::infrastructure::store::Stores;
use crate::presentation::errors::ApiError;

/// 任务列表处理器
///
/// 任务与活跃品牌两路查询并发发出，合并后一起返回；
/// 任一子查询失败则整个请求失败，绝不返回半份结果
pub async fn list_tasks(
    Extension(stores): Extension<Stores>,
    Query(query): Query<TaskListQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(store) = stores.restricted() else {
        return Ok(Json(json!({ "tasks": [], "brands": [] })));
    };

    let filter = TaskFilter {
        statuses: query.statuses(),
        brand_id: query.brand_id,
    };
    let (tasks, brands) =
        tokio::try_join!(store.list_tasks(&filter), store.list_active_brands())?;

    Ok(Json(json!({ "tasks": tasks, "brands": brands })))
}

/// 任务创建处理器
pub async fn create_task(
    Extension(stores): Extension<Stores>,
    Json(request): Json<CreateTaskDto>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let store = stores.restricted().ok_or(ApiError::Unconfigured("Store"))?;
    let new = request
        .into_new_task()
        .ok_or_else(|| ApiError::BadRequest("brand_id and title are required".to_string()))?;

    let task = store.create_task(&new).await?;
    Ok((StatusCode::CREATED, Json(json!({ "task": task }))))
}

/// 任务更新处理器
///
/// 请求体中允许列表之外的字段在DTO反序列化时已被丢弃
pub async fn update_task(
    Extension(stores): Extension<Stores>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateTaskDto>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = stores.restricted().ok_or(ApiError::Unconfigured("Store"))?;
    let patch: TaskPatch = request.into();

    let task = store.update_task(id, &patch).await?;
    Ok(Json(json!({ "task": task })))
}

/// 任务删除处理器
pub async fn delete_task(
    Extension(stores): Extension<Stores>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let store = stores.restricted().ok_or(ApiError::Unconfigured("Store"))?;
    store.delete_task(id).await?;
    Ok(Json(json!({ "success": true })))
}
